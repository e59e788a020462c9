#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Storefront Core Library
//!
//! Catalog types, the cart reducer, the cart state container, and
//! notification sinks.
//!
//! # Modules
//!
//! - [`cart`]: Cart snapshot, actions, and the pure reducer
//! - [`store`]: Shared cart state container with subscriptions
//! - [`notify`]: Fire-and-forget notification sinks
//! - [`error`]: Error types and Result alias

pub mod cart;
pub mod error;
pub mod notify;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use cart::{Cart, CartAction, Transition};
pub use error::{Error, Result};
pub use notify::{LogNotifier, NotificationSink, ToastDuration};
pub use store::CartStore;
pub use types::{Identified, LineItem, Product, ProductId};
