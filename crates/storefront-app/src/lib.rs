#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Storefront App Library
//!
//! Everything behind the `storefront` binary: configuration, logging setup,
//! the screen views, navigation, and the interactive shop loop.
//!
//! # Modules
//!
//! - [`app`]: Shop session tying screens, navigation and cart intents
//! - [`controller`]: Cart intents with notification side effects
//! - [`views`]: Product and cart screens
//! - [`repl`]: Command parsing and the line-oriented loop
//! - [`config`] / [`config_handlers`]: Configuration loading and commands

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod controller;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod repl;
pub mod views;

// Re-exports for convenience
pub use app::{App, Reply};
pub use config::AppConfig;
pub use controller::{CartController, Outcome};
pub use error::{Error, Result};
pub use repl::{ConsoleNotifier, ShopCommand};
