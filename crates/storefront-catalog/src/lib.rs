#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Storefront Catalog Library
//!
//! Sources for the product list and the query state the product screen
//! renders from.

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod query;
pub mod source;

// Re-exports for convenience
pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use http::HttpCatalog;
pub use memory::{sample_products, StaticCatalog};
pub use query::{CatalogQuery, QueryState};
pub use source::CatalogSource;
