//! Error types for storefront-app

use thiserror::Error;

/// Result type alias for storefront-app operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in storefront-app
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from storefront-core (configuration, file I/O)
    #[error("Core error: {0}")]
    Core(#[from] storefront_core::Error),

    /// Error from storefront-catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] storefront_catalog::Error),

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
