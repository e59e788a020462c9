//! Catalog source trait.

use async_trait::async_trait;
use storefront_core::Product;

use crate::Result;

/// Anything that can produce the product list.
///
/// `path` is the segment appended under `/products/`; sources that have a
/// single list may ignore it.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the products for `path`.
    async fn fetch_products(&self, path: &str) -> Result<Vec<Product>>;

    /// Short name used in log lines.
    fn name(&self) -> &str;
}
