//! In-memory catalog source.

use async_trait::async_trait;
use storefront_core::Product;

use crate::source::CatalogSource;
use crate::Result;

/// Catalog backed by a fixed product list.
///
/// Ignores the requested path. Used for offline mode and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Creates a catalog serving `products`.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Creates a catalog serving [`sample_products`].
    pub fn sample() -> Self {
        Self::new(sample_products())
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self, path: &str) -> Result<Vec<Product>> {
        log::debug!(
            "Serving {} static products (path '{path}' ignored)",
            self.products.len()
        );
        Ok(self.products.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Built-in sample catalog.
///
/// Ids skip 4; nothing depends on ids being contiguous.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Black Sheet Strappy Textured Glitter Bodycon Dress",
            "Black",
            10.0,
            "http://cdn-img.prettylittlething.com/9/0/a/a/90aa90903a135ee59594f47c7685aa7ef3046e44_cly8063_1.jpg?imwidth=1024",
        ),
        Product::new(
            2,
            "Stone Ribbed Strappy Cut Out Detail Bodycon Dress",
            "Stone",
            4.0,
            "https://cdn-img.prettylittlething.com/3/6/5/a/365a5d1dce6a2b77b564379b302c9d83afccf33b_cmd2051_1.jpg?imwidth=1024",
        ),
        Product::new(
            3,
            "Black Frill Tie Shoulder Bodycon Dress",
            "Black",
            8.0,
            "https://cdn-img.prettylittlething.com/d/c/3/3/dc337260f9ecefdb99a8c8e98cd73ccb1b79cea5_cmb6804_4.jpg?imwidth=1024",
        ),
        Product::new(
            5,
            "Red Pin Stripe Belt T Shirt Dress",
            "Red",
            17.0,
            "https://cdn-img.prettylittlething.com/f/7/1/8/f718a4011ddf92f48aeefff6da0f475178694599_cly0842_1.jpg?imwidth=1024",
        ),
    ]
}
