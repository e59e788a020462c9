//! HTTP catalog source.

use async_trait::async_trait;
use storefront_core::Product;

use crate::config::CatalogConfig;
use crate::source::CatalogSource;
use crate::{Error, Result};

/// Catalog fetched from a REST endpoint returning a JSON product array.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Build a catalog client from validated settings.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// URL requested for `path`.
    pub fn products_url(&self, path: &str) -> String {
        let segment = path.trim_matches('/');
        if segment.is_empty() {
            format!("{}/products", self.base_url)
        } else {
            format!("{}/products/{segment}", self.base_url)
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self, path: &str) -> Result<Vec<Product>> {
        let url = self.products_url(path);
        log::debug!("Fetching catalog from {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Catalog request to {url} returned HTTP {status}");
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        log::info!("Fetched {} products from {url}", products.len());
        Ok(products)
    }

    fn name(&self) -> &str {
        "http"
    }
}

impl std::fmt::Debug for HttpCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalog")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::memory::sample_products;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::net::SocketAddr;

    async fn spawn_server() -> SocketAddr {
        let app = Router::new()
            .route("/products", get(|| async { Json(sample_products()) }))
            .route(
                "/products/dresses",
                get(|| async { Json(sample_products().into_iter().take(2).collect::<Vec<_>>()) }),
            )
            .route(
                "/products/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/products/garbage", get(|| async { "not json" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        addr
    }

    fn catalog_for(addr: SocketAddr) -> HttpCatalog {
        HttpCatalog::new(&CatalogConfig {
            base_url: format!("http://{addr}/"),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_products_url() {
        let catalog = HttpCatalog::new(&CatalogConfig {
            base_url: "https://shop.example/api/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(catalog.products_url(""), "https://shop.example/api/products");
        assert_eq!(catalog.products_url("/"), "https://shop.example/api/products");
        assert_eq!(
            catalog.products_url("/sale/"),
            "https://shop.example/api/products/sale"
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = HttpCatalog::new(&CatalogConfig {
            base_url: String::new(),
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[tokio::test]
    async fn test_fetch_products() {
        let addr = spawn_server().await;
        let products = catalog_for(addr).fetch_products("").await.unwrap();
        assert_eq!(products, sample_products());
    }

    #[tokio::test]
    async fn test_fetch_products_with_path() {
        let addr = spawn_server().await;
        let products = catalog_for(addr).fetch_products("dresses").await.unwrap();
        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let addr = spawn_server().await;
        let err = catalog_for(addr).fetch_products("broken").await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 500, .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let addr = spawn_server().await;
        let err = catalog_for(addr).fetch_products("missing").await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 404, .. }));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_fetch_undecodable_body() {
        let addr = spawn_server().await;
        let err = catalog_for(addr).fetch_products("garbage").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
