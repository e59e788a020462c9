//! Common test utilities and harness for storefront integration tests.

use std::sync::Arc;

use storefront_app::App;
use storefront_catalog::{CatalogQuery, CatalogSource, StaticCatalog};
use storefront_core::notify::RecordingNotifier;
use storefront_core::{CartStore, Product};

/// Test harness wiring an [`App`] to the sample catalog.
///
/// Keeps handles to the shared store and the recording notifier so tests
/// can check state behind the screens.
pub struct TestHarness {
    /// Shop session under test
    pub app: App,
    /// Same store the app writes to
    pub store: CartStore,
    /// Notifications raised by the app
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHarness {
    /// Creates a harness over the four sample dresses.
    pub fn new() -> Self {
        Self::with_products(storefront_catalog::sample_products())
    }

    /// Creates a harness over a custom product list.
    pub fn with_products(products: Vec<Product>) -> Self {
        let source: Arc<dyn CatalogSource> = Arc::new(StaticCatalog::new(products));
        let store = CartStore::new();
        let notifier = Arc::new(RecordingNotifier::new());
        let app = App::new(
            store.clone(),
            CatalogQuery::new(source, ""),
            notifier.clone(),
        );
        Self {
            app,
            store,
            notifier,
        }
    }

    /// Creates a harness and loads the catalog.
    pub async fn started() -> Self {
        let mut harness = Self::new();
        harness.app.start().await;
        harness
    }

    /// Run one typed command and return the reply text.
    pub async fn run(&mut self, line: &str) -> String {
        let command = line.parse().expect("test commands should parse");
        self.app.execute(command).await.text
    }

    /// Notification texts in order.
    pub fn toasts(&self) -> Vec<String> {
        self.notifier
            .messages()
            .into_iter()
            .map(|(message, _)| message)
            .collect()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Product with the given id and price and placeholder text fields.
pub fn product(id: u64, price: f64) -> Product {
    Product::new(id, format!("Dress {id}"), "Red", price, format!("img-{id}.png"))
}
