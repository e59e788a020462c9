//! Full shop sessions through the line-oriented loop.

use std::sync::Arc;

use storefront_app::repl::{run_repl, PROMPT};
use storefront_app::views::LOADING;
use storefront_app::App;
use storefront_catalog::{CatalogConfig, CatalogQuery, CatalogSource, HttpCatalog};
use storefront_core::notify::RecordingNotifier;
use storefront_core::CartStore;

use crate::common::TestHarness;

async fn session(harness: &mut TestHarness, script: &str) -> String {
    let mut out = Vec::new();
    run_repl(&mut harness.app, script.as_bytes(), &mut out)
        .await
        .expect("session should run");
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_session_from_start_to_quit() {
    let mut harness = TestHarness::new();
    let output = session(&mut harness, "add 1\nadd 2\ncart\nquit\nadd 3\n").await;

    assert!(output.starts_with("== Products =="));
    assert!(output.contains(PROMPT));
    assert!(output.contains("Total is: 14"));
    assert!(output.ends_with("Bye!\n"));
    // Lines after quit are not read
    assert_eq!(harness.store.len(), 2);
}

#[tokio::test]
async fn test_session_reports_bad_input_and_continues() {
    let mut harness = TestHarness::new();
    let output = session(&mut harness, "checkout\n\nadd x\nadd 5\n").await;

    assert!(output.contains("unknown command 'checkout'"));
    assert!(output.contains("invalid product id 'x'"));
    assert_eq!(harness.store.len(), 1);
}

#[tokio::test]
async fn test_session_ends_at_end_of_input() {
    let mut harness = TestHarness::new();
    let output = session(&mut harness, "help\n").await;
    assert!(output.contains("add <id>"));
    assert!(!output.contains("Bye!"));
}

#[tokio::test]
async fn test_unreachable_catalog_shows_error_screen() {
    // Port 9 (discard) is not served on loopback in test environments
    let config = CatalogConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let source: Arc<dyn CatalogSource> = Arc::new(HttpCatalog::new(&config).unwrap());
    let mut app = App::new(
        CartStore::new(),
        CatalogQuery::new(source, ""),
        Arc::new(RecordingNotifier::new()),
    );

    let screen = app.start().await;
    assert!(screen.contains("Could not load products"));
    assert!(!screen.contains(LOADING));

    let reply = app.execute("add 1".parse().unwrap()).await;
    assert_eq!(reply.text, "No product with id 1\n");
}
