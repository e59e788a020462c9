//! End-to-end cart scenarios through the shop screens.

use storefront_app::navigation::{MainRoute, Route};
use storefront_app::views::EMPTY_CART;
use storefront_core::notify::{ITEM_ADDED, ITEM_REMOVED};
use storefront_core::ProductId;

use crate::common::{product, TestHarness};

#[tokio::test]
async fn test_add_to_empty_cart() {
    let mut harness = TestHarness::with_products(vec![product(1, 10.0)]);
    harness.app.start().await;

    harness.run("add 1").await;

    let cart = harness.store.snapshot();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].id, ProductId::new(1));
    assert_eq!(cart.items()[0].quantity, 1);
    assert_eq!(harness.store.total(), 10.0);
    assert_eq!(harness.toasts(), vec![ITEM_ADDED.to_string()]);
}

#[tokio::test]
async fn test_increment_doubles_line_total() {
    let mut harness = TestHarness::with_products(vec![product(1, 10.0)]);
    harness.app.start().await;
    harness.run("add 1").await;

    harness.run("inc 1").await;

    let cart = harness.store.snapshot();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.quantity_of(ProductId::new(1)), Some(2));
    assert_eq!(harness.store.total(), 20.0);
    // Quantity changes are silent
    assert_eq!(harness.toasts().len(), 1);
}

#[tokio::test]
async fn test_remove_keeps_other_items() {
    let mut harness = TestHarness::with_products(vec![product(1, 10.0), product(2, 4.0)]);
    harness.app.start().await;
    harness.run("add 1").await;
    harness.run("add 2").await;

    harness.run("remove 1").await;

    let cart = harness.store.snapshot();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].id, ProductId::new(2));
    assert_eq!(harness.toasts().last().unwrap(), ITEM_REMOVED);
}

#[tokio::test]
async fn test_empty_cart_screen() {
    let mut harness = TestHarness::started().await;

    let screen = harness.run("cart").await;

    assert_eq!(harness.app.route(), Route::Main(MainRoute::Cart));
    assert!(screen.contains(EMPTY_CART));
    assert!(screen.contains("Total is: 0"));
}

#[tokio::test]
async fn test_full_sample_cart_total() {
    let mut harness = TestHarness::started().await;
    for id in [1, 2, 3, 5] {
        harness.run(&format!("add {id}")).await;
    }
    harness.run("inc 2").await;
    for _ in 0..2 {
        harness.run("inc 3").await;
    }
    for _ in 0..3 {
        harness.run("inc 5").await;
    }

    let screen = harness.run("cart").await;
    assert_eq!(harness.store.total(), 110.0);
    assert!(screen.contains("Total is: 110"));
    assert_eq!(harness.toasts().len(), 4);
}

#[tokio::test]
async fn test_screens_follow_store_changes() {
    let mut harness = TestHarness::started().await;
    let mut rx = harness.store.subscribe();

    harness.run("add 3").await;
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().len(), 1);

    // A refused add leaves subscribers untouched
    let reply = harness.run("add 3").await;
    assert!(reply.contains("already in the cart"));
    assert!(!rx.has_changed().unwrap());

    let screen = harness.app.render();
    assert!(screen.contains("Cart (1)"));
}
