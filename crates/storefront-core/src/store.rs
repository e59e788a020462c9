//! Cart state container.
//!
//! [`CartStore`] owns the current [`Cart`] and is the only way to change it.
//! Readers get owned snapshots; subscribers are woken whenever a transition
//! actually changes the cart.
//!
//! # Usage
//!
//! ```rust
//! use storefront_core::{CartStore, Product};
//!
//! let store = CartStore::new();
//! let dress = Product::new(1, "Bodycon Dress", "Black", 10.0, "https://img/1.jpg");
//!
//! store.add(&dress);
//! let item = store.snapshot().items()[0].with_quantity(2);
//! store.update_quantity(item);
//! assert_eq!(store.total(), 20.0);
//! ```

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

use crate::cart::{reduce, Cart, CartAction, Transition};
use crate::types::{Identified, LineItem, Product};

/// Handle to the cart state container.
///
/// Cheap to clone (Arc internals); clones share one cart. Transitions are
/// serialized through the watch channel's lock, so two dispatches never
/// interleave.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    tx: watch::Sender<Cart>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Cart::new());
        Self {
            inner: Arc::new(CartStoreInner { tx }),
        }
    }

    /// Runs `action` through the reducer and publishes the result.
    ///
    /// Subscribers are only notified when the cart changed.
    pub fn dispatch(&self, action: CartAction) -> Transition {
        self.dispatch_with(|_| Some(action))
    }

    /// Builds an action from the current cart and applies it atomically.
    ///
    /// `build` runs under the store lock, so the cart it inspects is the
    /// cart the action is applied to. Returning `None` leaves the cart
    /// untouched and reports [`Transition::Unchanged`].
    pub fn dispatch_with<F>(&self, build: F) -> Transition
    where
        F: FnOnce(&Cart) -> Option<CartAction>,
    {
        let mut transition = Transition::Unchanged;
        let mut applied = None;
        self.inner.tx.send_if_modified(|cart| {
            let Some(action) = build(cart) else {
                return false;
            };
            let (next, outcome) = reduce(cart, &action);
            transition = outcome;
            applied = Some((action, next.len()));
            if outcome.is_applied() {
                *cart = next;
                true
            } else {
                false
            }
        });
        match applied {
            Some((action, len)) => {
                log::debug!("Cart {action} → {transition} ({len} line items)")
            }
            None => log::debug!("Cart action skipped by caller"),
        }
        transition
    }

    /// Adds `product` as a new line item with quantity 1.
    pub fn add(&self, product: &Product) -> Transition {
        self.dispatch(CartAction::add(product.clone()))
    }

    /// Removes every line item sharing `item`'s id.
    pub fn remove(&self, item: impl Identified) -> Transition {
        self.dispatch(CartAction::remove(item))
    }

    /// Replaces the line item with the same id, keeping its position.
    pub fn update_quantity(&self, item: LineItem) -> Transition {
        self.dispatch(CartAction::update_quantity(item))
    }

    /// Current cart snapshot.
    pub fn snapshot(&self) -> Cart {
        self.inner.tx.borrow().clone()
    }

    /// Total of the current cart, computed on read.
    pub fn total(&self) -> f64 {
        self.inner.tx.borrow().total()
    }

    /// Number of line items in the current cart.
    pub fn len(&self) -> usize {
        self.inner.tx.borrow().len()
    }

    /// Returns `true` if the current cart is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.tx.borrow().is_empty()
    }

    /// Subscribe to cart snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.inner.tx.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cart = self.inner.tx.borrow();
        f.debug_struct("CartStore")
            .field("line_items", &cart.len())
            .field("total", &cart.total())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
