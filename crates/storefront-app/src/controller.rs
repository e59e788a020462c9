//! Screen-level cart intents.
//!
//! The controller is the presentation layer's only writer to the cart. It
//! enforces the rules the screens display: "Add to Cart" is offered only for
//! products not yet in the cart, and decrement is disabled at quantity 1.

use std::fmt;
use std::sync::Arc;

use storefront_core::notify::{ITEM_ADDED, ITEM_REMOVED};
use storefront_core::{
    Cart, CartAction, CartStore, NotificationSink, Product, ProductId, ToastDuration,
};

/// Result of a cart intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cart changed.
    Changed,
    /// The store accepted the action but nothing changed.
    Unchanged,
    /// Add was refused because the product already has a line item.
    AlreadyInCart(ProductId),
    /// Increment, decrement or remove targeted a product not in the cart.
    NotInCart(ProductId),
    /// Decrement was refused at quantity 1 or below.
    AtMinimum(ProductId),
    /// Increment was refused because the quantity cannot grow further.
    AtMaximum(ProductId),
}

impl Outcome {
    /// Returns `true` if the cart changed.
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Changed => write!(f, "cart updated"),
            Outcome::Unchanged => write!(f, "cart unchanged"),
            Outcome::AlreadyInCart(id) => {
                write!(f, "product {id} is already in the cart; use `inc {id}`")
            }
            Outcome::NotInCart(id) => write!(f, "product {id} is not in the cart"),
            Outcome::AtMinimum(id) => {
                write!(f, "quantity of product {id} is already 1; use `remove {id}`")
            }
            Outcome::AtMaximum(id) => write!(f, "quantity of product {id} cannot be raised"),
        }
    }
}

/// Dispatches cart intents and raises notifications.
#[derive(Clone)]
pub struct CartController {
    store: CartStore,
    notifier: Arc<dyn NotificationSink>,
}

impl CartController {
    /// Create a controller writing to `store`.
    pub fn new(store: CartStore, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { store, notifier }
    }

    /// The store this controller writes to.
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Put `product` in the cart with quantity 1.
    pub fn add(&self, product: &Product) -> Outcome {
        let outcome = self.apply(|cart| {
            if cart.contains(product.id) {
                return Err(Outcome::AlreadyInCart(product.id));
            }
            Ok(CartAction::add(product.clone()))
        });
        if outcome.is_changed() {
            self.notifier.notify(ITEM_ADDED, ToastDuration::Short);
        }
        outcome
    }

    /// Take the product out of the cart.
    pub fn remove(&self, id: ProductId) -> Outcome {
        let outcome = self.apply(|cart| {
            if !cart.contains(id) {
                return Err(Outcome::NotInCart(id));
            }
            Ok(CartAction::remove(id))
        });
        if outcome.is_changed() {
            self.notifier.notify(ITEM_REMOVED, ToastDuration::Short);
        }
        outcome
    }

    /// Raise the quantity by one.
    pub fn increment(&self, id: ProductId) -> Outcome {
        self.apply(|cart| {
            let item = cart.get(id).ok_or(Outcome::NotInCart(id))?;
            let quantity = item.quantity.checked_add(1).ok_or(Outcome::AtMaximum(id))?;
            Ok(CartAction::update_quantity(item.with_quantity(quantity)))
        })
    }

    /// Lower the quantity by one; refused at quantity 1.
    pub fn decrement(&self, id: ProductId) -> Outcome {
        self.apply(|cart| {
            let item = cart.get(id).ok_or(Outcome::NotInCart(id))?;
            if item.quantity <= 1 {
                return Err(Outcome::AtMinimum(id));
            }
            Ok(CartAction::update_quantity(item.with_quantity(item.quantity - 1)))
        })
    }

    /// Check and dispatch under one store lock, so concurrent intents on
    /// shared stores cannot both pass the same check.
    fn apply<F>(&self, build: F) -> Outcome
    where
        F: FnOnce(&Cart) -> Result<CartAction, Outcome>,
    {
        let mut refused = None;
        let transition = self.store.dispatch_with(|cart| match build(cart) {
            Ok(action) => Some(action),
            Err(outcome) => {
                refused = Some(outcome);
                None
            }
        });
        match refused {
            Some(outcome) => outcome,
            None if transition.is_applied() => Outcome::Changed,
            None => Outcome::Unchanged,
        }
    }
}

impl fmt::Debug for CartController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartController")
            .field("store", &self.store)
            .finish()
    }
}
