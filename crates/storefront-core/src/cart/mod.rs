//! The cart snapshot and its transition rules.
//!
//! A [`Cart`] is an immutable, ordered list of [`LineItem`]s. It only
//! changes by running a [`CartAction`] through [`reduce`], which returns a
//! new snapshot and leaves the input untouched.
//!
//! ```rust
//! use storefront_core::cart::{reduce, Cart, CartAction};
//! use storefront_core::Product;
//!
//! let dress = Product::new(1, "Bodycon Dress", "Black", 10.0, "https://img/1.jpg");
//! let (cart, _) = reduce(&Cart::new(), &CartAction::add(dress));
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total(), 10.0);
//! ```

mod action;
mod proptests;
mod reducer;

pub use action::{CartAction, Transition};
pub use reducer::reduce;

use serde::{Deserialize, Serialize};

use crate::types::{LineItem, ProductId};

/// Ordered collection of line items.
///
/// Serializes as `{"cartItems": [...]}`. Fields are private: readers get
/// accessors only, and every change goes through [`reduce`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    cart_items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_items(cart_items: Vec<LineItem>) -> Self {
        Self { cart_items }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.cart_items
    }

    /// Iterates over line items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.cart_items.iter()
    }

    /// Number of line items (not units).
    pub fn len(&self) -> usize {
        self.cart_items.len()
    }

    /// Returns `true` if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    /// Returns `true` if any line item has this id.
    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Position of the first line item with this id.
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.cart_items.iter().position(|item| item.id == id)
    }

    /// First line item with this id.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.cart_items.iter().find(|item| item.id == id)
    }

    /// Quantity of the first line item with this id.
    pub fn quantity_of(&self, id: ProductId) -> Option<i64> {
        self.get(id).map(|item| item.quantity)
    }

    /// Sum of `price × quantity` over all line items.
    ///
    /// Recomputed on every call. An empty cart totals positive zero.
    pub fn total(&self) -> f64 {
        self.cart_items
            .iter()
            .fold(0.0, |acc, item| acc + item.subtotal())
    }

    /// Serializes the snapshot as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
