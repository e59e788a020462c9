//! Cart actions and transition outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Identified, LineItem, Product, ProductId};

/// A request to change the cart.
///
/// Each variant carries an optional payload. A `None` payload is a valid
/// action that leaves the cart unchanged, so callers holding a possibly
/// absent record can dispatch it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item", rename_all = "snake_case")]
pub enum CartAction {
    /// Append the product as a new line item with quantity 1.
    Add(Option<Product>),

    /// Drop every line item with this id.
    Remove(Option<ProductId>),

    /// Overwrite the first line item with the same id, in place.
    UpdateQuantity(Option<LineItem>),
}

impl CartAction {
    /// Add `product` to the cart.
    pub fn add(product: Product) -> Self {
        CartAction::Add(Some(product))
    }

    /// Remove every line item sharing `item`'s id.
    pub fn remove(item: impl Identified) -> Self {
        CartAction::Remove(Some(item.product_id()))
    }

    /// Replace the matching line item with `item`.
    pub fn update_quantity(item: LineItem) -> Self {
        CartAction::UpdateQuantity(Some(item))
    }

    /// Id the action targets, if it has a payload.
    pub fn target(&self) -> Option<ProductId> {
        match self {
            CartAction::Add(product) => product.as_ref().map(|p| p.id),
            CartAction::Remove(id) => *id,
            CartAction::UpdateQuantity(item) => item.as_ref().map(|i| i.id),
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CartAction::Add(_) => "add",
            CartAction::Remove(_) => "remove",
            CartAction::UpdateQuantity(_) => "update_quantity",
        };
        match self.target() {
            Some(id) => write!(f, "{name}(id={id})"),
            None => write!(f, "{name}(none)"),
        }
    }
}

/// Whether a transition changed the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The cart was replaced by a new snapshot.
    Applied,
    /// The action was a no-op (absent payload, unknown id, identical record).
    Unchanged,
}

impl Transition {
    /// Returns `true` if the cart changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Applied => write!(f, "applied"),
            Transition::Unchanged => write!(f, "unchanged"),
        }
    }
}
