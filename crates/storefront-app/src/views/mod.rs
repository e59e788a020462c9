//! Text renderings of the storefront screens.
//!
//! Each screen is built as a plain view model from the current snapshots
//! (catalog query state, cart) and rendered through `Display`. Screens hold
//! no state of their own, so re-rendering after any change is just building
//! the view again.

mod cart;
mod products;

pub use cart::{CartRow, CartView, EMPTY_CART};
pub use products::{ProductRow, ProductsView, LOADING};

use std::fmt;

/// Price as shown on screen: `$` followed by the shortest exact decimal.
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

/// Controls shown for one line item on either screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityControls {
    /// Current quantity in the cart.
    pub quantity: i64,
    /// Whether decrement is enabled.
    pub can_decrement: bool,
}

impl QuantityControls {
    /// Controls for a line item holding `quantity` units.
    pub fn for_quantity(quantity: i64) -> Self {
        Self {
            quantity,
            can_decrement: quantity > 1,
        }
    }
}

impl fmt::Display for QuantityControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minus = if self.can_decrement { "[-]" } else { "(-)" };
        write!(f, "[+] {} {minus}", self.quantity)
    }
}

/// Line-item count shown next to the cart link; blank when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadge(pub usize);

impl fmt::Display for CartBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "Cart ({})", self.0)
        } else {
            write!(f, "Cart")
        }
    }
}
