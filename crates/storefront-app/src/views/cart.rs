//! Cart screen.

use std::fmt;

use storefront_core::{Cart, ProductId};

use super::{format_price, QuantityControls};

/// Shown when the cart has no line items.
pub const EMPTY_CART: &str = "Cart is Empty";

/// One line item on the cart screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    /// Catalog id
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Quantity controls
    pub controls: QuantityControls,
}

/// The cart screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// Rows in cart order
    pub rows: Vec<CartRow>,
    /// Cart total
    pub total: f64,
}

impl CartView {
    /// Build the screen from a cart snapshot.
    pub fn build(cart: &Cart) -> Self {
        let rows = cart
            .iter()
            .map(|item| CartRow {
                id: item.id,
                name: item.name.clone(),
                price: item.price,
                controls: QuantityControls::for_quantity(item.quantity),
            })
            .collect();
        Self {
            rows,
            total: cart.total(),
        }
    }

    /// Returns `true` when the empty-state message is shown.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Cart ==")?;
        if self.rows.is_empty() {
            writeln!(f, "{EMPTY_CART}")?;
        }
        for row in &self.rows {
            writeln!(f, "[{}] {} | {}", row.id, row.name, format_price(row.price))?;
            writeln!(f, "    [Delete] {}", row.controls)?;
        }
        writeln!(f, "Total is: {}", self.total)
    }
}
