//! Product listing screen.

use std::fmt;

use storefront_catalog::QueryState;
use storefront_core::{Cart, ProductId};

use super::{format_price, CartBadge, QuantityControls};

/// Shown while the catalog query is in flight.
pub const LOADING: &str = "Loading products...";

/// One product on the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    /// Catalog id
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Colour name
    pub colour: String,
    /// Unit price
    pub price: f64,
    /// `None` offers "Add to Cart"; `Some` shows the in-cart controls
    pub in_cart: Option<QuantityControls>,
}

/// The product listing screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsView {
    /// Catalog request in flight.
    Loading,
    /// No data and the last fetch failed.
    Failed(String),
    /// Products to show.
    Listing {
        /// Cart link badge
        badge: CartBadge,
        /// Rows in catalog order
        rows: Vec<ProductRow>,
    },
}

impl ProductsView {
    /// Build the screen from the catalog state and the current cart.
    pub fn build(query: &QueryState, cart: &Cart) -> Self {
        if query.is_busy() {
            return ProductsView::Loading;
        }
        if let (None, Some(err)) = (&query.data, &query.error) {
            return ProductsView::Failed(err.clone());
        }

        let rows = query
            .products()
            .iter()
            .map(|product| ProductRow {
                id: product.id,
                name: product.name.clone(),
                colour: product.colour.clone(),
                price: product.price,
                in_cart: cart.quantity_of(product.id).map(QuantityControls::for_quantity),
            })
            .collect();

        ProductsView::Listing {
            badge: CartBadge(cart.len()),
            rows,
        }
    }
}

impl fmt::Display for ProductsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductsView::Loading => writeln!(f, "{LOADING}"),
            ProductsView::Failed(err) => {
                writeln!(f, "Could not load products: {err}")?;
                writeln!(f, "Type `refresh` to try again.")
            }
            ProductsView::Listing { badge, rows } => {
                writeln!(f, "== Products ==  {badge}")?;
                if rows.is_empty() {
                    writeln!(f, "No products available")?;
                }
                for row in rows {
                    writeln!(
                        f,
                        "[{}] {} | {} | {}",
                        row.id,
                        row.name,
                        row.colour,
                        format_price(row.price)
                    )?;
                    match &row.in_cart {
                        Some(controls) => writeln!(f, "    [Remove from Cart] {controls}")?,
                        None => writeln!(f, "    [Add to Cart]")?,
                    }
                }
                Ok(())
            }
        }
    }
}
