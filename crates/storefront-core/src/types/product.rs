//! Catalog products and cart line items.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A purchasable product as supplied by the catalog.
///
/// Catalog payloads may carry a `quantity` field; it is kept so the record
/// round-trips, but the cart never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable catalog identifier
    pub id: ProductId,

    /// Colour name shown alongside the product
    pub colour: String,

    /// Image reference (usually a URL)
    pub img: String,

    /// Display name
    pub name: String,

    /// Unit price, currency-agnostic and non-negative
    pub price: f64,

    /// Quantity carried by some catalog payloads (ignored by the cart)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl Product {
    /// Creates a product without a quantity field.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        colour: impl Into<String>,
        price: f64,
        img: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            colour: colour.into(),
            img: img.into(),
            name: name.into(),
            price,
            quantity: None,
        }
    }
}

/// One product placed into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable catalog identifier
    pub id: ProductId,

    /// Colour name
    pub colour: String,

    /// Image reference
    pub img: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Number of units; at least 1 for well-behaved callers
    pub quantity: i64,
}

impl LineItem {
    /// Builds a line item for `product` with quantity 1, whatever quantity
    /// the product record carries.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            colour: product.colour.clone(),
            img: product.img.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Returns a copy of this line item with `quantity` replaced.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// `price × quantity` for this line.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Anything that names a catalog product by id.
///
/// Remove only needs an id, so it accepts products, line items, or a bare
/// [`ProductId`].
pub trait Identified {
    /// The catalog identifier of this record.
    fn product_id(&self) -> ProductId;
}

impl Identified for ProductId {
    fn product_id(&self) -> ProductId {
        *self
    }
}

impl Identified for Product {
    fn product_id(&self) -> ProductId {
        self.id
    }
}

impl Identified for LineItem {
    fn product_id(&self) -> ProductId {
        self.id
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn product_id(&self) -> ProductId {
        (**self).product_id()
    }
}
