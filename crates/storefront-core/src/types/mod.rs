//! Core types for the storefront: catalog products and cart line items.

mod ids;
mod product;

pub use ids::ProductId;
pub use product::{Identified, LineItem, Product};
