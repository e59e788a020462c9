//! Pure transition rules over [`Cart`] snapshots.

use crate::cart::{Cart, CartAction, Transition};
use crate::types::{LineItem, Product, ProductId};

/// Applies `action` to `cart`, returning the next snapshot and whether it
/// differs from the input.
///
/// Never fails: absent payloads and unknown ids return a clone of `cart`
/// with [`Transition::Unchanged`].
pub fn reduce(cart: &Cart, action: &CartAction) -> (Cart, Transition) {
    let next = match action {
        CartAction::Add(Some(product)) => Some(add(cart.items(), product)),
        CartAction::Remove(Some(id)) => remove(cart.items(), *id),
        CartAction::UpdateQuantity(Some(item)) => update(cart.items(), item),
        CartAction::Add(None) | CartAction::Remove(None) | CartAction::UpdateQuantity(None) => {
            None
        }
    };

    match next {
        Some(items) => (Cart::from_items(items), Transition::Applied),
        None => (cart.clone(), Transition::Unchanged),
    }
}

/// Appends without checking for an existing line item with the same id.
fn add(items: &[LineItem], product: &Product) -> Vec<LineItem> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(LineItem::from_product(product));
    next
}

fn remove(items: &[LineItem], id: ProductId) -> Option<Vec<LineItem>> {
    if !items.iter().any(|item| item.id == id) {
        return None;
    }
    Some(items.iter().filter(|item| item.id != id).cloned().collect())
}

/// Replaces the first match in place. No lower bound on quantity.
fn update(items: &[LineItem], item: &LineItem) -> Option<Vec<LineItem>> {
    let index = items.iter().position(|existing| existing.id == item.id)?;
    if items[index] == *item {
        return None;
    }
    if item.quantity < 1 {
        log::warn!(
            "Storing line item {} with quantity {}; callers should remove instead",
            item.id,
            item.quantity
        );
    }

    let mut next = items.to_vec();
    next[index] = item.clone();
    Some(next)
}
