//! Property-based tests for cart transitions.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::cart::{reduce, Cart, CartAction, Transition};
    use crate::types::{LineItem, Product, ProductId};
    use proptest::prelude::*;

    fn product_strategy() -> impl Strategy<Value = Product> {
        (0u64..8, 0u32..500, proptest::option::of(-5i64..50)).prop_map(|(id, cents, quantity)| {
            let mut product = Product::new(id, format!("product-{id}"), "Red", cents as f64, "img");
            product.quantity = quantity;
            product
        })
    }

    fn cart_strategy() -> impl Strategy<Value = Cart> {
        proptest::collection::vec((product_strategy(), 1i64..10), 0..12).prop_map(|rows| {
            Cart::from_items(
                rows.iter()
                    .map(|(p, q)| LineItem::from_product(p).with_quantity(*q))
                    .collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn test_add_always_yields_quantity_one(cart in cart_strategy(), product in product_strategy()) {
            let (next, transition) = reduce(&cart, &CartAction::add(product.clone()));
            prop_assert_eq!(transition, Transition::Applied);
            prop_assert_eq!(next.len(), cart.len() + 1);
            let last = next.items().last().unwrap();
            prop_assert_eq!(last.id, product.id);
            prop_assert_eq!(last.quantity, 1);
        }

        #[test]
        fn test_remove_leaves_no_matching_id(cart in cart_strategy(), id in 0u64..10) {
            let id = ProductId::new(id);
            let (next, _) = reduce(&cart, &CartAction::remove(id));
            prop_assert!(next.iter().all(|item| item.id != id));
            let survivors: Vec<&LineItem> = cart.iter().filter(|item| item.id != id).collect();
            prop_assert_eq!(next.iter().collect::<Vec<_>>(), survivors);
        }

        #[test]
        fn test_update_overwrites_in_place(cart in cart_strategy(), quantity in 1i64..20) {
            prop_assume!(!cart.is_empty());
            let target = cart.items()[cart.len() / 2].id;
            let position = cart.position(target).unwrap();
            let replacement = cart.items()[position].with_quantity(quantity);

            let (next, _) = reduce(&cart, &CartAction::update_quantity(replacement.clone()));
            prop_assert_eq!(next.len(), cart.len());
            for (i, (before, after)) in cart.iter().zip(next.iter()).enumerate() {
                if i == position {
                    prop_assert_eq!(after, &replacement);
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        }

        #[test]
        fn test_update_absent_id_is_noop(cart in cart_strategy(), quantity in -3i64..20) {
            let absent = ProductId::new(100);
            let stranger = LineItem::from_product(&Product::new(absent.get(), "ghost", "none", 1.0, "img"))
                .with_quantity(quantity);
            let (next, transition) = reduce(&cart, &CartAction::update_quantity(stranger));
            prop_assert_eq!(transition, Transition::Unchanged);
            prop_assert_eq!(next, cart);
        }

        #[test]
        fn test_total_is_sum_of_subtotals(cart in cart_strategy()) {
            let expected: f64 = cart.iter().map(|item| item.price * item.quantity as f64).sum();
            prop_assert_eq!(cart.total(), expected);
        }
    }
}
