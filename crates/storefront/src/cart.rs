//! Shopping cart.
//!
//! The cart is a value: adding a product returns a new cart and leaves the
//! original untouched, so a renderer holding the previous cart never sees it
//! change underneath it.

use neural_commerce_core::{CartLine, Product, ProductId};
use serde::Serialize;

/// An ordered list of cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in the order products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for `id`, if the product is in the cart.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns a cart with one more unit of `product`.
    ///
    /// If the product already has a line its quantity is incremented in
    /// place; otherwise a new line with quantity 1 is appended.
    #[must_use]
    pub fn add(&self, product: &Product) -> Self {
        let lines = if self.line(product.id).is_some() {
            self.lines
                .iter()
                .map(|line| {
                    if line.product_id() == product.id {
                        line.incremented()
                    } else {
                        line.clone()
                    }
                })
                .collect()
        } else {
            let mut lines = Vec::with_capacity(self.lines.len() + 1);
            lines.extend(self.lines.iter().cloned());
            lines.push(CartLine::new(product.clone()));
            lines
        };

        Self { lines }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |sum, line| sum.saturating_add(line.quantity))
    }
}

/// Returns `cart` with one more unit of `product`.
#[must_use]
pub fn add_to_cart(cart: &Cart, product: &Product) -> Cart {
    cart.add(product)
}

/// Total number of units in `cart`.
#[must_use]
pub fn total_item_count(cart: &Cart) -> u32 {
    cart.total_item_count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(catalog: &Catalog, id: i32) -> &Product {
        catalog.get(ProductId::new(id)).unwrap()
    }

    fn summary(cart: &Cart) -> Vec<(i32, u32)> {
        cart.lines()
            .iter()
            .map(|line| (line.product_id().as_i32(), line.quantity))
            .collect()
    }

    #[test]
    fn test_empty_cart_has_zero_items() {
        assert_eq!(Cart::empty().total_item_count(), 0);
        assert!(Cart::default().is_empty());
    }

    #[test]
    fn test_adding_same_product_twice_increments() {
        let catalog = Catalog::seed();
        let cart = Cart::empty()
            .add(product(&catalog, 1))
            .add(product(&catalog, 1));

        assert_eq!(summary(&cart), vec![(1, 2)]);
    }

    #[test]
    fn test_add_sequence() {
        let catalog = Catalog::seed();
        let cart = add_to_cart(&Cart::empty(), product(&catalog, 1));
        let cart = add_to_cart(&cart, product(&catalog, 1));
        let cart = add_to_cart(&cart, product(&catalog, 2));

        assert_eq!(summary(&cart), vec![(1, 2), (2, 1)]);
        assert_eq!(total_item_count(&cart), 3);
    }

    #[test]
    fn test_increment_preserves_line_order() {
        let catalog = Catalog::seed();
        let cart = Cart::empty()
            .add(product(&catalog, 3))
            .add(product(&catalog, 5))
            .add(product(&catalog, 3));

        assert_eq!(summary(&cart), vec![(3, 2), (5, 1)]);
    }

    #[test]
    fn test_add_does_not_mutate_input() {
        let catalog = Catalog::seed();
        let before = Cart::empty().add(product(&catalog, 1));
        let snapshot = before.clone();

        let after = before.add(product(&catalog, 1)).add(product(&catalog, 4));

        assert_eq!(before, snapshot);
        assert_eq!(summary(&after), vec![(1, 2), (4, 1)]);
    }

    #[test]
    fn test_total_matches_sum_of_quantities() {
        let catalog = Catalog::seed();
        let mut cart = Cart::empty();
        for id in [6, 2, 6, 6, 1, 2] {
            cart = cart.add(product(&catalog, id));
        }

        let sum: u32 = cart.lines().iter().map(|line| line.quantity).sum();
        assert_eq!(cart.total_item_count(), sum);
        assert_eq!(cart.total_item_count(), 6);
        assert_eq!(cart.line(ProductId::new(6)).unwrap().quantity, 3);
    }
}
