//! Cart line type.

use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// One product and how many units of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line holding a single unit of `product`.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Returns the id of the product on this line.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Returns a copy of this line with one more unit.
    #[must_use]
    pub fn incremented(&self) -> Self {
        Self {
            product: self.product.clone(),
            quantity: self.quantity.saturating_add(1),
        }
    }
}
