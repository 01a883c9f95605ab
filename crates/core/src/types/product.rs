//! Catalog product type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// A product in the catalog.
///
/// Products are created once when the catalog is seeded and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    pub name: String,
    /// Current selling price.
    pub price: Price,
    /// Price before discount.
    pub original_price: Price,
    /// Category the product is listed under. Never [`Category::All`].
    pub category: Category,
    /// Average review rating, 0 to 5.
    pub rating: Decimal,
    /// Number of reviews behind `rating`.
    pub reviews: u32,
    /// Emoji shown in place of a product photo.
    pub image: String,
    /// Static recommendation score, 0 to 100.
    pub ai_score: u8,
    pub trending: bool,
    pub description: String,
    /// Short feature labels shown as badges.
    pub features: Vec<String>,
    /// Units in stock.
    pub stock: u32,
}

impl Product {
    /// Returns true if the product is sold below its original price.
    ///
    /// Only discounted products show their original price.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.price.is_below(&self.original_price)
    }

    /// Returns true if `needle` occurs in the name or description.
    ///
    /// The comparison is case-insensitive. `needle` must already be lowercase.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product {
            id: ProductId::new(1),
            name: "AI-Optimized Wireless Headphones".to_string(),
            price: Price::usd_cents(29_999),
            original_price: Price::usd_cents(39_999),
            category: Category::Electronics,
            rating: Decimal::new(48, 1),
            reviews: 2456,
            image: "🎧".to_string(),
            ai_score: 94,
            trending: true,
            description: "Neural-enhanced audio processing with personalized sound profiles"
                .to_string(),
            features: vec!["AI Noise Cancellation".to_string()],
            stock: 47,
        }
    }

    #[test]
    fn test_is_discounted() {
        let mut product = headphones();
        assert!(product.is_discounted());

        product.original_price = product.price;
        assert!(!product.is_discounted());

        product.original_price = Price::usd_cents(100);
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_contains_text_matches_name_and_description() {
        let product = headphones();
        assert!(product.contains_text("wireless"));
        assert!(product.contains_text("sound profiles"));
        assert!(product.contains_text("ai-optimized"));
        assert!(!product.contains_text("laptop"));
    }

    #[test]
    fn test_contains_text_empty_needle() {
        assert!(headphones().contains_text(""));
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = headphones();
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"category\":\"electronics\""));
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
