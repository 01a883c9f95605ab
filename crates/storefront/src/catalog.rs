//! In-memory product catalog.
//!
//! The catalog is built once at startup and shared read-only for the rest of
//! the process. Filtering never reorders products: results always follow the
//! order the catalog was seeded in.

use std::collections::HashSet;
use std::sync::Arc;

use neural_commerce_core::{Category, Price, Product, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{instrument, warn};

const MAX_RATING: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const MAX_AI_SCORE: u8 = 100;

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("product {id} has rating {rating}, expected 0 to 5")]
    RatingOutOfRange { id: ProductId, rating: Decimal },
    #[error("product {id} has AI-score {score}, expected 0 to 100")]
    AiScoreOutOfRange { id: ProductId, score: u8 },
    #[error("product {0} is listed under the wildcard category")]
    WildcardCategory(ProductId),
}

/// An immutable, cheaply cloneable product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog from a list of products.
    ///
    /// A product priced above its original price is accepted but logged.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two products share an id, a rating or
    /// AI-score is out of range, or a product is listed under
    /// [`Category::All`].
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.rating.is_sign_negative() || product.rating > MAX_RATING {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id,
                    rating: product.rating,
                });
            }
            if product.ai_score > MAX_AI_SCORE {
                return Err(CatalogError::AiScoreOutOfRange {
                    id: product.id,
                    score: product.ai_score,
                });
            }
            if product.category == Category::All {
                return Err(CatalogError::WildcardCategory(product.id));
            }
            if product.original_price.is_below(&product.price) {
                warn!(
                    product_id = %product.id,
                    price = %product.price,
                    original_price = %product.original_price,
                    "Product priced above its original price"
                );
            }
        }

        Ok(Self {
            products: products.into(),
        })
    }

    /// The six products the storefront ships with.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: seed_products().into(),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products under `category` whose name or description contains `query`.
    ///
    /// See [`filter`].
    #[must_use]
    pub fn filter(&self, category: Category, query: &str) -> Vec<&Product> {
        filter(&self.products, category, query)
    }
}

/// Select the products under `category` whose name or description contains
/// `query`, ignoring case.
///
/// An empty query matches every product. The result keeps the input order.
#[instrument(level = "debug", skip(products), fields(total = products.len()))]
pub fn filter<'a>(products: &'a [Product], category: Category, query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|product| category.matches(product.category))
        .filter(|product| product.contains_text(&needle))
        .collect()
}

// =============================================================================
// Seed Data
// =============================================================================

struct SeedProduct {
    id: i32,
    name: &'static str,
    price_cents: i64,
    original_price_cents: i64,
    category: Category,
    rating_tenths: i64,
    reviews: u32,
    image: &'static str,
    ai_score: u8,
    trending: bool,
    description: &'static str,
    features: [&'static str; 3],
    stock: u32,
}

const SEED: [SeedProduct; 6] = [
    SeedProduct {
        id: 1,
        name: "AI-Optimized Wireless Headphones",
        price_cents: 29_999,
        original_price_cents: 39_999,
        category: Category::Electronics,
        rating_tenths: 48,
        reviews: 2456,
        image: "🎧",
        ai_score: 94,
        trending: true,
        description: "Neural-enhanced audio processing with personalized sound profiles",
        features: ["AI Noise Cancellation", "Adaptive EQ", "Smart Battery"],
        stock: 47,
    },
    SeedProduct {
        id: 2,
        name: "Smart Fitness Tracker Pro",
        price_cents: 19_999,
        original_price_cents: 24_999,
        category: Category::Fitness,
        rating_tenths: 46,
        reviews: 1834,
        image: "⌚",
        ai_score: 91,
        trending: true,
        description: "AI-powered health monitoring with predictive wellness insights",
        features: ["Heart Rate AI", "Sleep Analysis", "Workout Prediction"],
        stock: 23,
    },
    SeedProduct {
        id: 3,
        name: "Intelligent Coffee Maker",
        price_cents: 44_999,
        original_price_cents: 54_999,
        category: Category::Home,
        rating_tenths: 49,
        reviews: 892,
        image: "☕",
        ai_score: 96,
        trending: false,
        description: "AI learns your preferences and brews perfect coffee automatically",
        features: ["Taste Learning", "Schedule Optimization", "Bean Analysis"],
        stock: 15,
    },
    SeedProduct {
        id: 4,
        name: "Neural Gaming Laptop",
        price_cents: 189_999,
        original_price_cents: 229_999,
        category: Category::Electronics,
        rating_tenths: 47,
        reviews: 3421,
        image: "💻",
        ai_score: 92,
        trending: true,
        description: "AI-enhanced gaming performance with adaptive cooling",
        features: ["Performance AI", "Thermal Intelligence", "Frame Optimization"],
        stock: 8,
    },
    SeedProduct {
        id: 5,
        name: "Smart Garden System",
        price_cents: 32_999,
        original_price_cents: 39_999,
        category: Category::Home,
        rating_tenths: 45,
        reviews: 567,
        image: "🌱",
        ai_score: 88,
        trending: false,
        description: "AI monitors and optimizes plant growth automatically",
        features: ["Growth AI", "Nutrient Optimization", "Weather Integration"],
        stock: 31,
    },
    SeedProduct {
        id: 6,
        name: "AI Photography Drone",
        price_cents: 89_999,
        original_price_cents: 119_999,
        category: Category::Electronics,
        rating_tenths: 48,
        reviews: 1245,
        image: "🚁",
        ai_score: 95,
        trending: true,
        description: "Intelligent flight patterns with AI-assisted cinematography",
        features: ["Auto Cinematography", "Object Tracking", "Wind Adaptation"],
        stock: 12,
    },
];

/// The seed products as owned values, in catalog order.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_string(),
            price: Price::usd_cents(seed.price_cents),
            original_price: Price::usd_cents(seed.original_price_cents),
            category: seed.category,
            rating: Decimal::new(seed.rating_tenths, 1),
            reviews: seed.reviews,
            image: seed.image.to_string(),
            ai_score: seed.ai_score,
            trending: seed.trending,
            description: seed.description.to_string(),
            features: seed.features.iter().map(ToString::to_string).collect(),
            stock: seed.stock,
        })
        .collect()
}
