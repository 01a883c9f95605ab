//! Render-ready view model.
//!
//! [`view`] derives everything a rendering surface needs from the current
//! [`StoreState`]. Surfaces never look at the state or catalog directly.

use neural_commerce_core::{AnalyticsSnapshot, Category, Product, ProductId};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::store::{Recommendations, StoreState};

/// Product display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub price: String,
    /// Only set when the product is discounted.
    pub original_price: Option<String>,
    pub rating: String,
    pub reviews: u32,
    pub ai_score: u8,
    pub trending: bool,
    pub features: Vec<String>,
    pub stock: u32,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category,
            price: product.price.amount.to_string(),
            original_price: product
                .is_discounted()
                .then(|| product.original_price.amount.to_string()),
            rating: product.rating.to_string(),
            reviews: product.reviews,
            ai_score: product.ai_score,
            trending: product.trending,
            features: product.features.clone(),
            stock: product.stock,
        }
    }
}

/// Category tab display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

/// The filtered product grid.
///
/// `Empty` means the filter ran and matched nothing; the surface shows the
/// empty-state message instead of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "products", rename_all = "snake_case")]
pub enum ProductListing {
    Products(Vec<ProductCard>),
    Empty,
}

impl ProductListing {
    fn from_cards(cards: Vec<ProductCard>) -> Self {
        if cards.is_empty() {
            Self::Empty
        } else {
            Self::Products(cards)
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            Self::Products(cards) => cards,
            Self::Empty => &[],
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Everything a rendering surface draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontView {
    pub category: Category,
    pub query: String,
    pub categories: Vec<CategoryTab>,
    pub listing: ProductListing,
    /// Recommended products, best first. Empty while pending.
    pub recommendations: Vec<ProductCard>,
    pub recommendations_pending: bool,
    /// Cart badge count. The badge is hidden when this is 0.
    pub cart_count: u32,
    pub analytics: AnalyticsSnapshot,
}

impl StorefrontView {
    #[must_use]
    pub fn show_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }

    #[must_use]
    pub const fn show_cart_badge(&self) -> bool {
        self.cart_count > 0
    }
}

/// Derive the view model for `state`.
#[must_use]
pub fn view(state: &StoreState, catalog: &Catalog) -> StorefrontView {
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryTab {
            id: category.id(),
            name: category.display_name(),
            icon: category.icon(),
            selected: category == state.category,
        })
        .collect();

    let listing = ProductListing::from_cards(
        catalog
            .filter(state.category, &state.query)
            .into_iter()
            .map(ProductCard::from)
            .collect(),
    );

    let (recommendations, recommendations_pending) = match &state.recommendations {
        Recommendations::Pending => (Vec::new(), true),
        Recommendations::Ready(ids) => (
            ids.iter()
                .filter_map(|id| catalog.get(*id))
                .map(ProductCard::from)
                .collect(),
            false,
        ),
    };

    StorefrontView {
        category: state.category,
        query: state.query.clone(),
        categories,
        listing,
        recommendations,
        recommendations_pending,
        cart_count: state.cart.total_item_count(),
        analytics: state.analytics,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::store::{StoreEvent, reduce};

    fn apply(events: Vec<StoreEvent>) -> (StoreState, Catalog) {
        let catalog = Catalog::seed();
        let state = events
            .into_iter()
            .try_fold(StoreState::initial(), |state, event| {
                reduce(&state, &catalog, event)
            })
            .unwrap();
        (state, catalog)
    }

    fn card_ids(cards: &[ProductCard]) -> Vec<i32> {
        cards.iter().map(|card| card.id.as_i32()).collect()
    }

    #[test]
    fn test_initial_view() {
        let (state, catalog) = apply(vec![]);
        let view = view(&state, &catalog);

        assert_eq!(card_ids(view.listing.cards()), vec![1, 2, 3, 4, 5, 6]);
        assert!(view.recommendations_pending);
        assert!(!view.show_recommendations());
        assert!(!view.show_cart_badge());
        assert_eq!(view.categories.len(), 4);
        assert!(view.categories[0].selected);
        assert!(view.categories[1..].iter().all(|tab| !tab.selected));
    }

    #[test]
    fn test_empty_listing_is_explicit() {
        let (state, catalog) = apply(vec![StoreEvent::QueryChanged("toaster".to_string())]);
        let view = view(&state, &catalog);

        assert_eq!(view.listing, ProductListing::Empty);
        assert!(view.listing.is_empty());
        assert!(view.listing.cards().is_empty());
    }

    #[test]
    fn test_selected_tab_follows_state() {
        let (state, catalog) = apply(vec![StoreEvent::SelectCategory("home".to_string())]);
        let view = view(&state, &catalog);

        let selected: Vec<&str> = view
            .categories
            .iter()
            .filter(|tab| tab.selected)
            .map(|tab| tab.id)
            .collect();
        assert_eq!(selected, vec!["home"]);
        assert_eq!(card_ids(view.listing.cards()), vec![3, 5]);
    }

    #[test]
    fn test_recommendations_resolve_to_cards() {
        let (state, catalog) = apply(vec![StoreEvent::RecommendationsReady(vec![
            ProductId::new(3),
            ProductId::new(6),
            ProductId::new(1),
        ])]);
        let view = view(&state, &catalog);

        assert!(!view.recommendations_pending);
        assert!(view.show_recommendations());
        assert_eq!(card_ids(&view.recommendations), vec![3, 6, 1]);
    }

    #[test]
    fn test_ready_but_empty_recommendations_are_hidden() {
        let (state, catalog) = apply(vec![StoreEvent::RecommendationsReady(vec![])]);
        let view = view(&state, &catalog);

        assert!(!view.recommendations_pending);
        assert!(!view.show_recommendations());
    }

    #[test]
    fn test_cart_badge() {
        let (state, catalog) = apply(vec![
            StoreEvent::AddToCart(ProductId::new(2)),
            StoreEvent::AddToCart(ProductId::new(2)),
        ]);
        let view = view(&state, &catalog);

        assert!(view.show_cart_badge());
        assert_eq!(view.cart_count, 2);
    }

    #[test]
    fn test_product_card_prices() {
        let catalog = Catalog::seed();
        let mut product = catalog.get(ProductId::new(1)).unwrap().clone();
        let card = ProductCard::from(&product);
        assert_eq!(card.price, "299.99");
        assert_eq!(card.original_price.as_deref(), Some("399.99"));
        assert_eq!(card.rating, "4.8");

        product.original_price = product.price;
        assert_eq!(ProductCard::from(&product).original_price, None);
    }
}
