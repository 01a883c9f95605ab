//! Integration tests for catalog filtering, recommendations and the cart.
//!
//! Properties are checked across every category and a set of queries over
//! the seed catalog.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use neural_commerce_core::{Category, ProductId};
use neural_commerce_storefront::cart::{add_to_cart, total_item_count};
use neural_commerce_storefront::{
    Cart, Catalog, RecommendationPolicy, StoreEvent, StoreState, recommend, reduce,
};
use rust_decimal::Decimal;

const QUERIES: [&str; 7] = ["", "ai", "AI", "smart", "brews", " ", "zzz"];

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_filter_is_exact_predicate_in_catalog_order() {
    let catalog = Catalog::seed();
    for category in Category::ALL {
        for query in QUERIES {
            let needle = query.to_lowercase();
            let expected: Vec<_> = catalog
                .products()
                .iter()
                .filter(|p| category.matches(p.category))
                .filter(|p| {
                    p.name.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle)
                })
                .map(|p| p.id)
                .collect();
            let actual: Vec<_> = catalog.filter(category, query).iter().map(|p| p.id).collect();
            assert_eq!(actual, expected, "category={category} query={query:?}");
        }
    }
}

#[test]
fn test_filter_all_with_empty_query_is_whole_catalog() {
    let catalog = Catalog::seed();
    assert_eq!(catalog.filter(Category::All, "").len(), catalog.len());
}

#[test]
fn test_categories_partition_catalog() {
    let catalog = Catalog::seed();
    let total: usize = Category::ALL
        .iter()
        .filter(|&&c| c != Category::All)
        .map(|&c| catalog.filter(c, "").len())
        .sum();
    assert_eq!(total, catalog.len());
}

// =============================================================================
// Recommendations
// =============================================================================

#[test]
fn test_recommendations_obey_policy_for_every_threshold() {
    let catalog = Catalog::seed();
    for threshold in [0, 50, 85, 90, 95, 98, 100] {
        for limit in 1..=6 {
            let policy = RecommendationPolicy { threshold, limit };
            let picks = recommend(catalog.products(), policy);
            assert!(picks.len() <= limit);
            assert!(picks.iter().all(|p| p.ai_score > threshold));
            assert!(picks.windows(2).all(|w| w[0].ai_score >= w[1].ai_score));
        }
    }
}

#[test]
fn test_recommendations_do_not_reorder_catalog() {
    let catalog = Catalog::seed();
    let before: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
    let _ = recommend(catalog.products(), RecommendationPolicy::default());
    let after: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
    assert_eq!(before, after);
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_add_to_cart_leaves_input_untouched() {
    let catalog = Catalog::seed();
    let product = catalog.get(ProductId::new(4)).unwrap();
    let empty = Cart::empty();
    let one = add_to_cart(&empty, product);
    let two = add_to_cart(&one, product);

    assert_eq!(total_item_count(&empty), 0);
    assert_eq!(total_item_count(&one), 1);
    assert_eq!(total_item_count(&two), 2);
    assert_eq!(two.lines().len(), 1);
}

#[test]
fn test_cart_total_matches_event_count() {
    let catalog = Catalog::seed();
    let sequence = [3, 1, 3, 6, 6, 6, 2];
    let state = sequence
        .iter()
        .map(|&id| StoreEvent::AddToCart(ProductId::new(id)))
        .try_fold(StoreState::initial(), |state, event| reduce(&state, &catalog, event))
        .unwrap();

    assert_eq!(state.cart.total_item_count(), 7);
    let order: Vec<_> = state.cart.lines().iter().map(|l| l.product_id().as_i32()).collect();
    assert_eq!(order, vec![3, 1, 6, 2]);
}

#[test]
fn test_cart_serializes_as_line_list() {
    let catalog = Catalog::seed();
    let cart = Cart::empty().add(catalog.get(ProductId::new(2)).unwrap());
    let json = serde_json::to_value(&cart).unwrap();
    assert_eq!(json[0]["quantity"], 1);
    assert_eq!(json[0]["product"]["id"], 2);
}

#[test]
fn test_seed_prices_are_two_decimal_usd() {
    let catalog = Catalog::seed();
    for product in catalog.products() {
        assert_eq!(product.price.amount.scale(), 2, "{}", product.name);
        assert!(product.price.amount > Decimal::ZERO);
    }
}
