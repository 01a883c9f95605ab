//! Storefront state and reducer.
//!
//! All user-visible state lives in one immutable [`StoreState`]. Each input
//! event produces a new state through [`reduce`], which is a pure function:
//! replaying the same events against the same catalog always gives the same
//! state.

use neural_commerce_core::{AnalyticsSnapshot, Category, ProductId};
use serde::Serialize;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{Result, StoreError};

/// State of the deferred recommendation list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "products", rename_all = "snake_case")]
pub enum Recommendations {
    /// The recommendation task has not fired yet.
    #[default]
    Pending,
    /// Recommended product ids, best first. May be empty.
    Ready(Vec<ProductId>),
}

impl Recommendations {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Everything the storefront shows, as of one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreState {
    pub category: Category,
    pub query: String,
    pub cart: Cart,
    pub recommendations: Recommendations,
    pub analytics: AnalyticsSnapshot,
}

impl StoreState {
    /// The state a fresh storefront starts in.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }
}

/// An input to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The user picked a category tab. Carries the raw category id.
    SelectCategory(String),
    /// The search box changed.
    QueryChanged(String),
    /// The user pressed "Add to Cart" on a product.
    AddToCart(ProductId),
    /// The recommendation task fired.
    RecommendationsReady(Vec<ProductId>),
}

impl StoreEvent {
    /// Short name used in logs and breadcrumbs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SelectCategory(_) => "select_category",
            Self::QueryChanged(_) => "query_changed",
            Self::AddToCart(_) => "add_to_cart",
            Self::RecommendationsReady(_) => "recommendations_ready",
        }
    }
}

/// Apply `event` to `state`.
///
/// Recommendations are set at most once; a second `RecommendationsReady`
/// leaves the state as it is.
///
/// # Errors
///
/// Returns `StoreError::InvalidCategory` for an unknown category id and
/// `StoreError::UnknownProduct` for a product id missing from `catalog`.
/// The input state is never modified.
pub fn reduce(state: &StoreState, catalog: &Catalog, event: StoreEvent) -> Result<StoreState> {
    match event {
        StoreEvent::SelectCategory(id) => {
            let category = Category::parse(&id)?;
            Ok(StoreState {
                category,
                ..state.clone()
            })
        }
        StoreEvent::QueryChanged(query) => Ok(StoreState {
            query,
            ..state.clone()
        }),
        StoreEvent::AddToCart(id) => {
            let product = catalog.get(id).ok_or(StoreError::UnknownProduct(id))?;
            Ok(StoreState {
                cart: state.cart.add(product),
                ..state.clone()
            })
        }
        StoreEvent::RecommendationsReady(ids) => {
            if state.recommendations.is_ready() {
                return Ok(state.clone());
            }
            if let Some(missing) = ids.iter().find(|id| catalog.get(**id).is_none()) {
                return Err(StoreError::UnknownProduct(*missing));
            }
            Ok(StoreState {
                recommendations: Recommendations::Ready(ids),
                ..state.clone()
            })
        }
    }
}
