//! Unified error handling with Sentry integration.
//!
//! Provides a unified `StoreError` type for everything the storefront can
//! reject. Input errors (an unknown category or product) are reported back
//! to the user; internal errors are captured to Sentry before being
//! returned.

use neural_commerce_core::{Category, CategoryError, ProductId};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The input source selected a category that does not exist.
    #[error("Invalid category: {0}")]
    InvalidCategory(#[from] CategoryError),

    /// An event referenced a product that is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The catalog failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An event arrived after the storefront was unmounted.
    #[error("Storefront is not mounted")]
    Unmounted,
}

impl StoreError {
    /// Returns true for errors caused by user input rather than a defect.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidCategory(_) | Self::UnknownProduct(_))
    }

    /// Returns true for errors that point at a defect and go to Sentry.
    ///
    /// Rejected user input and events arriving after unmount are expected
    /// and only logged.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        matches!(self, Self::Catalog(_))
    }

    /// Message suitable for showing to the user.
    ///
    /// Internal error details are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCategory(CategoryError::Unknown(id)) => {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
                format!("No category named '{id}'. Try one of: {}", known.join(", "))
            }
            Self::UnknownProduct(id) => format!("No product with id {id}"),
            Self::Unmounted => "The storefront has been closed".to_string(),
            Self::Catalog(_) => "Internal error".to_string(),
        }
    }

    /// Log the error, capturing internal errors to Sentry.
    pub fn report(&self) {
        if self.is_user_error() {
            tracing::warn!(error = %self, "Rejected storefront event");
        } else if !self.is_reportable() {
            tracing::debug!(error = %self, "Ignored storefront event");
        } else {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Storefront error"
            );
        }
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added product to cart", Some(&[("product_id", "3")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
