//! Application state shared across sessions.

use std::sync::Arc;

use neural_commerce_core::Product;

use crate::catalog::{Catalog, seed_products};
use crate::config::StorefrontConfig;
use crate::error::Result;

/// Application state shared across all storefront sessions.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the read-only catalog.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Product catalog shared by every session
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Validate `products` into a catalog and create application state over it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Catalog` if the products fail catalog validation.
    pub fn from_products(config: StorefrontConfig, products: Vec<Product>) -> Result<Self> {
        let catalog = Catalog::new(products)?;
        tracing::debug!(products = catalog.len(), "Catalog validated");
        Ok(Self::new(config, catalog))
    }

    /// Create application state over the validated seed catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Catalog` if the seed products fail validation.
    pub fn seeded(config: StorefrontConfig) -> Result<Self> {
        Self::from_products(config, seed_products())
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
