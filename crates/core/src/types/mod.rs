//! Core types for Neural Commerce.
//!
//! This module provides type-safe wrappers for the storefront domain.

pub mod analytics;
pub mod cart;
pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use analytics::AnalyticsSnapshot;
pub use cart::CartLine;
pub use category::{Category, CategoryError};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::Product;
