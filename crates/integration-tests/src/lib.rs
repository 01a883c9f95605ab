//! Integration tests for Neural Commerce.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p neural-commerce-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_scenarios` - Full sessions driven through a recording surface
//! - `catalog_properties` - Filtering, recommendation and cart laws over the seed catalog
//!
//! Session tests run with tokio's paused clock so the recommendation delay
//! elapses instantly and deterministically.
