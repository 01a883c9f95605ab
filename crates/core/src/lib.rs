//! Neural Commerce Core - Shared domain types.
//!
//! This crate provides the types used across all Neural Commerce components:
//! - `storefront` - Catalog filtering, recommendations, cart and the session runtime
//! - `cli` - One-shot command-line access to the same catalog logic
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async runtime, no rendering.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, categories, products, cart lines and analytics

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
