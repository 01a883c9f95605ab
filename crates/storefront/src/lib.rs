//! Neural Commerce Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Modules
//!
//! - [`catalog`] - Immutable product catalog and filtering
//! - [`recommend`] - Recommendation selection and the deferred recommendation task
//! - [`cart`] - Value-type shopping cart
//! - [`store`] - Store state and the event reducer
//! - [`view`] - View model derived from the state
//! - [`render`] - Rendering surfaces
//! - [`filters`] - Custom Askama template filters
//! - [`session`] - Storefront session runtime
//! - [`input`] - Line-oriented user-input parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod input;
pub mod recommend;
pub mod render;
pub mod session;
pub mod state;
pub mod store;
pub mod view;

pub use cart::Cart;
pub use catalog::{Catalog, CatalogError};
pub use config::StorefrontConfig;
pub use error::StoreError;
pub use recommend::{RecommendationPolicy, RecommendationTask, recommend};
pub use render::RenderSurface;
pub use session::Storefront;
pub use state::AppState;
pub use store::{Recommendations, StoreEvent, StoreState, reduce};
pub use view::StorefrontView;
