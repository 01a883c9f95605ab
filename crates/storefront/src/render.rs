//! Rendering surfaces.
//!
//! A [`RenderSurface`] receives the derived [`StorefrontView`] every time it
//! changes. The storefront ships a plain-text surface backed by an Askama
//! template, a tracing surface for headless runs, and a recording surface
//! used by tests.

use std::io::Write;
use std::sync::Mutex;

use askama::Template;
use thiserror::Error;
use tracing::debug;

use crate::filters;
use crate::view::StorefrontView;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
    #[error("Write error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Surface lock poisoned")]
    LockPoisoned,
}

/// Something that can draw the storefront.
pub trait RenderSurface: Send + Sync {
    /// Draw `view`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the surface could not draw the view.
    fn render(&self, view: &StorefrontView) -> Result<(), RenderError>;
}

#[derive(Template)]
#[template(path = "storefront.txt")]
struct StorefrontTemplate<'a> {
    view: &'a StorefrontView,
}

/// Render `view` to a string using the storefront text template.
///
/// # Errors
///
/// Returns `RenderError::Template` if rendering fails.
pub fn render_text(view: &StorefrontView) -> Result<String, RenderError> {
    Ok(StorefrontTemplate { view }.render()?)
}

/// Writes each view as text to a writer.
pub struct TextSurface<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> TextSurface<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the surface and return the writer.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::LockPoisoned` if a render panicked mid-write.
    pub fn into_inner(self) -> Result<W, RenderError> {
        self.writer.into_inner().map_err(|_| RenderError::LockPoisoned)
    }
}

impl<W: Write + Send> RenderSurface for TextSurface<W> {
    fn render(&self, view: &StorefrontView) -> Result<(), RenderError> {
        let text = render_text(view)?;
        let mut writer = self.writer.lock().map_err(|_| RenderError::LockPoisoned)?;
        writeln!(writer, "{text}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Logs a one-line summary of each view.
#[derive(Debug, Default)]
pub struct TracingSurface;

impl RenderSurface for TracingSurface {
    fn render(&self, view: &StorefrontView) -> Result<(), RenderError> {
        debug!(
            category = %view.category,
            query = %view.query,
            listed = view.listing.cards().len(),
            recommended = view.recommendations.len(),
            recommendations_pending = view.recommendations_pending,
            cart_count = view.cart_count,
            "Rendered storefront"
        );
        Ok(())
    }
}

/// Keeps every rendered view in memory.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    views: Mutex<Vec<StorefrontView>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All views rendered so far, oldest first.
    #[must_use]
    pub fn views(&self) -> Vec<StorefrontView> {
        self.views
            .lock()
            .map(|views| views.clone())
            .unwrap_or_default()
    }

    /// The most recently rendered view.
    #[must_use]
    pub fn last(&self) -> Option<StorefrontView> {
        self.views
            .lock()
            .ok()
            .and_then(|views| views.last().cloned())
    }

    /// Number of renders so far.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.views.lock().map(|views| views.len()).unwrap_or(0)
    }
}

impl RenderSurface for RecordingSurface {
    fn render(&self, view: &StorefrontView) -> Result<(), RenderError> {
        self.views
            .lock()
            .map_err(|_| RenderError::LockPoisoned)?
            .push(view.clone());
        Ok(())
    }
}
