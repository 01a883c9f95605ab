//! Storefront session runtime.
//!
//! A [`Storefront`] is one mounted view of the store: it owns the current
//! [`StoreState`], applies input events through the reducer, re-renders after
//! every change and schedules the deferred recommendation task.
//!
//! The recommendation task only holds a weak reference to the session. Once
//! the session is unmounted or dropped, the task is cancelled and a late
//! wakeup has nothing to write into.
//!
//! Reduce, commit and render happen under one render lock, so the surface
//! always draws states in the order they were committed and nothing is
//! drawn once `unmount` returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use neural_commerce_core::ProductId;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::error::{Result, StoreError, add_breadcrumb};
use crate::recommend::{RecommendationTask, spawn_recommendations};
use crate::render::RenderSurface;
use crate::state::AppState;
use crate::store::{StoreEvent, StoreState, reduce};
use crate::view::{StorefrontView, view};

/// A single storefront session.
///
/// Cloning gives another handle to the same session.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    id: Uuid,
    app: AppState,
    state: RwLock<StoreState>,
    surface: Arc<dyn RenderSurface>,
    pending: Mutex<Option<RecommendationTask>>,
    /// Held from reduce through render, and while `mounted` changes.
    render_lock: Mutex<()>,
    mounted: AtomicBool,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("id", &self.inner.id)
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

impl Storefront {
    /// Create an unmounted session in the initial state.
    #[must_use]
    pub fn new(app: AppState, surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                id: Uuid::new_v4(),
                app,
                state: RwLock::new(StoreState::initial()),
                surface,
                pending: Mutex::new(None),
                render_lock: Mutex::new(()),
                mounted: AtomicBool::new(false),
            }),
        }
    }

    /// Unique id of this session, recorded on its tracing spans.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::Acquire)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> StoreState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The view model for the current state.
    #[must_use]
    pub fn view(&self) -> StorefrontView {
        view(&self.state(), self.inner.app.catalog())
    }

    /// Mount the session: render the initial view and schedule recommendations.
    ///
    /// Mounting an already mounted session does nothing. Must be called from
    /// within a tokio runtime.
    #[instrument(skip(self), fields(session_id = %self.inner.id))]
    pub fn mount(&self) {
        let _render = self.inner.lock_render();
        if self.inner.mounted.swap(true, Ordering::AcqRel) {
            debug!("Storefront already mounted");
            return;
        }
        info!("Mounting storefront");

        self.inner.render(&self.view());

        if self.state().recommendations.is_ready() {
            return;
        }

        let config = self.inner.app.config();
        let weak: Weak<SessionInner> = Arc::downgrade(&self.inner);
        let task = spawn_recommendations(
            self.inner.app.catalog().clone(),
            config.recommendation_policy,
            config.recommendation_delay,
            move |ids| publish_recommendations(&weak, ids),
        );

        *self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(task);
    }

    /// Unmount the session, cancelling recommendations that have not arrived.
    ///
    /// Waits for a render in progress to finish. After this returns no
    /// further renders happen and events are rejected with
    /// [`StoreError::Unmounted`].
    #[instrument(skip(self), fields(session_id = %self.inner.id))]
    pub fn unmount(&self) {
        let task = {
            let _render = self.inner.lock_render();
            if !self.inner.mounted.swap(false, Ordering::AcqRel) {
                return;
            }
            self.inner
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take()
        };
        if let Some(task) = task {
            if !task.is_finished() {
                debug!("Cancelling pending recommendations");
            }
            task.cancel();
        }
        info!("Storefront unmounted");
    }

    /// Apply a user-input event and re-render.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unmounted` if the session is not mounted,
    /// `StoreError::InvalidCategory` or `StoreError::UnknownProduct` if the
    /// event is rejected by the reducer. A rejected event leaves the state
    /// unchanged.
    #[instrument(skip(self, event), fields(session_id = %self.inner.id, event = event.kind()))]
    pub fn dispatch(&self, event: StoreEvent) -> Result<StoreState> {
        record_breadcrumb(&event);
        self.inner.apply(event).inspect_err(StoreError::report)
    }

    /// Pick a category tab by id.
    ///
    /// # Errors
    ///
    /// See [`Storefront::dispatch`].
    pub fn select_category(&self, id: &str) -> Result<StoreState> {
        self.dispatch(StoreEvent::SelectCategory(id.to_owned()))
    }

    /// Replace the search query.
    ///
    /// # Errors
    ///
    /// See [`Storefront::dispatch`].
    pub fn search(&self, query: &str) -> Result<StoreState> {
        self.dispatch(StoreEvent::QueryChanged(query.to_owned()))
    }

    /// Add one unit of a product to the cart.
    ///
    /// # Errors
    ///
    /// See [`Storefront::dispatch`].
    pub fn add_to_cart(&self, id: ProductId) -> Result<StoreState> {
        self.dispatch(StoreEvent::AddToCart(id))
    }
}

impl SessionInner {
    /// Reduce `event` into the current state and render the result.
    fn apply(&self, event: StoreEvent) -> Result<StoreState> {
        let _render = self.lock_render();
        if !self.mounted.load(Ordering::Acquire) {
            return Err(StoreError::Unmounted);
        }

        let next = {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let next = reduce(&guard, self.app.catalog(), event)?;
            *guard = next.clone();
            next
        };

        self.render(&view(&next, self.app.catalog()));
        Ok(next)
    }

    fn lock_render(&self) -> MutexGuard<'_, ()> {
        self.render_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Draw `view`. Callers hold the render lock.
    fn render(&self, view: &StorefrontView) {
        if let Err(e) = self.surface.render(view) {
            error!(error = %e, session_id = %self.id, "Failed to render storefront");
        }
    }
}

/// Callback run by the recommendation task when it fires.
fn publish_recommendations(session: &Weak<SessionInner>, ids: Vec<ProductId>) {
    let Some(inner) = session.upgrade() else {
        debug!("Session dropped before recommendations arrived");
        return;
    };

    match inner.apply(StoreEvent::RecommendationsReady(ids)) {
        Ok(_) => debug!(session_id = %inner.id, "Recommendations published"),
        Err(StoreError::Unmounted) => {
            debug!(session_id = %inner.id, "Session unmounted before recommendations arrived");
        }
        Err(e) => {
            warn!(session_id = %inner.id, error = %e, "Discarding recommendations");
            e.report();
        }
    }
}

fn record_breadcrumb(event: &StoreEvent) {
    match event {
        StoreEvent::SelectCategory(id) => {
            add_breadcrumb("storefront", "Selected category", Some(&[("category", id.as_str())]));
        }
        StoreEvent::QueryChanged(query) => {
            add_breadcrumb("storefront", "Changed search", Some(&[("query", query.as_str())]));
        }
        StoreEvent::AddToCart(id) => {
            let id = id.to_string();
            add_breadcrumb("cart", "Added product to cart", Some(&[("product_id", id.as_str())]));
        }
        StoreEvent::RecommendationsReady(_) => {}
    }
}
