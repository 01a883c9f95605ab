//! Product recommendations.
//!
//! Recommendations are the highest-scoring products above a fixed AI-score
//! threshold. Picking them is a pure function over the catalog; the
//! storefront still presents them as the answer to an inference call that
//! takes a moment, so [`spawn_recommendations`] runs the selection after a
//! delay on a background task that can be cancelled before it fires.

use std::time::Duration;

use neural_commerce_core::{Product, ProductId};
use serde::Serialize;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

use crate::catalog::Catalog;

/// How products are picked for the recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationPolicy {
    /// A product must score strictly above this to be recommended.
    pub threshold: u8,
    /// Maximum number of products returned.
    pub limit: usize,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            threshold: 90,
            limit: 3,
        }
    }
}

/// Pick the products to recommend.
///
/// Keeps products scoring above `policy.threshold`, orders them by score
/// from highest to lowest and returns at most `policy.limit` of them.
/// Products with equal scores keep their catalog order.
#[must_use]
pub fn recommend(products: &[Product], policy: RecommendationPolicy) -> Vec<&Product> {
    let mut picked: Vec<&Product> = products
        .iter()
        .filter(|product| product.ai_score > policy.threshold)
        .collect();

    // sort_by is stable
    picked.sort_by(|a, b| b.ai_score.cmp(&a.ai_score));
    picked.truncate(policy.limit);
    picked
}

/// Handle to a pending recommendation task.
///
/// Dropping the handle cancels the task. Once cancelled, the task never
/// calls its publish callback.
#[derive(Debug)]
pub struct RecommendationTask {
    cancel_tx: Option<oneshot::Sender<()>>,
    join_handle: Option<JoinHandle<()>>,
}

impl RecommendationTask {
    /// Cancel the task if it has not fired yet.
    pub fn cancel(mut self) {
        self.stop();
    }

    /// Returns true once the task has published or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the task to publish.
    ///
    /// # Errors
    ///
    /// Returns the `JoinError` if the task panicked.
    pub async fn join(mut self) -> Result<(), JoinError> {
        match self.join_handle.take() {
            Some(join_handle) => join_handle.await,
            None => Ok(()),
        }
    }

    fn stop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
        if let Some(join_handle) = self.join_handle.take() {
            join_handle.abort();
        }
    }
}

impl Drop for RecommendationTask {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn a background task that publishes recommendations after `delay`.
///
/// `publish` receives the recommended product ids, best first, and is called
/// at most once. Must be called from within a tokio runtime.
pub fn spawn_recommendations<F>(
    catalog: Catalog,
    policy: RecommendationPolicy,
    delay: Duration,
    publish: F,
) -> RecommendationTask
where
    F: FnOnce(Vec<ProductId>) + Send + 'static,
{
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

    debug!(delay_ms = delay.as_millis(), "Spawning recommendation task");
    let join_handle = tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancel_rx => {
                debug!("Recommendation task cancelled before firing");
            }
            () = tokio::time::sleep(delay) => {
                let ids: Vec<ProductId> = recommend(catalog.products(), policy)
                    .into_iter()
                    .map(|product| product.id)
                    .collect();
                info!(count = ids.len(), "Recommendations ready");
                publish(ids);
            }
        }
    });

    RecommendationTask {
        cancel_tx: Some(cancel_tx),
        join_handle: Some(join_handle),
    }
}
