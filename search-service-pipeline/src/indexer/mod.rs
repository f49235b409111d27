//! Document indexer.
//!
//! Performs idempotent upsert and delete of single post documents against
//! the search store. Outcomes are explicit `Result`s so callers decide what
//! a failed write means; transient store failures are retried with bounded
//! exponential backoff before the operation is given up on.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::errors::PipelineError;
use search_service_repository::{SearchError, SearchStore};
use search_service_shared::{CorrelationId, PostDocument};

/// Retry configuration for index writes.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    /// Total attempts per operation, including the first.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub base_retry_delay: Duration,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_retry_delay: Duration::from_millis(200),
        }
    }
}

/// Indexer that applies lifecycle outcomes to the search store.
///
/// Upserts are last-write-wins on `id`, so replaying the same event is safe
/// under at-least-once delivery. Deletes treat an already-absent document as
/// success.
pub struct PostIndexer {
    store: Arc<dyn SearchStore>,
    config: IndexerConfig,
}

impl PostIndexer {
    /// Create a new indexer with default retry configuration.
    pub fn new(store: Arc<dyn SearchStore>) -> Self {
        Self {
            store,
            config: IndexerConfig::default(),
        }
    }

    /// Create a new indexer with custom retry configuration.
    pub fn with_config(store: Arc<dyn SearchStore>, config: IndexerConfig) -> Self {
        Self { store, config }
    }

    /// Write or replace the document at `doc.id`.
    ///
    /// The underlying write requests synchronous visibility, so a query
    /// issued after this returns observes the document.
    pub async fn upsert(
        &self,
        doc: &PostDocument,
        correlation_id: &CorrelationId,
    ) -> Result<(), PipelineError> {
        let result = self
            .with_retries(correlation_id, &doc.id, || self.store.index_document(doc))
            .await;

        match &result {
            Ok(()) => {
                info!(
                    correlation_id = %correlation_id,
                    post_id = %doc.id,
                    "Indexed post"
                );
            }
            Err(e) => {
                error!(
                    correlation_id = %correlation_id,
                    post_id = %doc.id,
                    error = %e,
                    "Failed to index post after retries"
                );
            }
        }

        result.map_err(PipelineError::from)
    }

    /// Delete the document at `id`.
    ///
    /// The store treats "not found" as success, so removing an id that was
    /// never indexed is not an error.
    pub async fn remove(
        &self,
        id: &str,
        correlation_id: &CorrelationId,
    ) -> Result<(), PipelineError> {
        let result = self
            .with_retries(correlation_id, id, || self.store.delete_document(id))
            .await;

        match &result {
            Ok(()) => {
                info!(
                    correlation_id = %correlation_id,
                    post_id = %id,
                    "Removed post from index"
                );
            }
            Err(e) => {
                error!(
                    correlation_id = %correlation_id,
                    post_id = %id,
                    error = %e,
                    "Failed to remove post after retries"
                );
            }
        }

        result.map_err(PipelineError::from)
    }

    /// Run a store operation with bounded exponential backoff.
    async fn with_retries<F, Fut>(
        &self,
        correlation_id: &CorrelationId,
        post_id: &str,
        operation: F,
    ) -> Result<(), SearchError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<(), SearchError>>,
    {
        let mut delay = self.config.base_retry_delay;
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(()) => return Ok(()),
                Err(e) if attempt < self.config.max_attempts => {
                    warn!(
                        correlation_id = %correlation_id,
                        post_id = %post_id,
                        attempt = attempt,
                        error = %e,
                        "Store write failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
