//! Search store trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, mocks for
//! testing, etc.).

use async_trait::async_trait;

use crate::errors::SearchError;
use search_service_shared::PostDocument;

/// Abstract interface for search index operations.
///
/// Implementations can be swapped for different backends (OpenSearch, mock,
/// etc.), enabling testing and potential future migrations. All
/// implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait SearchStore: Send + Sync {
    /// Ensure the search index exists with the required field mappings.
    ///
    /// Safe to call repeatedly: a no-op if the index already exists. Runs
    /// once at startup before any writes; failure here is fatal to startup.
    async fn ensure_index(&self) -> Result<(), SearchError>;

    /// Write or replace the document keyed by `doc.id`.
    ///
    /// The write requests synchronous visibility: when this returns `Ok`, a
    /// subsequent search observes the document.
    async fn index_document(&self, doc: &PostDocument) -> Result<(), SearchError>;

    /// Delete the document at `id`.
    ///
    /// A "not found" response from the store is success: the desired end
    /// state (document absent) already holds.
    async fn delete_document(&self, id: &str) -> Result<(), SearchError>;

    /// Execute a ranked full-text search over `title` and `body`.
    ///
    /// Returns documents ordered by descending relevance score.
    async fn search(&self, query: &str) -> Result<Vec<PostDocument>, SearchError>;

    /// Check that the search store is reachable and healthy.
    async fn health_check(&self) -> Result<bool, SearchError>;
}
