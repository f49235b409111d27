//! Query service.
//!
//! Validates a query string and executes a ranked search against the store.

use std::sync::Arc;

use tracing::{info, warn};

use search_service_repository::SearchStore;
use search_service_shared::{CorrelationId, PostDocument};

/// Query-path service over the shared search store.
pub struct SearchService {
    store: Arc<dyn SearchStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn SearchStore>) -> Self {
        Self { store }
    }

    /// Execute a ranked full-text search.
    ///
    /// An empty or whitespace-only query returns an empty result without
    /// contacting the store. A store-level failure also degrades to an empty
    /// result at this boundary; the read path stays available even when the
    /// store is not.
    pub async fn search(&self, query: &str, correlation_id: &CorrelationId) -> Vec<PostDocument> {
        if query.trim().is_empty() {
            warn!(correlation_id = %correlation_id, "Search query is empty");
            return vec![];
        }

        match self.store.search(query).await {
            Ok(posts) => {
                info!(
                    correlation_id = %correlation_id,
                    count = posts.len(),
                    "Search completed"
                );
                posts
            }
            Err(e) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %e,
                    "Search failed, returning empty results"
                );
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use search_service_repository::SearchError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStore {
        search_calls: AtomicUsize,
        fail: bool,
    }

    impl CountingStore {
        fn new(fail: bool) -> Self {
            Self {
                search_calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl SearchStore for CountingStore {
        async fn ensure_index(&self) -> Result<(), SearchError> {
            Ok(())
        }

        async fn index_document(&self, _doc: &PostDocument) -> Result<(), SearchError> {
            Ok(())
        }

        async fn delete_document(&self, _id: &str) -> Result<(), SearchError> {
            Ok(())
        }

        async fn search(&self, _query: &str) -> Result<Vec<PostDocument>, SearchError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SearchError::query("store unavailable"));
            }
            Ok(vec![PostDocument {
                id: "p1".to_string(),
                owner_id: "u1".to_string(),
                title: "Go concurrency".to_string(),
                body: "goroutines and channels".to_string(),
                created_at: None,
                updated_at: None,
                popularity_score: None,
            }])
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_empty_query_short_circuits() {
        let store = Arc::new(CountingStore::new(false));
        let service = SearchService::new(store.clone());

        assert!(service.search("", &CorrelationId::new()).await.is_empty());
        assert!(service.search("   ", &CorrelationId::new()).await.is_empty());
        assert_eq!(store.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_nonempty_query_hits_store() {
        let store = Arc::new(CountingStore::new(false));
        let service = SearchService::new(store.clone());

        let posts = service.search("concurrency", &CorrelationId::new()).await;

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "p1");
        assert_eq!(store.search_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_store_failure_degrades_to_empty() {
        let store = Arc::new(CountingStore::new(true));
        let service = SearchService::new(store);

        let posts = service.search("concurrency", &CorrelationId::new()).await;
        assert!(posts.is_empty());
    }
}
