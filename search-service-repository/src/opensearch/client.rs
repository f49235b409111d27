//! OpenSearch store implementation.
//!
//! This module provides the concrete implementation of `SearchStore` using
//! the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    params::Refresh,
    DeleteParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchStore;
use crate::opensearch::index_config::index_settings;
use crate::opensearch::queries::build_search_query;
use search_service_shared::PostDocument;

/// OpenSearch-backed search store.
///
/// Provides full-text post search using OpenSearch as the backend. One
/// instance is created at startup and shared by the indexing pipeline and
/// the query path; all calls are stateless, so no in-process locking is
/// needed.
pub struct OpenSearchStore {
    client: OpenSearch,
    index_name: String,
}

impl OpenSearchStore {
    /// Create a new store connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `index_name` - The name of the post index
    pub fn new(url: &str, index_name: &str) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, index = %index_name, "Created OpenSearch store");

        Ok(Self {
            client,
            index_name: index_name.to_string(),
        })
    }

    /// Extract post documents from a search response body, in hit order.
    ///
    /// Hits whose `_source` does not decode as a `PostDocument` are skipped
    /// with a warning rather than failing the whole response.
    fn parse_hits(body: &Value) -> Vec<PostDocument> {
        let hits = body["hits"]["hits"].as_array();

        let mut posts = Vec::new();
        for hit in hits.into_iter().flatten() {
            match serde_json::from_value::<PostDocument>(hit["_source"].clone()) {
                Ok(doc) => posts.push(doc),
                Err(e) => {
                    warn!(error = %e, "Skipping search hit with undecodable source");
                }
            }
        }
        posts
    }
}

#[async_trait]
impl SearchStore for OpenSearchStore {
    async fn ensure_index(&self) -> Result<(), SearchError> {
        let exists_response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[&self.index_name]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        if exists_response.status_code().is_success() {
            debug!(index = %self.index_name, "Index already exists");
            return Ok(());
        }

        info!(index = %self.index_name, "Index does not exist, creating it");

        let create_response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.index_name))
            .body(index_settings())
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        let status = create_response.status_code();
        if !status.is_success() {
            let error_body = create_response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index creation failed");
            return Err(SearchError::index_creation(format!(
                "Create failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.index_name, "Index created");
        Ok(())
    }

    async fn index_document(&self, doc: &PostDocument) -> Result<(), SearchError> {
        // wait_for makes the document searchable before this call returns,
        // so a query issued after an upsert observes the new document.
        let response = self
            .client
            .index(IndexParts::IndexId(&self.index_name, &doc.id))
            .refresh(Refresh::WaitFor)
            .body(doc)
            .send()
            .await
            .map_err(|e| SearchError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(post_id = %doc.id, "Document indexed");
        Ok(())
    }

    async fn delete_document(&self, id: &str) -> Result<(), SearchError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(&self.index_name, id))
            .send()
            .await
            .map_err(|e| SearchError::delete(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable: the document is already absent, which is the
        // desired end state.
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Delete request failed");
            return Err(SearchError::delete(format!(
                "Delete failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(post_id = %id, "Document deleted");
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<PostDocument>, SearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[&self.index_name]))
            .body(build_search_query(query))
            .send()
            .await
            .map_err(|e| SearchError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let posts = Self::parse_hits(&body);
        debug!(count = posts.len(), "Search completed");
        Ok(posts)
    }

    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        Ok(response.status_code().is_success())
    }
}
