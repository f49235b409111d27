//! Dependency initialization and wiring for the search service.
//!
//! All process-lifetime handles (the search store and the Kafka consumer)
//! are constructed once here and passed into the components that need them;
//! there is no ambient global state.

use std::sync::Arc;

use tracing::info;

use crate::config::Settings;
use crate::ServiceError;
use search_service_pipeline::{KafkaConsumer, PostIndexer};
use search_service_repository::{OpenSearchStore, SearchStore};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Shared search store handle, used by both the indexing pipeline and
    /// the query path.
    pub store: Arc<dyn SearchStore>,
    /// The subscribed Kafka consumer.
    pub consumer: Arc<KafkaConsumer>,
    /// The document indexer the consumer dispatches into.
    pub indexer: Arc<PostIndexer>,
}

impl Dependencies {
    /// Initialize all dependencies from the given settings.
    ///
    /// Verifies the search store is reachable and the index exists before
    /// the consumer is created; any failure here aborts startup.
    pub async fn new(settings: &Settings) -> Result<Self, ServiceError> {
        info!(
            opensearch_url = %settings.opensearch_url,
            index = %settings.index_name,
            kafka_broker = %settings.kafka_broker,
            kafka_group_id = %settings.kafka_group_id,
            kafka_topic = %settings.kafka_topic,
            "Initializing dependencies"
        );

        let store: Arc<dyn SearchStore> = Arc::new(OpenSearchStore::new(
            &settings.opensearch_url,
            &settings.index_name,
        )?);

        let healthy = store
            .health_check()
            .await
            .map_err(|e| ServiceError::config(format!("OpenSearch health check failed: {}", e)))?;
        if !healthy {
            return Err(ServiceError::config("OpenSearch is not healthy"));
        }

        // The indexer must never target a non-existent index.
        store
            .ensure_index()
            .await
            .map_err(|e| ServiceError::config(format!("Failed to ensure search index: {}", e)))?;

        info!("Search store ready and index is present");

        let consumer = KafkaConsumer::new(
            &settings.kafka_broker,
            &settings.kafka_group_id,
            &settings.kafka_topic,
        )?;
        consumer.subscribe()?;

        let indexer = Arc::new(PostIndexer::new(store.clone()));

        Ok(Self {
            store,
            consumer: Arc::new(consumer),
            indexer,
        })
    }
}
