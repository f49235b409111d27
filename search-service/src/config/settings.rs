//! Environment-variable configuration.

use std::env;

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default post index name.
const DEFAULT_INDEX_NAME: &str = "posts";

/// Default Kafka broker address.
const DEFAULT_KAFKA_BROKER: &str = "localhost:9092";

/// Default Kafka consumer group ID.
const DEFAULT_KAFKA_GROUP_ID: &str = "search-service-post-events-group";

/// Default lifecycle event topic.
const DEFAULT_KAFKA_TOPIC: &str = "post_events";

/// Default HTTP bind address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3003";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// OpenSearch server URL.
    pub opensearch_url: String,
    /// Name of the post index.
    pub index_name: String,
    /// Kafka broker addresses (comma-separated).
    pub kafka_broker: String,
    /// Kafka consumer group ID.
    pub kafka_group_id: String,
    /// Lifecycle event topic.
    pub kafka_topic: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL
    /// - `SEARCH_INDEX_NAME`: post index name
    /// - `KAFKA_BROKER`: Kafka broker address
    /// - `KAFKA_GROUP_ID`: consumer group ID
    /// - `POST_EVENTS_TOPIC`: lifecycle event topic
    /// - `BIND_ADDR`: HTTP bind address
    pub fn from_env() -> Self {
        Self {
            opensearch_url: env::var("OPENSEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string()),
            index_name: env::var("SEARCH_INDEX_NAME")
                .unwrap_or_else(|_| DEFAULT_INDEX_NAME.to_string()),
            kafka_broker: env::var("KAFKA_BROKER")
                .unwrap_or_else(|_| DEFAULT_KAFKA_BROKER.to_string()),
            kafka_group_id: env::var("KAFKA_GROUP_ID")
                .unwrap_or_else(|_| DEFAULT_KAFKA_GROUP_ID.to_string()),
            kafka_topic: env::var("POST_EVENTS_TOPIC")
                .unwrap_or_else(|_| DEFAULT_KAFKA_TOPIC.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opensearch_url: DEFAULT_OPENSEARCH_URL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            kafka_broker: DEFAULT_KAFKA_BROKER.to_string(),
            kafka_group_id: DEFAULT_KAFKA_GROUP_ID.to_string(),
            kafka_topic: DEFAULT_KAFKA_TOPIC.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}
