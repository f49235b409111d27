//! Error types for the search service pipeline.

use thiserror::Error;

use search_service_repository::SearchError;

/// Errors that can occur in the event pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Kafka connection, subscription, or commit error.
    #[error("Kafka error: {0}")]
    KafkaError(String),

    /// A message payload could not be decoded as a lifecycle event.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// A decoded event failed validation.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The search store rejected an index write.
    #[error("Search store error: {0}")]
    StoreError(#[from] SearchError),
}

impl PipelineError {
    /// Create a Kafka error.
    pub fn kafka(msg: impl Into<String>) -> Self {
        Self::KafkaError(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
