//! # Search Service Pipeline
//!
//! This crate provides the pipeline components for consuming post lifecycle
//! events from Kafka and keeping the search index synchronized.
//!
//! ## Architecture
//!
//! 1. **Consumer**: receives lifecycle events from Kafka, decodes and
//!    validates each message, and dispatches by event kind.
//! 2. **Indexer**: performs idempotent upsert and delete of single documents
//!    against the search store, with bounded retry on transient failures.
//!
//! Delivery is at-least-once: a message may be redelivered after a crash, so
//! every index write is idempotent (replaying a Created event re-applies the
//! same final state).

pub mod consumer;
pub mod errors;
pub mod indexer;

pub use consumer::KafkaConsumer;
pub use errors::PipelineError;
pub use indexer::{IndexerConfig, PostIndexer};
