//! Consumer module for the search service pipeline.
//!
//! Provides Kafka consumer functionality for receiving post lifecycle
//! events, plus the decode/dispatch logic applied to each message.

mod dispatch;
mod kafka_consumer;

pub use dispatch::{decode_event, dispatch_event};
pub use kafka_consumer::KafkaConsumer;
