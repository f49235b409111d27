//! Kafka consumer implementation for the post search service.
//!
//! Consumes post lifecycle events from Kafka and dispatches them to the
//! document indexer. Offsets are committed after processing completes, so
//! delivery is at-least-once and index writes must be idempotent.

use rdkafka::{
    config::ClientConfig,
    consumer::{CommitMode, Consumer, StreamConsumer},
    message::{BorrowedMessage, Headers, Message as KafkaMessage},
    Offset, TopicPartitionList,
};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use crate::consumer::dispatch::{decode_event, dispatch_event};
use crate::errors::PipelineError;
use crate::indexer::PostIndexer;
use search_service_shared::{CorrelationId, CORRELATION_HEADER};

/// Kafka consumer for post lifecycle events.
///
/// Messages within one partition are processed inline, strictly in receipt
/// order; ordering across partitions is not guaranteed.
pub struct KafkaConsumer {
    consumer: StreamConsumer,
    topic: String,
}

impl KafkaConsumer {
    /// Create a new Kafka consumer.
    ///
    /// # Arguments
    ///
    /// * `brokers` - Kafka broker addresses (comma-separated)
    /// * `group_id` - Consumer group ID
    /// * `topic` - The lifecycle event topic to consume
    pub fn new(brokers: &str, group_id: &str, topic: &str) -> Result<Self, PipelineError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.auto.commit", "false")
            .set("auto.offset.reset", "earliest")
            .set("session.timeout.ms", "6000")
            .create()
            .map_err(|e| PipelineError::kafka(e.to_string()))?;

        info!(brokers = %brokers, group_id = %group_id, topic = %topic, "Created Kafka consumer");

        Ok(Self {
            consumer,
            topic: topic.to_string(),
        })
    }

    /// Subscribe to the lifecycle event topic. Failure here is fatal to
    /// startup.
    pub fn subscribe(&self) -> Result<(), PipelineError> {
        self.consumer
            .subscribe(&[&self.topic])
            .map_err(|e| PipelineError::kafka(e.to_string()))?;

        info!(topic = %self.topic, "Subscribed to Kafka topic");
        Ok(())
    }

    /// Consume messages until the stream ends or a shutdown signal arrives.
    ///
    /// A malformed or failed message never terminates the loop; it is logged
    /// and dropped, and its offset committed, so consumption continues. On
    /// shutdown the in-flight message finishes before the loop exits.
    pub async fn run(
        &self,
        indexer: &PostIndexer,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), PipelineError> {
        use futures::StreamExt;

        let mut message_stream = self.consumer.stream();

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("Consumer received shutdown signal, draining");
                    break;
                }
                message = message_stream.next() => {
                    match message {
                        Some(Ok(msg)) => {
                            self.process_message(&msg, indexer).await;
                        }
                        Some(Err(e)) => {
                            error!(error = %e, "Kafka error");
                        }
                        None => {
                            info!("Kafka stream ended");
                            break;
                        }
                    }
                }
            }
        }

        info!("Consumer stopped");
        Ok(())
    }

    /// Process a single Kafka message: decode, validate, dispatch, commit.
    async fn process_message(&self, msg: &BorrowedMessage<'_>, indexer: &PostIndexer) {
        let correlation_id = correlation_from_headers(msg);
        let topic = msg.topic();
        let partition = msg.partition();
        let offset = msg.offset();

        match msg.payload() {
            None => {
                warn!(
                    correlation_id = %correlation_id,
                    topic = %topic,
                    partition = partition,
                    offset = offset,
                    "Received message with no payload"
                );
            }
            Some(payload) => match decode_event(payload) {
                Err(e) => {
                    warn!(
                        correlation_id = %correlation_id,
                        topic = %topic,
                        partition = partition,
                        offset = offset,
                        error = %e,
                        "Dropping malformed lifecycle event"
                    );
                }
                Ok(event) => {
                    let kind = event.kind_label();
                    if let Err(e) = dispatch_event(event, indexer, &correlation_id).await {
                        // The event is dropped; at-least-once redelivery only
                        // happens if the process dies before the commit below.
                        error!(
                            correlation_id = %correlation_id,
                            topic = %topic,
                            partition = partition,
                            offset = offset,
                            kind = %kind,
                            error = %e,
                            "Lifecycle event dropped"
                        );
                    }
                }
            },
        }

        // Commit after processing: the event is either applied or
        // deliberately dropped, never silently skipped.
        let mut tpl = TopicPartitionList::new();
        if let Err(e) = tpl.add_partition_offset(topic, partition, Offset::Offset(offset + 1)) {
            error!(error = %e, "Failed to build commit list");
            return;
        }
        if let Err(e) = self.consumer.commit(&tpl, CommitMode::Async) {
            error!(
                correlation_id = %correlation_id,
                topic = %topic,
                partition = partition,
                offset = offset,
                error = %e,
                "Failed to commit offset"
            );
        }
    }
}

/// Pull the correlation id from the message headers, or generate one.
fn correlation_from_headers(msg: &BorrowedMessage<'_>) -> CorrelationId {
    if let Some(headers) = msg.headers() {
        for header in headers.iter() {
            if header.key.eq_ignore_ascii_case(CORRELATION_HEADER) {
                if let Some(value) = header.value.and_then(|v| std::str::from_utf8(v).ok()) {
                    if !value.trim().is_empty() {
                        return CorrelationId::from_value(value);
                    }
                }
            }
        }
    }
    CorrelationId::new()
}
