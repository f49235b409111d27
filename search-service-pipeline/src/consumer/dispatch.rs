//! Lifecycle event decoding and dispatch.
//!
//! These functions contain the per-message semantics of the consumer,
//! separated from the Kafka plumbing so they can be exercised directly.

use tracing::info;

use crate::errors::PipelineError;
use crate::indexer::PostIndexer;
use search_service_shared::{CorrelationId, PostLifecycleEvent};

/// Decode a raw message payload as a JSON lifecycle event.
///
/// A payload missing the `kind` tag or the `id` field fails here, before any
/// store interaction.
pub fn decode_event(payload: &[u8]) -> Result<PostLifecycleEvent, PipelineError> {
    serde_json::from_slice(payload).map_err(|e| PipelineError::decode(e.to_string()))
}

/// Dispatch a decoded event by kind.
///
/// Created and Updated both upsert the embedded document (an update replaces
/// the prior version in full); Deleted removes by id; Unknown kinds are
/// logged at informational level and ignored so that new upstream kinds do
/// not break consumption.
pub async fn dispatch_event(
    event: PostLifecycleEvent,
    indexer: &PostIndexer,
    correlation_id: &CorrelationId,
) -> Result<(), PipelineError> {
    match event {
        PostLifecycleEvent::Created { document, .. }
        | PostLifecycleEvent::Updated { document, .. } => {
            if document.id.trim().is_empty() {
                return Err(PipelineError::validation("event document has an empty id"));
            }
            indexer.upsert(&document, correlation_id).await
        }
        PostLifecycleEvent::Deleted { id, .. } => {
            if id.trim().is_empty() {
                return Err(PipelineError::validation("delete event has an empty id"));
            }
            indexer.remove(&id, correlation_id).await
        }
        PostLifecycleEvent::Unknown => {
            info!(
                correlation_id = %correlation_id,
                "Ignoring lifecycle event of unknown kind"
            );
            Ok(())
        }
    }
}
