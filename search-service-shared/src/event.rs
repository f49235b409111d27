//! Post lifecycle events consumed from the event stream.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::document::PostDocument;

/// A lifecycle event for a post, tagged by the `kind` field of the JSON
/// payload.
///
/// Upstream currently only produces `Created`; `Updated` and `Deleted` are
/// defined so that dispatch is exhaustive and compile-time checked once they
/// are emitted. Unrecognized kinds decode to `Unknown` and are ignored by the
/// consumer. A payload missing the `kind` tag, or missing `id`, fails
/// deserialization and never reaches the indexer.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum PostLifecycleEvent {
    /// A post was created. Carries the full document payload.
    Created {
        #[serde(flatten)]
        document: PostDocument,
        #[serde(default, rename = "eventTimestamp")]
        event_timestamp: Option<DateTime<Utc>>,
    },
    /// A post was updated. Carries the full replacement payload.
    Updated {
        #[serde(flatten)]
        document: PostDocument,
        #[serde(default, rename = "eventTimestamp")]
        event_timestamp: Option<DateTime<Utc>>,
    },
    /// A post was deleted.
    Deleted {
        id: String,
        #[serde(default, rename = "eventTimestamp")]
        event_timestamp: Option<DateTime<Utc>>,
    },
    /// Forward-compatible catch-all for kinds this service does not know.
    #[serde(other)]
    Unknown,
}

impl PostLifecycleEvent {
    /// The event kind as a static label, for logging.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Created { .. } => "Created",
            Self::Updated { .. } => "Updated",
            Self::Deleted { .. } => "Deleted",
            Self::Unknown => "Unknown",
        }
    }

    /// The post id this event addresses, if the kind carries one.
    pub fn post_id(&self) -> Option<&str> {
        match self {
            Self::Created { document, .. } | Self::Updated { document, .. } => Some(&document.id),
            Self::Deleted { id, .. } => Some(id),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_created_event_with_embedded_document() {
        let event: PostLifecycleEvent = serde_json::from_value(json!({
            "kind": "Created",
            "id": "p1",
            "ownerId": "u1",
            "title": "Go concurrency",
            "body": "goroutines and channels"
        }))
        .unwrap();

        match event {
            PostLifecycleEvent::Created { document, .. } => {
                assert_eq!(document.id, "p1");
                assert_eq!(document.owner_id, "u1");
                assert_eq!(document.title, "Go concurrency");
            }
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[test]
    fn decodes_deleted_event_with_id_only() {
        let event: PostLifecycleEvent = serde_json::from_value(json!({
            "kind": "Deleted",
            "id": "p2",
            "eventTimestamp": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(event.kind_label(), "Deleted");
        assert_eq!(event.post_id(), Some("p2"));
    }

    #[test]
    fn unrecognized_kind_decodes_to_unknown() {
        let event: PostLifecycleEvent = serde_json::from_value(json!({
            "kind": "Archived",
            "id": "p3"
        }))
        .unwrap();

        assert!(matches!(event, PostLifecycleEvent::Unknown));
        assert!(event.post_id().is_none());
    }

    #[test]
    fn missing_kind_tag_is_rejected() {
        let result: Result<PostLifecycleEvent, _> = serde_json::from_value(json!({
            "id": "p1",
            "ownerId": "u1",
            "title": "t",
            "body": "b"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn created_event_missing_id_is_rejected() {
        let result: Result<PostLifecycleEvent, _> = serde_json::from_value(json!({
            "kind": "Created",
            "ownerId": "u1",
            "title": "t",
            "body": "b"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn deleted_event_missing_id_is_rejected() {
        let result: Result<PostLifecycleEvent, _> = serde_json::from_value(json!({
            "kind": "Deleted"
        }));
        assert!(result.is_err());
    }
}
