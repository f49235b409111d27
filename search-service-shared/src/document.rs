//! The indexed post document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as stored in the search index.
///
/// `id` is the sole addressing key: indexing a document with an existing `id`
/// replaces the prior version in full (last-write-wins, no field merging).
/// Wire names are camelCase to match the upstream event payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    /// Unique post identifier, stable across updates.
    pub id: String,
    /// Identifier of the post's author.
    pub owner_id: String,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub body: String,
    /// Creation timestamp, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Popularity signal (e.g. like count), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_wire_names() {
        let doc: PostDocument = serde_json::from_value(json!({
            "id": "p1",
            "ownerId": "u1",
            "title": "Go concurrency",
            "body": "goroutines and channels",
            "popularityScore": 7
        }))
        .unwrap();

        assert_eq!(doc.id, "p1");
        assert_eq!(doc.owner_id, "u1");
        assert_eq!(doc.popularity_score, Some(7));
        assert!(doc.created_at.is_none());
    }

    #[test]
    fn serializes_without_absent_optionals() {
        let doc = PostDocument {
            id: "p1".to_string(),
            owner_id: "u1".to_string(),
            title: "Title".to_string(),
            body: "Body".to_string(),
            created_at: None,
            updated_at: None,
            popularity_score: None,
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["ownerId"], "u1");
        assert!(value.get("createdAt").is_none());
        assert!(value.get("popularityScore").is_none());
    }
}
