//! OpenSearch index configuration and mappings.
//!
//! This module defines the settings and field mappings for the post search
//! index.

use serde_json::{json, Value};

/// Default name of the post search index.
pub const DEFAULT_INDEX_NAME: &str = "posts";

/// Get the index settings and mappings for the post search index.
///
/// - **Keyword fields** for `id` and `ownerId`: exact-match addressing only.
/// - **Analyzed text fields** with the `english` analyzer for `title` and
///   `body`: these are the full-text search surface.
/// - **Date fields** for the two timestamps, **integer** for the popularity
///   signal.
pub fn index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "id": {
                    "type": "keyword"
                },
                "ownerId": {
                    "type": "keyword"
                },
                "title": {
                    "type": "text",
                    "analyzer": "english"
                },
                "body": {
                    "type": "text",
                    "analyzer": "english"
                },
                "createdAt": {
                    "type": "date"
                },
                "updatedAt": {
                    "type": "date"
                },
                "popularityScore": {
                    "type": "integer"
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_settings_structure() {
        let settings = index_settings();

        assert!(settings["settings"]["number_of_shards"].is_number());
        assert!(settings["settings"]["number_of_replicas"].is_number());

        let props = &settings["mappings"]["properties"];
        assert_eq!(props["id"]["type"], "keyword");
        assert_eq!(props["ownerId"]["type"], "keyword");
        assert_eq!(props["title"]["type"], "text");
        assert_eq!(props["title"]["analyzer"], "english");
        assert_eq!(props["body"]["type"], "text");
        assert_eq!(props["body"]["analyzer"], "english");
        assert_eq!(props["createdAt"]["type"], "date");
        assert_eq!(props["updatedAt"]["type"], "date");
        assert_eq!(props["popularityScore"]["type"], "integer");
    }

    #[test]
    fn test_default_index_name() {
        assert_eq!(DEFAULT_INDEX_NAME, "posts");
    }
}
