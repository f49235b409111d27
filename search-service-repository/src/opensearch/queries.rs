//! OpenSearch query builders.
//!
//! This module builds the ranked full-text query executed against the post
//! index.

use serde_json::{json, Value};

/// Build the search request body for a free-text query.
///
/// A `multi_match` over `title` and `body` with title matches weighted 2x,
/// and automatic fuzziness so near-miss spellings still surface relevant
/// results. Ordering is the store's relevance ranking (descending score).
pub fn build_search_query(query: &str) -> Value {
    json!({
        "query": {
            "multi_match": {
                "query": query,
                "fields": ["title^2", "body"],
                "fuzziness": "AUTO"
            }
        }
    })
}
