//! Correlation ids for tracing a unit of work.

use std::fmt;

use uuid::Uuid;

/// Header name carrying the correlation id, on both HTTP requests and Kafka
/// message headers. Lowercase so it can be used directly as an HTTP/2 header
/// name; matching against inbound headers is case-insensitive.
pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// An opaque identifier for one unit of work (one HTTP request or one
/// consumed message), threaded through every log line and downstream call.
///
/// It is either propagated from an inbound header or freshly generated, and
/// is never persisted with the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a fresh correlation id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Adopt a propagated correlation id from an inbound header.
    pub fn from_value(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_nonempty_and_distinct() {
        let a = CorrelationId::new();
        let b = CorrelationId::new();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn propagated_value_is_preserved() {
        let id = CorrelationId::from_value("corr-123");
        assert_eq!(id.as_str(), "corr-123");
        assert_eq!(id.to_string(), "corr-123");
    }
}
