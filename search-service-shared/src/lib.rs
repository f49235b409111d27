//! # Search Service Shared
//!
//! Shared domain types for the post search service: the indexed document
//! model, the post lifecycle event union, and the correlation id that is
//! threaded through every unit of work.

pub mod correlation;
pub mod document;
pub mod event;

pub use correlation::{CorrelationId, CORRELATION_HEADER};
pub use document::PostDocument;
pub use event::PostLifecycleEvent;
