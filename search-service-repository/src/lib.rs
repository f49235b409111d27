//! # Search Service Repository
//!
//! This crate provides the trait and implementation for interacting with the
//! search index. It includes definitions for errors, the `SearchStore`
//! interface, and a concrete implementation for OpenSearch.

pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use errors::SearchError;
pub use interfaces::SearchStore;
pub use opensearch::OpenSearchStore;
