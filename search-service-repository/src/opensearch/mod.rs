//! OpenSearch implementation of the search store.

mod client;
pub mod index_config;
pub mod queries;

pub use client::OpenSearchStore;
pub use index_config::DEFAULT_INDEX_NAME;
