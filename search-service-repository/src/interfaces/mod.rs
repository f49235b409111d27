//! Interface definitions for the search service repository.

mod search_store;

pub use search_store::SearchStore;
