//! # Search Service API
//!
//! HTTP query surface for the post search service: a public `GET /search`
//! endpoint backed by the search store, plus a health check. Every request
//! carries a correlation id (propagated from the `x-correlation-id` header
//! or generated) that is echoed on the response and attached to every log
//! line and error body.

pub mod correlation;
pub mod error;
pub mod server;
pub mod service;

pub use server::{router, ApiState};
pub use service::SearchService;
