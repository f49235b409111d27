//! HTTP server surface.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/search?q=<string>` | Ranked full-text post search |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! Errors render as `{ "message": ..., "correlationId": ... }`; the
//! correlation id is also echoed on the `x-correlation-id` response header.
//! CORS is permissive: this is a public, unauthenticated search API.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::correlation::propagate_correlation_id;
use crate::error::ApiError;
use crate::service::SearchService;
use search_service_shared::{CorrelationId, PostDocument};

/// Shared state passed to route handlers.
#[derive(Clone)]
pub struct ApiState {
    pub search: Arc<SearchService>,
}

/// Build the router with all routes, the correlation middleware, and CORS.
pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", get(handle_search))
        .route("/health", get(handle_health))
        .layer(middleware::from_fn(propagate_correlation_id))
        .layer(cors)
        .with_state(state)
}

/// Query string for `GET /search`.
#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Handler for `GET /search`.
///
/// Missing `q` is a 400 with the correlation id in the body. An empty or
/// whitespace `q` is valid and returns an empty array. Store failures
/// degrade to an empty array inside the service, so a 200 with `[]` is also
/// what a degraded read path looks like.
async fn handle_search(
    State(state): State<ApiState>,
    Extension(correlation_id): Extension<CorrelationId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PostDocument>>, ApiError> {
    let Some(query) = params.q else {
        warn!(correlation_id = %correlation_id, "Missing required query parameter \"q\"");
        return Err(ApiError::bad_request(
            "Missing required query parameter \"q\"",
            correlation_id,
        ));
    };

    info!(correlation_id = %correlation_id, query = %query, "Search requested");
    let posts = state.search.search(&query, &correlation_id).await;
    Ok(Json(posts))
}

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Handler for `GET /health`, for load balancers and monitoring.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use search_service_repository::{SearchError, SearchStore};
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct StubStore {
        search_calls: AtomicUsize,
    }

    impl StubStore {
        fn new() -> Self {
            Self {
                search_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SearchStore for StubStore {
        async fn ensure_index(&self) -> Result<(), SearchError> {
            Ok(())
        }

        async fn index_document(&self, _doc: &PostDocument) -> Result<(), SearchError> {
            Ok(())
        }

        async fn delete_document(&self, _id: &str) -> Result<(), SearchError> {
            Ok(())
        }

        async fn search(&self, _query: &str) -> Result<Vec<PostDocument>, SearchError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![PostDocument {
                id: "p1".to_string(),
                owner_id: "u1".to_string(),
                title: "Go concurrency".to_string(),
                body: "goroutines and channels".to_string(),
                created_at: None,
                updated_at: None,
                popularity_score: None,
            }])
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    fn test_router() -> (Arc<StubStore>, Router) {
        let store = Arc::new(StubStore::new());
        let state = ApiState {
            search: Arc::new(SearchService::new(store.clone())),
        };
        (store, router(state))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_documents() {
        let (_store, app) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?q=concurrency")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], "p1");
        assert_eq!(body[0]["ownerId"], "u1");
    }

    #[tokio::test]
    async fn test_missing_q_is_400_with_correlation_id() {
        let (_store, app) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search")
                    .header("x-correlation-id", "corr-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("x-correlation-id").unwrap(),
            "corr-1"
        );
        let body = body_json(response).await;
        assert_eq!(body["correlationId"], "corr-1");
        assert!(body["message"].as_str().unwrap().contains("q"));
    }

    #[tokio::test]
    async fn test_whitespace_query_returns_empty_without_store_call() {
        let (store, app) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?q=%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body.as_array().unwrap().is_empty());
        assert_eq!(store.search_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generated_correlation_id_is_echoed() {
        let (_store, app) = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?q=rust")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let header = response.headers().get("x-correlation-id").unwrap();
        assert!(!header.to_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let (_store, app) = test_router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
