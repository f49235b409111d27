//! HTTP error responses.
//!
//! Every error body carries the correlation id of the request that produced
//! it, so query-side failures are always traceable. Internal error detail is
//! never leaked to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use search_service_shared::CorrelationId;

/// JSON error body: `{ "message": ..., "correlationId": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "correlationId")]
    pub correlation_id: String,
}

/// An error that renders as an HTTP status plus an `ErrorBody`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    correlation_id: CorrelationId,
}

impl ApiError {
    /// 400 Bad Request with a caller-facing validation message.
    pub fn bad_request(message: impl Into<String>, correlation_id: CorrelationId) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            correlation_id,
        }
    }

    /// 500 Internal Server Error with a generic message; the underlying
    /// cause stays in the logs.
    pub fn internal(correlation_id: CorrelationId) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
            correlation_id,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message,
            correlation_id: self.correlation_id.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            message: "Missing required query parameter \"q\"".to_string(),
            correlation_id: "corr-1".to_string(),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"], "Missing required query parameter \"q\"");
        assert_eq!(value["correlationId"], "corr-1");
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = ApiError::internal(CorrelationId::from_value("corr-2"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }
}
