//! Correlation id extraction and propagation for HTTP requests.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use search_service_shared::{CorrelationId, CORRELATION_HEADER};

/// Read the correlation id from the inbound headers, or generate one.
pub fn correlation_from_headers(headers: &HeaderMap) -> CorrelationId {
    headers
        .get(CORRELATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(CorrelationId::from_value)
        .unwrap_or_default()
}

/// Middleware that resolves the request's correlation id, stores it in the
/// request extensions for handlers, and echoes it on the response header.
pub async fn propagate_correlation_id(mut request: Request, next: Next) -> Response {
    let correlation_id = correlation_from_headers(request.headers());
    request.extensions_mut().insert(correlation_id.clone());

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(correlation_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(CORRELATION_HEADER), value);
    }
    response
}
