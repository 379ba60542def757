//! Request-scoped middleware.
//!
//! # Responsibilities
//! - Attach a request id as early as possible and echo it on the response
//! - Gate mutating routes behind payload validation
//!
//! # Design Decisions
//! - The body is buffered and deserialized exactly once; the parsed payload
//!   travels to the handler via request extensions
//! - A non-numeric id segment falls through as not-found before the body is read
//! - A malformed body is rejected before the validator ever runs
//! - Validation failures short-circuit the chain with the full violation list

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::catalog::product::ProductPayload;
use crate::catalog::validation::validate;
use crate::http::handlers::parse_id;
use crate::http::response::{generic_not_found, json_error, validation_failed};

/// Header carrying the per-request correlation id.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Upper bound on buffered request bodies.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Ensure every request carries an `x-request-id` and echo it on the response.
pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    match HeaderValue::from_str(&id) {
        Ok(value) => {
            request.headers_mut().insert(&X_REQUEST_ID, value.clone());
            let mut response = next.run(request).await;
            response.headers_mut().insert(&X_REQUEST_ID, value);
            response
        }
        // Client sent a non-ASCII id; pass the request through untouched.
        Err(_) => next.run(request).await,
    }
}

/// Validation gate for POST/PUT product routes.
///
/// Deserializes the body once, runs the validator, and either short-circuits
/// with an error response or forwards the parsed payload to the handler.
pub async fn validate_product(request: Request, next: Next) -> Response {
    // The route pattern accepts any `{id}` segment; a non-numeric id falls
    // through like an unmatched route, before the body is read and before
    // the validator runs.
    if let Some(segment) = request.uri().path().strip_prefix("/products/") {
        if parse_id(segment).is_none() {
            return generic_not_found();
        }
    }

    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "Failed to read request body");
            return json_error(StatusCode::BAD_REQUEST, "unable to read request body");
        }
    };

    let payload: ProductPayload = match serde_json::from_slice(&bytes) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::debug!(error = %err, "Malformed product payload");
            return json_error(StatusCode::BAD_REQUEST, "malformed product payload");
        }
    };

    let result = validate(&payload);
    if !result.ok() {
        tracing::warn!(
            violations = result.violations().len(),
            "Rejecting product payload"
        );
        return validation_failed(result.into_violations());
    }

    let mut request = Request::from_parts(parts, Body::empty());
    request.extensions_mut().insert(payload);
    next.run(request).await
}
