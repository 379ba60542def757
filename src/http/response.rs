//! JSON error response shapes.
//!
//! # Responsibilities
//! - One body shape for generic errors, one for validation failures
//! - Violations are surfaced verbatim, in check order
//!
//! # Design Decisions
//! - Not-found for an unroutable request and not-found for an absent id share
//!   a status code but carry distinct messages

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::catalog::validation::Violation;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ValidationBody {
    error: &'static str,
    violations: Vec<Violation>,
}

/// A JSON error response with the given status and message.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// The response for requests that match no route (bad path, bad method, or a
/// non-numeric id segment).
pub fn generic_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "no matching route")
}

/// 422 response enumerating every field violation.
pub fn validation_failed(violations: Vec<Violation>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationBody {
            error: "validation failed",
            violations,
        }),
    )
        .into_response()
}
