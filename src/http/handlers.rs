//! Product resource handlers.
//!
//! # Responsibilities
//! - Bind HTTP verb + path to store operations
//! - Serialize store results as JSON responses
//! - Map store NotFound to a 404 error body
//!
//! # Design Decisions
//! - Id segments are digits-only; anything else gets the generic not-found
//!   response and never reaches the store
//! - Mutating handlers read the payload from request extensions, placed there
//!   by the validation middleware

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::catalog::product::{Product, ProductPayload};
use crate::catalog::store::StoreError;
use crate::http::response::{generic_not_found, json_error};
use crate::http::server::AppState;

/// GET `/products` — the full collection, ascending by id.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.list_all())
}

/// GET `/products/{id}`.
pub async fn get_product(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return generic_not_found();
    };

    match state.store.get(id) {
        Ok(product) => Json(product).into_response(),
        Err(StoreError::NotFound) => {
            tracing::debug!(id, "Product not found");
            json_error(StatusCode::NOT_FOUND, "product not found")
        }
    }
}

/// POST `/products` — reachable only through the validation middleware.
pub async fn create_product(
    State(state): State<AppState>,
    Extension(payload): Extension<ProductPayload>,
) -> Response {
    let product = state.store.create(payload);
    tracing::info!(id = product.id, sku = %product.sku, "Product created");
    (StatusCode::CREATED, Json(product)).into_response()
}

/// PUT `/products/{id}` — reachable only through the validation middleware.
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Extension(payload): Extension<ProductPayload>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return generic_not_found();
    };

    match state.store.update(id, payload) {
        Ok(product) => {
            tracing::info!(id, "Product updated");
            Json(product).into_response()
        }
        Err(StoreError::NotFound) => {
            tracing::debug!(id, "Product not found for update");
            json_error(StatusCode::NOT_FOUND, "product not found")
        }
    }
}

/// Fallback for unmatched paths and methods.
pub async fn route_fallback() -> Response {
    generic_not_found()
}

/// Parse a digits-only id segment.
///
/// Stricter than `u64::from_str`, which accepts a leading `+`.
pub(crate) fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_digits_only() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("007"), Some(7));
        assert_eq!(parse_id("18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn parse_id_rejects_non_numeric_segments() {
        for raw in ["", "abc", "1a", "+1", "-1", "1.5", " 1", "99999999999999999999999"] {
            assert_eq!(parse_id(raw), None, "{:?} should not parse", raw);
        }
    }
}
