//! Router construction and middleware wiring.
//!
//! # Responsibilities
//! - Partition routes by method, then path
//! - Attach the validation middleware to mutating routes only
//! - Wire global layers: request id, tracing, request deadline

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::catalog::store::ProductStore;
use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::middleware::{propagate_request_id, validate_product};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProductStore>,
}

/// Build the axum application.
///
/// GET routes dispatch straight to handlers; POST/PUT routes pass through the
/// validation middleware first. Unmatched paths and methods share one generic
/// not-found response, so a bad method never surfaces as 405.
pub fn build_app(config: &ServiceConfig, store: Arc<ProductStore>) -> Router {
    let state = AppState { store };

    let read_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/products/{id}", get(handlers::get_product));

    let mutating_routes = Router::new()
        .route("/products", post(handlers::create_product))
        .route("/products/{id}", put(handlers::update_product))
        .route_layer(middleware::from_fn(validate_product));

    // Per-request deadline covering body read and response write.
    let request_deadline =
        Duration::from_secs(config.timeouts.read_secs + config.timeouts.write_secs);

    Router::new()
        .merge(read_routes)
        .merge(mutating_routes)
        .fallback(handlers::route_fallback)
        .method_not_allowed_fallback(handlers::route_fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(propagate_request_id))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_deadline)),
        )
}
