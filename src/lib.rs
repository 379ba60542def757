//! Product Catalog Microservice
//!
//! A small HTTP/JSON service exposing a product resource with
//! create/read/update operations over an in-memory store.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request ──▶ http/server (axum router + layers)
//!                            │
//!              POST/PUT ─────┼───── GET
//!                   │        │
//!                   ▼        │
//!          http/middleware   │
//!          (validate body)   │
//!                   │        │
//!                   ▼        ▼
//!                  http/handlers
//!                        │
//!                        ▼
//!                  catalog/store   (catalog/validation runs in middleware)
//!
//!     OS signal ──▶ lifecycle/controller ──▶ drain ──▶ exit
//! ```

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;

pub use catalog::store::ProductStore;
pub use config::ServiceConfig;
pub use lifecycle::{ServerLifecycle, ServerPhase, Shutdown};
