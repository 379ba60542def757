//! HTTP surface of the service.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (router dispatch: method first, then path)
//!     → middleware.rs (request id; payload validation on POST/PUT only)
//!     → handlers.rs (store calls, response serialization)
//!     → response.rs (JSON error shapes)
//! ```
//!
//! # Design Decisions
//! - Mutating routes carry the validation middleware; GET routes never do
//! - The middleware deserializes the body once and hands the payload to the
//!   handler through request extensions
//! - Unmatched path or method falls through to one generic not-found response

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use middleware::X_REQUEST_ID;
pub use server::{build_app, AppState};
