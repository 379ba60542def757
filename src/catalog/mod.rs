//! Product catalog domain subsystem.
//!
//! # Data Flow
//! ```text
//! Mutating request body
//!     → product.rs (ProductPayload, untrusted shape)
//!     → validation.rs (structural rules, all violations collected)
//!     → store.rs (id assignment, timestamps, insertion)
//! ```
//!
//! # Design Decisions
//! - Validation is a pure function over the payload; the store never validates
//! - The store owns the collection and the id counter; callers get clones only
//! - Ids are monotonic and never reused within a store's lifetime

pub mod product;
pub mod store;
pub mod validation;

pub use product::{Product, ProductPayload};
pub use store::{ProductStore, StoreError};
pub use validation::{validate, ValidationResult, Violation};
