//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file (optional)
//!     → loader.rs (read, parse)
//!     → validation.rs (semantic checks, all errors collected)
//!     → schema.rs types, fixed for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Every section has defaults; the service runs with no config file at all
//! - Configuration is immutable after startup, no runtime reload
//! - Validation runs before the config is accepted into the system

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, ServiceConfig, ShutdownConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
