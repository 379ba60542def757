//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (controller.rs):
//!     Idle → Starting (bind) → Listening (serve on background task)
//!
//! Shutdown (shutdown.rs + signals.rs):
//!     SIGINT/SIGTERM or programmatic trigger
//!         → Draining (stop accepting, finish in-flight, bounded deadline)
//!         → Stopped
//! ```
//!
//! # Design Decisions
//! - Serving runs on its own task so the controller stays free to observe the
//!   termination trigger
//! - Bind or serve failure outside of shutdown is fatal
//! - A drain past the deadline is logged, not an error; the exit stays clean

pub mod controller;
pub mod shutdown;
pub mod signals;

pub use controller::{LifecycleError, ServerLifecycle, ServerPhase};
pub use shutdown::{Shutdown, ShutdownListener};
