//! OS signal handling.
//!
//! # Responsibilities
//! - Register termination handlers (SIGINT, SIGTERM)
//! - Translate the first signal into the internal shutdown trigger
//!
//! # Design Decisions
//! - Uses Tokio's async-safe signal handling
//! - Signals after the first have no extra effect; the drain deadline already
//!   governs termination

/// Resolve when the process receives a termination signal.
///
/// On Unix this is SIGINT or SIGTERM; elsewhere, Ctrl+C only.
pub async fn terminated() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
