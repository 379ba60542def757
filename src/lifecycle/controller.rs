//! Server lifecycle state machine.
//!
//! # Responsibilities
//! - Own listener, config, and the current phase
//! - Run serving on a background task while watching for termination
//! - Drive the bounded-deadline drain on shutdown
//!
//! # Design Decisions
//! - Phases are published on a watch channel so supervisors and tests can
//!   observe transitions
//! - Exactly one termination trigger matters per process lifetime
//! - Deadline expiry abandons remaining work; the process still exits cleanly

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::catalog::store::ProductStore;
use crate::config::ServiceConfig;
use crate::http::build_app;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals;

/// Phases of the server lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerPhase {
    /// Constructed, not yet started.
    Idle,
    /// Binding the listener.
    Starting,
    /// Accepting and serving requests.
    Listening,
    /// Termination received; finishing in-flight work under the deadline.
    Draining,
    /// Terminal.
    Stopped,
}

/// Fatal lifecycle failures. Both terminate the process with a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed while listening: {0}")]
    Serve(std::io::Error),
}

/// Supervisor owning the listening socket, timeouts, and the
/// startup/shutdown state machine.
pub struct ServerLifecycle {
    config: ServiceConfig,
    app: Router,
    shutdown: Shutdown,
    phase_tx: watch::Sender<ServerPhase>,
}

impl ServerLifecycle {
    /// Build the router and fix the configuration for this process lifetime.
    pub fn new(config: ServiceConfig, store: Arc<ProductStore>) -> Self {
        let app = build_app(&config, store);
        let (phase_tx, _) = watch::channel(ServerPhase::Idle);
        Self {
            config,
            app,
            shutdown: Shutdown::new(),
            phase_tx,
        }
    }

    /// Observe phase transitions.
    pub fn phases(&self) -> watch::Receiver<ServerPhase> {
        self.phase_tx.subscribe()
    }

    /// Trigger handle equivalent to receiving a termination signal.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Run the state machine to completion.
    ///
    /// Returns once the server has stopped: `Ok` after a shutdown-initiated
    /// drain (clean or deadline-forced), `Err` on a bind or serve fault.
    pub async fn run(self) -> Result<(), LifecycleError> {
        let Self {
            config,
            app,
            shutdown,
            phase_tx,
        } = self;

        let set_phase = |phase: ServerPhase| {
            tracing::debug!(?phase, "Lifecycle phase");
            phase_tx.send_replace(phase);
        };

        set_phase(ServerPhase::Starting);

        let bind_address = config.listener.bind_address.clone();
        let listener = match TcpListener::bind(&bind_address).await {
            Ok(listener) => listener,
            Err(source) => {
                set_phase(ServerPhase::Stopped);
                return Err(LifecycleError::Bind {
                    addr: bind_address,
                    source,
                });
            }
        };

        tracing::info!(
            address = %bind_address,
            read_timeout_secs = config.timeouts.read_secs,
            write_timeout_secs = config.timeouts.write_secs,
            idle_timeout_secs = config.timeouts.idle_secs,
            drain_deadline_secs = config.shutdown.drain_deadline_secs,
            "Server listening"
        );
        set_phase(ServerPhase::Listening);

        // Serving runs on its own task; the controller stays free to watch
        // for termination.
        let mut drain = shutdown.listen();
        let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
            drain.triggered().await;
        });
        let mut serve_task = tokio::spawn(async move { serve.await });

        // OS signals feed the same trigger as the programmatic handle.
        let signal_task = tokio::spawn({
            let shutdown = shutdown.clone();
            async move {
                signals::terminated().await;
                tracing::info!("Termination signal received, shutting down gracefully");
                shutdown.trigger();
            }
        });

        let mut triggered = shutdown.listen();
        let result = tokio::select! {
            res = &mut serve_task => {
                // Serve ended without a shutdown trigger: runtime fault.
                match res {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(err)) => Err(LifecycleError::Serve(err)),
                    Err(join_err) => Err(LifecycleError::Serve(std::io::Error::other(join_err))),
                }
            }
            _ = triggered.triggered() => {
                set_phase(ServerPhase::Draining);
                let deadline = Duration::from_secs(config.shutdown.drain_deadline_secs);
                tracing::info!(deadline_secs = deadline.as_secs(), "Draining in-flight requests");

                match tokio::time::timeout(deadline, &mut serve_task).await {
                    Ok(Ok(Ok(()))) => tracing::info!("Drain complete"),
                    Ok(Ok(Err(err))) => tracing::warn!(error = %err, "Server error during drain"),
                    Ok(Err(join_err)) => tracing::warn!(error = %join_err, "Serve task failed during drain"),
                    Err(_) => {
                        tracing::warn!("Drain deadline exceeded, abandoning in-flight requests");
                        serve_task.abort();
                    }
                }
                Ok(())
            }
        };

        signal_task.abort();
        set_phase(ServerPhase::Stopped);
        result
    }
}
