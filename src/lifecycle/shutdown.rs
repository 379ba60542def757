//! Shutdown coordination.

use std::sync::Arc;

use tokio::sync::watch;

/// One-shot termination trigger shared between the signal watcher, the
/// lifecycle controller, and tests.
///
/// Triggering is idempotent: the first call flips the state, later calls are
/// no-ops.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    /// Create an untriggered shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Trigger shutdown. Safe to call more than once.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Whether shutdown has been triggered.
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Create a listener resolving when shutdown is triggered.
    pub fn listen(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Awaitable side of [`Shutdown`].
#[derive(Debug)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Resolve once shutdown has been triggered.
    ///
    /// Resolves immediately if the trigger already fired.
    pub async fn triggered(&mut self) {
        // A closed channel means the coordinator is gone; treat as triggered.
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}
