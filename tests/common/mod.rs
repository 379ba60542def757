//! Shared helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use product_service::config::ServiceConfig;
use product_service::lifecycle::{LifecycleError, ServerPhase, Shutdown};
use product_service::{ProductStore, ServerLifecycle};

/// A running service instance plus the handles tests need to observe it.
pub struct TestService {
    pub base_url: String,
    pub shutdown: Shutdown,
    pub phases: watch::Receiver<ServerPhase>,
    pub handle: JoinHandle<Result<(), LifecycleError>>,
}

/// Default config on the given address, with test-friendly deadlines.
pub fn service_config(bind: &str) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = bind.to_string();
    // Generous request deadline so test clients are never cut off.
    config.timeouts.read_secs = 5;
    config.timeouts.write_secs = 5;
    config.shutdown.drain_deadline_secs = 10;
    config
}

/// Start a fresh service and wait until it is listening.
pub async fn start_service(config: ServiceConfig) -> TestService {
    let base_url = format!("http://{}", config.listener.bind_address);

    let lifecycle = ServerLifecycle::new(config, Arc::new(ProductStore::new()));
    let shutdown = lifecycle.shutdown_handle();
    let mut phases = lifecycle.phases();
    let handle = tokio::spawn(lifecycle.run());

    wait_for_phase(&mut phases, ServerPhase::Listening).await;

    TestService {
        base_url,
        shutdown,
        phases,
        handle,
    }
}

/// Block until the lifecycle reports the wanted phase.
pub async fn wait_for_phase(phases: &mut watch::Receiver<ServerPhase>, want: ServerPhase) {
    tokio::time::timeout(Duration::from_secs(5), phases.wait_for(|phase| *phase == want))
        .await
        .expect("timed out waiting for lifecycle phase")
        .expect("lifecycle dropped before reaching phase");
}

/// HTTP client that never routes through a local proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build test client")
}
