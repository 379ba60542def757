//! Startup and shutdown behavior of the server lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use product_service::config::ServiceConfig;
use product_service::lifecycle::{LifecycleError, ServerPhase};
use product_service::{ProductStore, ServerLifecycle};

mod common;

#[tokio::test]
async fn phases_progress_to_stopped_on_shutdown() {
    let mut svc = common::start_service(common::service_config("127.0.0.1:29281")).await;

    svc.shutdown.trigger();
    common::wait_for_phase(&mut svc.phases, ServerPhase::Stopped).await;

    svc.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn bind_conflict_is_a_fatal_startup_error() {
    let addr = "127.0.0.1:29282";
    let _occupied = tokio::net::TcpListener::bind(addr).await.unwrap();

    let lifecycle =
        ServerLifecycle::new(common::service_config(addr), Arc::new(ProductStore::new()));
    let mut phases = lifecycle.phases();

    let err = lifecycle.run().await.unwrap_err();
    assert!(matches!(err, LifecycleError::Bind { .. }));
    assert_eq!(*phases.borrow_and_update(), ServerPhase::Stopped);
}

#[tokio::test]
async fn invalid_bind_address_is_a_fatal_startup_error() {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "256.0.0.1:1".to_string();

    let lifecycle = ServerLifecycle::new(config, Arc::new(ProductStore::new()));
    let err = lifecycle.run().await.unwrap_err();
    assert!(matches!(err, LifecycleError::Bind { .. }));
}

#[tokio::test]
async fn in_flight_request_completes_during_drain() {
    let addr = "127.0.0.1:29283";
    let mut svc = common::start_service(common::service_config(addr)).await;

    // Raw connection so the request is observably in flight when the
    // termination trigger fires.
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /products HTTP/1.1\r\nHost: 127.0.0.1\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    // Give the server a moment to accept the connection before terminating.
    tokio::time::sleep(Duration::from_millis(100)).await;
    svc.shutdown.trigger();

    let mut response = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut response))
        .await
        .expect("response should arrive before the drain deadline")
        .unwrap();
    let response = String::from_utf8_lossy(&response);
    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(response.ends_with("[]"), "got: {response}");

    common::wait_for_phase(&mut svc.phases, ServerPhase::Stopped).await;
    svc.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn shutdown_handle_is_idempotent() {
    let mut svc = common::start_service(common::service_config("127.0.0.1:29284")).await;

    svc.shutdown.trigger();
    svc.shutdown.trigger();
    svc.shutdown.trigger();

    common::wait_for_phase(&mut svc.phases, ServerPhase::Stopped).await;
    svc.handle.await.unwrap().unwrap();
}
