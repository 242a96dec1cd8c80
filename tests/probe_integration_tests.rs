// File: probe_integration_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

mod common;

use common::*;
use rreflect::dispatcher::Dispatcher;
use rreflect::error::ProbeError;
use rreflect::getstate::GetState;
use rreflect::prober::{ProbeOutcome, Prober};
use rreflect::report::{MemoryReport, OutputFormat};
use std::sync::Arc;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn prober() -> Prober {
    Prober::new(&test_config(1, 0)).unwrap()
}

#[tokio::test]
async fn test_reflected_parameter_is_detected() {
    let server = setup_mock_server().await;
    mount_reflecting(&server, "/a", "x").await;

    let outcome = prober()
        .probe(&format!("{}/a?x=1&y=2", server.uri()))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ProbeOutcome::Reflected(
            format!("{}/a?x={}&y={}", server.uri(), MARKER, MARKER)
                .parse()
                .unwrap()
        )
    );
}

#[tokio::test]
async fn test_non_reflecting_endpoint_is_clean() {
    let server = setup_mock_server().await;
    mount_static(&server, "/search", "<html>No results</html>").await;

    let outcome = prober()
        .probe(&format!("{}/search?q=rust", server.uri()))
        .await
        .unwrap();

    assert!(!outcome.is_reflected());
    assert_eq!(outcome.url().query(), Some("q=MARK123"));
}

#[tokio::test]
async fn test_request_sends_marker_for_every_parameter() {
    let server = setup_mock_server().await;
    mount_static(&server, "/multi", "ok").await;

    prober()
        .probe(&format!("{}/multi?b=2&a=1&a=3", server.uri()))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("a=MARK123&b=MARK123"));
}

#[tokio::test]
async fn test_no_params_with_marker_in_body_is_still_reported() {
    let server = setup_mock_server().await;
    mount_static(&server, "/static", "this page mentions MARK123 on its own").await;

    let outcome = prober()
        .probe(&format!("{}/static", server.uri()))
        .await
        .unwrap();

    assert!(outcome.is_reflected());
    assert_eq!(outcome.url().query(), None);
}

#[tokio::test]
async fn test_no_params_plain_body_is_clean() {
    let server = setup_mock_server().await;
    mount_static(&server, "/b", "plain page").await;

    let outcome = prober()
        .probe(&format!("{}/b", server.uri()))
        .await
        .unwrap();

    assert_eq!(outcome, ProbeOutcome::Clean(format!("{}/b", server.uri()).parse().unwrap()));
}

#[tokio::test]
async fn test_status_code_does_not_matter() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found: MARK123"))
        .mount(&server)
        .await;

    let outcome = prober()
        .probe(&format!("{}/missing?id=7", server.uri()))
        .await
        .unwrap();

    assert!(outcome.is_reflected());
}

#[tokio::test]
async fn test_match_is_case_sensitive() {
    let server = setup_mock_server().await;
    mount_static(&server, "/lower", "you searched for mark123").await;

    let outcome = prober()
        .probe(&format!("{}/lower?q=1", server.uri()))
        .await
        .unwrap();

    assert!(!outcome.is_reflected());
}

#[tokio::test]
async fn test_connection_failure_is_request_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = prober()
        .probe(&format!("http://127.0.0.1:{}/a?x=1", port))
        .await
        .unwrap_err();

    assert!(matches!(err, ProbeError::Request { .. }));
    assert_eq!(err.url(), format!("http://127.0.0.1:{}/a?x=MARK123", port));
}

#[tokio::test]
async fn test_truncated_body_is_body_error() {
    let addr = spawn_truncated_body_server().await;

    let err = prober()
        .probe(&format!("http://{}/a?x=1", addr))
        .await
        .unwrap_err();

    match err {
        ProbeError::Body { url, .. } => {
            assert_eq!(url, format!("http://{}/a?x=MARK123", addr));
        }
        other => panic!("expected a body read failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_truncated_body_still_completes_dispatch() {
    let addr = spawn_truncated_body_server().await;
    let sink = Arc::new(MemoryReport::new(OutputFormat::Json));
    let state = Arc::new(GetState::new());
    let dispatcher = Dispatcher::new(Arc::new(prober()), sink.clone(), Arc::clone(&state));

    let (tx, rx) = mpsc::channel(1);
    tx.send(format!("http://{}/a?x=1", addr)).await.unwrap();
    drop(tx);

    let summary = dispatcher.run(rx).await;

    assert_eq!(summary.dispatched, 1);
    assert_eq!(summary.completed, summary.dispatched);
    assert_eq!(state.failed(), 1);
    assert!(sink.lines().is_empty());
}
