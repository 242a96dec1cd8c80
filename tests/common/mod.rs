// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use rreflect::config::ConfigParameter;
use rreflect::pipeline::{Pipeline, RunReport};
use rreflect::prober::Prober;
use rreflect::report::{MemoryReport, OutputFormat};
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MARKER: &str = "MARK123";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Answers `GET {route}?{key}={MARKER}` with a page echoing the marker.
pub async fn mount_reflecting(server: &MockServer, route: &str, key: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param(key, MARKER))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html><body>You searched for {}</body></html>", MARKER))
                .append_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

pub async fn mount_static(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Starts a server that announces a 1000 byte body, sends a few bytes and
/// hangs up, for every connection it accepts.
pub async fn spawn_truncated_body_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 2048];
                let _ = socket.read(&mut request).await;
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\nshort")
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });
    addr
}

pub fn write_url_file(lines: &[String]) -> (TempDir, PathBuf) {
    write_raw_file(lines.join("\n").as_bytes())
}

pub fn write_raw_file(bytes: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("urls.txt");
    let mut file = std::fs::File::create(&file_path).unwrap();
    file.write_all(bytes).unwrap();
    (temp_dir, file_path)
}

pub fn test_config(rate: usize, delay: u64) -> ConfigParameter {
    ConfigParameter::new(rate, delay, MARKER)
        .unwrap()
        .with_format(OutputFormat::Json)
        .with_color(false)
}

pub async fn run_file(config: ConfigParameter, file_path: &PathBuf) -> (RunReport, Vec<String>) {
    let sink = Arc::new(MemoryReport::new(config.format()));
    let prober = Prober::new(&config).unwrap();
    let pipeline = Pipeline::new(config, prober, sink.clone());

    let file = tokio::fs::File::open(file_path).await.unwrap();
    let report = pipeline.run(BufReader::new(file)).await;
    (report, sink.lines())
}

/// Extracts the `url` field from JSON report lines.
pub fn reported_urls(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["url"].as_str().unwrap().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_setup() {
        let server = setup_mock_server().await;
        assert!(!server.uri().is_empty());
    }

    #[test]
    fn test_write_url_file() {
        let (_dir, file_path) = write_url_file(&["http://a/".to_string(), "http://b/".to_string()]);
        let content = std::fs::read_to_string(file_path).unwrap();
        assert_eq!(content, "http://a/\nhttp://b/");
    }
}
