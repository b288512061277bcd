// Shared test helpers for mock redirect servers and clients.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::TcpListener;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client configured like the one `run_check` builds, with a short timeout.
#[allow(dead_code)] // Used by other test files
pub fn test_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .build()
        .expect("Failed to build test client")
}

/// Mounts `GET from` answering `status` with `Location: to`.
#[allow(dead_code)] // Used by other test files
pub async fn mount_redirect(server: &MockServer, from: &str, status: u16, to: &str) {
    Mock::given(method("GET"))
        .and(path(from))
        .respond_with(ResponseTemplate::new(status).insert_header("Location", to))
        .mount(server)
        .await;
}

/// Mounts `GET at` answering `status` with a small body.
#[allow(dead_code)] // Used by other test files
pub async fn mount_final(server: &MockServer, at: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_string("final"))
        .mount(server)
        .await;
}

/// URL on a port nothing listens on, so connecting to it is refused.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    drop(listener);
    format!("http://{}", addr)
}
