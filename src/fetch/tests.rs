// Fetch module tests.

use std::net::TcpListener;
use std::time::Duration;

use super::redirects::same_target;
use super::resolve;
use crate::error_handling::ResolveError;
use crate::models::Termination;

#[test]
fn test_same_target_exact_match() {
    assert!(same_target("http://a.test/path", "http://a.test/path"));
}

#[test]
fn test_same_target_ignores_root_trailing_slash() {
    assert!(same_target("http://a.test", "http://a.test/"));
    assert!(same_target("HTTP://A.TEST/", "http://a.test"));
}

#[test]
fn test_same_target_distinguishes_paths() {
    assert!(!same_target("http://a.test/x", "http://a.test/y"));
    assert!(!same_target("http://a.test/x", "http://a.test/x/"));
}

#[test]
fn test_same_target_unparseable_falls_back_to_text() {
    assert!(same_target("not a url", "not a url"));
    assert!(!same_target("not a url", "http://a.test"));
}

/// Reserves a local port and releases it, so connecting to it is refused.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_resolve_connection_refused_yields_empty_trail() {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(2))
        .build()
        .expect("Failed to build client");

    let resolution = resolve(&client, &closed_port_url(), 10).await;

    assert!(resolution.trail.is_empty());
    assert!(matches!(
        resolution.termination,
        Termination::NoResponse(ResolveError::Connect(_))
    ));
}

#[tokio::test]
async fn test_resolve_zero_hop_budget_never_sends() {
    let client = reqwest::Client::new();

    let resolution = resolve(&client, &closed_port_url(), 0).await;

    assert_eq!(resolution.trail.len(), 1);
    assert!(matches!(
        resolution.termination,
        Termination::Interrupted(ResolveError::TooManyHops(0))
    ));
}
