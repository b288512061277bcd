//! Integration tests for the worker pool harness.
//!
//! These tests verify:
//! - One output line per non-blank input line
//! - The completion barrier (all lines written before `run_lines` returns)
//! - The pool size bounds how many cases are in flight

mod helpers;

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use helpers::{closed_port_url, mount_final, mount_redirect, test_client};
use redirect_check::{run_check, run_lines, Config, LogFormat, LogLevel, MemorySink};
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(workers: usize) -> Config {
    Config {
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        workers,
        queue_capacity: 2,
        timeout_seconds: 5,
        max_hops: 20,
        user_agent: "redirect_check_test/1.0".to_string(),
    }
}

#[tokio::test]
async fn test_every_line_produces_one_result() {
    let server = MockServer::start().await;
    let base = server.uri();
    for i in 0..12 {
        mount_redirect(&server, &format!("/src{i}"), 301, &format!("{base}/dst{i}")).await;
        mount_final(&server, &format!("/dst{i}"), 200).await;
    }

    let mut lines: Vec<String> = (0..12)
        .map(|i| format!("{base}/src{i},{base}/dst{i}"))
        .collect();
    lines.insert(3, String::new());
    lines.push("   ".to_string());

    let sink = Arc::new(MemorySink::new());
    let report = run_lines(
        "inline",
        &lines,
        &test_config(4),
        Arc::new(test_client(Duration::from_secs(5))),
        sink.clone(),
    )
    .await;

    assert_eq!(report.total, 12);
    assert_eq!(report.passed, 12);

    let output = sink.lines();
    assert_eq!(output.len(), 12);
    let sources: HashSet<String> = output
        .iter()
        .map(|line| line.split(',').next().unwrap_or_default().to_string())
        .collect();
    for i in 0..12 {
        assert!(sources.contains(&format!("{base}/src{i}")));
    }
    assert!(output.iter().all(|line| line.contains(",PASS ,")));
}

#[tokio::test]
async fn test_mixed_outcomes_are_counted() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_redirect(&server, "/a", 301, &format!("{base}/b")).await;
    mount_final(&server, "/b", 200).await;
    mount_redirect(&server, "/loop", 302, &format!("{base}/loop")).await;

    let lines = vec![
        format!("{base}/a,{base}/b"),
        format!("{base}/a,{base}/elsewhere"),
        format!("{base}/a"),
        format!("{base}/loop"),
        closed_port_url(),
    ];

    let sink = Arc::new(MemorySink::new());
    let report = run_lines(
        "mixed",
        &lines,
        &test_config(4),
        Arc::new(test_client(Duration::from_secs(5))),
        sink.clone(),
    )
    .await;

    assert_eq!(report.total, 5);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.traced, 1);
    assert_eq!(report.circular, 1);
    assert_eq!(report.no_response, 1);
    assert_eq!(sink.lines().len(), 5);
    assert!(sink
        .lines()
        .iter()
        .any(|line| line.ends_with(",FAIL,NO_RESPONSE")));
}

#[tokio::test]
async fn test_pool_size_bounds_parallelism() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/slow/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let lines: Vec<String> = (0..8).map(|i| format!("{}/slow/{i}", server.uri())).collect();

    let start = Instant::now();
    let sink = Arc::new(MemorySink::new());
    let report = run_lines(
        "slow",
        &lines,
        &test_config(4),
        Arc::new(test_client(Duration::from_secs(5))),
        sink.clone(),
    )
    .await;
    let elapsed = start.elapsed();

    assert_eq!(report.traced, 8);
    assert_eq!(sink.lines().len(), 8);
    // 8 cases over 4 workers need at least two rounds, but far less than eight
    assert!(elapsed >= Duration::from_millis(900), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(3), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_run_check_on_file() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_final(&server, "/ok", 200).await;

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{base}/ok,{base}/ok").expect("write");
    writeln!(file).expect("write");
    writeln!(file, "{base}/ok").expect("write");
    file.flush().expect("flush");

    let sink = Arc::new(MemorySink::new());
    let reports = run_check(file.path(), &test_config(2), sink.clone())
        .await
        .expect("run should succeed");

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].passed, 1);
    assert_eq!(reports[0].traced, 1);
    assert_eq!(sink.lines().len(), 2);
}

#[tokio::test]
async fn test_run_check_directory_runs_csv_before_txt() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_final(&server, "/ok", 200).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let nested = dir.path().join("nested");
    std::fs::create_dir_all(&nested).expect("mkdir");
    std::fs::write(dir.path().join("z.txt"), format!("{base}/ok?from=txt\n")).expect("write");
    std::fs::write(nested.join("a.csv"), format!("{base}/ok?from=csv\n")).expect("write");
    std::fs::write(dir.path().join("ignored.log"), format!("{base}/ok\n")).expect("write");

    let sink = Arc::new(MemorySink::new());
    let reports = run_check(dir.path(), &test_config(1), sink.clone())
        .await
        .expect("batch should succeed");

    assert_eq!(reports.len(), 2);
    assert!(reports[0].source.ends_with("a.csv"));
    assert!(reports[1].source.ends_with("z.txt"));

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("from=csv"));
    assert!(lines[1].contains("from=txt"));
}

#[tokio::test]
async fn test_run_check_missing_path_is_error() {
    let result = run_check(
        std::path::Path::new("/no/such/input.csv"),
        &test_config(4),
        Arc::new(MemorySink::new()),
    )
    .await;
    assert!(result.is_err());
}
