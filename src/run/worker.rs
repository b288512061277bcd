//! Per-case processing and the worker loop.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc::Receiver;
use tokio::sync::Mutex;

use super::sink::OutputSink;
use crate::classify::classify;
use crate::error_handling::{FailureKind, ResolveError, VerdictStats};
use crate::fetch::resolve;
use crate::format::{format_result_line, format_trail};
use crate::models::{Classification, Resolution, Termination, TestCase, TestResult};

/// Shared state every worker reads from.
pub struct WorkerContext {
    pub client: Arc<reqwest::Client>,
    pub sink: Arc<dyn OutputSink>,
    pub stats: Arc<VerdictStats>,
    pub max_hops: usize,
}

/// Resolves and classifies a single test case.
///
/// Also returns the kind of network failure that ended resolution, if any.
pub async fn check_case(
    client: &reqwest::Client,
    case: &TestCase,
    max_hops: usize,
) -> (TestResult, Option<FailureKind>) {
    let resolution = resolve(client, &case.source_url, max_hops).await;
    let failure = termination_error(&resolution).map(ResolveError::kind);
    let classification = classify(&resolution, case.expected_url.as_deref());
    (build_result(case, &resolution, classification), failure)
}

fn build_result(
    case: &TestCase,
    resolution: &Resolution,
    classification: Classification,
) -> TestResult {
    TestResult {
        source_url: case.source_url.clone(),
        expected_url: case.expected_url.clone(),
        verdict: classification.verdict,
        flags: classification.flags,
        resolved_url: classification.resolved_url,
        trail_text: format_trail(&resolution.trail),
    }
}

fn termination_error(resolution: &Resolution) -> Option<&ResolveError> {
    match &resolution.termination {
        Termination::NoResponse(e) | Termination::Interrupted(e) => Some(e),
        Termination::Resolved | Termination::Circular => None,
    }
}

/// Drains the shared queue until it is closed and empty.
///
/// Returns the number of cases this worker processed.
pub async fn run_worker(
    id: usize,
    queue: Arc<Mutex<Receiver<TestCase>>>,
    ctx: Arc<WorkerContext>,
) -> usize {
    let mut processed = 0;
    loop {
        // The lock is released as soon as a case (or the close signal) arrives
        let next = queue.lock().await.recv().await;
        let Some(case) = next else {
            break;
        };

        let (result, failure) = check_case(&ctx.client, &case, ctx.max_hops).await;
        if let Some(kind) = failure {
            ctx.stats.record_failure(kind);
        }
        ctx.stats.record_verdict(result.verdict);
        for flag in &result.flags {
            ctx.stats.record_flag(*flag);
        }

        let line = format_result_line(&result);
        debug!("worker {} -> {}", id, line);
        if let Err(e) = ctx.sink.write_line(&line) {
            warn!("Failed to write result for {}: {}", case.source_url, e);
        }
        processed += 1;
    }
    debug!("worker {} finished after {} cases", id, processed);
    processed
}
