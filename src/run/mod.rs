//! Worker pool harness.
//!
//! Parses test cases, feeds them through a bounded queue to a fixed pool of
//! workers, and waits until every case has been written to the output sink.

mod batch;
mod sink;
mod worker;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::sync::{mpsc, Mutex};

use crate::app::{parse_lines, print_verdict_statistics};
use crate::config::Config;
use crate::error_handling::VerdictStats;
use crate::initialization::init_redirect_client;
use crate::models::{Flag, Verdict};

pub use batch::{discover_inputs, run_batch};
pub use sink::{MemorySink, OutputSink, StdoutSink};
pub use worker::check_case;
use worker::{run_worker, WorkerContext};

/// Summary of one input source (a file or an in-memory batch of lines).
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// File path or label of the input
    pub source: String,
    /// Number of result lines written
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub circular: usize,
    pub traced: usize,
    pub no_response: usize,
    /// Chains cut off at the hop ceiling
    pub too_many_hops: usize,
    /// Results flagged `(404)`
    pub not_found: usize,
    /// Results flagged `(MULT)`
    pub multiple_hops: usize,
    pub elapsed_seconds: f64,
}

impl RunReport {
    fn empty(source: &str) -> Self {
        Self::from_stats(source, &VerdictStats::new(), 0.0)
    }

    fn from_stats(source: &str, stats: &VerdictStats, elapsed_seconds: f64) -> Self {
        RunReport {
            source: source.to_string(),
            total: stats.total(),
            passed: stats.verdict_count(Verdict::Pass),
            failed: stats.verdict_count(Verdict::Fail),
            circular: stats.verdict_count(Verdict::CircularRedirect),
            traced: stats.verdict_count(Verdict::Trace),
            no_response: stats.verdict_count(Verdict::NoResponse),
            too_many_hops: stats.verdict_count(Verdict::TooManyHops),
            not_found: stats.flag_count(Flag::FourOhFour),
            multiple_hops: stats.flag_count(Flag::Mult),
            elapsed_seconds,
        }
    }
}

/// Runs every test case in `lines` through the worker pool.
///
/// Blank lines are skipped. When nothing is left to check the function returns
/// at once without starting any worker. Otherwise it returns only after every
/// case has produced its output line.
pub async fn run_lines<I, S>(
    source: &str,
    lines: I,
    config: &Config,
    client: Arc<reqwest::Client>,
    sink: Arc<dyn OutputSink>,
) -> RunReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cases = parse_lines(lines);
    if cases.is_empty() {
        debug!("No test cases in {}", source);
        return RunReport::empty(source);
    }
    info!("Checking {} URLs from {}", cases.len(), source);

    let start_time = Instant::now();
    let stats = Arc::new(VerdictStats::new());
    let ctx = Arc::new(WorkerContext {
        client,
        sink,
        stats: Arc::clone(&stats),
        max_hops: config.max_hops,
    });

    let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
    let queue = Arc::new(Mutex::new(rx));

    let mut workers = FuturesUnordered::new();
    for id in 0..config.workers.max(1) {
        workers.push(tokio::spawn(run_worker(
            id,
            Arc::clone(&queue),
            Arc::clone(&ctx),
        )));
    }

    for case in cases {
        if tx.send(case).await.is_err() {
            warn!("All workers exited early, remaining cases from {} dropped", source);
            break;
        }
    }
    // Closing the channel tells workers no more work is coming
    drop(tx);

    while let Some(joined) = workers.next().await {
        if let Err(join_error) = joined {
            warn!("Worker panicked: {:?}", join_error);
        }
    }

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_verdict_statistics(source, &stats, elapsed_seconds);
    RunReport::from_stats(source, &stats, elapsed_seconds)
}

/// Reads `path` and runs its lines through the worker pool.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub async fn run_file(
    path: &Path,
    config: &Config,
    client: Arc<reqwest::Client>,
    sink: Arc<dyn OutputSink>,
) -> Result<RunReport> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let source = path.display().to_string();
    Ok(run_lines(&source, text.lines(), config, client, sink).await)
}

/// Checks a file, or every `*.csv` then `*.txt` file under a directory,
/// writing result lines to `sink`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the path does not
/// exist, or (single-file mode) the file cannot be read.
pub async fn run_check(
    path: &Path,
    config: &Config,
    sink: Arc<dyn OutputSink>,
) -> Result<Vec<RunReport>> {
    let client = init_redirect_client(config).context("Failed to initialize HTTP client")?;

    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to access {}", path.display()))?;

    if metadata.is_dir() {
        Ok(run_batch(path, config, client, sink).await)
    } else {
        Ok(vec![run_file(path, config, client, sink).await?])
    }
}
