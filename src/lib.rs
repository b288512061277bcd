//! redirect_check library: redirect chain verification for batches of URLs
//!
//! Each input line names a URL and, optionally, where it is expected to land.
//! The URL's redirect chain is followed hop by hop (with cycle detection), the
//! outcome is classified as PASS, FAIL, CIRCULAR_REDIRECT, TRACE or
//! NO_RESPONSE, and one result line is written per input line.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use redirect_check::{run_check, Config, StdoutSink};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let reports = run_check(Path::new("redirects.csv"), &config, Arc::new(StdoutSink)).await?;
//! for report in reports {
//!     println!("{}: {} passed, {} failed", report.source, report.passed, report.failed);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
mod classify;
pub mod cli;
pub mod config;
mod error_handling;
mod fetch;
mod format;
pub mod initialization;
mod models;
mod route;
mod run;

// Re-export public API
pub use app::{normalize_url, parse_line, parse_lines};
pub use classify::{classify, flags_for};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FailureKind, ResolveError, RouteError, VerdictStats};
pub use fetch::resolve;
pub use format::{format_result_line, format_trail};
pub use models::{
    Classification, Flag, Hop, Resolution, Termination, TestCase, TestResult, Trail, Verdict,
};
pub use route::{
    categories_for, extract_domain, route_input, route_lines, Category, DirectorySink,
    MemoryRouteSink, RouteSink, RouteSummary,
};
pub use run::{
    check_case, discover_inputs, run_batch, run_check, run_file, run_lines, MemorySink,
    OutputSink, RunReport, StdoutSink,
};
