//! Error handling and run statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, resolution, routing)
//! - Run statistics tracking (verdicts, flags, network failures)

mod stats;
mod types;

// Re-export public API
pub use stats::VerdictStats;
pub use types::{FailureKind, InitializationError, ResolveError, RouteError};
