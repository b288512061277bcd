//! Main application modules.
//!
//! This module provides input line parsing, URL normalization, and statistics
//! printing used by the run harness.

pub mod input;
pub mod statistics;
pub mod url;

// Re-export public API
pub use input::{parse_line, parse_lines};
pub use statistics::print_verdict_statistics;
pub use url::normalize_url;
