//! Log router: sorts result lines into per-domain category files.
//!
//! A line is scanned for the keywords `MULT`, `(404)`, `PASS`, `FAIL` and
//! `TRACE`. `MULT` and `(404)` each add the line to their own category; the
//! line then goes to exactly one of `passed`, `fail` or `traced` (in that
//! order of precedence) when any of those keywords is present.

mod sink;

use std::io::BufRead;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use strum_macros::Display;

use crate::error_handling::RouteError;

pub use sink::{DirectorySink, MemoryRouteSink, RouteSink};

/// Everything up to and including the first `.com`.
static DOMAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?\.com)").expect("domain pattern is valid"));

/// Result category; the display form is the directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Category {
    #[strum(serialize = "mult")]
    Mult,
    #[strum(serialize = "404")]
    FourOhFour,
    #[strum(serialize = "fail")]
    Fail,
    #[strum(serialize = "passed")]
    Passed,
    #[strum(serialize = "traced")]
    Traced,
}

/// Counts from a routing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSummary {
    /// Lines appended to at least one category
    pub routed: usize,
    /// Lines with no domain or no matching keyword
    pub skipped: usize,
    /// Total appends across all categories
    pub appends: usize,
}

/// Extracts the domain used as the file name for a line.
///
/// Scheme prefixes are removed and path separators replaced so the result is
/// a single file name.
pub fn extract_domain(line: &str) -> Option<String> {
    let matched = DOMAIN_PATTERN.captures(line)?.get(1)?.as_str();
    let domain = matched.replace("http://", "").replace("https://", "");
    Some(domain.replace(['/', '\\'], "_"))
}

/// Categories a line belongs to, in append order.
pub fn categories_for(line: &str) -> Vec<Category> {
    let mut categories = Vec::new();
    if line.contains("MULT") {
        categories.push(Category::Mult);
    }
    if line.contains("(404)") {
        categories.push(Category::FourOhFour);
    }
    if line.contains("PASS") {
        categories.push(Category::Passed);
    } else if line.contains("FAIL") {
        categories.push(Category::Fail);
    } else if line.contains("TRACE") {
        categories.push(Category::Traced);
    }
    categories
}

/// Routes every line to the sink.
///
/// # Errors
///
/// Stops at the first append the sink rejects.
pub fn route_lines<I, S>(lines: I, sink: &dyn RouteSink) -> Result<RouteSummary, RouteError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = RouteSummary::default();
    for line in lines {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);
        let categories = categories_for(line);
        let domain = match extract_domain(line) {
            Some(domain) if !categories.is_empty() => domain,
            _ => {
                debug!("Not routing line: {}", line);
                summary.skipped += 1;
                continue;
            }
        };

        for category in &categories {
            sink.append(*category, &domain, line)?;
        }
        summary.appends += categories.len();
        summary.routed += 1;
    }
    Ok(summary)
}

/// Routes lines from `input` (or stdin when `None`) into `results_dir`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or a category file cannot be written.
pub fn route_input(input: Option<&Path>, results_dir: &Path) -> Result<RouteSummary> {
    let lines: Vec<String> = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .lines()
            .map(str::to_string)
            .collect(),
        None => std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .context("Failed to read stdin")?,
    };

    let sink = DirectorySink::new(results_dir);
    let summary = route_lines(&lines, &sink)?;
    info!(
        "Routed {} line{} ({} appends, {} skipped) into {}",
        summary.routed,
        if summary.routed == 1 { "" } else { "s" },
        summary.appends,
        summary.skipped,
        sink.root().display()
    );
    Ok(summary)
}
