//! Test case line parsing.
//!
//! Grammar: `source[,expected[,ignored...]]`. Fields are trimmed and each
//! field gets the default scheme on its own.

use log::warn;

use super::url::normalize_url;
use crate::models::TestCase;

/// Parses one input line.
///
/// Returns `None` for lines that are empty after trimming, and for lines whose
/// source field is blank (logged). A blank second field means trace-only mode.
pub fn parse_line(line: &str) -> Option<TestCase> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut fields = trimmed.split(',').map(str::trim);
    let source = fields.next().unwrap_or_default();
    if source.is_empty() {
        warn!("Skipping line with no source URL: {trimmed}");
        return None;
    }

    let expected_url = fields
        .next()
        .filter(|field| !field.is_empty())
        .map(normalize_url);

    Some(TestCase {
        source_url: normalize_url(source),
        expected_url,
    })
}

/// Parses every line, dropping the ones `parse_line` skips.
pub fn parse_lines<I, S>(lines: I) -> Vec<TestCase>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}
