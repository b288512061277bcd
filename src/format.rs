//! Rendering of trails and result lines.
//!
//! Result line layout (one per test case):
//!
//! ```text
//! <src>,<expected>,PASS (404) (MULT),<hop> ==> <hop> ==> <hop>
//! <src>,<resolved>,TRACE ,<hop> ==> <hop>
//! <src>,<expected>,FAIL,NO_RESPONSE
//! <src>,<expected>,FAIL,TOO_MANY_HOPS (MULT),<hop> ==> ... ==> <hop>
//! ```
//!
//! A TRACE line has no expectation, so the resolved URL takes the second field.

use std::fmt::Write;

use crate::config::{INVALID_HOP_PLACEHOLDER, TRAIL_SEPARATOR};
use crate::models::{Flag, Hop, TestResult, Trail, Verdict};

/// Renders a trail as `url ==> (301) url ==> (200) url`.
///
/// The seed hop has no status and renders as the bare URL. A hop with neither
/// status nor URL renders as `invalid_item`.
pub fn format_trail(trail: &Trail) -> String {
    trail
        .iter()
        .map(format_hop)
        .collect::<Vec<_>>()
        .join(TRAIL_SEPARATOR)
}

fn format_hop(hop: &Hop) -> String {
    match hop.status {
        Some(status) => format!("({}) {}", status, hop.url),
        None if !hop.url.trim().is_empty() => hop.url.clone(),
        None => INVALID_HOP_PLACEHOLDER.to_string(),
    }
}

/// Renders the full output line for a result, without a trailing newline.
pub fn format_result_line(result: &TestResult) -> String {
    let second = match result.verdict {
        Verdict::Trace => result.resolved_url.as_deref(),
        _ => result.expected_url.as_deref(),
    };
    let mut line = format!("{},{}", result.source_url, second.unwrap_or(""));

    match result.verdict {
        Verdict::NoResponse if result.trail_text.is_empty() => {
            line.push_str(",FAIL,NO_RESPONSE");
            return line;
        }
        Verdict::NoResponse => line.push_str(",FAIL,NO_RESPONSE "),
        Verdict::TooManyHops => line.push_str(",FAIL,TOO_MANY_HOPS "),
        verdict => {
            let _ = write!(line, ",{} ", verdict);
        }
    }

    line.push_str(&format_flags(&result.flags));
    line.push(',');
    line.push_str(&result.trail_text);
    line
}

/// `(404) ` and `(MULT)` in that order, each present only when flagged.
fn format_flags(flags: &[Flag]) -> String {
    let mut out = String::new();
    if flags.contains(&Flag::FourOhFour) {
        let _ = write!(out, "{} ", Flag::FourOhFour);
    }
    if flags.contains(&Flag::Mult) {
        out.push_str(&Flag::Mult.to_string());
    }
    out
}
