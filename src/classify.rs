//! Outcome classification.
//!
//! Turns a resolution and an optional expected URL into a verdict plus flags.

use crate::config::{HTTP_STATUS_NOT_FOUND, MULT_THRESHOLD};
use crate::error_handling::ResolveError;
use crate::models::{Classification, Flag, Resolution, Termination, Trail, Verdict};

/// Classifies a resolution against an optional expectation.
///
/// Rules, first match wins:
/// 1. empty trail: `NoResponse`
/// 2. circular termination: `CircularRedirect`
/// 3. interrupted by the hop ceiling: `TooManyHops`; interrupted by a failed
///    request: `NoResponse` (the partial trail is still flagged either way)
/// 4. final URL equals `expected` or `expected + "/"`: `Pass`
/// 5. expectation present but not met: `Fail`
/// 6. no expectation: `Trace`, with `resolved_url` set to the final URL
///
/// Flags are computed from the trail regardless of verdict.
pub fn classify(resolution: &Resolution, expected: Option<&str>) -> Classification {
    let Some(last) = resolution.final_hop() else {
        return Classification {
            verdict: Verdict::NoResponse,
            flags: Vec::new(),
            resolved_url: None,
        };
    };

    let mut resolved_url = None;
    let verdict = match (&resolution.termination, expected) {
        (Termination::Circular, _) => Verdict::CircularRedirect,
        (Termination::Interrupted(ResolveError::TooManyHops(_)), _) => Verdict::TooManyHops,
        (Termination::NoResponse(_) | Termination::Interrupted(_), _) => Verdict::NoResponse,
        (Termination::Resolved, Some(expected)) if lands_on(&last.url, expected) => Verdict::Pass,
        (Termination::Resolved, Some(_)) => Verdict::Fail,
        (Termination::Resolved, None) => {
            resolved_url = Some(last.url.clone());
            Verdict::Trace
        }
    };

    Classification {
        verdict,
        flags: flags_for(&resolution.trail),
        resolved_url,
    }
}

/// Trailing-slash tolerant match of the final URL against the expectation.
fn lands_on(final_url: &str, expected: &str) -> bool {
    final_url == expected
        || final_url
            .strip_suffix('/')
            .is_some_and(|trimmed| trimmed == expected)
}

/// `(404)` when the last hop answered 404, `(MULT)` when the trail exceeds the threshold.
pub fn flags_for(trail: &Trail) -> Vec<Flag> {
    let mut flags = Vec::new();
    if trail
        .last()
        .is_some_and(|hop| hop.status == Some(HTTP_STATUS_NOT_FOUND))
    {
        flags.push(Flag::FourOhFour);
    }
    if trail.len() > MULT_THRESHOLD {
        flags.push(Flag::Mult);
    }
    flags
}
