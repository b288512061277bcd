//! Core data types shared by the resolver, classifier, formatter and harness.

use strum_macros::{Display, EnumIter};

use crate::error_handling::ResolveError;

/// One step in a redirect chain.
///
/// The seed hop (the original request target) has no status; every later hop
/// carries the status of the response that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub status: Option<u16>,
    pub url: String,
}

impl Hop {
    /// The original request target, before any response is known.
    pub fn seed(url: impl Into<String>) -> Self {
        Self {
            status: None,
            url: url.into(),
        }
    }

    pub fn new(status: u16, url: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            url: url.into(),
        }
    }
}

/// Ordered hops in the order they were resolved.
pub type Trail = Vec<Hop>;

/// How a resolution ended.
#[derive(Debug)]
pub enum Termination {
    /// A non-redirect response was reached.
    Resolved,
    /// The last hop points back at a URL already in the trail.
    Circular,
    /// The initial request failed; the trail is empty.
    NoResponse(ResolveError),
    /// A later hop failed; the trail holds everything gathered before it.
    Interrupted(ResolveError),
}

/// Result of following a URL's redirect chain.
#[derive(Debug)]
pub struct Resolution {
    pub trail: Trail,
    pub termination: Termination,
}

impl Resolution {
    /// Last hop of the trail, if any.
    pub fn final_hop(&self) -> Option<&Hop> {
        self.trail.last()
    }
}

/// A single line of input: a URL to request and, optionally, where it should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub source_url: String,
    /// `None` means trace-only mode.
    pub expected_url: Option<String>,
}

/// Final classification of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Verdict {
    #[strum(serialize = "PASS")]
    Pass,
    #[strum(serialize = "FAIL")]
    Fail,
    #[strum(serialize = "CIRCULAR_REDIRECT")]
    CircularRedirect,
    #[strum(serialize = "TRACE")]
    Trace,
    #[strum(serialize = "NO_RESPONSE")]
    NoResponse,
    /// Every hop answered but the chain outran the hop ceiling
    #[strum(serialize = "TOO_MANY_HOPS")]
    TooManyHops,
}

/// Annotation attached to a result independently of its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Flag {
    /// The final hop answered 404.
    #[strum(serialize = "(404)")]
    FourOhFour,
    /// The trail is longer than three hops.
    #[strum(serialize = "(MULT)")]
    Mult,
}

/// Verdict, flags and resolved URL extracted from a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    /// Sorted, without duplicates.
    pub flags: Vec<Flag>,
    /// Set for TRACE verdicts only.
    pub resolved_url: Option<String>,
}

impl Classification {
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }
}

/// The only value that escapes a worker; written exactly once as one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub source_url: String,
    pub expected_url: Option<String>,
    pub verdict: Verdict,
    pub flags: Vec<Flag>,
    pub resolved_url: Option<String>,
    /// Empty when nothing answered at all.
    pub trail_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_display_matches_output_keywords() {
        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(Verdict::Fail.to_string(), "FAIL");
        assert_eq!(Verdict::CircularRedirect.to_string(), "CIRCULAR_REDIRECT");
        assert_eq!(Verdict::Trace.to_string(), "TRACE");
        assert_eq!(Verdict::NoResponse.to_string(), "NO_RESPONSE");
        assert_eq!(Verdict::TooManyHops.to_string(), "TOO_MANY_HOPS");
    }

    #[test]
    fn test_flag_display_and_order() {
        assert_eq!(Flag::FourOhFour.to_string(), "(404)");
        assert_eq!(Flag::Mult.to_string(), "(MULT)");
        assert!(Flag::FourOhFour < Flag::Mult);
    }

    #[test]
    fn test_hop_constructors() {
        assert_eq!(Hop::seed("http://a.test").status, None);
        assert_eq!(Hop::new(301, "http://b.test").status, Some(301));
    }
}
