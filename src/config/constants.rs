//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, worker counts, and output markers.

/// Number of concurrent workers draining the test case queue.
pub const DEFAULT_WORKERS: usize = 4;

/// Per-request timeout in seconds.
/// Every hop of a redirect chain is a separate request with its own timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum number of hops followed before resolution is abandoned.
/// Cycle detection catches repeating chains; this bounds chains that never repeat.
pub const DEFAULT_MAX_HOPS: usize = 20;

/// Capacity of the bounded test case queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Trails longer than this are flagged `(MULT)`.
pub const MULT_THRESHOLD: usize = 3;

/// Status codes treated as redirects (when a `Location` header is present).
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

/// HTTP status code that raises the `(404)` flag.
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;

/// Scheme prepended to input fields that carry none.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Separator placed between hops in a rendered trail.
pub const TRAIL_SEPARATOR: &str = " ==> ";

/// Placeholder rendered for a hop with neither status nor URL.
pub const INVALID_HOP_PLACEHOLDER: &str = "invalid_item";

/// Default directory the log router writes category files under.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("redirect_check/", env!("CARGO_PKG_VERSION"));
