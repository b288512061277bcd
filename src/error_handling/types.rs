//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Network failure while following a redirect chain.
///
/// Timeouts and connection failures are separate kinds and are matched
/// explicitly when a `reqwest::Error` is converted.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The request did not complete within the per-request timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] ReqwestError),

    /// The connection could not be established (refused, DNS failure, TLS).
    #[error("connection failed: {0}")]
    Connect(#[source] ReqwestError),

    /// Any other transport failure.
    #[error("request failed: {0}")]
    Request(#[source] ReqwestError),

    /// The chain kept redirecting to new URLs past the hop ceiling.
    #[error("gave up after {0} hops")]
    TooManyHops(usize),
}

impl From<ReqwestError> for ResolveError {
    fn from(error: ReqwestError) -> Self {
        if error.is_timeout() {
            ResolveError::Timeout(error)
        } else if error.is_connect() {
            ResolveError::Connect(error)
        } else {
            ResolveError::Request(error)
        }
    }
}

impl ResolveError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolveError::Timeout(_) => FailureKind::Timeout,
            ResolveError::Connect(_) => FailureKind::Connect,
            ResolveError::Request(_) => FailureKind::Request,
            ResolveError::TooManyHops(_) => FailureKind::TooManyHops,
        }
    }
}

/// Counter key for network failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    Timeout,
    Connect,
    Request,
    TooManyHops,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "Request timeout",
            FailureKind::Connect => "Connection failure",
            FailureKind::Request => "Other request failure",
            FailureKind::TooManyHops => "Too many hops",
        }
    }
}

/// Errors raised by the log router.
#[derive(Error, Debug)]
pub enum RouteError {
    /// A category directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be appended to a category file.
    #[error("Failed to append to {path}: {source}")]
    Append {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
