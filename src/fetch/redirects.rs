//! HTTP redirect chain resolution.
//!
//! Follows redirect chains manually, one request per hop, so the full path from
//! the initial URL to its final destination is recorded. The trail doubles as
//! the visited set for cycle detection.

use log::{debug, warn};
use reqwest::header::LOCATION;
use reqwest::Response;
use url::Url;

use crate::config::REDIRECT_STATUS_CODES;
use crate::error_handling::ResolveError;
use crate::models::{Hop, Resolution, Termination, Trail};

/// Resolves the redirect chain for a URL.
///
/// The trail starts with the seed hop `(None, start_url)`. Each redirect
/// appends `(status, location)`; a non-redirect response appends
/// `(status, final_url)` where `final_url` is whatever the client reports.
///
/// Termination:
/// - `Resolved` on a non-redirect response (a redirect status without a usable
///   `Location` header counts as one)
/// - `Circular` as soon as a location matches the URL of any hop already in the
///   trail; the repeated hop is appended first so the cycle is visible
/// - `NoResponse` with an empty trail when the first request fails
/// - `Interrupted` with the partial trail when a later request fails, or when
///   more than `max_hops` requests would be needed
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled (for manual tracking)
/// * `start_url` - The initial URL to request
/// * `max_hops` - Maximum number of requests issued for this URL
pub async fn resolve(client: &reqwest::Client, start_url: &str, max_hops: usize) -> Resolution {
    let mut trail: Trail = vec![Hop::seed(start_url)];
    let mut current = start_url.to_string();

    loop {
        if trail.len() > max_hops {
            warn!("Giving up on {} after {} hops", start_url, max_hops);
            return Resolution {
                trail,
                termination: Termination::Interrupted(ResolveError::TooManyHops(max_hops)),
            };
        }

        let response = match client.get(&current).send().await {
            Ok(response) => response,
            Err(e) => {
                let error = ResolveError::from(e);
                // Only the seed hop means nothing answered at all
                if trail.len() == 1 {
                    debug!("No response from {}: {}", current, error);
                    return Resolution {
                        trail: Vec::new(),
                        termination: Termination::NoResponse(error),
                    };
                }
                warn!(
                    "Redirect chain from {} interrupted at {}: {}",
                    start_url, current, error
                );
                return Resolution {
                    trail,
                    termination: Termination::Interrupted(error),
                };
            }
        };

        let status = response.status().as_u16();
        match redirect_target(&response, &current) {
            Some(location) => {
                let circular = trail.iter().any(|hop| same_target(&hop.url, &location));
                trail.push(Hop::new(status, location.clone()));
                if circular {
                    debug!("Circular redirect from {} back to {}", start_url, location);
                    return Resolution {
                        trail,
                        termination: Termination::Circular,
                    };
                }
                current = location;
            }
            None => {
                trail.push(Hop::new(status, response.url().to_string()));
                return Resolution {
                    trail,
                    termination: Termination::Resolved,
                };
            }
        }
    }
}

/// Returns the location to follow if `response` is a redirect.
///
/// Absolute locations are kept exactly as sent; relative ones are joined onto
/// `current`. A redirect status with a missing or unusable `Location` header
/// yields `None`.
fn redirect_target(response: &Response, current: &str) -> Option<String> {
    let status = response.status().as_u16();
    if !REDIRECT_STATUS_CODES.contains(&status) {
        return None;
    }

    let Some(raw) = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
    else {
        warn!(
            "Redirect status {} for {} but no Location header",
            status, current
        );
        return None;
    };

    if Url::parse(raw).is_ok() {
        return Some(raw.to_string());
    }

    match Url::parse(current).and_then(|base| base.join(raw)) {
        Ok(joined) => Some(joined.to_string()),
        Err(e) => {
            warn!(
                "Unusable Location header {:?} for {} ({}), treating as final",
                raw, current, e
            );
            None
        }
    }
}

/// Two URLs name the same target when their text is equal or they parse to the
/// same URL (so `http://a.test` and `http://a.test/` match).
pub(crate) fn same_target(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
