//! URL normalization for input fields.

use crate::config::DEFAULT_SCHEME_PREFIX;

/// Prepends `http://` when the field carries no scheme.
///
/// Only the presence of a `://` separator is checked; the URL is otherwise
/// passed through untouched.
pub fn normalize_url(field: &str) -> String {
    let field = field.trim();
    if field.contains("://") {
        field.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{field}")
    }
}
