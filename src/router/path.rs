//! Pattern translation for axum.
//!
//! Routes are written with `:name` parameters; axum 0.8 expects `{name}`
//! captures and `{*name}` catch-alls. Fragments already in axum syntax pass
//! through untouched.

use crate::doc::segment::{MOUNT_WILDCARD, PARAM_MARKER, SEPARATOR};

/// Name given to an anonymous trailing `*`.
const ANONYMOUS_WILDCARD: &str = "rest";

/// Translate a route pattern into an axum route path.
pub fn to_axum_path(pattern: &str) -> String {
    let body = pattern.trim_start_matches(SEPARATOR);
    let mut out = String::with_capacity(pattern.len() + 2);

    for fragment in body.split(SEPARATOR) {
        out.push(SEPARATOR);
        out.push_str(&translate_fragment(fragment));
    }

    out
}

/// Translate a mount pattern into an axum nest path.
///
/// The trailing `/*` and any trailing separators are dropped; `None` means
/// the mount targets the root, where axum requires `merge` instead of
/// `nest`.
pub fn to_nest_path(pattern: &str) -> Option<String> {
    let pattern = pattern.strip_suffix(MOUNT_WILDCARD).unwrap_or(pattern);
    let trimmed = pattern.trim_matches(SEPARATOR);
    if trimmed.is_empty() {
        return None;
    }
    Some(to_axum_path(trimmed))
}

fn translate_fragment(fragment: &str) -> String {
    if let Some(name) = fragment.strip_prefix(PARAM_MARKER) {
        if !name.is_empty() {
            return format!("{{{name}}}");
        }
    }

    if let Some(name) = fragment.strip_prefix('*') {
        let name = if name.is_empty() { ANONYMOUS_WILDCARD } else { name };
        return format!("{{*{name}}}");
    }

    fragment.to_string()
}
