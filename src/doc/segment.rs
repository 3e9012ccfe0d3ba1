//! Path pattern normalization.
//!
//! # Responsibilities
//! - Turn a raw route pattern into the ordered segments used as tree keys
//! - Recognise parameter segments (`/:id`, `/{id}`, `/{*rest}`)
//!
//! # Design Decisions
//! - Total function: every input yields at least one segment
//! - A trailing mount wildcard (`/*`) is dropped, so `/admin/*` and `/admin`
//!   address the same node
//! - Only that exact suffix is dropped, once: `/admin/*/` keeps its `/*`
//!   segment and a catch-all like `/files/*name` is never shortened
//! - Repeated separators collapse; no other rewriting happens

use std::fmt;

/// Path separator.
pub const SEPARATOR: char = '/';

/// Prefix marking a URL parameter segment.
pub const PARAM_MARKER: char = ':';

/// Suffix used by mount patterns (`/admin/*`).
pub const MOUNT_WILDCARD: &str = "/*";

/// One path component, always carrying its leading separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment(String);

impl Segment {
    /// The distinguished root segment, `/`.
    pub fn root() -> Self {
        Self(SEPARATOR.to_string())
    }

    /// Build a segment from a fragment without separators.
    fn from_fragment(fragment: &str) -> Self {
        let mut key = String::with_capacity(fragment.len() + 1);
        key.push(SEPARATOR);
        key.push_str(fragment);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == SEPARATOR.len_utf8()
    }

    /// Name of the URL parameter this segment captures, if any.
    ///
    /// `/:id` and axum's `/{id}` both yield `id`; a catch-all `/{*rest}`
    /// yields `rest`.
    pub fn param_name(&self) -> Option<&str> {
        let fragment = &self.0[SEPARATOR.len_utf8()..];

        if let Some(name) = fragment.strip_prefix(PARAM_MARKER) {
            return (!name.is_empty()).then_some(name);
        }

        let name = fragment.strip_prefix('{')?.strip_suffix('}')?;
        let name = name.strip_prefix('*').unwrap_or(name);
        (!name.is_empty()).then_some(name)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split a route pattern into tree segments.
pub fn segments(pattern: &str) -> Vec<Segment> {
    let pattern = pattern.strip_suffix(MOUNT_WILDCARD).unwrap_or(pattern);
    let trimmed = pattern.trim_matches(SEPARATOR);

    let parts: Vec<Segment> = trimmed
        .split(SEPARATOR)
        .filter(|fragment| !fragment.is_empty())
        .map(Segment::from_fragment)
        .collect();

    if parts.is_empty() {
        vec![Segment::root()]
    } else {
        parts
    }
}

/// Whether `segments` denotes the root path.
pub fn is_root_path(segments: &[Segment]) -> bool {
    matches!(segments, [only] if only.is_root())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pattern: &str) -> Vec<String> {
        segments(pattern).into_iter().map(Segment::into_string).collect()
    }

    #[test]
    fn test_root_variants() {
        for pattern in ["", "/", "//", "///", "/*"] {
            assert_eq!(keys(pattern), vec!["/"], "pattern {pattern:?}");
        }
    }

    #[test]
    fn test_leading_and_trailing_separators_trimmed() {
        assert_eq!(keys("/a/b"), vec!["/a", "/b"]);
        assert_eq!(keys("a/b/"), vec!["/a", "/b"]);
        assert_eq!(keys("/a/b/*"), vec!["/a", "/b"]);
    }

    #[test]
    fn test_order_and_repeats_preserved() {
        assert_eq!(
            keys("/users/:id/friends/:id"),
            vec!["/users", "/:id", "/friends", "/:id"]
        );
    }

    #[test]
    fn test_repeated_separators_collapse() {
        assert_eq!(keys("/a//b"), vec!["/a", "/b"]);
    }

    #[test]
    fn test_only_trailing_wildcard_is_stripped() {
        assert_eq!(keys("/files/*name"), vec!["/files", "/*name"]);
        assert_eq!(keys("/*/x"), vec!["/*", "/x"]);
    }

    #[test]
    fn test_wildcard_suffix_stripped_once() {
        assert_eq!(keys("/admin/*/"), vec!["/admin", "/*"]);
        assert_eq!(keys("/admin/*/*"), vec!["/admin", "/*"]);
    }

    #[test]
    fn test_param_names() {
        let segs = segments("/users/:id/{post}/{*rest}/plain/:");
        let names: Vec<Option<&str>> = segs.iter().map(Segment::param_name).collect();
        assert_eq!(
            names,
            vec![None, Some("id"), Some("post"), Some("rest"), None, None]
        );
        assert_eq!(Segment::root().param_name(), None);
    }

    #[test]
    fn test_is_root_path() {
        assert!(is_root_path(&segments("")));
        assert!(!is_root_path(&segments("/a")));
    }
}
