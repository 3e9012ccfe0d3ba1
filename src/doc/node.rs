//! Tree nodes and the shared walk/create helper.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::doc::entry::DocEntry;
use crate::doc::segment::Segment;

/// One point of the route tree.
///
/// A node owns its children and its per-method documentation outright.
/// Nodes without methods are structural: they only exist because a deeper
/// path was registered or something was mounted below them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Child nodes keyed by segment (`/users`, `/:id`).
    #[serde(rename = "routes", skip_serializing_if = "BTreeMap::is_empty")]
    children: BTreeMap<String, Node>,

    /// Documentation keyed by uppercased method name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    methods: BTreeMap<String, DocEntry>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &BTreeMap<String, Node> {
        &self.children
    }

    pub fn child(&self, segment: &str) -> Option<&Node> {
        self.children.get(segment)
    }

    pub fn methods(&self) -> &BTreeMap<String, DocEntry> {
        &self.methods
    }

    /// Documentation for `method`, matched case-insensitively.
    pub fn method(&self, method: &str) -> Option<&DocEntry> {
        self.methods.get(&method.to_uppercase())
    }

    pub fn is_structural(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert or replace the entry for one method, leaving the others alone.
    pub(crate) fn upsert_method(&mut self, method: &str, doc: DocEntry) {
        self.methods.insert(method.to_uppercase(), doc);
    }

    /// Union `children` into this node's children. Incoming keys win.
    pub(crate) fn graft(&mut self, children: BTreeMap<String, Node>) {
        self.children.extend(children);
    }

    pub(crate) fn into_children(self) -> BTreeMap<String, Node> {
        self.children
    }

    /// Walk `path` below this node, creating structural nodes where missing.
    ///
    /// When `entry` is given it is upserted into the terminal node's methods.
    /// Existing nodes along the way are never replaced. Returns the terminal
    /// node; an empty `path` returns `self`.
    pub(crate) fn upsert_path(
        &mut self,
        path: &[Segment],
        entry: Option<(&str, DocEntry)>,
    ) -> &mut Node {
        let mut node = self;
        for segment in path {
            node = node
                .children
                .entry(segment.as_str().to_string())
                .or_default();
        }

        if let Some((method, doc)) = entry {
            node.upsert_method(method, doc);
        }
        node
    }

    /// Read-only walk; `None` as soon as a segment is missing.
    pub(crate) fn find(&self, path: &[Segment]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, segment| node.children.get(segment.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::segment::segments;

    #[test]
    fn test_upsert_path_creates_structural_parents() {
        let mut root = Node::new();
        root.upsert_path(&segments("/a/b/c"), Some(("get", DocEntry::titled("c"))));

        let a = root.child("/a").unwrap();
        assert!(a.is_structural());
        let b = a.child("/b").unwrap();
        assert!(b.is_structural());
        let c = b.child("/c").unwrap();
        assert_eq!(c.method("GET").unwrap().title.as_deref(), Some("c"));
        assert!(c.is_leaf());
    }

    #[test]
    fn test_upsert_path_keeps_existing_methods() {
        let mut root = Node::new();
        root.upsert_path(&segments("/a"), Some(("GET", DocEntry::titled("get"))));
        root.upsert_path(&segments("/a/b"), Some(("POST", DocEntry::titled("post"))));
        root.upsert_path(&segments("/a"), Some(("PUT", DocEntry::titled("put"))));

        let a = root.child("/a").unwrap();
        assert_eq!(a.methods().len(), 2);
        assert!(a.child("/b").is_some());
    }

    #[test]
    fn test_method_lookup_is_case_insensitive() {
        let mut node = Node::new();
        node.upsert_method("patch", DocEntry::new());
        assert!(node.method("PATCH").is_some());
        assert!(node.method("Patch").is_some());
        assert_eq!(node.methods().keys().collect::<Vec<_>>(), vec!["PATCH"]);
    }

    #[test]
    fn test_find() {
        let mut root = Node::new();
        root.upsert_path(&segments("/x/y"), None);
        assert!(root.find(&segments("/x/y")).is_some());
        assert!(root.find(&segments("/x/z")).is_none());
        assert!(root.find(&[]).is_some());
    }

    #[test]
    fn test_serialized_shape() {
        let mut root = Node::new();
        root.upsert_path(&segments("/a"), Some(("GET", DocEntry::new())));
        assert_eq!(
            serde_json::to_value(&root).unwrap(),
            serde_json::json!({"routes": {"/a": {"methods": {"GET": {}}}}})
        );
    }
}
