//! The route documentation tree.
//!
//! # Responsibilities
//! - Record one [`DocEntry`] per (path, method) as routes are registered
//! - Graft sub-trees when route groups are mounted
//! - Answer read-only queries once setup is done
//!
//! # Design Decisions
//! - Grows only; there is no removal
//! - Re-registering a method at a path replaces that method's entry and
//!   nothing else
//! - Mounting unions the child's top-level routes into the target node;
//!   on a key collision the mounted route wins

use serde::{Deserialize, Serialize};

use crate::doc::entry::DocEntry;
use crate::doc::node::Node;
use crate::doc::segment::{is_root_path, segments, Segment, SEPARATOR};

/// Documentation map built alongside a router.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTree {
    root: Node,
}

/// One documented (path, method) pair, as returned by [`RouteTree::endpoints`].
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint<'a> {
    pub path: String,
    pub method: &'a str,
    pub doc: &'a DocEntry,
}

impl RouteTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// The node representing `/`.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Document `method` at `pattern`.
    ///
    /// Parameter segments (`/:id`) are added to the entry's `url_params` with
    /// type `"string"` unless the caller already described them; an absent
    /// `doc` starts out empty.
    pub fn register(&mut self, method: &str, pattern: &str, doc: Option<DocEntry>) {
        let path = segments(pattern);

        let mut doc = doc.unwrap_or_default();
        for name in path.iter().filter_map(Segment::param_name) {
            doc.ensure_url_param(name);
        }

        tracing::trace!(method, pattern, "documenting route");
        self.root.upsert_path(non_root(&path), Some((method, doc)));
    }

    /// Graft `child`'s top-level routes under the node addressed by `pattern`.
    ///
    /// Missing nodes along the path are created as structural nodes. The
    /// target keeps its own methods; `child`'s root methods are not carried
    /// over.
    pub fn mount(&mut self, pattern: &str, child: RouteTree) {
        let path = segments(pattern);

        tracing::trace!(
            pattern,
            routes = child.root.children().len(),
            "mounting route tree"
        );
        self.root
            .upsert_path(non_root(&path), None)
            .graft(child.root.into_children());
    }

    /// The node addressed by `pattern`, normalized like registration.
    pub fn node(&self, pattern: &str) -> Option<&Node> {
        self.root.find(non_root(&segments(pattern)))
    }

    /// Documentation registered for `method` at `pattern`.
    pub fn doc(&self, method: &str, pattern: &str) -> Option<&DocEntry> {
        self.node(pattern)?.method(method)
    }

    /// Every documented endpoint, depth first, children and methods in key
    /// order.
    pub fn endpoints(&self) -> Vec<Endpoint<'_>> {
        let mut out = Vec::new();
        collect(&self.root, String::new(), &mut out);
        out
    }

    /// Number of documented (path, method) pairs.
    pub fn len(&self) -> usize {
        fn count(node: &Node) -> usize {
            node.methods().len() + node.children().values().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// True when no endpoint is documented; structural nodes don't count.
    pub fn is_empty(&self) -> bool {
        fn bare(node: &Node) -> bool {
            node.is_structural() && node.children().values().all(bare)
        }
        bare(&self.root)
    }
}

/// Segments below the root; the root path walks nothing.
fn non_root(path: &[Segment]) -> &[Segment] {
    if is_root_path(path) {
        &[]
    } else {
        path
    }
}

fn collect<'a>(node: &'a Node, prefix: String, out: &mut Vec<Endpoint<'a>>) {
    let path = if prefix.is_empty() {
        SEPARATOR.to_string()
    } else {
        prefix.clone()
    };
    for (method, doc) in node.methods() {
        out.push(Endpoint {
            path: path.clone(),
            method,
            doc,
        });
    }

    for (segment, child) in node.children() {
        collect(child, format!("{prefix}{segment}"), out);
    }
}
