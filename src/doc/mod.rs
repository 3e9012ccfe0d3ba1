//! Route documentation subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (setup):
//!     (method, pattern, Option<DocEntry>)
//!     → segment.rs (normalize pattern into segments)
//!     → tree.rs (auto-fill url params, upsert method at node)
//!
//! Mounting (setup):
//!     (pattern, child RouteTree)
//!     → segment.rs (same normalization, `/*` stripped)
//!     → tree.rs (walk/create target, union child's top-level routes)
//!
//! Introspection (after setup):
//!     RouteTree → serde → JSON (`routes` / `methods`, empty fields omitted)
//! ```
//!
//! # Design Decisions
//! - Never fails: any pattern maps somewhere, the root at worst
//! - Method names are uppercased on the way in and on lookup
//! - Build once, then share read-only (see `router::DocRouter::finish`)

pub mod entry;
pub mod node;
pub mod segment;
pub mod tree;

pub use entry::DocEntry;
pub use node::Node;
pub use segment::{segments, Segment};
pub use tree::{Endpoint, RouteTree};
