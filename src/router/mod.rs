//! Routing façade.
//!
//! # Data Flow
//! ```text
//! app setup
//!     → facade.rs (DocRouter::get/post/.../nest)
//!         → path.rs (`:id` → `{id}`) → axum::Router (dispatch)
//!         → doc::RouteTree (documentation)
//!     → DocRouter::finish
//!         → axum::Router + optional JSON docs route over Arc<RouteTree>
//! ```

pub mod facade;
pub mod path;

pub use facade::DocRouter;
