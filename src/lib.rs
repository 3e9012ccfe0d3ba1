//! Route documentation trees built alongside an axum router.

pub mod app;
pub mod config;
pub mod doc;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod router;

pub use config::AppConfig;
pub use doc::{DocEntry, Node, RouteTree};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use router::DocRouter;
