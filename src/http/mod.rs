//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum::serve, TraceLayer, TimeoutLayer)
//!     → application router built by router::DocRouter
//!     → handler, or the JSON route tree at the docs path
//! ```

pub mod server;

pub use server::HttpServer;
