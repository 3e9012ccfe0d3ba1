//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! router::DocRouter (debug: each registration / nest)
//! doc::RouteTree    (trace: tree mutations)
//! http::HttpServer  (info: lifecycle; TraceLayer request spans)
//!     → logging.rs (tracing-subscriber fmt layer + EnvFilter)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
