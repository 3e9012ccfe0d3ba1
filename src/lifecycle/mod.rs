//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build documented router → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Ctrl-C or Shutdown::trigger → stop accepting → drain → exit
//! ```

pub mod shutdown;

pub use shutdown::{ctrl_c, Shutdown};
