//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Build route table → Bind listener → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C or Shutdown::trigger → Stop accepting → Drain → Exit
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{build_route_table, Handlers};
