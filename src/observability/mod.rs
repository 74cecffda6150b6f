//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (method, path, route)
//!     → TraceLayer spans per HTTP request, tagged with x-request-id
//!
//! Consumers:
//!     → logging.rs subscriber (stdout)
//! ```

pub mod logging;

pub use logging::init_logging;
