//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (add request ID)
//!     → routing::Dispatcher (route table lookup → handler or 404)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::HttpServer;
