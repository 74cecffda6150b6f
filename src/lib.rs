//! Advisor gateway library.
//!
//! Route tables bind (method, path) pairs to handlers, compose under
//! prefixes, and freeze into a dispatcher served by axum.

pub mod advisor;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Dispatcher, RouteError, RouteTable};
