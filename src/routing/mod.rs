//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Construction (at startup):
//!     register(method, pattern, handler) / mount(prefix, child)
//!     → matcher.rs (parse & validate patterns)
//!     → router.rs (reject duplicates, store in order)
//!     → freeze() → immutable Dispatcher
//!
//! Incoming Request (method, path)
//!     → dispatch.rs
//!     → router.rs (route lookup)
//!     → Handler, or explicit NoMatch → 404
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: duplicates rejected, most specific pattern wins

pub mod dispatch;
pub mod error;
pub mod handler;
pub mod matcher;
pub mod method;
pub mod router;

pub use dispatch::Dispatcher;
pub use error::RouteError;
pub use handler::{handler_fn, Handler, HandlerFn, SharedHandler};
pub use matcher::{PathParams, PathPattern};
pub use method::Method;
pub use router::{RouteBinding, RouteMatch, RouteTable};
