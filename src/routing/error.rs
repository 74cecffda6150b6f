//! Route table construction errors.
//!
//! Everything here is raised while the table is being built. None of these
//! errors can occur once the table is frozen and serving.

use thiserror::Error;

use crate::routing::method::Method;

/// Error raised by `register`, `mount`, or pattern/method parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The (method, pattern) pair is already bound in this table.
    #[error("duplicate route: {method} {pattern} is already registered")]
    DuplicateRoute { method: Method, pattern: String },

    /// The path pattern is malformed.
    #[error("invalid path pattern {pattern:?}: {reason}")]
    InvalidPathPattern { pattern: String, reason: &'static str },

    /// The method is outside the supported set.
    #[error("unsupported HTTP method {0:?}")]
    UnsupportedMethod(String),
}

impl RouteError {
    pub(crate) fn invalid(pattern: &str, reason: &'static str) -> Self {
        RouteError::InvalidPathPattern {
            pattern: pattern.to_string(),
            reason,
        }
    }
}
