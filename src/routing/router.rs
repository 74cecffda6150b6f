//! Route table: registration, mounting, and lookup.
//!
//! # Responsibilities
//! - Store bindings in registration order
//! - Reject duplicate (method, pattern) pairs at build time
//! - Compose child tables under a prefix
//! - Look up the handler for a request, or report an explicit no-match
//!
//! # Design Decisions
//! - Duplicates are rejected, never overridden
//! - Most specific pattern wins; identical shapes cannot coexist, so the
//!   winner is unique
//! - Lookup is a linear scan (route counts are small)
//! - `freeze` consumes the table, so nothing can register after serving starts

use axum::body::Body;
use axum::http::Request;

use crate::routing::dispatch::Dispatcher;
use crate::routing::error::RouteError;
use crate::routing::handler::SharedHandler;
use crate::routing::matcher::{PathParams, PathPattern};
use crate::routing::method::Method;

/// One registered endpoint.
#[derive(Clone)]
pub struct RouteBinding {
    method: Method,
    pattern: PathPattern,
    handler: SharedHandler,
}

impl RouteBinding {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn handler(&self) -> &SharedHandler {
        &self.handler
    }
}

impl std::fmt::Debug for RouteBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteBinding")
            .field("method", &self.method)
            .field("pattern", &self.pattern.to_string())
            .finish_non_exhaustive()
    }
}

/// Result of a successful lookup.
#[derive(Clone)]
pub struct RouteMatch<'a> {
    pub binding: &'a RouteBinding,
    pub params: PathParams,
}

impl RouteMatch<'_> {
    pub fn handler(&self) -> &SharedHandler {
        &self.binding.handler
    }
}

/// Ordered collection of route bindings.
#[derive(Clone, Default)]
pub struct RouteTable {
    bindings: Vec<RouteBinding>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `method pattern` to `handler`.
    pub fn register(
        &mut self,
        method: Method,
        pattern: &str,
        handler: SharedHandler,
    ) -> Result<(), RouteError> {
        let pattern = PathPattern::parse(pattern)?;
        self.insert(RouteBinding {
            method,
            pattern,
            handler,
        })
    }

    /// Shorthand for `register(Method::Get, ..)`.
    pub fn get(&mut self, pattern: &str, handler: SharedHandler) -> Result<(), RouteError> {
        self.register(Method::Get, pattern, handler)
    }

    /// Make every binding of `child` reachable at `prefix + child pattern`.
    ///
    /// Either all child bindings are added or none are.
    pub fn mount(&mut self, prefix: &str, child: RouteTable) -> Result<(), RouteError> {
        let prefix = PathPattern::parse(prefix)?;

        let mut staged = Vec::with_capacity(child.bindings.len());
        for binding in child.bindings {
            let pattern = prefix.join(&binding.pattern)?;
            staged.push(RouteBinding { pattern, ..binding });
        }

        // Validate the whole batch before touching `self`.
        for (i, binding) in staged.iter().enumerate() {
            self.check_conflict(binding)?;
            if staged[..i]
                .iter()
                .any(|b| b.method == binding.method && b.pattern.same_shape(&binding.pattern))
            {
                return Err(duplicate(binding));
            }
        }

        self.bindings.extend(staged);
        Ok(())
    }

    /// Find the handler bound to `method path`.
    ///
    /// Returns `None` when nothing matches; that is a normal outcome.
    pub fn match_route(&self, method: Method, path: &str) -> Option<RouteMatch<'_>> {
        let mut best: Option<RouteMatch<'_>> = None;
        for binding in self.bindings.iter().filter(|b| b.method == method) {
            let Some(params) = binding.pattern.matches(path) else {
                continue;
            };
            // Strictly greater only: earlier registrations keep ties.
            let better = match &best {
                Some(current) => binding.pattern.outranks(&current.binding.pattern),
                None => true,
            };
            if better {
                best = Some(RouteMatch { binding, params });
            }
        }
        best
    }

    /// Look up an incoming request. Methods outside the supported set never match.
    pub fn match_request(&self, request: &Request<Body>) -> Option<RouteMatch<'_>> {
        let method = Method::try_from(request.method()).ok()?;
        self.match_route(method, request.uri().path())
    }

    /// Bindings in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// End the build phase.
    pub fn freeze(self) -> Dispatcher {
        Dispatcher::new(self)
    }

    fn insert(&mut self, binding: RouteBinding) -> Result<(), RouteError> {
        self.check_conflict(&binding)?;
        self.bindings.push(binding);
        Ok(())
    }

    fn check_conflict(&self, binding: &RouteBinding) -> Result<(), RouteError> {
        let taken = self
            .bindings
            .iter()
            .any(|b| b.method == binding.method && b.pattern.same_shape(&binding.pattern));
        if taken {
            return Err(duplicate(binding));
        }
        Ok(())
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.bindings).finish()
    }
}

fn duplicate(binding: &RouteBinding) -> RouteError {
    RouteError::DuplicateRoute {
        method: binding.method,
        pattern: binding.pattern.to_string(),
    }
}
