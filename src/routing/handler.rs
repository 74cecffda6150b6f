//! The handler seam.
//!
//! A handler accepts the full request and produces the response. The route
//! table never inspects, wraps, or retries what a handler does.

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

/// Request-processing logic bound to a route.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: Request<Body>) -> BoxFuture<'static, Response>;
}

/// Shared handle to a handler. The table holds a clone; whoever built the
/// handler keeps its own.
pub type SharedHandler = Arc<dyn Handler>;

/// Adapter turning an async function into a [`Handler`].
#[derive(Clone)]
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap an async function `Fn(Request<Body>) -> impl Future<Output = impl IntoResponse>`.
pub fn handler_fn<F, Fut, R>(f: F) -> HandlerFn<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    HandlerFn { f }
}

impl<F, Fut, R> Handler for HandlerFn<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, request: Request<Body>) -> BoxFuture<'static, Response> {
        let fut = (self.f)(request);
        Box::pin(async move { fut.await.into_response() })
    }
}

impl<F> std::fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerFn").finish_non_exhaustive()
    }
}
