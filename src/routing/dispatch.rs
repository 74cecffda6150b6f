//! Request dispatch over a frozen route table.
//!
//! The dispatcher is the top-level consumer of the table: it turns a
//! no-match into `404 Not Found` and otherwise hands the request to the
//! bound handler exactly once.

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use tower::Service;

use crate::routing::router::RouteTable;

/// Immutable, cheaply cloneable view of a built route table.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    table: Arc<RouteTable>,
}

impl Dispatcher {
    pub(crate) fn new(table: RouteTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// The frozen table, for read-only lookups.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Route `request` to its handler, or answer 404.
    ///
    /// The only change made to the request is a [`PathParams`](crate::routing::PathParams) extension,
    /// added when the pattern captured parameters. The handler's response
    /// is returned as-is.
    pub async fn dispatch(&self, mut request: Request<Body>) -> Response {
        let found = self
            .table
            .match_request(&request)
            .map(|m| (m.handler().clone(), m.params, m.binding.pattern().to_string()));

        let Some((handler, params, route)) = found else {
            tracing::debug!(
                method = %request.method(),
                path = %request.uri().path(),
                "No route matched"
            );
            return not_found();
        };

        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            route = %route,
            "Route matched"
        );

        if !params.is_empty() {
            request.extensions_mut().insert(params);
        }
        handler.call(request).await
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "No matching route found").into_response()
}

impl Service<Request<Body>> for Dispatcher {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let this = self.clone();
        Box::pin(async move { Ok(this.dispatch(request).await) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::handler::handler_fn;
    use crate::routing::matcher::PathParams;
    use crate::routing::method::Method;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_handler_invoked_once_per_match() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut table = RouteTable::new();
        table
            .get(
                "/overview",
                Arc::new(handler_fn(move |_req| {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        StatusCode::OK
                    }
                })),
            )
            .unwrap();
        let dispatcher = table.freeze();

        let res = dispatcher.dispatch(request("GET", "/overview")).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let res = dispatcher.dispatch(request("POST", "/overview")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let res = dispatcher.dispatch(request("GET", "/other")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_handler_errors_pass_through() {
        let mut table = RouteTable::new();
        table
            .get(
                "/overview",
                Arc::new(handler_fn(|_req| async {
                    (StatusCode::SERVICE_UNAVAILABLE, "upstream down")
                })),
            )
            .unwrap();

        let res = table.freeze().dispatch(request("GET", "/overview")).await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"upstream down");
    }

    #[tokio::test]
    async fn test_request_reaches_handler_unmodified() {
        let mut table = RouteTable::new();
        table
            .register(
                Method::Get,
                "/clients/{id}",
                Arc::new(handler_fn(|req: Request<Body>| async move {
                    let id = req
                        .extensions()
                        .get::<PathParams>()
                        .and_then(|p| p.get("id"))
                        .unwrap_or_default()
                        .to_string();
                    let query = req.uri().query().unwrap_or_default().to_string();
                    let header = req
                        .headers()
                        .get("x-trace")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    format!("{id}|{query}|{header}")
                })),
            )
            .unwrap();

        let req = Request::builder()
            .uri("/clients/9?window=30d")
            .header("x-trace", "abc")
            .body(Body::empty())
            .unwrap();
        let mut dispatcher = table.freeze();
        let res = dispatcher.call(req).await.unwrap();
        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"9|window=30d|abc");
    }

    #[tokio::test]
    async fn test_literal_route_adds_no_extension() {
        let mut table = RouteTable::new();
        table
            .get(
                "/overview",
                Arc::new(handler_fn(|req: Request<Body>| async move {
                    if req.extensions().get::<PathParams>().is_some() {
                        StatusCode::INTERNAL_SERVER_ERROR
                    } else {
                        StatusCode::OK
                    }
                })),
            )
            .unwrap();

        let res = table.freeze().dispatch(request("GET", "/overview")).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
