//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router around the frozen route table
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Stop on Ctrl+C or an internal shutdown signal

use std::time::Duration;

use axum::{body::Body, http::Request, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::lifecycle::signals::shutdown_signal;
use crate::routing::{Dispatcher, RouteTable};

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    dispatcher: Dispatcher,
}

impl HttpServer {
    /// Freeze `routes` and build the server around them.
    pub fn new(config: ServerConfig, routes: RouteTable) -> Self {
        let dispatcher = routes.freeze();
        let router = Self::build_router(&config, dispatcher.clone());
        Self { router, dispatcher }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The route table is the fallback service, so every request goes
    /// through it and unmatched requests get its 404.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, dispatcher: Dispatcher) -> Router {
        Router::new()
            .fallback_service(dispatcher)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        path = %req.uri().path(),
                        request_id = request_id(req).unwrap_or("-"),
                    )
                }),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.dispatcher.table().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The Axum router, for serving in-process (tests, embedding).
    pub fn into_router(self) -> Router {
        self.router
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
