//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use advisor_gateway::config::ServerConfig;
use advisor_gateway::lifecycle::{build_route_table, Handlers, Shutdown};
use advisor_gateway::routing::{handler_fn, SharedHandler};
use advisor_gateway::HttpServer;
use axum::http::StatusCode;

/// Overview handler that counts its invocations and answers with a fixed body.
pub fn counting_overview(body: &'static str) -> (SharedHandler, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let handler: SharedHandler = Arc::new(handler_fn(move |_req| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            (StatusCode::OK, body)
        }
    }));
    (handler, calls)
}

/// Build a server with the default config and the given overview handler.
pub fn server_with(config: ServerConfig, overview: SharedHandler) -> HttpServer {
    let routes = build_route_table(&config, Handlers { overview }).unwrap();
    HttpServer::new(config, routes)
}

/// Start a server on an ephemeral port. Keep the returned `Shutdown` alive.
#[allow(dead_code)]
pub async fn start_server(overview: SharedHandler) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServerConfig::default();
    config.listener.bind_address = addr.to_string();
    let server = server_with(config, overview);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}
