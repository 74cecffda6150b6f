//! Advisor gateway.
//!
//! Serves `GET <advisor_prefix>/overview` and answers 404 for everything
//! else.
//!
//! ```text
//!     Client Request ──▶ listener ──▶ axum + middleware ──▶ Dispatcher
//!                                    (trace, request id,      │
//!                                     timeout)                ▼
//!                                                   RouteTable lookup
//!                                                   │               │
//!                                               matched          no match
//!                                                   ▼               ▼
//!                                           overview handler       404
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;
use clap::Parser;
use serde_json::json;
use tokio::net::TcpListener;

use advisor_gateway::config::{load_config, ServerConfig};
use advisor_gateway::lifecycle::{build_route_table, Handlers, Shutdown};
use advisor_gateway::observability::init_logging;
use advisor_gateway::routing::handler_fn;
use advisor_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "advisor-gateway")]
#[command(about = "HTTP gateway for the advisor overview endpoint", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    init_logging(&config.observability);
    tracing::info!("advisor-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        advisor_prefix = %config.routes.advisor_prefix,
        "Configuration loaded"
    );

    // Stand-in until an overview controller is attached.
    let handlers = Handlers {
        overview: Arc::new(handler_fn(|_req| async {
            (
                StatusCode::NOT_IMPLEMENTED,
                Json(json!({ "error": "overview controller not configured" })),
            )
        })),
    };
    let routes = build_route_table(&config, handlers)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, routes);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
