//! OS signal handling.
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Ctrl+C and an internal broadcast both end the serve loop

use tokio::sync::broadcast;

/// Resolve when Ctrl+C arrives or `internal` fires (or its sender drops).
pub async fn shutdown_signal(mut internal: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutdown signal received"),
        _ = internal.recv() => tracing::info!("Shutdown requested"),
    }
}
