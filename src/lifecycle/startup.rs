//! Startup orchestration.
//!
//! # Responsibilities
//! - Assemble the route table from config and externally supplied handlers
//! - Log every registered route
//!
//! # Design Decisions
//! - Fail fast: any route construction error is fatal
//! - The table is returned unfrozen; the server freezes it

use crate::advisor;
use crate::config::ServerConfig;
use crate::routing::{RouteError, RouteTable, SharedHandler};

/// Handlers the gateway dispatches to. Supplied by the embedding program.
#[derive(Clone)]
pub struct Handlers {
    pub overview: SharedHandler,
}

/// Build the full route table.
pub fn build_route_table(
    config: &ServerConfig,
    handlers: Handlers,
) -> Result<RouteTable, RouteError> {
    let mut table = RouteTable::new();
    table.mount(
        &config.routes.advisor_prefix,
        advisor::routes(handlers.overview)?,
    )?;

    for binding in table.routes() {
        tracing::info!(
            method = %binding.method(),
            route = %binding.pattern(),
            "Route registered"
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{handler_fn, Method};
    use std::sync::Arc;

    fn handlers() -> Handlers {
        Handlers {
            overview: Arc::new(handler_fn(|_req| async { "overview" })),
        }
    }

    #[test]
    fn test_overview_mounted_at_configured_prefix() {
        let mut config = ServerConfig::default();
        config.routes.advisor_prefix = "/api/advisor".into();

        let table = build_route_table(&config, handlers()).unwrap();
        assert!(table.match_route(Method::Get, "/api/advisor/overview").is_some());
        assert!(table.match_route(Method::Get, "/advisor/overview").is_none());
        assert!(table.match_route(Method::Get, "/overview").is_none());
    }

    #[test]
    fn test_bad_prefix_is_fatal() {
        let mut config = ServerConfig::default();
        config.routes.advisor_prefix = "advisor/".into();
        assert!(matches!(
            build_route_table(&config, handlers()),
            Err(RouteError::InvalidPathPattern { .. })
        ));
    }
}
