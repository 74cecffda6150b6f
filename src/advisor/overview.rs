//! `GET /overview`, delegated to the supplied overview handler.

use crate::routing::{Method, RouteError, RouteTable, SharedHandler};

pub const PATH: &str = "/overview";

pub fn routes(handler: SharedHandler) -> Result<RouteTable, RouteError> {
    let mut table = RouteTable::new();
    table.register(Method::Get, PATH, handler)?;
    Ok(table)
}
