//! Advisor route group.

use crate::routing::{RouteError, RouteTable, SharedHandler};

pub mod overview;

/// Default mount point for the group.
pub const PATH: &str = "/advisor";

/// Routes of the advisor group, relative to its mount point.
pub fn routes(overview: SharedHandler) -> Result<RouteTable, RouteError> {
    let mut table = RouteTable::new();
    table.mount("/", overview::routes(overview)?)?;
    Ok(table)
}
