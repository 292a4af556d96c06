//! HTTP server for the dashboard and its map API.

mod cors;
mod dashboard_server;
mod handlers;
mod routes;

pub use dashboard_server::*;
pub use handlers::DashboardState;
pub use routes::build_router;

pub(crate) use cors::check_origin_patterns;
