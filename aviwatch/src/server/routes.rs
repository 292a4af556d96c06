//! Router composition. Lifecycle, CORS and extra headers live in `dashboard_server`.

use super::handlers::{
	DashboardState, api_status, fallback_404, get_bounds, get_features, get_options, get_path, get_visible,
	put_visible, serve_page, serve_status,
};
use axum::{Router, routing::get};

/// Page and health check. Always present.
pub fn add_page_to_app(app: Router<DashboardState>) -> Router<DashboardState> {
	app.route("/", get(serve_page)).route("/status", get(serve_status))
}

/// JSON API under `/api`.
pub fn add_api_to_app(app: Router<DashboardState>) -> Router<DashboardState> {
	app
		.route("/api/status", get(api_status))
		.route("/api/map/features", get(get_features))
		.route("/api/map/visible", get(get_visible).put(put_visible))
		.route("/api/map/options", get(get_options))
		.route("/api/map/path", get(get_path))
		.route("/api/map/bounds", get(get_bounds))
}

pub fn build_router(state: DashboardState) -> Router {
	let mut app = add_page_to_app(Router::new());
	if state.api_enabled {
		app = add_api_to_app(app);
	} else {
		log::info!("JSON API is disabled");
	}
	app.fallback(fallback_404).with_state(state)
}
