//! HTTP handlers and small response helpers.
//!
//! CORS headers are left to the `CorsLayer`.

use crate::{
	config::{DashboardConfig, MapConfig},
	dashboard::{Component, build_dashboard},
};
use aviwatch_core::MapHandle;
use axum::{
	body::{Body, Bytes},
	extract::State,
	http::{StatusCode, header},
	response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Shared by all handlers. Cloned per request.
#[derive(Clone)]
pub struct DashboardState {
	pub map: MapHandle,
	pub dashboard: Arc<DashboardConfig>,
	pub map_config: Arc<MapConfig>,
	pub api_enabled: bool,
}

pub async fn serve_page(State(state): State<DashboardState>) -> Response<Body> {
	let snapshot = state.map.snapshot();
	log::debug!("render dashboard at revision {}", snapshot.revision);
	let page = build_dashboard(&state.dashboard, &state.map_config, &snapshot, state.api_enabled);
	ok_html(page.to_html())
}

pub async fn serve_status() -> Response<Body> {
	ok_text("ready!")
}

pub async fn api_status(State(state): State<DashboardState>) -> Response<Body> {
	let snapshot = state.map.snapshot();
	ok_json(&json!({
		"status": "ready",
		"revision": snapshot.revision,
		"features": snapshot.rendered.len(),
		"options": snapshot.options.len(),
		"visible": snapshot.visible.len(),
	}))
}

pub async fn get_features(State(state): State<DashboardState>) -> Response<Body> {
	ok_json(&state.map.snapshot().rendered.to_geojson())
}

pub async fn get_visible(State(state): State<DashboardState>) -> Response<Body> {
	ok_json(&json!(state.map.visible_names()))
}

/// Replaces the selection with the JSON array of names in the body and answers with the new render.
pub async fn put_visible(State(state): State<DashboardState>, body: Bytes) -> Response<Body> {
	let names: Vec<String> = match serde_json::from_slice(&body) {
		Ok(names) => names,
		Err(err) => {
			log::debug!("reject selection update: {err}");
			return error_with(
				StatusCode::BAD_REQUEST,
				&format!("expected a JSON array of feature names: {err}"),
			);
		}
	};

	log::debug!("handle selection update: {names:?}");

	match state.map.select(names).await {
		Ok(rendered) => ok_json(&rendered.to_geojson()),
		Err(err) => {
			log::warn!("send 500 for selection update. Error:\n{}", format_error_chain(&err));
			error_500()
		}
	}
}

pub async fn get_options(State(state): State<DashboardState>) -> Response<Body> {
	ok_json(&json!(state.map.options()))
}

pub async fn get_path(State(state): State<DashboardState>) -> Response<Body> {
	match serde_json::to_value(&state.map_config.path) {
		Ok(path) => ok_json(&path),
		Err(err) => {
			log::error!("serializing map path failed: {err}");
			error_500()
		}
	}
}

/// `[west, south, east, north]` of the visible features, or `null`.
pub async fn get_bounds(State(state): State<DashboardState>) -> Response<Body> {
	let bounds = state.map.snapshot().rendered.bounds();
	ok_json(&json!(bounds))
}

pub async fn fallback_404() -> Response<Body> {
	error_404()
}

// --- small helpers -----------------------------------------------------------

pub fn format_error_chain(err: &anyhow::Error) -> String {
	let mut result = err.to_string();
	for (i, cause) in err.chain().skip(1).enumerate() {
		if i == 0 {
			result.push_str("\n  Caused by:");
		}
		result.push_str(&format!("\n    {cause}"));
	}
	result
}

pub fn error_with(status: StatusCode, message: &str) -> Response<Body> {
	(
		status,
		[(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
		message.to_string(),
	)
		.into_response()
}

pub fn error_404() -> Response<Body> {
	error_with(StatusCode::NOT_FOUND, "Not Found")
}

pub fn error_500() -> Response<Body> {
	error_with(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// API answers always reflect the live selection, so nothing may be cached.
pub fn ok_json(value: &Value) -> Response<Body> {
	(
		[
			(header::CONTENT_TYPE, "application/json"),
			(header::CACHE_CONTROL, "no-store"),
		],
		value.to_string(),
	)
		.into_response()
}

pub fn ok_html(html: String) -> Response<Body> {
	(
		[
			(header::CONTENT_TYPE, "text/html; charset=utf-8"),
			(header::CACHE_CONTROL, "no-store"),
		],
		html,
	)
		.into_response()
}

fn ok_text(text: &'static str) -> Response<Body> {
	([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response()
}
