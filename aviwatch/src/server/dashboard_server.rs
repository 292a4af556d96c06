//! AviWatch HTTP server lifecycle.
//!
//! - `handlers` implement the HTTP handlers and response helpers.
//! - `routes` composes them into an Axum `Router`.
//! - `cors` builds the `CorsLayer` from origin patterns.
//!
//! This file owns configuration ingestion, cross-cutting layers (CORS, extra headers, overload
//! protection), binding the socket and graceful shutdown.

use super::{cors, handlers::DashboardState, routes};
use crate::config::Config;
use anyhow::{Context, Result};
use aviwatch_core::MapHandle;
use axum::{
	BoxError, Router,
	error_handling::HandleErrorLayer,
	http::{HeaderName, HeaderValue, StatusCode, header},
	response::IntoResponse,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tower::{
	ServiceBuilder, buffer::BufferLayer, limit::ConcurrencyLimitLayer, load_shed::LoadShedLayer, timeout::TimeoutLayer,
};
use tower_http::{catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer};

const DEFAULT_IP: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_MAX_AGE: u64 = 86400;
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Serves the dashboard page and the map API for one [`MapHandle`].
///
/// Starting a running server restarts it; stopping a stopped one does nothing.
pub struct DashboardServer {
	ip: String,
	port: u16,
	state: DashboardState,
	cors_allowed_origins: Vec<String>,
	cors_max_age_seconds: u64,
	extra_response_headers: Vec<(HeaderName, HeaderValue)>,
	exit_signal: Option<oneshot::Sender<()>>,
	join: Option<JoinHandle<()>>,
	local_addr: Option<SocketAddr>,
}

impl DashboardServer {
	pub fn from_config(config: &Config, map: MapHandle) -> Result<DashboardServer> {
		let extra_response_headers = config.response_headers()?;

		Ok(DashboardServer {
			ip: config.server.ip.clone().unwrap_or(DEFAULT_IP.into()),
			port: config.server.port.unwrap_or(DEFAULT_PORT),
			state: DashboardState {
				map,
				dashboard: Arc::new(config.dashboard.clone()),
				map_config: Arc::new(config.map.clone()),
				api_enabled: !config.server.disable_api.unwrap_or(false),
			},
			cors_allowed_origins: config.cors.allowed_origins.clone(),
			cors_max_age_seconds: config.cors.max_age_seconds.unwrap_or(DEFAULT_CORS_MAX_AGE),
			extra_response_headers,
			exit_signal: None,
			join: None,
			local_addr: None,
		})
	}

	/// The bound address while running. Useful when configured with port 0.
	pub fn local_addr(&self) -> Option<SocketAddr> {
		self.local_addr
	}

	pub fn is_running(&self) -> bool {
		self.join.is_some()
	}

	fn build_app(&self) -> Result<Router> {
		let mut router = routes::build_router(self.state.clone());

		for (name, value) in &self.extra_response_headers {
			router = router.layer(SetResponseHeaderLayer::overriding(name.clone(), value.clone()));
		}

		let cors_layer = cors::build_cors_layer(&self.cors_allowed_origins, self.cors_max_age_seconds)?;
		router = router.layer(cors_layer);

		let overload_handler = HandleErrorLayer::new(|_err: BoxError| async move {
			(
				StatusCode::SERVICE_UNAVAILABLE,
				[(header::RETRY_AFTER, "2")],
				"Service overloaded, try later",
			)
				.into_response()
		});

		let protection = ServiceBuilder::new()
			.layer(overload_handler)
			.layer(CatchPanicLayer::new())
			.layer(TimeoutLayer::new(Duration::from_secs(15)))
			.layer(BufferLayer::new(256))
			.layer(ConcurrencyLimitLayer::new(64))
			.layer(LoadShedLayer::new());

		Ok(router.layer(protection))
	}

	pub async fn start(&mut self) -> Result<()> {
		if self.is_running() {
			self.stop().await;
		}

		log::info!("starting server");

		let router = self.build_app().context("building router")?;

		let addr = format!("{}:{}", self.ip, self.port);
		let listener = TcpListener::bind(&addr)
			.await
			.with_context(|| format!("binding server to {addr}"))?;
		let local_addr = listener.local_addr()?;
		log::info!("server listening on http://{local_addr}");

		let (tx, rx) = oneshot::channel::<()>();
		let handle = tokio::spawn(async move {
			if let Err(err) = axum::serve(listener, router.into_make_service())
				.with_graceful_shutdown(async {
					rx.await.ok();
				})
				.await
			{
				log::error!("server task exited with error: {err}");
			}
		});

		self.exit_signal = Some(tx);
		self.join = Some(handle);
		self.local_addr = Some(local_addr);

		Ok(())
	}

	/// Triggers graceful shutdown and waits for the serving task, at most [`SHUTDOWN_TIMEOUT`].
	pub async fn stop(&mut self) {
		if self.exit_signal.is_none() && self.join.is_none() {
			return;
		}

		log::info!("stopping server");

		if let Some(tx) = self.exit_signal.take() {
			let _ = tx.send(());
		}

		if let Some(handle) = self.join.take() {
			match tokio::time::timeout(SHUTDOWN_TIMEOUT, handle).await {
				Ok(Err(join_err)) => log::warn!("server task join error: {join_err}"),
				Ok(Ok(())) => {}
				Err(_) => log::warn!("server task did not shut down within {SHUTDOWN_TIMEOUT:?}; continuing"),
			}
		}

		self.local_addr = None;
	}
}
