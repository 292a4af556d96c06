use crate::{config::Config, server::DashboardServer};
use anyhow::{Context, Result};
use aviwatch_core::{MapController, MapHandle, MapState};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// A running application: the map controller and the server in front of it.
///
/// Owns everything it starts. Dropping it without [`AppContext::shutdown`] leaves the tasks running
/// until the runtime ends.
pub struct AppContext {
	map: MapHandle,
	controller: JoinHandle<MapState>,
	server: DashboardServer,
}

impl AppContext {
	pub async fn start(config: Config) -> Result<AppContext> {
		config.verify()?;

		let state = config.map.initial_state()?;
		log::info!(
			"loaded {} features, {} visible",
			state.features().len(),
			state.visible().len()
		);

		let (map, controller) = MapController::spawn(state);

		let mut server = DashboardServer::from_config(&config, map.clone())?;
		if let Err(err) = server.start().await {
			map.shutdown().await;
			return Err(err).context("starting server");
		}

		Ok(AppContext { map, controller, server })
	}

	pub fn map(&self) -> &MapHandle {
		&self.map
	}

	pub fn local_addr(&self) -> Option<SocketAddr> {
		self.server.local_addr()
	}

	/// Stops the server first so no request reaches a stopped controller. Returns the final map state.
	pub async fn shutdown(mut self) -> Result<MapState> {
		self.server.stop().await;
		self.map.shutdown().await;
		self.controller.await.context("waiting for the map controller")
	}
}
