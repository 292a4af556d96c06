use super::MapSnapshot;
use crate::{
	map::{MapState, RenderedFeatureList},
	types::FeatureSpec,
};
use anyhow::{Result, anyhow};
use std::sync::Arc;
use tokio::{
	sync::{mpsc, oneshot, watch},
	task::JoinHandle,
};

/// Capacity of the event queue in front of the controller.
const QUEUE_SIZE: usize = 64;

/// Something that happened outside the map and changes what it shows.
#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent {
	/// The selector's complete new selection. Never a delta.
	SelectionChanged(Vec<String>),
	/// A new feature collection, e.g. the result of an asynchronous fetch.
	FeaturesLoaded(Vec<FeatureSpec>),
}

enum Command {
	Apply {
		event: MapEvent,
		reply: oneshot::Sender<Result<RenderedFeatureList>>,
	},
	Shutdown,
}

/// Owner of a [`MapState`]; runs as a single tokio task.
pub struct MapController {
	state: MapState,
	revision: u64,
	commands: mpsc::Receiver<Command>,
	snapshots: watch::Sender<Arc<MapSnapshot>>,
}

impl MapController {
	/// Spawns the controller on the current tokio runtime.
	///
	/// The returned join handle resolves to the final state once the controller stopped, either
	/// through [`MapHandle::shutdown`] or because every handle was dropped.
	pub fn spawn(state: MapState) -> (MapHandle, JoinHandle<MapState>) {
		let (tx, rx) = mpsc::channel(QUEUE_SIZE);
		let (snapshots, watcher) = watch::channel(Arc::new(MapSnapshot::of(&state, 0)));

		let controller = MapController {
			state,
			revision: 0,
			commands: rx,
			snapshots,
		};
		let join = tokio::spawn(controller.run());

		(MapHandle { commands: tx, watcher }, join)
	}

	async fn run(mut self) -> MapState {
		log::debug!("map controller started");

		while let Some(command) = self.commands.recv().await {
			match command {
				Command::Apply { event, reply } => {
					let result = self.apply(event);
					// The caller may have given up waiting; the update still counts.
					let _ = reply.send(result);
				}
				Command::Shutdown => break,
			}
		}

		log::debug!("map controller stopped at revision {}", self.revision);
		self.state
	}

	fn apply(&mut self, event: MapEvent) -> Result<RenderedFeatureList> {
		log::debug!("apply map event: {event:?}");

		match event {
			MapEvent::SelectionChanged(names) => self.state.replace_visible_names(names),
			MapEvent::FeaturesLoaded(specs) => {
				// Validate before touching the state so a bad batch leaves it unchanged.
				let state = self.state.clone().replace_features(specs)?;
				self.state = state;
			}
		}

		self.revision += 1;
		let snapshot = Arc::new(MapSnapshot::of(&self.state, self.revision));
		let rendered = snapshot.rendered.clone();
		self.snapshots.send_replace(snapshot);
		Ok(rendered)
	}
}

/// Cloneable access point to a running [`MapController`].
#[derive(Clone)]
pub struct MapHandle {
	commands: mpsc::Sender<Command>,
	watcher: watch::Receiver<Arc<MapSnapshot>>,
}

impl MapHandle {
	/// Replaces the visible set with `names` and returns the resulting render.
	pub async fn select<I, S>(&self, names: I) -> Result<RenderedFeatureList>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let names = names.into_iter().map(Into::into).collect();
		self.send(MapEvent::SelectionChanged(names)).await
	}

	/// Replaces the feature collection, keeping the visible set.
	pub async fn load_features(&self, specs: Vec<FeatureSpec>) -> Result<RenderedFeatureList> {
		self.send(MapEvent::FeaturesLoaded(specs)).await
	}

	pub async fn send(&self, event: MapEvent) -> Result<RenderedFeatureList> {
		let (reply, response) = oneshot::channel();
		self
			.commands
			.send(Command::Apply { event, reply })
			.await
			.map_err(|_| anyhow!("map controller has shut down"))?;
		response
			.await
			.map_err(|_| anyhow!("map controller stopped before replying"))?
	}

	/// The latest published snapshot.
	pub fn snapshot(&self) -> Arc<MapSnapshot> {
		self.watcher.borrow().clone()
	}

	pub fn render(&self) -> RenderedFeatureList {
		self.snapshot().rendered.clone()
	}

	pub fn options(&self) -> Vec<String> {
		self.snapshot().options.clone()
	}

	pub fn visible_names(&self) -> Vec<String> {
		self.snapshot().visible.clone()
	}

	/// Receives every snapshot published after the call.
	pub fn subscribe(&self) -> watch::Receiver<Arc<MapSnapshot>> {
		let mut receiver = self.watcher.clone();
		receiver.mark_unchanged();
		receiver
	}

	/// Asks the controller to stop after the events already queued.
	pub async fn shutdown(&self) {
		if self.commands.send(Command::Shutdown).await.is_err() {
			log::debug!("map controller already stopped");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn state() -> MapState {
		MapState::initialize(
			vec![
				FeatureSpec::new("Pássaro", 29.006360, -81.144778),
				FeatureSpec::new("Pássaro", 29.016360, -81.144778),
				FeatureSpec::new("Garça", 29.026360, -81.144778),
			],
			["Pássaro", "Garça"],
		)
		.unwrap()
	}

	#[tokio::test]
	async fn initial_snapshot() {
		let (handle, _join) = MapController::spawn(state());
		let snapshot = handle.snapshot();
		assert_eq!(snapshot.revision, 0);
		assert_eq!(snapshot.rendered.len(), 3);
		assert_eq!(snapshot.options, vec!["Pássaro", "Garça"]);
		assert_eq!(snapshot.visible, vec!["Garça", "Pássaro"]);
	}

	#[tokio::test]
	async fn select_replaces_whole_selection() {
		let (handle, _join) = MapController::spawn(state());

		let rendered = handle.select(["Garça"]).await.unwrap();
		assert_eq!(rendered.len(), 1);
		assert_eq!(handle.visible_names(), vec!["Garça"]);

		let rendered = handle.select(Vec::<String>::new()).await.unwrap();
		assert!(rendered.is_empty());
		assert!(handle.render().is_empty());

		let rendered = handle.select(["Pássaro"]).await.unwrap();
		assert_eq!(rendered.len(), 2);
		assert_eq!(handle.snapshot().revision, 3);
	}

	#[tokio::test]
	async fn unknown_names_are_not_an_error() {
		let (handle, _join) = MapController::spawn(state());
		let rendered = handle.select(["Zephyr"]).await.unwrap();
		assert!(rendered.is_empty());
	}

	#[tokio::test]
	async fn events_apply_in_order() {
		let (handle, join) = MapController::spawn(state());

		for names in [vec!["Garça"], vec![], vec!["Pássaro"]] {
			handle.select(names).await.unwrap();
		}

		handle.shutdown().await;
		let state = join.await.unwrap();
		assert_eq!(state.visible_names(), vec!["Pássaro"]);
	}

	#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
	async fn concurrent_producers_each_get_their_own_render() {
		let (handle, join) = MapController::spawn(state());
		let selections: Vec<Vec<&str>> = (0..32)
			.map(|i| match i % 4 {
				0 => vec!["Garça"],
				1 => vec!["Pássaro"],
				2 => vec![],
				_ => vec!["Pássaro", "Garça"],
			})
			.collect();

		let mut tasks = tokio::task::JoinSet::new();
		for names in selections.clone() {
			let handle = handle.clone();
			tasks.spawn(async move {
				let rendered = handle.select(names.clone()).await.unwrap();
				(names, rendered)
			});
		}

		while let Some(result) = tasks.join_next().await {
			let (names, rendered) = result.unwrap();
			let expected = names.iter().map(|n| if *n == "Pássaro" { 2 } else { 1 }).sum::<usize>();
			assert_eq!(rendered.len(), expected, "selection {names:?}");
			assert!(rendered.iter().all(|f| names.contains(&f.name.as_str())), "selection {names:?}");
		}

		assert_eq!(handle.snapshot().revision, selections.len() as u64);

		handle.shutdown().await;
		let state = join.await.unwrap();
		let mut last = state.visible_names();
		last.sort();
		assert!(
			selections.iter().any(|names| {
				let mut names: Vec<String> = names.iter().map(ToString::to_string).collect();
				names.sort();
				names == last
			}),
			"{last:?}"
		);
	}

	#[tokio::test]
	async fn subscribers_see_updates() {
		let (handle, _join) = MapController::spawn(state());
		let mut receiver = handle.subscribe();
		assert!(!receiver.has_changed().unwrap());

		handle.select(["Garça"]).await.unwrap();
		receiver.changed().await.unwrap();
		let snapshot = receiver.borrow_and_update().clone();
		assert_eq!(snapshot.revision, 1);
		assert_eq!(snapshot.rendered.len(), 1);
	}

	#[tokio::test]
	async fn invalid_feature_batch_keeps_state() {
		let (handle, _join) = MapController::spawn(state());

		let err = handle.load_features(vec![FeatureSpec::default()]).await.unwrap_err();
		assert_eq!(err.to_string(), "replacing map features");
		assert_eq!(handle.snapshot().revision, 0);
		assert_eq!(handle.render().len(), 3);

		let rendered = handle
			.load_features(vec![FeatureSpec::new("Garça", 1.0, 2.0)])
			.await
			.unwrap();
		assert_eq!(rendered.len(), 1);
		assert_eq!(handle.options(), vec!["Garça"]);
	}

	#[tokio::test]
	async fn calls_after_shutdown_fail() {
		let (handle, join) = MapController::spawn(state());
		handle.shutdown().await;
		join.await.unwrap();

		let err = handle.select(["Garça"]).await.unwrap_err();
		assert_eq!(err.to_string(), "map controller has shut down");
		handle.shutdown().await;
	}
}
