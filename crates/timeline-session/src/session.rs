use crate::command::SessionCommand;
use crate::error::{Result, SessionError};
use live_timeline::{ClockConfig, EventEnvelope, EventId, LiveTimeline, PhaseConfig, Seconds, TimelineSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Per-session driver parameters
#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// Cadence of the internal live-position tick, in milliseconds
	pub tick_interval_ms: u64,
	pub clock: ClockConfig,
	pub phases: PhaseConfig,
}

impl SessionConfig {
	pub fn tick_interval(&self) -> Duration {
		Duration::from_millis(self.tick_interval_ms)
	}
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			tick_interval_ms: 500,
			clock: ClockConfig::default(),
			phases: PhaseConfig::default(),
		}
	}
}

/// Internal mutable state owned by the session actor
struct SessionActor {
	timeline: LiveTimeline,
	/// Broadcast position at the last rebase
	live_base: Seconds,
	/// Wall-clock anchor for deriving broadcast-elapsed seconds
	started: Instant,
}

impl SessionActor {
	fn new(config: &SessionConfig) -> Self {
		Self {
			timeline: LiveTimeline::with_config(config.clock.clone(), config.phases.clone()),
			live_base: 0.0,
			started: Instant::now(),
		}
	}

	fn current_live(&self) -> Seconds {
		self.live_base + self.started.elapsed().as_secs_f64()
	}

	fn handle_tick(&mut self, snapshot_tx: &watch::Sender<TimelineSnapshot>) {
		self.timeline.advance_live(self.current_live());
		snapshot_tx.send_replace(self.timeline.snapshot());
	}

	fn handle_command(&mut self, snapshot_tx: &watch::Sender<TimelineSnapshot>, command: SessionCommand) {
		match command {
			SessionCommand::Insert(event) => {
				debug!(id = %event.id, timestamp = event.timestamp, "insert event");
				self.timeline.insert(event);
			}
			SessionCommand::InsertMany(events) => {
				debug!(count = events.len(), "insert event batch");
				self.timeline.insert_many(events);
			}
			SessionCommand::Remove(id) => {
				debug!(%id, "remove event");
				self.timeline.remove(&id);
			}
			SessionCommand::Clear => {
				info!("clearing timeline store");
				self.timeline.clear();
			}
			SessionCommand::Seek(to) => {
				debug!(to, "user seek");
				self.timeline.seek_user(to);
			}
			SessionCommand::JumpToLive => {
				debug!("jump to live");
				self.timeline.jump_to_live();
			}
			SessionCommand::SetLive(to) => {
				// External driver override; rebases the internal tick
				let moved_backward = self.timeline.advance_live(to);
				if moved_backward {
					warn!(to, "live position moved backward; applying as reset");
				}
				self.live_base = to;
				self.started = Instant::now();
			}
		}

		snapshot_tx.send_replace(self.timeline.snapshot());
	}

	async fn run(
		mut self,
		config: SessionConfig,
		snapshot_tx: watch::Sender<TimelineSnapshot>,
		mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
		cancel_token: CancellationToken,
	) {
		let mut ticker = interval(config.tick_interval());

		info!(tick_interval_ms = config.tick_interval_ms, "session actor started");

		loop {
			tokio::select! {
				_ = ticker.tick() => {
					self.handle_tick(&snapshot_tx);
				}
				Some(command) = command_rx.recv() => {
					self.handle_command(&snapshot_tx, command);
				}
				_ = cancel_token.cancelled() => {
					info!("session actor cancelled");
					break;
				}
			}
		}

		info!("session actor stopped");
	}
}

/// Handle to one live-event session. Single-writer actor boundary:
/// every mutation is a command consumed by one task; readers only see
/// immutable snapshots via the watch channel. All methods take &self.
pub struct LiveSession {
	command_tx: mpsc::UnboundedSender<SessionCommand>,
	snapshot_rx: watch::Receiver<TimelineSnapshot>,
	task_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
	cancel_token: CancellationToken,
}

impl LiveSession {
	/// Spawn the session actor on the current runtime
	pub fn new(config: SessionConfig) -> Self {
		let cancel_token = CancellationToken::new();
		let (command_tx, command_rx) = mpsc::unbounded_channel();

		let actor = SessionActor::new(&config);
		let (snapshot_tx, snapshot_rx) = watch::channel(actor.timeline.snapshot());

		let task_handle = tokio::spawn(actor.run(config, snapshot_tx, command_rx, cancel_token.clone()));

		Self {
			command_tx,
			snapshot_rx,
			task_handle: Arc::new(Mutex::new(Some(task_handle))),
			cancel_token,
		}
	}

	fn send_command(&self, command: SessionCommand) -> Result<()> {
		self.command_tx.send(command).map_err(|_| SessionError::ChannelClosed)
	}

	/// Deliver one event from a producer
	pub fn insert(&self, event: EventEnvelope) -> Result<()> {
		self.send_command(SessionCommand::Insert(event))
	}

	/// Deliver a batch of events from a producer
	pub fn insert_many(&self, events: Vec<EventEnvelope>) -> Result<()> {
		self.send_command(SessionCommand::InsertMany(events))
	}

	/// Retract an event by id
	pub fn remove(&self, id: impl Into<EventId>) -> Result<()> {
		self.send_command(SessionCommand::Remove(id.into()))
	}

	/// Drop every stored event
	pub fn clear(&self) -> Result<()> {
		self.send_command(SessionCommand::Clear)
	}

	/// Scrub the viewer to a position
	pub fn seek(&self, to: Seconds) -> Result<()> {
		self.send_command(SessionCommand::Seek(to))
	}

	/// Explicit "go live" action
	pub fn jump_to_live(&self) -> Result<()> {
		self.send_command(SessionCommand::JumpToLive)
	}

	/// Override the live position from an external driver
	pub fn set_live(&self, to: Seconds) -> Result<()> {
		self.send_command(SessionCommand::SetLive(to))
	}

	/// Subscribe to snapshot updates; consumers re-render on change
	pub fn subscribe(&self) -> watch::Receiver<TimelineSnapshot> {
		self.snapshot_rx.clone()
	}

	/// Latest published snapshot
	pub fn current_snapshot(&self) -> TimelineSnapshot {
		self.snapshot_rx.borrow().clone()
	}

	/// Stop the actor and wait for it to finish
	pub async fn shutdown(self) {
		info!("shutting down session");
		self.cancel_token.cancel();

		if let Some(handle) = self.task_handle.lock().await.take() {
			let _ = handle.await;
		}
	}
}

impl Drop for LiveSession {
	fn drop(&mut self) {
		self.cancel_token.cancel();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use live_timeline::{Announcement, ChatMessage, EventEnvelope, EventPayload, Goal, TeamSide};
	use tokio::time::{sleep, Duration};

	fn fast_config() -> SessionConfig {
		SessionConfig {
			tick_interval_ms: 10,
			..SessionConfig::default()
		}
	}

	fn fixture_events() -> Vec<EventEnvelope> {
		vec![
			EventEnvelope::new(
				"lineups",
				-300.0,
				EventPayload::Announcement(Announcement {
					title: "Lineups".into(),
					body: "Confirmed".into(),
				}),
			),
			EventEnvelope::new(
				"kickoff-chat",
				0.0,
				EventPayload::ChatMessage(ChatMessage {
					author: "mod".into(),
					body: "Underway".into(),
				}),
			),
			EventEnvelope::new(
				"late-goal",
				780.0,
				EventPayload::Goal(Goal {
					player: "Rice".into(),
					side: TeamSide::Home,
				}),
			),
		]
	}

	#[tokio::test]
	async fn ticks_advance_live_and_publish_snapshots() {
		let session = LiveSession::new(fast_config());
		let mut snapshot_rx = session.subscribe();

		session.insert_many(fixture_events()).unwrap();
		sleep(Duration::from_millis(100)).await;

		snapshot_rx.changed().await.unwrap();
		let snapshot = snapshot_rx.borrow().clone();
		assert!(snapshot.is_at_live);
		assert!(snapshot.live_position > 0.0);
		assert_eq!(snapshot.total_events, 3);
		// at live shortly after kick-off: pre-show and kick-off visible
		let ids: Vec<_> = snapshot.events.iter().map(|e| e.id.clone()).collect();
		assert_eq!(ids, vec!["kickoff-chat", "lineups"]);

		session.shutdown().await;
	}

	#[tokio::test]
	async fn external_driver_catch_up_reveals_later_events() {
		let session = LiveSession::new(fast_config());
		session.insert_many(fixture_events()).unwrap();

		session.set_live(800.0).unwrap();
		sleep(Duration::from_millis(50)).await;

		let snapshot = session.current_snapshot();
		assert!(snapshot.is_at_live);
		assert!(snapshot.user_position >= 800.0);
		assert_eq!(snapshot.events.len(), 3);
		assert_eq!(snapshot.events[0].id, "late-goal");

		session.shutdown().await;
	}

	#[tokio::test]
	async fn seek_decouples_until_jump_to_live() {
		let session = LiveSession::new(fast_config());
		session.insert_many(fixture_events()).unwrap();
		session.set_live(800.0).unwrap();
		sleep(Duration::from_millis(50)).await;

		session.seek(0.0).unwrap();
		sleep(Duration::from_millis(100)).await;

		let snapshot = session.current_snapshot();
		assert_eq!(snapshot.user_position, 0.0);
		assert!(!snapshot.is_at_live);
		assert!(snapshot.lag_behind_live > 0.0);
		assert_eq!(snapshot.events.len(), 2);

		session.jump_to_live().unwrap();
		sleep(Duration::from_millis(50)).await;

		let snapshot = session.current_snapshot();
		assert!(snapshot.is_at_live);
		assert_eq!(snapshot.events.len(), 3);

		session.shutdown().await;
	}

	#[tokio::test]
	async fn backward_live_override_is_applied() {
		let session = LiveSession::new(fast_config());
		session.set_live(500.0).unwrap();
		sleep(Duration::from_millis(50)).await;

		session.set_live(100.0).unwrap();
		sleep(Duration::from_millis(30)).await;

		let snapshot = session.current_snapshot();
		assert!(snapshot.live_position >= 100.0);
		assert!(snapshot.live_position < 400.0);

		session.shutdown().await;
	}

	#[tokio::test]
	async fn clear_and_remove_flow_through_the_actor() {
		let session = LiveSession::new(fast_config());
		session.insert_many(fixture_events()).unwrap();
		session.set_live(900.0).unwrap();
		sleep(Duration::from_millis(50)).await;

		session.remove("late-goal").unwrap();
		sleep(Duration::from_millis(30)).await;
		assert_eq!(session.current_snapshot().total_events, 2);

		session.clear().unwrap();
		sleep(Duration::from_millis(30)).await;
		assert_eq!(session.current_snapshot().total_events, 0);

		session.shutdown().await;
	}
}
