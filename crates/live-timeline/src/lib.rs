pub mod clock;
pub mod envelope;
pub mod error;
pub mod event;
pub mod export;
pub mod phase;
pub mod query;
pub mod store;
pub mod types;

pub use clock::{ClockConfig, PlaybackClock};
pub use envelope::EventEnvelope;
pub use error::{Result, TimelineError};
pub use event::*;
pub use export::EventRecord;
pub use phase::{MatchPhase, PhaseConfig};
pub use store::TimelineStore;
pub use types::*;

use serde::{Deserialize, Serialize};

/// Main entry point for one live-event session: one store, one clock,
/// one set of phase constants, owned together and driven from a single
/// thread.
#[derive(Debug, Clone, Default)]
pub struct LiveTimeline {
	store: TimelineStore,
	clock: PlaybackClock,
	phases: PhaseConfig,
}

impl LiveTimeline {
	/// Create a session with default durations
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a session with explicit clock and phase parameters
	pub fn with_config(clock: ClockConfig, phases: PhaseConfig) -> Self {
		Self {
			store: TimelineStore::new(),
			clock: PlaybackClock::new(clock),
			phases,
		}
	}

	pub fn store(&self) -> &TimelineStore {
		&self.store
	}

	pub fn clock(&self) -> &PlaybackClock {
		&self.clock
	}

	pub fn insert(&mut self, event: EventEnvelope) {
		self.store.insert(event);
	}

	pub fn insert_many(&mut self, events: impl IntoIterator<Item = EventEnvelope>) {
		self.store.insert_many(events);
	}

	pub fn remove(&mut self, id: &str) {
		self.store.remove(id);
	}

	pub fn clear(&mut self) {
		self.store.clear();
	}

	/// Advance the broadcast position; returns true if the driver
	/// moved time backward (see `PlaybackClock::advance_live`)
	pub fn advance_live(&mut self, to: Seconds) -> bool {
		self.clock.advance_live(to)
	}

	pub fn seek_user(&mut self, to: Seconds) {
		self.clock.seek_user(to)
	}

	pub fn jump_to_live(&mut self) {
		self.clock.jump_to_live()
	}

	/// Lifecycle phase at the viewer's current position
	pub fn phase(&self) -> MatchPhase {
		MatchPhase::at(self.clock.user_position(), &self.phases)
	}

	/// Events visible at the viewer's current position, newest first
	pub fn visible_events(&self) -> Vec<EventEnvelope> {
		self.store.visible_events(self.clock.user_position())
	}

	/// Complete render-ready view of the session at this instant
	pub fn snapshot(&self) -> TimelineSnapshot {
		TimelineSnapshot {
			user_position: self.clock.user_position(),
			live_position: self.clock.live_position(),
			is_at_live: self.clock.is_at_live(),
			lag_behind_live: self.clock.lag_behind_live(),
			phase: self.phase(),
			total_events: self.store.len(),
			version: self.store.version(),
			events: self.visible_events(),
		}
	}
}

/// Timeline snapshot for UI rendering - the complete session view at
/// one instant. Immutable value; consumers re-request after any store
/// or clock change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSnapshot {
	pub user_position: Seconds,
	pub live_position: Seconds,
	pub is_at_live: bool,
	pub lag_behind_live: Seconds,
	pub phase: MatchPhase,
	/// Total stored events, visible or not
	pub total_events: usize,
	/// Store version for change tracking
	pub version: u64,
	/// Visible events, newest first
	pub events: Vec<EventEnvelope>,
}
