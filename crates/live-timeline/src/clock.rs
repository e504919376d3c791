use crate::types::{Seconds, LIVE_EPSILON_SECS};
use serde::{Deserialize, Serialize};

/// Fixed parameters for one session's clock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClockConfig {
	/// Upper bound for the live position, in seconds
	pub total_duration: Seconds,
	/// How far before zero the user may scrub (pre-show window)
	pub pre_show_duration: Seconds,
	/// Tolerance for the is-at-live check
	pub live_epsilon: Seconds,
}

impl Default for ClockConfig {
	fn default() -> Self {
		Self {
			// two 45-minute halves plus a 15-minute interval
			total_duration: 6300.0,
			pre_show_duration: 1800.0,
			live_epsilon: LIVE_EPSILON_SECS,
		}
	}
}

/// Tracks the broadcast's live position and the viewer's scrub position.
///
/// Invariant: `user_position <= live_position` at all times. While the
/// viewer is at live, advancing the live position pulls the user
/// position along; once they scrub backward they decouple until an
/// explicit jump back to live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackClock {
	user_position: Seconds,
	live_position: Seconds,
	config: ClockConfig,
}

impl PlaybackClock {
	/// Both positions start at zero (nominal kick-off)
	pub fn new(config: ClockConfig) -> Self {
		Self {
			user_position: 0.0,
			live_position: 0.0,
			config,
		}
	}

	pub fn user_position(&self) -> Seconds {
		self.user_position
	}

	pub fn live_position(&self) -> Seconds {
		self.live_position
	}

	pub fn config(&self) -> &ClockConfig {
		&self.config
	}

	/// True when the viewer is following the broadcast, within epsilon
	pub fn is_at_live(&self) -> bool {
		(self.live_position - self.user_position).abs() < self.config.live_epsilon
	}

	/// How far the viewer trails the broadcast, never negative
	pub fn lag_behind_live(&self) -> Seconds {
		(self.live_position - self.user_position).max(0.0)
	}

	/// Set the live position, clamped to `[0, total_duration]`.
	///
	/// If the viewer was at live before the call they stay glued to the
	/// new position; a decoupled viewer is left where they are. A value
	/// earlier than the current live position is accepted and applied
	/// as a reset to that value (the user position is pulled back only
	/// as far as needed to keep it at or below live). Returns whether
	/// time moved backward so callers can surface driver jitter.
	pub fn advance_live(&mut self, to: Seconds) -> bool {
		let was_at_live = self.is_at_live();
		let moved_backward = to < self.live_position;

		self.live_position = to.clamp(0.0, self.config.total_duration);
		if was_at_live {
			self.user_position = self.live_position;
		} else {
			self.user_position = self.user_position.min(self.live_position);
		}

		moved_backward
	}

	/// Scrub to a position, clamped to `[-pre_show_duration, live_position]`.
	/// Out-of-range input snaps to the nearest bound rather than failing.
	pub fn seek_user(&mut self, to: Seconds) {
		self.user_position = to.clamp(-self.config.pre_show_duration, self.live_position);
	}

	/// Explicit "go live" action
	pub fn jump_to_live(&mut self) {
		self.user_position = self.live_position;
	}

	/// Session restart: both positions back to zero
	pub fn reset(&mut self) {
		self.user_position = 0.0;
		self.live_position = 0.0;
	}
}

impl Default for PlaybackClock {
	fn default() -> Self {
		Self::new(ClockConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn clock() -> PlaybackClock {
		PlaybackClock::new(ClockConfig::default())
	}

	#[test]
	fn starts_at_live() {
		let clock = clock();
		assert!(clock.is_at_live());
		assert_eq!(clock.lag_behind_live(), 0.0);
	}

	#[test]
	fn live_follow_pulls_user_forward() {
		let mut clock = clock();
		clock.advance_live(800.0);
		assert_eq!(clock.live_position(), 800.0);
		assert_eq!(clock.user_position(), 800.0);
		assert!(clock.is_at_live());
	}

	#[test]
	fn backward_seek_decouples_from_live() {
		let mut clock = clock();
		clock.advance_live(500.0);
		clock.seek_user(100.0);
		assert!(!clock.is_at_live());

		clock.advance_live(900.0);
		assert_eq!(clock.user_position(), 100.0);
		assert_eq!(clock.lag_behind_live(), 800.0);
	}

	#[test]
	fn jump_to_live_recouples() {
		let mut clock = clock();
		clock.advance_live(500.0);
		clock.seek_user(100.0);
		clock.advance_live(900.0);

		clock.jump_to_live();
		assert_eq!(clock.user_position(), 900.0);
		assert!(clock.is_at_live());
	}

	#[test]
	fn seek_clamps_to_live_and_pre_show_floor() {
		let mut clock = clock();
		clock.advance_live(300.0);

		clock.seek_user(1_000_000.0);
		assert_eq!(clock.user_position(), 300.0);

		clock.seek_user(-99_999.0);
		assert_eq!(clock.user_position(), -1800.0);
	}

	#[test]
	fn advance_live_clamps_to_total_duration() {
		let mut clock = clock();
		clock.advance_live(1_000_000.0);
		assert_eq!(clock.live_position(), 6300.0);
		assert_eq!(clock.user_position(), 6300.0);
	}

	#[test]
	fn backward_live_time_is_applied_and_reported() {
		let mut clock = clock();
		clock.advance_live(500.0);
		let moved_backward = clock.advance_live(200.0);
		assert!(moved_backward);
		assert_eq!(clock.live_position(), 200.0);
		// was at live, so the viewer follows the reset
		assert_eq!(clock.user_position(), 200.0);
	}

	#[test]
	fn backward_live_time_never_leaves_user_ahead_of_live() {
		let mut clock = clock();
		clock.advance_live(500.0);
		clock.seek_user(400.0);

		clock.advance_live(300.0);
		assert!(clock.user_position() <= clock.live_position());
		assert_eq!(clock.user_position(), 300.0);
	}

	#[test]
	fn reset_returns_both_positions_to_zero() {
		let mut clock = clock();
		clock.advance_live(500.0);
		clock.seek_user(100.0);

		clock.reset();
		assert_eq!(clock.user_position(), 0.0);
		assert_eq!(clock.live_position(), 0.0);
		assert!(clock.is_at_live());
	}

	#[test]
	fn within_epsilon_counts_as_live() {
		let mut clock = clock();
		clock.advance_live(100.0);
		clock.seek_user(97.0);
		assert!(clock.is_at_live());

		clock.advance_live(200.0);
		// still glued: the small gap was within epsilon
		assert_eq!(clock.user_position(), 200.0);
	}
}
