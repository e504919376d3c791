use crate::types::Seconds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed phase durations for one session, in seconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseConfig {
	pub pre_show: Seconds,
	pub first_half: Seconds,
	pub interval: Seconds,
	pub second_half: Seconds,
}

impl PhaseConfig {
	/// Broadcast length excluding the pre-show window
	pub fn total_duration(&self) -> Seconds {
		self.first_half + self.interval + self.second_half
	}
}

impl Default for PhaseConfig {
	fn default() -> Self {
		Self {
			pre_show: 1800.0,
			first_half: 2700.0,
			interval: 900.0,
			second_half: 2700.0,
		}
	}
}

/// Coarse lifecycle bucket derived from a position, never stored.
/// Consumers use it to pick chrome and labels; the engine itself
/// never branches on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MatchPhase {
	PreShow,
	FirstHalf,
	Interval,
	SecondHalf,
	PostShow,
}

impl MatchPhase {
	/// Pure lookup over cumulative duration thresholds
	pub fn at(position: Seconds, config: &PhaseConfig) -> Self {
		let interval_start = config.first_half;
		let second_half_start = interval_start + config.interval;
		let full_time = second_half_start + config.second_half;

		if position < 0.0 {
			MatchPhase::PreShow
		} else if position < interval_start {
			MatchPhase::FirstHalf
		} else if position < second_half_start {
			MatchPhase::Interval
		} else if position < full_time {
			MatchPhase::SecondHalf
		} else {
			MatchPhase::PostShow
		}
	}

	/// UI label for this phase
	pub fn label(&self) -> &'static str {
		match self {
			MatchPhase::PreShow => "Pre-show",
			MatchPhase::FirstHalf => "First half",
			MatchPhase::Interval => "Half-time",
			MatchPhase::SecondHalf => "Second half",
			MatchPhase::PostShow => "Full time",
		}
	}
}

impl fmt::Display for MatchPhase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}
