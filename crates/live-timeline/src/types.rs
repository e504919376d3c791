use std::collections::HashMap;

/// Position in seconds relative to the session zero point.
/// Negative values are pre-show content (lineups, previews).
pub type Seconds = f64;

/// Unique identifier for events, assigned by producers
pub type EventId = String;

/// Open string-keyed auxiliary data attached to an event
pub type Metadata = HashMap<String, String>;

/// Tolerance when deciding whether the viewer is "at live";
/// absorbs jitter from the periodic live-position driver
pub const LIVE_EPSILON_SECS: Seconds = 5.0;
