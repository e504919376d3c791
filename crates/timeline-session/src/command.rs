use live_timeline::{EventEnvelope, EventId, Seconds};

/// Commands accepted by the session actor. All mutation of the
/// underlying store and clock flows through these; render consumers
/// only ever see published snapshots.
#[derive(Debug, Clone)]
pub enum SessionCommand {
	/// Producer delivered one event
	Insert(EventEnvelope),
	/// Producer delivered a batch (session start, late fixture load)
	InsertMany(Vec<EventEnvelope>),
	/// Retract an event by id; no-op if absent
	Remove(EventId),
	/// Drop every stored event
	Clear,
	/// Scrub the viewer to a position (clamped by the clock)
	Seek(Seconds),
	/// Explicit "go live" action
	JumpToLive,
	/// External live driver override; replaces the internal tick's
	/// elapsed-time base
	SetLive(Seconds),
}
