use crate::error::Result;
use crate::event::EventKind;
use crate::store::TimelineStore;
use crate::types::{EventId, Metadata, Seconds};
use serde::{Deserialize, Serialize};

/// Transport-neutral projection of one event for external persistence
/// or analytics. Intentionally lossy: kind-specific payload fields are
/// dropped, only the uniform identity/time/kind/metadata survive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
	pub id: EventId,
	pub timestamp: Seconds,
	pub kind: EventKind,
	pub metadata: Metadata,
}

impl TimelineStore {
	/// Project the full event list, preserving store order
	pub fn export(&self) -> Vec<EventRecord> {
		self
			.all()
			.iter()
			.map(|event| EventRecord {
				id: event.id.clone(),
				timestamp: event.timestamp,
				kind: event.kind,
				metadata: event.metadata.clone(),
			})
			.collect()
	}

	/// Export as a JSON array, the only fallible operation in the core
	pub fn export_json(&self) -> Result<String> {
		Ok(serde_json::to_string(&self.export())?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::envelope::EventEnvelope;
	use crate::event::{EventPayload, Goal, TeamSide};

	#[test]
	fn export_drops_payload_but_keeps_uniform_fields() {
		let mut store = TimelineStore::new();
		store.insert(
			EventEnvelope::new(
				"goal-1",
				2712.0,
				EventPayload::Goal(Goal {
					player: "Havertz".into(),
					side: TeamSide::Away,
				}),
			)
			.with_meta("assist", "Trossard"),
		);

		let records = store.export();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].id, "goal-1");
		assert_eq!(records[0].timestamp, 2712.0);
		assert_eq!(records[0].kind, EventKind::Goal);
		assert_eq!(records[0].metadata.get("assist").map(String::as_str), Some("Trossard"));

		let json = store.export_json().unwrap();
		assert!(json.contains("\"kind\":\"goal\""));
		assert!(!json.contains("Havertz"));
	}

	#[test]
	fn export_preserves_store_order() {
		let mut store = TimelineStore::new();
		store.insert_many(vec![
			EventEnvelope::new(
				"late",
				100.0,
				EventPayload::Goal(Goal {
					player: "Rice".into(),
					side: TeamSide::Home,
				}),
			),
			EventEnvelope::new(
				"early",
				-100.0,
				EventPayload::Goal(Goal {
					player: "Saka".into(),
					side: TeamSide::Home,
				}),
			),
		]);

		let records = store.export();
		assert_eq!(records[0].id, "early");
		assert_eq!(records[1].id, "late");
	}
}
