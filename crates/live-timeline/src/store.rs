use crate::envelope::EventEnvelope;
use serde::{Deserialize, Serialize};

/// Authoritative holder of all events for one session.
///
/// The backing collection is kept sorted ascending by timestamp after
/// every mutation; readers never observe a partially-sorted state.
/// Single-threaded by contract, no internal locking.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TimelineStore {
	events: Vec<EventEnvelope>,
	/// State version for change tracking
	version: u64,
}

impl TimelineStore {
	/// Create an empty store
	pub fn new() -> Self {
		Self { events: Vec::new(), version: 0 }
	}

	/// Append one event and restore the sort invariant. Never fails;
	/// duplicate ids are a caller error and are kept as-is.
	pub fn insert(&mut self, event: EventEnvelope) {
		self.events.push(event);
		self.sort_events();
		self.increment_version();
	}

	/// Bulk insert; sorts once for the whole batch. Observable end
	/// state is identical to repeated `insert` calls.
	pub fn insert_many(&mut self, events: impl IntoIterator<Item = EventEnvelope>) {
		let before = self.events.len();
		self.events.extend(events);
		if self.events.len() != before {
			self.sort_events();
			self.increment_version();
		}
	}

	/// Remove the first event with a matching id; silent no-op if absent
	pub fn remove(&mut self, id: &str) {
		if let Some(index) = self.events.iter().position(|event| event.id == id) {
			self.events.remove(index);
			self.increment_version();
		}
	}

	/// Empty the store
	pub fn clear(&mut self) {
		if !self.events.is_empty() {
			self.events.clear();
			self.increment_version();
		}
	}

	/// The full collection, sorted ascending by timestamp. Snapshot
	/// semantics: clone anything you keep.
	pub fn all(&self) -> &[EventEnvelope] {
		&self.events
	}

	pub fn len(&self) -> usize {
		self.events.len()
	}

	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}

	/// Monotonic counter bumped on every observable mutation
	pub fn version(&self) -> u64 {
		self.version
	}

	fn sort_events(&mut self) {
		// Stable sort: equal timestamps keep insertion order here;
		// display ordering among ties is the query engine's job.
		self.events.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
	}

	fn increment_version(&mut self) {
		self.version = self.version.wrapping_add(1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::{ChatMessage, EventPayload};

	fn chat(id: &str, timestamp: f64) -> EventEnvelope {
		EventEnvelope::new(
			id,
			timestamp,
			EventPayload::ChatMessage(ChatMessage {
				author: "fan".into(),
				body: format!("message {id}"),
			}),
		)
	}

	fn timestamps(store: &TimelineStore) -> Vec<f64> {
		store.all().iter().map(|event| event.timestamp).collect()
	}

	#[test]
	fn insert_keeps_ascending_order() {
		let mut store = TimelineStore::new();
		store.insert(chat("c", 120.0));
		store.insert(chat("a", -300.0));
		store.insert(chat("b", 0.0));
		assert_eq!(timestamps(&store), vec![-300.0, 0.0, 120.0]);
	}

	#[test]
	fn insert_many_matches_repeated_insert() {
		let batch = vec![chat("x", 50.0), chat("y", -10.0), chat("z", 50.0)];

		let mut bulk = TimelineStore::new();
		bulk.insert_many(batch.clone());

		let mut one_by_one = TimelineStore::new();
		for event in batch {
			one_by_one.insert(event);
		}

		assert_eq!(timestamps(&bulk), timestamps(&one_by_one));
		let bulk_ids: Vec<_> = bulk.all().iter().map(|e| e.id.clone()).collect();
		let single_ids: Vec<_> = one_by_one.all().iter().map(|e| e.id.clone()).collect();
		assert_eq!(bulk_ids, single_ids);
	}

	#[test]
	fn remove_is_first_match_and_absent_is_noop() {
		let mut store = TimelineStore::new();
		store.insert_many(vec![chat("dup", 10.0), chat("dup", 20.0), chat("other", 30.0)]);

		store.remove("dup");
		assert_eq!(store.len(), 2);
		assert_eq!(store.all()[0].timestamp, 20.0);

		let version = store.version();
		store.remove("nonexistent-id");
		assert_eq!(store.len(), 2);
		assert_eq!(store.version(), version);
	}

	#[test]
	fn clear_empties_store() {
		let mut store = TimelineStore::new();
		store.insert(chat("a", 1.0));
		store.clear();
		assert!(store.is_empty());
	}

	#[test]
	fn version_tracks_observable_mutations_only() {
		let mut store = TimelineStore::new();
		let v0 = store.version();

		store.insert_many(Vec::new());
		assert_eq!(store.version(), v0);

		store.insert(chat("a", 1.0));
		assert!(store.version() > v0);

		let v1 = store.version();
		store.clear();
		assert!(store.version() > v1);

		let v2 = store.version();
		store.clear();
		assert_eq!(store.version(), v2);
	}
}
