use crate::envelope::EventEnvelope;
use crate::event::{ChatMessage, EventCategory, EventKind, Goal};
use crate::store::TimelineStore;
use crate::types::Seconds;
use std::cmp::Ordering;

/// Reverse-chronological display order: most recent first, ties broken
/// by display priority (higher first among simultaneous events).
fn display_order(a: &EventEnvelope, b: &EventEnvelope) -> Ordering {
	b.timestamp.total_cmp(&a.timestamp).then_with(|| b.display_priority.cmp(&a.display_priority))
}

/// Visibility queries over the store. Each call recomputes from
/// scratch and returns a fresh snapshot; with hundreds of events per
/// session that is cheap, trivially supports arbitrary backward seeks,
/// and keeps two calls with identical inputs bit-identical.
impl TimelineStore {
	/// Everything that has happened up to the given position,
	/// newest first
	pub fn visible_events(&self, position: Seconds) -> Vec<EventEnvelope> {
		let mut visible: Vec<EventEnvelope> = self.all().iter().filter(|event| event.timestamp <= position).cloned().collect();
		visible.sort_by(display_order);
		visible
	}

	/// Visible events narrowed to one kind
	pub fn events_of_kind(&self, kind: EventKind, position: Seconds) -> Vec<EventEnvelope> {
		let mut visible: Vec<EventEnvelope> = self
			.all()
			.iter()
			.filter(|event| event.kind == kind && event.timestamp <= position)
			.cloned()
			.collect();
		visible.sort_by(display_order);
		visible
	}

	/// Visible events narrowed to one coarse category
	pub fn events_of_category(&self, category: EventCategory, position: Seconds) -> Vec<EventEnvelope> {
		let mut visible: Vec<EventEnvelope> = self
			.all()
			.iter()
			.filter(|event| event.category == category && event.timestamp <= position)
			.cloned()
			.collect();
		visible.sort_by(display_order);
		visible
	}

	/// Typed convenience view for the chat feed
	pub fn visible_chat_messages(&self, position: Seconds) -> Vec<ChatMessage> {
		self
			.events_of_kind(EventKind::ChatMessage, position)
			.iter()
			.filter_map(|event| event.as_chat_message().cloned())
			.collect()
	}

	/// Typed convenience view for the score ticker
	pub fn visible_goals(&self, position: Seconds) -> Vec<Goal> {
		self
			.events_of_kind(EventKind::Goal, position)
			.iter()
			.filter_map(|event| event.as_goal().cloned())
			.collect()
	}
}
