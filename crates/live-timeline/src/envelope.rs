use crate::event::{
	AdminComment, Announcement, Card, ChatMessage, EventCategory, EventKind, EventPayload, Goal, HighlightClip, Poll, SocialPost, SponsoredContest,
	SponsoredProduct, StatsUpdate, Substitution,
};
use crate::types::{EventId, Metadata, Seconds};
use serde::{Deserialize, Serialize};

/// Uniform container for one timeline event. The fields needed for
/// sorting and filtering are copied out of the payload at construction
/// time so queries never need to match on the concrete kind; the
/// payload stays attached for typed recovery at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
	pub id: EventId,
	/// Seconds relative to the session zero point; negative = pre-show
	pub timestamp: Seconds,
	pub kind: EventKind,
	pub category: EventCategory,
	/// Tie-breaker among events sharing a timestamp; higher sorts first
	pub display_priority: i32,
	/// Kind-specific auxiliary data not modeled as first-class fields
	pub metadata: Metadata,
	payload: EventPayload,
}

impl EventEnvelope {
	/// Wrap a concrete payload; kind, category and display priority are
	/// derived from it here, once.
	pub fn new(id: impl Into<EventId>, timestamp: Seconds, payload: EventPayload) -> Self {
		let kind = payload.kind();
		Self {
			id: id.into(),
			timestamp,
			kind,
			category: kind.category(),
			display_priority: kind.default_display_priority(),
			metadata: Metadata::new(),
			payload,
		}
	}

	/// Override the kind-default display priority
	pub fn with_display_priority(mut self, display_priority: i32) -> Self {
		self.display_priority = display_priority;
		self
	}

	/// Attach auxiliary metadata
	pub fn with_metadata(mut self, metadata: Metadata) -> Self {
		self.metadata = metadata;
		self
	}

	/// Add a single metadata entry
	pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.metadata.insert(key.into(), value.into());
		self
	}

	/// The original typed payload, still behind the union
	pub fn payload(&self) -> &EventPayload {
		&self.payload
	}

	/// Consume the envelope, yielding the payload
	pub fn into_payload(self) -> EventPayload {
		self.payload
	}

	pub fn as_chat_message(&self) -> Option<&ChatMessage> {
		match &self.payload {
			EventPayload::ChatMessage(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_goal(&self) -> Option<&Goal> {
		match &self.payload {
			EventPayload::Goal(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_card(&self) -> Option<&Card> {
		match &self.payload {
			EventPayload::Card(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_substitution(&self) -> Option<&Substitution> {
		match &self.payload {
			EventPayload::Substitution(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_poll(&self) -> Option<&Poll> {
		match &self.payload {
			EventPayload::Poll(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_social_post(&self) -> Option<&SocialPost> {
		match &self.payload {
			EventPayload::SocialPost(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_highlight_clip(&self) -> Option<&HighlightClip> {
		match &self.payload {
			EventPayload::HighlightClip(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_admin_comment(&self) -> Option<&AdminComment> {
		match &self.payload {
			EventPayload::AdminComment(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_announcement(&self) -> Option<&Announcement> {
		match &self.payload {
			EventPayload::Announcement(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_stats_update(&self) -> Option<&StatsUpdate> {
		match &self.payload {
			EventPayload::StatsUpdate(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_sponsored_contest(&self) -> Option<&SponsoredContest> {
		match &self.payload {
			EventPayload::SponsoredContest(inner) => Some(inner),
			_ => None,
		}
	}

	pub fn as_sponsored_product(&self) -> Option<&SponsoredProduct> {
		match &self.payload {
			EventPayload::SponsoredProduct(inner) => Some(inner),
			_ => None,
		}
	}
}
