use crate::types::Metadata;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator over the closed set of event kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
	ChatMessage,
	Goal,
	Card,
	Substitution,
	Poll,
	SocialPost,
	HighlightClip,
	AdminComment,
	Announcement,
	StatsUpdate,
	SponsoredContest,
	SponsoredProduct,
}

impl EventKind {
	/// Stable wire/analytics label for this kind
	pub fn label(&self) -> &'static str {
		match self {
			EventKind::ChatMessage => "chat.message",
			EventKind::Goal => "match.goal",
			EventKind::Card => "match.card",
			EventKind::Substitution => "match.substitution",
			EventKind::Poll => "engagement.poll",
			EventKind::SocialPost => "social.post",
			EventKind::HighlightClip => "media.highlight",
			EventKind::AdminComment => "editorial.comment",
			EventKind::Announcement => "editorial.announcement",
			EventKind::StatsUpdate => "match.stats",
			EventKind::SponsoredContest => "engagement.contest",
			EventKind::SponsoredProduct => "commerce.product",
		}
	}

	/// Coarse grouping used for broad filtering
	pub fn category(&self) -> EventCategory {
		match self {
			EventKind::Goal | EventKind::Card | EventKind::Substitution | EventKind::StatsUpdate => EventCategory::MatchPlay,
			EventKind::ChatMessage => EventCategory::Chat,
			EventKind::SocialPost => EventCategory::Social,
			EventKind::HighlightClip => EventCategory::Media,
			EventKind::AdminComment | EventKind::Announcement => EventCategory::Editorial,
			EventKind::Poll | EventKind::SponsoredContest => EventCategory::Engagement,
			EventKind::SponsoredProduct => EventCategory::Commerce,
		}
	}

	/// Tie-breaker among events sharing a timestamp; higher sorts first.
	/// Match-play beats editorial beats engagement beats chat.
	pub fn default_display_priority(&self) -> i32 {
		match self {
			EventKind::Goal => 100,
			EventKind::Card => 90,
			EventKind::Substitution => 80,
			EventKind::StatsUpdate => 70,
			EventKind::HighlightClip => 60,
			EventKind::Announcement => 50,
			EventKind::AdminComment => 40,
			EventKind::Poll => 30,
			EventKind::SponsoredContest => 25,
			EventKind::SponsoredProduct => 20,
			EventKind::SocialPost => 10,
			EventKind::ChatMessage => 0,
		}
	}
}

impl fmt::Display for EventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// Coarse event grouping for category-scoped rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EventCategory {
	MatchPlay,
	Chat,
	Social,
	Media,
	Editorial,
	Engagement,
	Commerce,
}

/// Which team an on-pitch event belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TeamSide {
	Home,
	Away,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CardColor {
	Yellow,
	Red,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
	pub author: String,
	pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
	pub player: String,
	pub side: TeamSide,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
	pub player: String,
	pub side: TeamSide,
	pub color: CardColor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
	pub side: TeamSide,
	pub player_on: String,
	pub player_off: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
	pub question: String,
	pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
	pub author: String,
	pub handle: String,
	pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightClip {
	pub title: String,
	pub clip_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminComment {
	pub author: String,
	pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
	pub title: String,
	pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsUpdate {
	pub headline: String,
	pub figures: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredContest {
	pub sponsor: String,
	pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredProduct {
	pub sponsor: String,
	pub product_name: String,
	pub display_price: String,
}

/// Tagged union over the known event kinds. Keeps heterogeneous events
/// in one collection without losing per-kind data; the uniform fields
/// live on the envelope, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum EventPayload {
	ChatMessage(ChatMessage),
	Goal(Goal),
	Card(Card),
	Substitution(Substitution),
	Poll(Poll),
	SocialPost(SocialPost),
	HighlightClip(HighlightClip),
	AdminComment(AdminComment),
	Announcement(Announcement),
	StatsUpdate(StatsUpdate),
	SponsoredContest(SponsoredContest),
	SponsoredProduct(SponsoredProduct),
}

impl EventPayload {
	/// The discriminator for this payload
	pub fn kind(&self) -> EventKind {
		match self {
			EventPayload::ChatMessage(_) => EventKind::ChatMessage,
			EventPayload::Goal(_) => EventKind::Goal,
			EventPayload::Card(_) => EventKind::Card,
			EventPayload::Substitution(_) => EventKind::Substitution,
			EventPayload::Poll(_) => EventKind::Poll,
			EventPayload::SocialPost(_) => EventKind::SocialPost,
			EventPayload::HighlightClip(_) => EventKind::HighlightClip,
			EventPayload::AdminComment(_) => EventKind::AdminComment,
			EventPayload::Announcement(_) => EventKind::Announcement,
			EventPayload::StatsUpdate(_) => EventKind::StatsUpdate,
			EventPayload::SponsoredContest(_) => EventKind::SponsoredContest,
			EventPayload::SponsoredProduct(_) => EventKind::SponsoredProduct,
		}
	}

	/// Check if this payload is on-pitch match action
	pub fn is_match_play(&self) -> bool {
		self.kind().category() == EventCategory::MatchPlay
	}

	/// Check if this payload is sponsored/commerce content
	pub fn is_sponsored(&self) -> bool {
		matches!(self, EventPayload::SponsoredContest(_) | EventPayload::SponsoredProduct(_))
	}
}
