// examples/match_session.rs
use live_timeline::*;
use uuid::Uuid;

fn main() {
	let mut timeline = LiveTimeline::new();

	// Pre-show content lands with negative timestamps
	timeline.insert_many(vec![
		EventEnvelope::new(
			Uuid::new_v4().to_string(),
			-600.0,
			EventPayload::Announcement(Announcement {
				title: "Starting lineups".into(),
				body: "Both XIs confirmed".into(),
			}),
		),
		EventEnvelope::new(
			Uuid::new_v4().to_string(),
			-120.0,
			EventPayload::ChatMessage(ChatMessage {
				author: "mod".into(),
				body: "Kick-off in two minutes".into(),
			}),
		),
	]);

	// The viewer starts at live; the driver advances the broadcast
	timeline.seek_user(-600.0);
	println!("--- Pre-show ---");
	print_snapshot(&timeline.snapshot());

	timeline.jump_to_live();
	timeline.advance_live(60.0);
	timeline.insert(EventEnvelope::new(
		"goal-1".to_string(),
		45.0,
		EventPayload::Goal(Goal {
			player: "Martinelli".into(),
			side: TeamSide::Home,
		}),
	));
	println!("\n--- 1' ---");
	print_snapshot(&timeline.snapshot());

	// A sponsored product drop and a chat message share a timestamp;
	// display priority decides the order
	timeline.insert_many(vec![
		EventEnvelope::new(
			"drop-1".to_string(),
			300.0,
			EventPayload::SponsoredProduct(SponsoredProduct {
				sponsor: "Acme".into(),
				product_name: "Home shirt 24/25".into(),
				display_price: "$89.99".into(),
			}),
		)
		.with_meta("campaign", "matchday"),
		EventEnvelope::new(
			Uuid::new_v4().to_string(),
			300.0,
			EventPayload::ChatMessage(ChatMessage {
				author: "fan42".into(),
				body: "What a strike!".into(),
			}),
		),
	]);
	timeline.advance_live(320.0);
	println!("\n--- 5' ---");
	print_snapshot(&timeline.snapshot());

	// Viewer scrubs back to rewatch the goal; live keeps running
	timeline.seek_user(40.0);
	timeline.advance_live(600.0);
	println!("\n--- Rewatching the goal (decoupled) ---");
	print_snapshot(&timeline.snapshot());

	// Back to live
	timeline.jump_to_live();
	println!("\n--- Back to live ---");
	print_snapshot(&timeline.snapshot());

	// Lossy projection for analytics
	println!("\n--- Export ---");
	for record in timeline.store().export() {
		println!("  {} @ {:>8.1}s [{}]", record.id, record.timestamp, record.kind);
	}
}

fn print_snapshot(snapshot: &TimelineSnapshot) {
	println!("  User Position: {:.1}s", snapshot.user_position);
	println!("  Live Position: {:.1}s", snapshot.live_position);
	println!("  Phase: {} | At Live: {} | Lag: {:.1}s", snapshot.phase, snapshot.is_at_live, snapshot.lag_behind_live);
	println!("  Visible Events ({}/{}):", snapshot.events.len(), snapshot.total_events);
	for event in &snapshot.events {
		println!("    [{:>8.1}s] {} (priority {})", event.timestamp, event.kind, event.display_priority);
	}
}
