// examples/session_demo.rs
//
// Drives one session the way presentation code would: bulk-load
// fixtures, let the tick advance live, scrub back, return to live.

use live_timeline::{Announcement, ChatMessage, EventEnvelope, EventPayload, Goal, TeamSide};
use timeline_session::{LiveSession, SessionConfig};
use tokio::time::{sleep, Duration};

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt().with_env_filter("debug").init();

	let session = LiveSession::new(SessionConfig {
		tick_interval_ms: 100,
		..SessionConfig::default()
	});
	let mut snapshots = session.subscribe();

	session
		.insert_many(vec![
			EventEnvelope::new(
				"lineups",
				-300.0,
				EventPayload::Announcement(Announcement {
					title: "Starting lineups".into(),
					body: "Both XIs confirmed".into(),
				}),
			),
			EventEnvelope::new(
				"kickoff-chat",
				0.0,
				EventPayload::ChatMessage(ChatMessage {
					author: "mod".into(),
					body: "We're underway!".into(),
				}),
			),
			EventEnvelope::new(
				"opener",
				780.0,
				EventPayload::Goal(Goal {
					player: "Martinelli".into(),
					side: TeamSide::Home,
				}),
			),
		])
		.expect("session just started");

	// Simulate a broadcast already 13 minutes in
	session.set_live(800.0).expect("session just started");

	snapshots.changed().await.ok();
	println!("at live: {:?}", summarize(&session.current_snapshot()));

	// Viewer rewinds to kick-off while live runs on
	session.seek(0.0).expect("session running");
	sleep(Duration::from_millis(300)).await;
	println!("rewound: {:?}", summarize(&session.current_snapshot()));

	// And returns to live
	session.jump_to_live().expect("session running");
	sleep(Duration::from_millis(200)).await;
	println!("back at live: {:?}", summarize(&session.current_snapshot()));

	session.shutdown().await;
}

fn summarize(snapshot: &live_timeline::TimelineSnapshot) -> (f64, f64, bool, Vec<String>) {
	(
		snapshot.user_position,
		snapshot.live_position,
		snapshot.is_at_live,
		snapshot.events.iter().map(|e| e.id.clone()).collect(),
	)
}
