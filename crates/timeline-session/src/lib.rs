//! Reactive session layer over the `live-timeline` core.
//!
//! One actor task per session owns the store and clock; producers,
//! the scrub UI, and an optional external live driver talk to it over
//! commands, and render consumers subscribe to immutable snapshots.

pub mod command;
pub mod error;
pub mod session;

pub use command::SessionCommand;
pub use error::{Result, SessionError};
pub use session::{LiveSession, SessionConfig};
