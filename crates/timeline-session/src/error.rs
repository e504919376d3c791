use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
	#[error("Session actor is no longer running")]
	ChannelClosed,
}
