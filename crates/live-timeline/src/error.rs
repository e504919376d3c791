use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimelineError>;

/// The core is in-memory and single-threaded; mutations and queries
/// never fail. Only the export projection can, while encoding.
#[derive(Error, Debug)]
pub enum TimelineError {
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
