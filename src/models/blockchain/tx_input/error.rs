use thiserror::Error;

/// Failures of the tagged tx input envelope.
#[derive(Debug, Error)]
pub enum TxInputError {
	#[error("Failed to decode tx input: {0}")]
	DecodeError(String),

	#[error("Failed to encode tx input: {0}")]
	EncodeError(String),

	#[error("No tx input registered for driver '{0}'")]
	UnsupportedDriver(String),
}

impl TxInputError {
	/// Maps a serde error, telling unknown `type` tags apart from malformed bodies.
	pub(crate) fn from_decode(err: serde_json::Error) -> Self {
		let message = err.to_string();
		match message
			.strip_prefix("unknown variant `")
			.and_then(|rest| rest.split_once('`'))
		{
			Some((driver, _)) => Self::UnsupportedDriver(driver.to_string()),
			None => Self::DecodeError(message),
		}
	}
}
