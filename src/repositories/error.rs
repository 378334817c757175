//! Error types for repository operations.
//!
//! Repositories wrap configuration loading; their errors carry enough context
//! to tell a broken config directory from a lookup of a chain nobody
//! configured.

use log::error;
use std::error::Error;
use std::fmt;

/// Errors that can occur during repository operations
#[derive(Debug)]
pub enum RepositoryError {
	/// The loaded configurations contradict each other
	ValidationError(String),

	/// Configurations could not be read
	LoadError(String),

	/// No configuration exists for the requested chain
	UnknownChain(String),
}

impl RepositoryError {
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::LoadError(msg) => format!("Load error: {}", msg),
			Self::UnknownChain(chain) => format!("Unknown chain: {}", chain),
		}
	}

	/// Create a new validation error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn unknown_chain(chain: impl Into<String>) -> Self {
		let error = Self::UnknownChain(chain.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}
