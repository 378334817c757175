//! Configuration error types.

use log::error;
use std::{error::Error, fmt, path::PathBuf};

/// Errors raised while reading chain configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// A config was read but breaks a validation rule
	ValidationError(String),

	/// A config file is not valid JSON for the expected shape
	ParseError(String),

	/// The file system refused a read
	FileError(String),

	/// The configuration directory does not exist
	MissingDirectory(PathBuf),
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Invalid chain config: {}", msg),
			Self::ParseError(msg) => format!("Malformed chain config: {}", msg),
			Self::FileError(msg) => format!("Chain config file error: {}", msg),
			Self::MissingDirectory(path) => {
				format!("Chain config directory not found: {}", path.display())
			}
		}
	}

	/// Create a new validation error and log it
	pub fn validation_error(msg: impl Into<String>) -> Self {
		Self::logged(Self::ValidationError(msg.into()))
	}

	/// Create a new parse error and log it
	pub fn parse_error(msg: impl Into<String>) -> Self {
		Self::logged(Self::ParseError(msg.into()))
	}

	/// Create a new file error and log it
	pub fn file_error(msg: impl Into<String>) -> Self {
		Self::logged(Self::FileError(msg.into()))
	}

	pub fn missing_directory(path: impl Into<PathBuf>) -> Self {
		Self::logged(Self::MissingDirectory(path.into()))
	}

	fn logged(error: Self) -> Self {
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error(err.to_string())
	}
}
