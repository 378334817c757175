//! Configuration loading and validation.
//!
//! Chain settings live in one JSON file per chain. Loading a directory skips
//! files that are not JSON and configs that fail validation.

use std::path::Path;

mod chain_config;
mod error;

pub use error::ConfigError;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Loads every valid config of a directory, keyed by file stem.
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>;

	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), String>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
