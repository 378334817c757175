use std::path::Path;

use crate::models::{ChainConfig, ConfigLoader, Driver};

use super::error::ConfigError;

const DEFAULT_CHAIN_DIR: &str = "config/chains";

/// Largest number of decimals any supported chain uses for an asset.
const MAX_DECIMALS: u32 = 36;

impl ConfigLoader for ChainConfig {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let chain_dir = path.unwrap_or(Path::new(DEFAULT_CHAIN_DIR));
		let mut pairs = Vec::new();

		if !chain_dir.exists() {
			return Err(ConfigError::missing_directory(chain_dir));
		}

		for entry in std::fs::read_dir(chain_dir)? {
			let entry = entry?;
			let path = entry.path();

			if !Self::is_json_file(&path) {
				continue;
			}

			let name = path
				.file_stem()
				.and_then(|s| s.to_str())
				.unwrap_or("unknown")
				.to_string();

			match Self::load_from_path(&path) {
				Ok(config) => pairs.push((name, config)),
				Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping chain config"),
			}
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let config: ChainConfig = serde_json::from_reader(file)?;

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		let chain = self.chain.as_str();
		if chain.is_empty() {
			return Err("Chain id is required".to_string());
		}
		if !chain
			.chars()
			.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-')
		{
			return Err(
				"Chain id must contain only uppercase letters, numbers, underscores and dashes"
					.to_string(),
			);
		}

		if let Some(expected) = Driver::for_chain(&self.chain) {
			if expected != self.driver {
				return Err(format!(
					"Chain {} is served by the {:?} driver, not {:?}",
					chain, expected, self.driver
				));
			}
		}

		if self.name.trim().is_empty() {
			return Err("Name is required".to_string());
		}

		if self.confirmations_final == 0 {
			return Err("confirmations_final must be greater than 0".to_string());
		}

		if self.decimals > MAX_DECIMALS {
			return Err(format!("decimals must be at most {}", MAX_DECIMALS));
		}

		if let Some(chain_coin) = &self.chain_coin {
			if chain_coin.trim().is_empty() {
				return Err("chain_coin must not be empty when set".to_string());
			}
		}

		Ok(())
	}
}
