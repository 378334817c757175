use std::{collections::HashMap, path::Path};

use crate::{
	models::{ChainConfig, ChainId, ConfigLoader, TxInfo},
	repositories::error::RepositoryError,
	services::legacy::{LegacyBridge, LegacyTxInfo, MappingStrategy},
};

/// Chain configurations keyed by chain id.
pub struct ChainRepository {
	pub chains: HashMap<String, ChainConfig>,
}

impl ChainRepository {
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let chains = Self::load_chains(path)?;
		Ok(ChainRepository { chains })
	}

	/// Re-keys configs from file stem to chain id; two files may not
	/// configure the same chain.
	fn load_chains(path: Option<&Path>) -> Result<HashMap<String, ChainConfig>, RepositoryError> {
		let by_file: HashMap<String, ChainConfig> = ChainConfig::load_all(path)
			.map_err(|e| RepositoryError::load_error(format!("Failed to load chains: {}", e)))?;

		let mut chains = HashMap::with_capacity(by_file.len());
		for (file, config) in by_file {
			let chain = config.chain.to_string();
			if chains.insert(chain.clone(), config).is_some() {
				return Err(RepositoryError::validation_error(format!(
					"Chain {} is configured more than once (last seen in {}.json)",
					chain, file
				)));
			}
		}
		Ok(chains)
	}
}

pub trait ChainRepositoryTrait {
	fn load_all(&self, path: Option<&Path>)
		-> Result<HashMap<String, ChainConfig>, RepositoryError>;
	fn get(&self, chain: &str) -> Option<ChainConfig>;
	fn get_all(&self) -> HashMap<String, ChainConfig>;
}

impl ChainRepositoryTrait for ChainRepository {
	fn load_all(
		&self,
		path: Option<&Path>,
	) -> Result<HashMap<String, ChainConfig>, RepositoryError> {
		Self::load_chains(path)
	}

	fn get(&self, chain: &str) -> Option<ChainConfig> {
		self.chains.get(chain).cloned()
	}

	fn get_all(&self) -> HashMap<String, ChainConfig> {
		self.chains.clone()
	}
}

/// Resolves chain configurations and normalizes legacy results with them.
pub struct ChainService<T: ChainRepositoryTrait> {
	repository: T,
}

impl<T: ChainRepositoryTrait> ChainService<T> {
	pub fn new(path: Option<&Path>) -> Result<ChainService<ChainRepository>, RepositoryError> {
		let repository = ChainRepository::new(path)?;
		Ok(ChainService { repository })
	}

	pub fn new_with_repository(repository: T) -> Result<Self, RepositoryError> {
		Ok(ChainService { repository })
	}

	pub fn get(&self, chain: &ChainId) -> Option<ChainConfig> {
		self.repository.get(chain.as_str())
	}

	pub fn get_all(&self) -> HashMap<String, ChainConfig> {
		self.repository.get_all()
	}

	/// Builds a bridge for `chain`.
	pub fn bridge(&self, chain: &ChainId) -> Result<LegacyBridge, RepositoryError> {
		self.get(chain)
			.map(LegacyBridge::new)
			.ok_or_else(|| RepositoryError::unknown_chain(chain.as_str()))
	}

	/// Normalizes a legacy result of `chain`. Without an explicit strategy the
	/// chain's driver decides.
	pub fn tx_info_from_legacy(
		&self,
		chain: &ChainId,
		legacy: &LegacyTxInfo,
		strategy: Option<MappingStrategy>,
	) -> Result<TxInfo, RepositoryError> {
		let bridge = self.bridge(chain)?;
		let strategy =
			strategy.unwrap_or_else(|| MappingStrategy::for_driver(bridge.chain_config().driver));
		Ok(bridge.to_tx_info(legacy, strategy))
	}
}
