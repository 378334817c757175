//! Test helper utilities for chain configuration
//!
//! - `ChainConfigBuilder`: Builder for creating test ChainConfig instances

use crate::models::{ChainConfig, ChainId, Driver};

/// Builder for creating test ChainConfig instances
pub struct ChainConfigBuilder {
	config: ChainConfig,
}

impl Default for ChainConfigBuilder {
	fn default() -> Self {
		let mut config = ChainConfig::new("ETH", Driver::Evm);
		config.name = "Ethereum".to_string();
		config.decimals = 18;
		config.confirmations_final = 12;
		Self { config }
	}
}

impl ChainConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets chain id, driver and a display name equal to the chain id.
	pub fn chain(mut self, chain: &str, driver: Driver) -> Self {
		self.config.chain = ChainId::new(chain);
		self.config.driver = driver;
		self.config.name = chain.to_string();
		self
	}

	pub fn name(mut self, name: &str) -> Self {
		self.config.name = name.to_string();
		self
	}

	pub fn decimals(mut self, decimals: u32) -> Self {
		self.config.decimals = decimals;
		self
	}

	pub fn confirmations_final(mut self, confirmations: u64) -> Self {
		self.config.confirmations_final = confirmations;
		self
	}

	pub fn chain_coin(mut self, chain_coin: &str) -> Self {
		self.config.chain_coin = Some(chain_coin.to_string());
		self
	}

	pub fn build(self) -> ChainConfig {
		self.config
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::ConfigLoader;

	#[test]
	fn test_default_chain_config() {
		let config = ChainConfigBuilder::new().build();
		assert_eq!(config.chain.as_str(), "ETH");
		assert_eq!(config.confirmations_final, 12);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_chain_config_overrides() {
		let config = ChainConfigBuilder::new()
			.chain("SOL", Driver::Solana)
			.decimals(9)
			.confirmations_final(32)
			.chain_coin("So11111111111111111111111111111111111111112")
			.build();
		assert_eq!(config.driver, Driver::Solana);
		assert_eq!(config.decimals, 9);
		assert!(config.chain_coin.is_some());
		assert!(config.validate().is_ok());
	}
}
