use serde::{Deserialize, Serialize};

use crate::models::{AssetId, ChainId, Driver};

/// Per-chain settings the normalization layer needs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChainConfig {
	pub chain: ChainId,
	pub driver: Driver,
	pub name: String,
	/// Decimals of the native asset.
	pub decimals: u32,
	/// Confirmations after which a transaction is irreversible.
	pub confirmations_final: u64,
	/// Alternate on-chain identifier of the native asset, if the chain also
	/// models its native unit as a contract.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub chain_coin: Option<String>,
}

impl ChainConfig {
	pub fn new(chain: impl Into<String>, driver: Driver) -> Self {
		let chain = ChainId::new(chain);
		Self {
			name: chain.to_string(),
			chain,
			driver,
			decimals: 0,
			confirmations_final: 1,
			chain_coin: None,
		}
	}

	pub fn native_asset(&self) -> AssetId {
		AssetId::native(&self.chain)
	}

	pub fn is_final(&self, confirmations: u64) -> bool {
		confirmations >= self.confirmations_final
	}
}
