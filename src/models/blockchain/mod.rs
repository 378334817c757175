//! Chain-agnostic transaction models.
//!
//! This module contains the driver families the crate knows about, the
//! normalized transaction result model (`tx_info`) and the per-driver pending
//! transaction parameters with their double-send safety rules (`tx_input`).

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::models::ChainId;

pub mod tx_info;
pub mod tx_input;

/// Supported driver families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Driver {
	Aptos,
	Bitcoin,
	BitcoinCash,
	Cardano,
	Cosmos,
	Egld,
	Eos,
	/// Ethereum Virtual Machine based chains
	Evm,
	Hedera,
	InternetComputer,
	Kaspa,
	Solana,
	Substrate,
	Sui,
	Ton,
	Tron,
	Xlm,
	Xrp,
}

lazy_static! {
	static ref CHAIN_DRIVERS: HashMap<&'static str, Driver> = {
		use Driver::*;
		HashMap::from([
			("APTOS", Aptos),
			("BTC", Bitcoin),
			("LTC", Bitcoin),
			("DOGE", Bitcoin),
			("BCH", BitcoinCash),
			("ADA", Cardano),
			("ATOM", Cosmos),
			("INJ", Cosmos),
			("SEI", Cosmos),
			("EGLD", Egld),
			("EOS", Eos),
			("ETH", Evm),
			("ARB", Evm),
			("AVAX", Evm),
			("BASE", Evm),
			("BSC", Evm),
			("MATIC", Evm),
			("OP", Evm),
			("XDC", Evm),
			("HBAR", Hedera),
			("ICP", InternetComputer),
			("KAS", Kaspa),
			("SOL", Solana),
			("DOT", Substrate),
			("TAO", Substrate),
			("SUI", Sui),
			("TON", Ton),
			("TRX", Tron),
			("XLM", Xlm),
			("XRP", Xrp),
		])
	};
}

impl Driver {
	/// Looks up the driver of a well-known chain.
	pub fn for_chain(chain: &ChainId) -> Option<Driver> {
		CHAIN_DRIVERS.get(chain.as_str()).copied()
	}

	/// Drivers whose results have no meaningful sender/receiver pairing.
	pub fn is_utxo(&self) -> bool {
		matches!(
			self,
			Driver::Bitcoin | Driver::BitcoinCash | Driver::Cardano | Driver::Kaspa
		)
	}
}
