use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Address, Amount, AssetId, AssetName, ChainId, SignedAmount};

/// Net amount of one asset leaving the transaction's participants, i.e. the
/// fee paid in that asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
	/// Deprecated, use `contract`.
	pub asset: AssetName,
	pub contract: AssetId,
	pub balance: SignedAmount,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<Decimal>,
}

impl Balance {
	pub fn new(chain: &ChainId, contract: AssetId, balance: SignedAmount) -> Self {
		Self {
			asset: AssetName::new(chain, &contract),
			contract,
			balance,
			amount: None,
		}
	}
}

/// Native staking deposit reported by a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stake {
	pub balance: Amount,
	pub validator: String,
	pub account: String,
	pub address: Address,
}

/// Native staking withdrawal reported by a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unstake {
	pub balance: Amount,
	pub validator: String,
	pub account: String,
	pub address: Address,
}

impl Stake {
	pub fn new(chain: &ChainId, address: &str, validator: &str, account: &str, balance: Amount) -> Self {
		Self {
			balance,
			validator: validator.to_string(),
			account: account.to_string(),
			address: Address::new(chain, address),
		}
	}
}

impl Unstake {
	pub fn new(chain: &ChainId, address: &str, validator: &str, account: &str, balance: Amount) -> Self {
		Self {
			balance,
			validator: validator.to_string(),
			account: account.to_string(),
			address: Address::new(chain, address),
		}
	}
}
