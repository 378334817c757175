use serde::{Deserialize, Serialize};

use crate::models::{Amount, Driver, Event, Stake, Unstake};

/// Execution status reported by a legacy driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
	#[default]
	Success,
	Failure,
}

/// How sources and destinations of a legacy result become movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingStrategy {
	/// Inputs and outputs are unrelated; every endpoint becomes its own
	/// movement and the result is coalesced per asset.
	Utxo,
	/// Destination `i` was paid by source `i` (or the transaction sender).
	Account,
}

impl MappingStrategy {
	pub fn for_driver(driver: Driver) -> Self {
		if driver.is_utxo() {
			MappingStrategy::Utxo
		} else {
			MappingStrategy::Account
		}
	}
}

/// One source or destination of a legacy result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyEndpoint {
	pub address: String,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub contract: String,
	pub amount: Amount,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub memo: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub contract_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub event: Option<Event>,
}

impl LegacyEndpoint {
	pub fn new(address: impl Into<String>, contract: impl Into<String>, amount: Amount) -> Self {
		Self {
			address: address.into(),
			contract: contract.into(),
			amount,
			..Default::default()
		}
	}
}

/// Flat transaction result produced by drivers that predate movements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyTxInfo {
	pub block_hash: String,
	pub tx_id: String,
	pub from: String,
	pub to: String,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub contract: String,
	pub amount: Amount,
	pub fee: Amount,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub fee_payer: String,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub fee_contract: String,
	pub block_index: i64,
	/// Unix seconds.
	pub block_time: i64,
	pub confirmations: i64,
	pub status: TxStatus,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub error: String,
	pub sources: Vec<LegacyEndpoint>,
	pub destinations: Vec<LegacyEndpoint>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub stakes: Vec<Stake>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub unstakes: Vec<Unstake>,
}

impl LegacyTxInfo {
	/// The failure message, if any. An explicit error wins over the generic
	/// failure status.
	pub fn error_message(&self) -> Option<String> {
		if !self.error.is_empty() {
			Some(self.error.clone())
		} else if self.status == TxStatus::Failure {
			Some("transaction failed".to_string())
		} else {
			None
		}
	}
}
