//! Movements and balance changes.
//!
//! A movement is one asset-scoped set of debits (`from`) and credits (`to`)
//! within a transaction. Account chains report one movement per transfer,
//! UTXO chains usually end up with one coalesced movement per asset.

use alloy::primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Address, AddressName, Amount, AssetId, AssetName, ChainId};

/// Kind of ledger entry that produced a movement or balance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementVariant {
	/// Transfer of the native asset
	Native,
	/// Transfer of a token
	Token,
	/// Native transfer made internally by a smart contract
	Internal,
	/// Separate fee payment
	Fee,
}

/// The event (log, instruction, utxo...) of a transaction that contributed a
/// movement or balance change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
	pub id: String,
	pub variant: MovementVariant,
}

impl Event {
	pub fn new(id: impl Into<String>, variant: MovementVariant) -> Self {
		Self {
			id: id.into(),
			variant,
		}
	}

	pub fn from_index(index: u64, variant: MovementVariant) -> Self {
		Self::new(index.to_string(), variant)
	}
}

/// One quantity flowing into or out of an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChange {
	pub balance: Amount,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<Decimal>,
	/// Deprecated, use `address_id`.
	#[serde(rename = "address")]
	pub address_name: AddressName,
	pub address_id: Address,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub event: Option<Event>,
}

impl BalanceChange {
	/// Creates a balance change; `decimals` fills in the human readable amount.
	pub fn new(chain: &ChainId, address: &str, balance: Amount, decimals: Option<u32>) -> Self {
		let address_id = Address::new(chain, address);
		Self {
			balance,
			amount: decimals.and_then(|d| balance.to_human(d)),
			address_name: AddressName::new(chain, &address_id),
			address_id,
			event: None,
		}
	}

	pub fn add_event_meta(&mut self, event: Event) {
		self.event = Some(event);
	}
}

/// One asset-scoped transfer unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
	/// Deprecated, use `asset_id`.
	#[serde(rename = "asset")]
	pub asset_name: AssetName,
	/// Deprecated, use `asset_id`.
	pub contract: String,
	pub asset_id: AssetId,
	/// Set only when the chain also identifies its native asset by a contract.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contract_id: Option<String>,
	pub from: Vec<BalanceChange>,
	pub to: Vec<BalanceChange>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub memo: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub event: Option<Event>,
	#[serde(skip)]
	chain: ChainId,
}

impl Movement {
	/// Creates an empty movement of `contract` on `chain`. An empty contract
	/// means the native asset.
	pub fn new(chain: &ChainId, contract: &str) -> Self {
		let asset_id = AssetId::new(chain, contract);
		Self {
			asset_name: AssetName::new(chain, &asset_id),
			contract: asset_id.to_string(),
			asset_id,
			contract_id: None,
			from: Vec::new(),
			to: Vec::new(),
			memo: None,
			event: None,
			chain: chain.clone(),
		}
	}

	pub fn chain(&self) -> &ChainId {
		&self.chain
	}

	/// Adds a debit and returns it so the caller can attach event metadata.
	pub fn add_source(
		&mut self,
		from: &str,
		balance: Amount,
		decimals: Option<u32>,
	) -> &mut BalanceChange {
		self.from
			.push(BalanceChange::new(&self.chain, from, balance, decimals));
		let last = self.from.len() - 1;
		&mut self.from[last]
	}

	/// Adds a credit and returns it so the caller can attach event metadata.
	pub fn add_destination(
		&mut self,
		to: &str,
		balance: Amount,
		decimals: Option<u32>,
	) -> &mut BalanceChange {
		self.to
			.push(BalanceChange::new(&self.chain, to, balance, decimals));
		let last = self.to.len() - 1;
		&mut self.to[last]
	}

	pub fn set_memo(&mut self, memo: &str) {
		self.memo = (!memo.is_empty()).then(|| memo.to_string());
	}

	pub fn add_event_meta(&mut self, event: Event) {
		self.event = Some(event);
	}

	/// Sum of all debits, saturating.
	pub fn total_debits(&self) -> U256 {
		self.from
			.iter()
			.fold(U256::ZERO, |acc, bc| acc.saturating_add(bc.balance.as_u256()))
	}

	/// Sum of all credits, saturating.
	pub fn total_credits(&self) -> U256 {
		self.to
			.iter()
			.fold(U256::ZERO, |acc, bc| acc.saturating_add(bc.balance.as_u256()))
	}
}
