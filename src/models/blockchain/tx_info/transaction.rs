//! Normalized transaction result.

use serde::{Deserialize, Serialize};

use crate::{
	models::{
		blockchain::tx_info::{Balance, Block, Event, Movement, MovementVariant, Stake, Unstake},
		AddressName, Amount, AssetName, ChainConfig, ChainId, TransactionName,
	},
	services::{coalescer, ledger::BalanceLedger},
};

/// Inclusion state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxState {
	Succeeded,
	Failed,
	Mining,
}

impl TxState {
	/// An error always wins; otherwise a transaction without a block is still mining.
	pub fn derive(block: &Block, error: Option<&str>) -> Self {
		if error.is_some() {
			TxState::Failed
		} else if block.is_pending() {
			TxState::Mining
		} else {
			TxState::Succeeded
		}
	}
}

/// Chain-agnostic result of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxInfo {
	pub name: TransactionName,
	/// Transaction id as the driver reported it; `name` carries the normalized form.
	pub hash: String,
	pub chain: ChainId,
	/// Driver specific id needed to look the transaction up again, when it
	/// differs from the hash.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lookup_id: Option<String>,
	pub state: TxState,
	#[serde(rename = "final")]
	pub is_final: bool,
	pub block: Block,
	pub movements: Vec<Movement>,
	pub fees: Vec<Balance>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub stakes: Vec<Stake>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub unstakes: Vec<Unstake>,
	pub confirmations: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl TxInfo {
	/// Creates a transaction result without movements.
	///
	/// An empty error string is treated as no error.
	pub fn new(
		block: Block,
		chain_config: &ChainConfig,
		hash: &str,
		confirmations: u64,
		error: Option<String>,
	) -> Self {
		let chain = chain_config.chain.clone();
		let error = error.filter(|e| !e.is_empty());
		Self {
			name: TransactionName::new(&chain, hash),
			hash: hash.to_string(),
			state: TxState::derive(&block, error.as_deref()),
			is_final: chain_config.is_final(confirmations),
			chain,
			lookup_id: None,
			block,
			movements: Vec::new(),
			fees: Vec::new(),
			stakes: Vec::new(),
			unstakes: Vec::new(),
			confirmations,
			error,
		}
	}

	pub fn with_lookup_id(mut self, lookup_id: impl Into<String>) -> Self {
		self.lookup_id = Some(lookup_id.into());
		self
	}

	/// Adds a one-sender one-receiver movement.
	pub fn add_simple_transfer(
		&mut self,
		from: &str,
		to: &str,
		contract: &str,
		balance: Amount,
		decimals: Option<u32>,
		memo: &str,
	) -> &mut Movement {
		let mut movement = Movement::new(&self.chain, contract);
		movement.add_source(from, balance, decimals);
		movement.add_destination(to, balance, decimals);
		movement.set_memo(memo);
		self.add_movement(movement)
	}

	/// Adds a debit-only movement for a fee paid by `from`.
	pub fn add_fee(
		&mut self,
		from: &str,
		contract: &str,
		balance: Amount,
		decimals: Option<u32>,
	) -> &mut Movement {
		let mut movement = Movement::new(&self.chain, contract);
		movement.add_source(from, balance, decimals);
		movement.add_event_meta(Event::from_index(0, MovementVariant::Fee));
		self.add_movement(movement)
	}

	pub fn add_movement(&mut self, movement: Movement) -> &mut Movement {
		self.movements.push(movement);
		let last = self.movements.len() - 1;
		&mut self.movements[last]
	}

	pub fn add_stake(&mut self, stake: Stake) {
		self.stakes.push(stake);
	}

	pub fn add_unstake(&mut self, unstake: Unstake) {
		self.unstakes.push(unstake);
	}

	/// Merges movements of the same asset. Drivers call this explicitly, it
	/// is never applied automatically.
	pub fn coalesce(&mut self) {
		self.movements = coalescer::coalesce(std::mem::take(&mut self.movements));
	}

	/// Nets every movement into per-asset fees.
	pub fn calculate_fees(&self) -> Vec<Balance> {
		BalanceLedger::calculate_fees(&self.chain, &self.movements)
	}

	/// Marks every native asset movement with the chain's alternate native id.
	pub fn set_contract_id_for_native_asset(&mut self, contract_id: &str) {
		if contract_id.is_empty() {
			return;
		}
		for movement in self
			.movements
			.iter_mut()
			.filter(|m| m.asset_id.is_native(&self.chain))
		{
			movement.contract_id = Some(contract_id.to_string());
		}
	}

	/// Recomputes the deprecated name fields from the canonical ids.
	pub fn sync_deprecated_fields(&mut self) {
		let chain = &self.chain;
		for movement in self.movements.iter_mut() {
			movement.asset_name = AssetName::new(chain, &movement.asset_id);
			movement.contract = movement.asset_id.to_string();
			for change in movement.from.iter_mut().chain(movement.to.iter_mut()) {
				change.address_name = AddressName::new(chain, &change.address_id);
			}
		}
		for fee in self.fees.iter_mut() {
			fee.asset = AssetName::new(chain, &fee.contract);
		}
	}
}
