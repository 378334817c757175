//! Legacy result to `TxInfo` translation.

use alloy::primitives::I256;
use tracing::{debug, warn};

use crate::{
	models::{Amount, AssetId, Block, ChainConfig, ChainId, Movement, TxInfo},
	services::{
		coalescer,
		ledger::BalanceLedger,
		legacy::{LegacyEndpoint, LegacyTxInfo, MappingStrategy},
	},
};

/// Maps flat legacy results of one chain onto the movement model.
///
/// The bridge never fails: inconsistent input yields an unknown (empty) fee
/// payer rather than an error.
#[derive(Debug, Clone)]
pub struct LegacyBridge {
	chain_config: ChainConfig,
}

impl LegacyBridge {
	pub fn new(chain_config: ChainConfig) -> Self {
		Self { chain_config }
	}

	pub fn chain_config(&self) -> &ChainConfig {
		&self.chain_config
	}

	fn chain(&self) -> &ChainId {
		&self.chain_config.chain
	}

	/// Rewrites the chain's alternate native id to the native asset.
	fn canonical_contract<'a>(&self, contract: &'a str) -> &'a str {
		match &self.chain_config.chain_coin {
			Some(coin) if coin.eq_ignore_ascii_case(contract) => "",
			_ => contract,
		}
	}

	fn asset_of(&self, contract: &str) -> AssetId {
		AssetId::new(self.chain(), self.canonical_contract(contract))
	}

	fn endpoint_movement(&self, endpoint: &LegacyEndpoint) -> Movement {
		let mut movement = Movement::new(self.chain(), self.canonical_contract(&endpoint.contract));
		movement.contract_id = endpoint.contract_id.clone();
		movement
	}

	pub fn to_tx_info(&self, legacy: &LegacyTxInfo, strategy: MappingStrategy) -> TxInfo {
		let chain = self.chain().clone();
		let block = Block::from_unix(
			&chain,
			legacy.block_index.max(0) as u64,
			legacy.block_hash.clone(),
			legacy.block_time,
		);
		let mut tx_info = TxInfo::new(
			block,
			&self.chain_config,
			&legacy.tx_id,
			legacy.confirmations.max(0) as u64,
			legacy.error_message(),
		);

		match strategy {
			MappingStrategy::Utxo => self.map_utxo(legacy, &mut tx_info),
			MappingStrategy::Account => self.map_account(legacy, &mut tx_info),
		}

		if !legacy.fee.is_zero() {
			self.add_fee(legacy, strategy, &mut tx_info);
		}

		tx_info.fees = tx_info.calculate_fees();
		self.reconcile_fee(legacy, &tx_info);

		tx_info.stakes.extend(legacy.stakes.iter().cloned());
		tx_info.unstakes.extend(legacy.unstakes.iter().cloned());

		if let Some(chain_coin) = &self.chain_config.chain_coin {
			tx_info.set_contract_id_for_native_asset(chain_coin);
		}
		tx_info.sync_deprecated_fields();
		tx_info
	}

	fn map_utxo(&self, legacy: &LegacyTxInfo, tx_info: &mut TxInfo) {
		let mut movements = Vec::with_capacity(legacy.sources.len() + legacy.destinations.len());

		for source in &legacy.sources {
			let mut movement = self.endpoint_movement(source);
			let change = movement.add_source(&source.address, source.amount, None);
			if let Some(event) = &source.event {
				change.add_event_meta(event.clone());
			}
			movements.push(movement);
		}

		for destination in &legacy.destinations {
			let mut movement = self.endpoint_movement(destination);
			let change = movement.add_destination(&destination.address, destination.amount, None);
			if let Some(event) = &destination.event {
				change.add_event_meta(event.clone());
			}
			movements.push(movement);
		}

		for movement in coalescer::coalesce(movements) {
			tx_info.add_movement(movement);
		}
	}

	fn map_account(&self, legacy: &LegacyTxInfo, tx_info: &mut TxInfo) {
		for (i, destination) in legacy.destinations.iter().enumerate() {
			let source = legacy.sources.get(i);
			let from = source.map(|s| s.address.as_str()).unwrap_or(legacy.from.as_str());
			let event = destination
				.event
				.clone()
				.or_else(|| source.and_then(|s| s.event.clone()));

			let movement = tx_info.add_simple_transfer(
				from,
				&destination.address,
				self.canonical_contract(&destination.contract),
				destination.amount,
				None,
				&destination.memo,
			);
			movement.contract_id = destination.contract_id.clone();
			if let Some(event) = event {
				movement.add_event_meta(event);
			}
		}
	}

	/// Payer precedence: explicit fee payer, the sender, then the last source
	/// holding the reported contract or the native asset.
	fn infer_fee_payer(&self, legacy: &LegacyTxInfo) -> Option<String> {
		if !legacy.fee_payer.is_empty() {
			return Some(legacy.fee_payer.clone());
		}
		if !legacy.from.is_empty() {
			return Some(legacy.from.clone());
		}
		let reported = self.asset_of(&legacy.contract);
		legacy
			.sources
			.iter()
			.rev()
			.find(|s| {
				let asset = self.asset_of(&s.contract);
				asset == reported || asset.is_native(self.chain())
			})
			.map(|s| s.address.clone())
	}

	fn add_fee(&self, legacy: &LegacyTxInfo, strategy: MappingStrategy, tx_info: &mut TxInfo) {
		let fee_asset = self.asset_of(&legacy.fee_contract);
		let mut fee = legacy.fee.as_u256();

		// Inputs minus outputs already pay part of the fee on UTXO chains.
		if strategy == MappingStrategy::Utxo {
			let mut ledger = BalanceLedger::new();
			for movement in tx_info.movements.iter().filter(|m| m.asset_id == fee_asset) {
				ledger.record(movement);
			}
			let implied = ledger.net(&fee_asset).as_i256();
			if implied.is_positive() {
				fee = fee.saturating_sub(implied.into_raw());
			}
			if fee.is_zero() {
				return;
			}
		}

		let payer = self.infer_fee_payer(legacy).unwrap_or_else(|| {
			warn!(
				chain = %self.chain(),
				tx_id = %legacy.tx_id,
				"no fee payer could be inferred, attributing fee to an unknown address"
			);
			String::new()
		});

		tx_info.add_fee(
			&payer,
			self.canonical_contract(&legacy.fee_contract),
			Amount::new(fee),
			None,
		);
	}

	fn reconcile_fee(&self, legacy: &LegacyTxInfo, tx_info: &TxInfo) {
		let fee_asset = self.asset_of(&legacy.fee_contract);
		let computed = tx_info
			.fees
			.iter()
			.find(|b| b.contract == fee_asset)
			.map(|b| b.balance.as_i256())
			.unwrap_or(I256::ZERO);
		let reported = legacy.fee.as_u256();
		let matches = !computed.is_negative() && computed.into_raw() == reported;
		if !matches {
			debug!(
				chain = %self.chain(),
				tx_id = %legacy.tx_id,
				reported = %reported,
				computed = %computed,
				"recomputed fee differs from reported fee"
			);
		}
	}
}
