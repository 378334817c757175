//! Fee netting.
//!
//! Whatever leaves the transaction's senders and does not arrive at a
//! receiver was paid as a fee. The ledger sums debits and credits per asset
//! and reports every non-zero difference, ordered by asset id.

use std::collections::BTreeMap;

use alloy::primitives::U256;

use crate::models::{AssetId, Balance, ChainId, Movement, SignedAmount};

#[derive(Debug, Default, Clone, Copy)]
struct Entry {
	debits: U256,
	credits: U256,
}

/// Per-asset accumulator of debits and credits.
#[derive(Debug, Default)]
pub struct BalanceLedger {
	entries: BTreeMap<AssetId, Entry>,
}

impl BalanceLedger {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds every debit and credit of `movement`. The asset gets an entry
	/// even when the movement is empty.
	pub fn record(&mut self, movement: &Movement) {
		let entry = self.entries.entry(movement.asset_id.clone()).or_default();
		entry.debits = entry.debits.saturating_add(movement.total_debits());
		entry.credits = entry.credits.saturating_add(movement.total_credits());
	}

	/// Net `debits - credits` of one asset.
	pub fn net(&self, asset: &AssetId) -> SignedAmount {
		self.entries
			.get(asset)
			.map(|e| SignedAmount::net(e.debits, e.credits))
			.unwrap_or(SignedAmount::ZERO)
	}

	/// Non-zero nets, sorted ascending by asset id.
	pub fn into_balances(self, chain: &ChainId) -> Vec<Balance> {
		self.entries
			.into_iter()
			.map(|(asset, e)| (asset, SignedAmount::net(e.debits, e.credits)))
			.filter(|(_, net)| !net.is_zero())
			.map(|(asset, net)| Balance::new(chain, asset, net))
			.collect()
	}

	pub fn calculate_fees(chain: &ChainId, movements: &[Movement]) -> Vec<Balance> {
		let mut ledger = Self::new();
		for movement in movements {
			ledger.record(movement);
		}
		ledger.into_balances(chain)
	}
}
