//! Test helper utilities for legacy driver results
//!
//! - `LegacyTxInfoBuilder`: Builder for creating test LegacyTxInfo instances

use crate::{
	models::Amount,
	services::legacy::{LegacyEndpoint, LegacyTxInfo, TxStatus},
};

/// Builder for creating test LegacyTxInfo instances
pub struct LegacyTxInfoBuilder {
	legacy: LegacyTxInfo,
}

impl Default for LegacyTxInfoBuilder {
	fn default() -> Self {
		Self {
			legacy: LegacyTxInfo {
				tx_id: "0x01".to_string(),
				block_hash: "0xblock".to_string(),
				block_index: 100,
				block_time: 1_700_000_000,
				confirmations: 1,
				..Default::default()
			},
		}
	}
}

impl LegacyTxInfoBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn tx_id(mut self, tx_id: &str) -> Self {
		self.legacy.tx_id = tx_id.to_string();
		self
	}

	pub fn from(mut self, from: &str) -> Self {
		self.legacy.from = from.to_string();
		self
	}

	pub fn contract(mut self, contract: &str) -> Self {
		self.legacy.contract = contract.to_string();
		self
	}

	pub fn fee(mut self, fee: u64) -> Self {
		self.legacy.fee = Amount::from_u64(fee);
		self
	}

	pub fn fee_payer(mut self, fee_payer: &str) -> Self {
		self.legacy.fee_payer = fee_payer.to_string();
		self
	}

	pub fn fee_contract(mut self, fee_contract: &str) -> Self {
		self.legacy.fee_contract = fee_contract.to_string();
		self
	}

	pub fn block_index(mut self, block_index: i64) -> Self {
		self.legacy.block_index = block_index;
		self
	}

	pub fn confirmations(mut self, confirmations: i64) -> Self {
		self.legacy.confirmations = confirmations;
		self
	}

	pub fn failed(mut self, error: &str) -> Self {
		self.legacy.status = TxStatus::Failure;
		self.legacy.error = error.to_string();
		self
	}

	/// Adds a native source.
	pub fn source(self, address: &str, amount: u64) -> Self {
		self.source_endpoint(LegacyEndpoint::new(address, "", Amount::from_u64(amount)))
	}

	/// Adds a native destination.
	pub fn destination(self, address: &str, amount: u64) -> Self {
		self.destination_endpoint(LegacyEndpoint::new(address, "", Amount::from_u64(amount)))
	}

	pub fn source_endpoint(mut self, endpoint: LegacyEndpoint) -> Self {
		self.legacy.sources.push(endpoint);
		self
	}

	pub fn destination_endpoint(mut self, endpoint: LegacyEndpoint) -> Self {
		self.legacy.destinations.push(endpoint);
		self
	}

	pub fn build(self) -> LegacyTxInfo {
		self.legacy
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_legacy_tx_info() {
		let legacy = LegacyTxInfoBuilder::new().build();
		assert_eq!(legacy.block_index, 100);
		assert!(legacy.fee.is_zero());
		assert_eq!(legacy.error_message(), None);
	}

	#[test]
	fn test_endpoints_in_order() {
		let legacy = LegacyTxInfoBuilder::new()
			.source("a", 1)
			.source("b", 2)
			.destination("c", 3)
			.failed("boom")
			.build();
		assert_eq!(legacy.sources[1].address, "b");
		assert_eq!(legacy.destinations[0].amount, Amount::from_u64(3));
		assert_eq!(legacy.error_message().as_deref(), Some("boom"));
	}
}
