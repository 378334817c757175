//! Account-sequence drivers.
//!
//! The chain rejects a second transaction with the same account nonce, so two
//! inputs sharing a nonce can never both land: a retry is safe exactly when
//! the nonce did not move.

use serde::{Deserialize, Serialize};

use crate::models::{blockchain::tx_input::TxInputSafety, Amount, TxInput};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvmTxInput {
	pub nonce: u64,
	pub from_address: String,
	pub gas_limit: u64,
	pub gas_tip_cap: Amount,
	pub gas_fee_cap: Amount,
	pub gas_price: Amount,
	pub l1_fee: Amount,
	pub chain_id: Amount,
	/// Set when another account sponsors the transaction.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub fee_payer_address: String,
	pub fee_payer_nonce: u64,
}

impl EvmTxInput {
	fn has_fee_payer(&self) -> bool {
		!self.fee_payer_address.is_empty() || self.fee_payer_nonce != 0
	}
}

impl TxInputSafety for EvmTxInput {
	fn independent_of(&self, old: Option<&TxInput>) -> bool {
		let Some(TxInput::Evm(old)) = old else {
			return false;
		};
		if self.has_fee_payer() {
			// Either signer's nonce being reused ties the two together.
			let same_sender = old.nonce == self.nonce
				&& old.from_address.eq_ignore_ascii_case(&self.from_address);
			let same_payer = old.fee_payer_nonce == self.fee_payer_nonce
				&& old
					.fee_payer_address
					.eq_ignore_ascii_case(&self.fee_payer_address);
			!(same_sender || same_payer)
		} else {
			old.nonce != self.nonce
		}
	}

	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
		matches!(old, Some(TxInput::Evm(_))) && !self.independent_of(old)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AptosTxInput {
	pub sequence_number: u64,
	pub gas_limit: u64,
	pub gas_price: u64,
	pub timestamp: u64,
	pub chain_id: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmosTxInput {
	pub account_number: u64,
	pub sequence: u64,
	pub gas_limit: u64,
	pub gas_price: f64,
	pub timeout_height: u64,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub chain_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstrateTxInput {
	#[serde(rename = "account_nonce")]
	pub nonce: u64,
	pub genesis_hash: String,
	pub current_hash: String,
	pub current_height: u64,
	pub tip: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TonTxInput {
	pub sequence: u64,
	pub timestamp: i64,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub memo: String,
	pub estimated_max_fee: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EgldTxInput {
	pub nonce: u64,
	pub gas_limit: u64,
	pub gas_price: u64,
	pub chain_id: String,
	pub version: u32,
}

/// Implements the sequence rule for a driver whose input is identified by
/// `$key`: independent when the key differs, safe when the previous input
/// is of the same driver and shares the key.
macro_rules! sequence_safety {
	($input:ty, $variant:ident, |$this:ident, $old:ident| $key:expr) => {
		impl TxInputSafety for $input {
			fn independent_of(&self, old: Option<&TxInput>) -> bool {
				match old {
					Some(TxInput::$variant($old)) => {
						let $this = self;
						$key
					}
					_ => false,
				}
			}

			fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
				matches!(old, Some(TxInput::$variant(_))) && !self.independent_of(old)
			}
		}
	};
}

sequence_safety!(AptosTxInput, Aptos, |this, old| {
	old.sequence_number != this.sequence_number
});
sequence_safety!(CosmosTxInput, Cosmos, |this, old| {
	old.account_number != this.account_number || old.sequence != this.sequence
});
sequence_safety!(SubstrateTxInput, Substrate, |this, old| old.nonce != this.nonce);
sequence_safety!(TonTxInput, Ton, |this, old| old.sequence != this.sequence);
sequence_safety!(EgldTxInput, Egld, |this, old| old.nonce != this.nonce);
