//! UTXO drivers.
//!
//! An unspent output can only be consumed once. Two inputs selecting a common
//! outpoint conflict on chain, which is what makes a retry safe.

use serde::{Deserialize, Serialize};

use crate::models::{blockchain::tx_input::TxInputSafety, Amount, TxInput};

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outpoint {
	/// Hex encoded id of the transaction that created the output.
	pub hash: String,
	pub index: u32,
}

impl Outpoint {
	pub fn new(hash: impl Into<String>, index: u32) -> Self {
		Self {
			hash: hash.into(),
			index,
		}
	}

	/// Hashes compare case insensitively, with or without a `0x` prefix.
	pub fn same_as(&self, other: &Outpoint) -> bool {
		let strip = |h: &str| h.trim_start_matches("0x").to_ascii_lowercase();
		self.index == other.index && strip(&self.hash) == strip(&other.hash)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnspentOutput {
	pub outpoint: Outpoint,
	pub value: Amount,
}

impl UnspentOutput {
	pub fn new(hash: impl Into<String>, index: u32, value: u64) -> Self {
		Self {
			outpoint: Outpoint::new(hash, index),
			value: Amount::from_u64(value),
		}
	}
}

fn share_outpoint(a: &[UnspentOutput], b: &[UnspentOutput]) -> bool {
	a.iter()
		.any(|x| b.iter().any(|y| x.outpoint.same_as(&y.outpoint)))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitcoinTxInput {
	pub unspent_outputs: Vec<UnspentOutput>,
	pub gas_price_per_byte: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardanoTxInput {
	pub utxos: Vec<UnspentOutput>,
	pub slot: u64,
	pub fee: u64,
	pub transaction_validity_time: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KaspaTxInput {
	pub address: String,
	pub utxos: Vec<UnspentOutput>,
	pub fee_per_gram: Amount,
	pub mass: u64,
	pub min_fee: Amount,
}

macro_rules! utxo_safety {
	($input:ty, $($variant:ident)|+, $field:ident) => {
		impl TxInputSafety for $input {
			fn independent_of(&self, old: Option<&TxInput>) -> bool {
				match old {
					$(Some(TxInput::$variant(old)))|+ => !share_outpoint(&self.$field, &old.$field),
					_ => false,
				}
			}

			fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
				matches!(old, $(Some(TxInput::$variant(_)))|+) && !self.independent_of(old)
			}
		}
	};
}

utxo_safety!(BitcoinTxInput, Bitcoin | BitcoinCash, unspent_outputs);
utxo_safety!(CardanoTxInput, Cardano, utxos);
utxo_safety!(KaspaTxInput, Kaspa, utxos);
