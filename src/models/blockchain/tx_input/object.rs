//! Object-owned drivers (Sui).
//!
//! Coins are versioned objects. A transaction locks the exact object
//! versions it spends, and locks are released at epoch boundaries.

use serde::{Deserialize, Serialize};

use crate::models::{blockchain::tx_input::TxInputSafety, Amount, TxInput};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiCoin {
	pub coin_type: String,
	pub coin_object_id: String,
	pub version: u64,
	pub digest: String,
	pub balance: Amount,
}

impl SuiCoin {
	/// Same object at the same version.
	pub fn same_as(&self, other: &SuiCoin) -> bool {
		self.coin_object_id == other.coin_object_id && self.digest == other.digest
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiTxInput {
	pub gas_budget: u64,
	pub gas_price: u64,
	pub gas_coin: SuiCoin,
	pub gas_coin_owner: String,
	pub coins: Vec<SuiCoin>,
	pub current_epoch: u64,
}

impl SuiTxInput {
	fn all_coins(&self) -> impl Iterator<Item = &SuiCoin> {
		std::iter::once(&self.gas_coin).chain(self.coins.iter())
	}

	/// True when no coin (gas coin included) is spent by both inputs.
	pub fn coins_disjoint(&self, other: &SuiTxInput) -> bool {
		!self
			.all_coins()
			.any(|mine| other.all_coins().any(|theirs| mine.same_as(theirs)))
	}
}

impl TxInputSafety for SuiTxInput {
	fn independent_of(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::Sui(old)) => {
				old.current_epoch != self.current_epoch || self.coins_disjoint(old)
			}
			_ => false,
		}
	}

	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::Sui(old)) => {
				!(self.coins_disjoint(old) && self.current_epoch == old.current_epoch)
			}
			_ => false,
		}
	}
}
