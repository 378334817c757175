//! Pending transaction parameters and their double-send safety rules.
//!
//! Before building a transaction a driver fetches a fresh [`TxInput`]
//! (nonce, unspent outputs, recent blockhash...). When a previous attempt may
//! still be in flight, the caller compares the new input to the old one:
//!
//! - `independent_of(old)`: both transactions could be included on chain.
//! - `safe_from_double_send(old)`: at most one of them can ever be included,
//!   so resubmitting with the new input cannot send twice.
//!
//! An unknown previous input or one of another driver resolves to the
//! conservative answer of each driver family.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Driver;

mod error;
mod object;
mod sequence;
mod time_window;
mod utxo;

pub use error::TxInputError;
pub use object::{SuiCoin, SuiTxInput};
pub use sequence::{
	AptosTxInput, CosmosTxInput, EgldTxInput, EvmTxInput, SubstrateTxInput, TonTxInput,
};
pub use time_window::{
	outlived, EosTxInput, HederaTxInput, InternetComputerTxInput, SolanaTxInput, TronTxInput,
	EOS_MARGIN, EOS_WINDOW, ICP_MARGIN, ICP_WINDOW, SOLANA_MARGIN, SOLANA_WINDOW,
};
pub use utxo::{BitcoinTxInput, CardanoTxInput, KaspaTxInput, Outpoint, UnspentOutput};

/// Double-send safety predicates every driver input implements.
pub trait TxInputSafety {
	/// True when a transaction built from `self` and one built from `old`
	/// can both be included on chain.
	fn independent_of(&self, old: Option<&TxInput>) -> bool;

	/// True when a transaction built from `self` can never be included
	/// alongside one built from `old`.
	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool;
}

/// Both safety answers for a pair of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyVerdict {
	pub independent: bool,
	pub safe_from_double_send: bool,
}

/// Tagged union of every driver's input, discriminated by the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TxInput {
	Aptos(AptosTxInput),
	Bitcoin(BitcoinTxInput),
	BitcoinCash(BitcoinTxInput),
	Cardano(CardanoTxInput),
	Cosmos(CosmosTxInput),
	Egld(EgldTxInput),
	Eos(EosTxInput),
	Evm(EvmTxInput),
	Hedera(HederaTxInput),
	InternetComputer(InternetComputerTxInput),
	Kaspa(KaspaTxInput),
	Solana(SolanaTxInput),
	Substrate(SubstrateTxInput),
	Sui(SuiTxInput),
	Ton(TonTxInput),
	Tron(TronTxInput),
}

impl TxInput {
	pub fn driver(&self) -> Driver {
		match self {
			TxInput::Aptos(_) => Driver::Aptos,
			TxInput::Bitcoin(_) => Driver::Bitcoin,
			TxInput::BitcoinCash(_) => Driver::BitcoinCash,
			TxInput::Cardano(_) => Driver::Cardano,
			TxInput::Cosmos(_) => Driver::Cosmos,
			TxInput::Egld(_) => Driver::Egld,
			TxInput::Eos(_) => Driver::Eos,
			TxInput::Evm(_) => Driver::Evm,
			TxInput::Hedera(_) => Driver::Hedera,
			TxInput::InternetComputer(_) => Driver::InternetComputer,
			TxInput::Kaspa(_) => Driver::Kaspa,
			TxInput::Solana(_) => Driver::Solana,
			TxInput::Substrate(_) => Driver::Substrate,
			TxInput::Sui(_) => Driver::Sui,
			TxInput::Ton(_) => Driver::Ton,
			TxInput::Tron(_) => Driver::Tron,
		}
	}

	fn as_safety(&self) -> &dyn TxInputSafety {
		match self {
			TxInput::Aptos(input) => input,
			TxInput::Bitcoin(input) | TxInput::BitcoinCash(input) => input,
			TxInput::Cardano(input) => input,
			TxInput::Cosmos(input) => input,
			TxInput::Egld(input) => input,
			TxInput::Eos(input) => input,
			TxInput::Evm(input) => input,
			TxInput::Hedera(input) => input,
			TxInput::InternetComputer(input) => input,
			TxInput::Kaspa(input) => input,
			TxInput::Solana(input) => input,
			TxInput::Substrate(input) => input,
			TxInput::Sui(input) => input,
			TxInput::Ton(input) => input,
			TxInput::Tron(input) => input,
		}
	}

	fn same_driver<'a>(&self, old: Option<&'a TxInput>) -> Option<&'a TxInput> {
		old.filter(|old| old.driver() == self.driver())
	}

	/// Evaluates both predicates against the previously used input.
	pub fn compare(&self, old: Option<&TxInput>) -> SafetyVerdict {
		let verdict = SafetyVerdict {
			independent: self.independent_of(old),
			safe_from_double_send: self.safe_from_double_send(old),
		};
		debug!(
			driver = ?self.driver(),
			old_driver = ?old.map(TxInput::driver),
			independent = verdict.independent,
			safe_from_double_send = verdict.safe_from_double_send,
			"compared tx inputs"
		);
		verdict
	}

	pub fn from_json(json: &str) -> Result<Self, TxInputError> {
		serde_json::from_str(json).map_err(TxInputError::from_decode)
	}

	pub fn to_json(&self) -> Result<String, TxInputError> {
		serde_json::to_string(self).map_err(|e| TxInputError::EncodeError(e.to_string()))
	}
}

/// An input of another driver tells nothing about this one and is treated
/// like a missing one. Bitcoin and Bitcoin Cash share an input type, so the
/// per-type impls alone cannot tell them apart.
impl TxInputSafety for TxInput {
	fn independent_of(&self, old: Option<&TxInput>) -> bool {
		self.as_safety().independent_of(self.same_driver(old))
	}

	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
		self.as_safety().safe_from_double_send(self.same_driver(old))
	}
}
