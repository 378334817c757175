//! Expiring drivers.
//!
//! These chains have no account sequence; a signed transaction is valid only
//! during a window after its reference time (recent blockhash, valid start,
//! ingress expiry). Any two inputs may be used concurrently, and a retry is
//! safe only once the previous attempt can no longer be included: its window
//! plus a safety margin has passed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{blockchain::tx_input::TxInputSafety, Amount, TxInput};

const NANOS_PER_SEC: i128 = 1_000_000_000;

pub const SOLANA_WINDOW: Duration = Duration::from_secs(150);
pub const SOLANA_MARGIN: Duration = Duration::from_secs(150);
pub const EOS_WINDOW: Duration = Duration::from_secs(5 * 60);
pub const EOS_MARGIN: Duration = Duration::from_secs(90);
pub const ICP_WINDOW: Duration = Duration::from_secs(5 * 60);
pub const ICP_MARGIN: Duration = Duration::from_secs(5 * 60);

/// True when `new_start` is strictly past `old_start + window + margin`.
/// Times are unix nanoseconds; i128 keeps the sum from overflowing.
pub fn outlived(new_start: i128, old_start: i128, window: Duration, margin: Duration) -> bool {
	let deadline = old_start + window.as_nanos() as i128 + margin.as_nanos() as i128;
	new_start > deadline
}

fn secs_to_nanos(secs: i64) -> i128 {
	secs as i128 * NANOS_PER_SEC
}

fn non_negative_secs(secs: i64) -> Duration {
	Duration::from_secs(secs.max(0) as u64)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolanaTxInput {
	pub recent_block_hash: String,
	/// Unix seconds at which the blockhash was fetched.
	pub timestamp: i64,
	pub prioritization_fee: Amount,
	pub base_fee: Amount,
	pub units_consumed: u64,
}

impl TxInputSafety for SolanaTxInput {
	fn independent_of(&self, _old: Option<&TxInput>) -> bool {
		true
	}

	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::Solana(old)) => {
				old.recent_block_hash != self.recent_block_hash
					&& outlived(
						secs_to_nanos(self.timestamp),
						secs_to_nanos(old.timestamp),
						SOLANA_WINDOW,
						SOLANA_MARGIN,
					)
			}
			_ => false,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TronTxInput {
	pub ref_block_bytes: String,
	pub ref_block_hash: String,
	/// Unix seconds.
	pub timestamp: i64,
	/// Unix seconds after which the transaction is rejected.
	pub expiration: i64,
	pub max_fee: Amount,
}

impl TronTxInput {
	pub fn window(&self) -> Duration {
		non_negative_secs(self.expiration.saturating_sub(self.timestamp))
	}
}

impl TxInputSafety for TronTxInput {
	fn independent_of(&self, _old: Option<&TxInput>) -> bool {
		true
	}

	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::Tron(old)) => {
				let window = old.window();
				outlived(
					secs_to_nanos(self.timestamp),
					secs_to_nanos(old.timestamp),
					window,
					window,
				)
			}
			_ => false,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EosTxInput {
	/// Unix seconds.
	pub timestamp: i64,
	pub chain_id: String,
	pub head_block_id: String,
	pub from_account: String,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub fee_payer_account: String,
	pub symbol: String,
}

impl TxInputSafety for EosTxInput {
	fn independent_of(&self, _old: Option<&TxInput>) -> bool {
		true
	}

	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::Eos(old)) => {
				!old.head_block_id.eq_ignore_ascii_case(&self.head_block_id)
					&& outlived(
						secs_to_nanos(self.timestamp),
						secs_to_nanos(old.timestamp),
						EOS_WINDOW,
						EOS_MARGIN,
					)
			}
			_ => false,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HederaTxInput {
	pub account_id: String,
	pub node_account_id: String,
	/// Unix nanoseconds.
	pub valid_start_timestamp: i64,
	pub max_transaction_fee: u64,
	/// Validity window in seconds.
	pub valid_time: i64,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub memo: String,
}

impl HederaTxInput {
	pub fn window(&self) -> Duration {
		non_negative_secs(self.valid_time)
	}
}

impl TxInputSafety for HederaTxInput {
	fn independent_of(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::Hedera(old)) => old.valid_start_timestamp != self.valid_start_timestamp,
			_ => false,
		}
	}

	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::Hedera(old)) => {
				let window = old.window();
				outlived(
					self.valid_start_timestamp as i128,
					old.valid_start_timestamp as i128,
					window,
					window,
				)
			}
			_ => false,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetComputerTxInput {
	pub fee: u64,
	/// Unix seconds.
	pub create_time: i64,
	pub memo: u64,
	pub canister: String,
	pub nonce: String,
}

impl TxInputSafety for InternetComputerTxInput {
	fn independent_of(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::InternetComputer(old)) => old.create_time != self.create_time,
			_ => false,
		}
	}

	fn safe_from_double_send(&self, old: Option<&TxInput>) -> bool {
		match old {
			Some(TxInput::InternetComputer(old)) => outlived(
				secs_to_nanos(self.create_time),
				secs_to_nanos(old.create_time),
				ICP_WINDOW,
				ICP_MARGIN,
			),
			_ => false,
		}
	}
}
