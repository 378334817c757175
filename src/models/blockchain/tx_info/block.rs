//! Block reference of a transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Amount, ChainId};

/// The block a transaction was included in.
///
/// A height of zero means the transaction has not been included yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
	pub chain: ChainId,
	pub height: Amount,
	pub hash: String,
	pub time: DateTime<Utc>,
}

impl Block {
	pub fn new(chain: &ChainId, height: u64, hash: impl Into<String>, time: DateTime<Utc>) -> Self {
		Self {
			chain: chain.clone(),
			height: Amount::from_u64(height),
			hash: hash.into(),
			time,
		}
	}

	/// Builds a block from a unix timestamp in seconds. Out of range
	/// timestamps fall back to the unix epoch.
	pub fn from_unix(chain: &ChainId, height: u64, hash: impl Into<String>, unix_secs: i64) -> Self {
		let time = DateTime::from_timestamp(unix_secs, 0).unwrap_or_default();
		Self::new(chain, height, hash, time)
	}

	pub fn is_pending(&self) -> bool {
		self.height.is_zero()
	}
}
