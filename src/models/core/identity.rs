//! Canonical identifiers for chains, assets, addresses and transactions.
//!
//! Every identifier has a raw form (`AssetId`, `Address`) and a resource name
//! form (`chains/{chain}/...`). Both are normalized per driver so that two
//! spellings of the same address resolve to the same identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::normalize;

/// Opaque chain identity, e.g. `ETH` or `SOL`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
	pub fn new(chain: impl Into<String>) -> Self {
		Self(chain.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ChainId {
	fn from(chain: &str) -> Self {
		Self::new(chain)
	}
}

/// Canonical identifier of a fungible unit: the chain id for the native asset,
/// or the normalized contract / token id otherwise. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
	/// The native asset of `chain`.
	pub fn native(chain: &ChainId) -> Self {
		Self(chain.as_str().to_string())
	}

	/// Builds the asset id for `contract` on `chain`; a blank contract is the
	/// native asset.
	pub fn new(chain: &ChainId, contract: &str) -> Self {
		let contract = contract.trim();
		if contract.is_empty() || contract == chain.as_str() {
			return Self::native(chain);
		}
		Self(normalize::address(contract, chain))
	}

	pub fn is_native(&self, chain: &ChainId) -> bool {
		self.0 == chain.as_str()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for AssetId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A normalized chain address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
	pub fn new(chain: &ChainId, address: &str) -> Self {
		if address == chain.as_str() {
			return Self(address.to_string());
		}
		Self(normalize::address(address, chain))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// `chains/{chain}/transactions/{hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionName(String);

impl TransactionName {
	pub fn new(chain: &ChainId, tx_hash: &str) -> Self {
		let hash = normalize::transaction_hash(tx_hash, chain);
		Self(format!("chains/{}/transactions/{}", chain, hash))
	}

	/// The chain segment of the name, if the name is well formed.
	pub fn chain(&self) -> Option<ChainId> {
		let parts: Vec<&str> = self.0.split('/').collect();
		if parts.len() > 3 && parts[0] == "chains" {
			Some(ChainId::new(parts[1]))
		} else {
			None
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// `chains/{chain}/assets/{asset}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetName(String);

impl AssetName {
	pub fn new(chain: &ChainId, asset: &AssetId) -> Self {
		Self(format!("chains/{}/assets/{}", chain, asset))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// `chains/{chain}/addresses/{address}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressName(String);

impl AddressName {
	pub fn new(chain: &ChainId, address: &Address) -> Self {
		Self(format!("chains/{}/addresses/{}", chain, address))
	}

	/// The address this name resolves to.
	pub fn address(&self) -> Option<Address> {
		let mut parts = self.0.splitn(4, '/');
		match (parts.next(), parts.next(), parts.next(), parts.next()) {
			(Some("chains"), Some(_), Some("addresses"), Some(address)) => {
				Some(Address(address.to_string()))
			}
			_ => None,
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}
