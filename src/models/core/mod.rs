//! Core domain models shared by every driver.
//!
//! - Amounts: blockchain magnitudes and signed nets
//! - Identities: chain, asset, address and transaction identifiers
//! - Chains: per-chain configuration (finality, native asset aliases)

mod amount;
mod chain;
mod identity;

pub use amount::{Amount, SignedAmount};
pub use chain::ChainConfig;
pub use identity::{Address, AddressName, AssetId, AssetName, ChainId, TransactionName};
