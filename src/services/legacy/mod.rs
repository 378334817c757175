//! Bridge from flat legacy driver results to the movement model.
//!
//! Older drivers report a transaction as a sender, a receiver, lists of
//! sources and destinations and one fee. The bridge maps them onto movements
//! with either the UTXO or the account strategy, synthesizes the fee
//! movement and recomputes fees from the result.

mod bridge;
mod types;

pub use bridge::LegacyBridge;
pub use types::{LegacyEndpoint, LegacyTxInfo, MappingStrategy, TxStatus};
