//! Cross-chain transaction normalization and tx-input safety.
//!
//! This crate is the chain-agnostic core shared by every chain driver of a
//! multi-chain custody backend. It does not talk to any node; drivers feed it
//! data they already fetched.
//!
//! # Architecture
//! - Models: chain/asset/address identities, amounts, chain configuration,
//!   the normalized [`models::TxInfo`] and the per-driver [`models::TxInput`]
//! - Services: fee netting ([`services::ledger`]), movement coalescing
//!   ([`services::coalescer`]) and the flat-result bridge ([`services::legacy`])
//! - Repositories: chain configuration lookup
//! - Utils: normalization, logging and test builders
//!
//! # Flow
//! 1. A driver reports a [`services::legacy::LegacyTxInfo`] or builds movements directly
//! 2. Fees are derived by netting every movement per asset
//! 3. UTXO drivers coalesce same-asset movements
//! 4. Before replacing an in-flight transaction, the caller compares the fresh
//!    tx input against the old one with [`models::TxInputSafety`]

pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
