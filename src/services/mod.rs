//! Core services of the normalization engine.
//!
//! - `ledger`: nets movements into per-asset fees
//! - `coalescer`: merges movements of the same asset
//! - `legacy`: bridges flat legacy driver results into `TxInfo`

pub mod coalescer;
pub mod ledger;
pub mod legacy;
