//! Domain models and data structures for cross-chain transactions.
//!
//! This module contains all the core data structures used throughout the crate:
//!
//! - `blockchain`: Driver families, the normalized transaction result model
//!   and the per-driver transaction inputs
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (identifiers, amounts, chain settings)

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::Driver;

pub use blockchain::tx_info::{
	Balance, BalanceChange, Block, Event, Movement, MovementVariant, Stake, TxInfo, TxState,
	Unstake,
};

pub use blockchain::tx_input::{
	outlived, AptosTxInput, BitcoinTxInput, CardanoTxInput, CosmosTxInput, EgldTxInput,
	EosTxInput, EvmTxInput, HederaTxInput, InternetComputerTxInput, KaspaTxInput, Outpoint,
	SafetyVerdict, SolanaTxInput, SubstrateTxInput, SuiCoin, SuiTxInput, TonTxInput, TronTxInput,
	TxInput, TxInputError, TxInputSafety, UnspentOutput, EOS_MARGIN, EOS_WINDOW, ICP_MARGIN,
	ICP_WINDOW, SOLANA_MARGIN, SOLANA_WINDOW,
};

// Re-export core types
pub use core::{
	Address, AddressName, Amount, AssetId, AssetName, ChainConfig, ChainId, SignedAmount,
	TransactionName,
};

// Re-export config types
pub use config::{ConfigError, ConfigLoader};
