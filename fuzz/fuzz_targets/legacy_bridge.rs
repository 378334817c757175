//! Normalizes arbitrary legacy results under both mapping strategies. The
//! bridge never fails, and the fees it reports must match a fresh netting of
//! its movements.

#![no_main]

use crosschain_tx_core::{
	models::{ChainConfig, Driver},
	services::legacy::{LegacyBridge, LegacyTxInfo, MappingStrategy},
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let Ok(legacy) = serde_json::from_slice::<LegacyTxInfo>(data) else {
		return;
	};

	for (chain, driver, strategy) in [
		("BTC", Driver::Bitcoin, MappingStrategy::Utxo),
		("ETH", Driver::Evm, MappingStrategy::Account),
	] {
		let bridge = LegacyBridge::new(ChainConfig::new(chain, driver));
		let tx = bridge.to_tx_info(&legacy, strategy);
		assert_eq!(tx.fees, tx.calculate_fees());
	}
});
