use crosschain_tx_core::{
	models::{ChainConfig, Driver},
	utils::tests::builders::chain::ChainConfigBuilder,
};

pub fn create_test_chain(chain: &str, driver: Driver, confirmations_final: u64) -> ChainConfig {
	ChainConfigBuilder::new()
		.chain(chain, driver)
		.confirmations_final(confirmations_final)
		.build()
}

/// Writes `config` as `<file>.json` into `dir`.
pub fn write_chain_file(dir: &std::path::Path, file: &str, config: &ChainConfig) {
	let path = dir.join(format!("{}.json", file));
	std::fs::write(path, serde_json::to_string_pretty(config).unwrap()).unwrap();
}
