//! Legacy result normalization through the chain service.

use crosschain_tx_core::{
	models::{Amount, ChainId, Driver, MovementVariant, TxState},
	repositories::{ChainService, RepositoryError},
	services::legacy::{LegacyEndpoint, MappingStrategy},
	utils::tests::builders::legacy::LegacyTxInfoBuilder,
};

use crate::integration::mocks::{create_test_chain, MockChainRepository};

fn service_for(
	chain: &'static str,
	driver: Driver,
	confirmations_final: u64,
) -> ChainService<MockChainRepository> {
	let mut repository = MockChainRepository::new();
	repository.expect_get().returning(move |requested| {
		(requested == chain).then(|| create_test_chain(chain, driver, confirmations_final))
	});
	ChainService::new_with_repository(repository).unwrap()
}

#[test]
fn test_utxo_bridging_without_fee() {
	let service = service_for("BTC", Driver::Bitcoin, 6);
	let legacy = LegacyTxInfoBuilder::new()
		.source("a", 100)
		.destination("b", 100)
		.build();

	let tx = service
		.tx_info_from_legacy(&ChainId::new("BTC"), &legacy, None)
		.unwrap();

	assert_eq!(tx.movements.len(), 1);
	assert_eq!(tx.movements[0].from[0].balance, Amount::from_u64(100));
	assert_eq!(tx.movements[0].to[0].balance, Amount::from_u64(100));
	assert!(tx.calculate_fees().is_empty());
	assert!(tx.fees.is_empty());
}

#[test]
fn test_utxo_bridging_with_fee() {
	let service = service_for("BTC", Driver::Bitcoin, 6);
	let legacy = LegacyTxInfoBuilder::new()
		.source("a", 1000)
		.destination("b", 800)
		.fee(200)
		.build();

	let tx = service
		.tx_info_from_legacy(&ChainId::new("BTC"), &legacy, None)
		.unwrap();

	assert_eq!(tx.fees.len(), 1);
	assert_eq!(tx.fees[0].contract.as_str(), "BTC");
	assert_eq!(tx.fees[0].balance.to_string(), "200");
	assert_eq!(tx.calculate_fees(), tx.fees);
}

#[test]
fn test_account_bridging_with_fee_payer() {
	let service = service_for("ETH", Driver::Evm, 12);
	let legacy = LegacyTxInfoBuilder::new()
		.tx_id("0xabc")
		.from("0x01")
		.source("0x01", 500)
		.destination("0x02", 500)
		.fee(21)
		.confirmations(3)
		.build();

	let tx = service
		.tx_info_from_legacy(&ChainId::new("ETH"), &legacy, None)
		.unwrap();

	assert_eq!(tx.movements.len(), 2);
	let fee = &tx.movements[1];
	assert_eq!(fee.from[0].address_id.as_str(), "0x01");
	assert!(fee.to.is_empty());
	assert_eq!(
		fee.event.as_ref().map(|e| e.variant),
		Some(MovementVariant::Fee)
	);
	assert_eq!(tx.fees[0].balance.to_string(), "21");
	assert!(!tx.is_final);
	assert_eq!(tx.state, TxState::Succeeded);
}

#[test]
fn test_failed_and_pending_states() {
	let service = service_for("ETH", Driver::Evm, 1);
	let chain = ChainId::new("ETH");

	let failed = LegacyTxInfoBuilder::new().failed("reverted").build();
	let tx = service.tx_info_from_legacy(&chain, &failed, None).unwrap();
	assert_eq!(tx.state, TxState::Failed);
	assert_eq!(tx.error.as_deref(), Some("reverted"));

	let pending = LegacyTxInfoBuilder::new()
		.block_index(0)
		.confirmations(0)
		.build();
	let tx = service.tx_info_from_legacy(&chain, &pending, None).unwrap();
	assert_eq!(tx.state, TxState::Mining);
	assert!(!tx.is_final);
}

#[test]
fn test_token_transfer_with_native_fee() {
	let service = service_for("ETH", Driver::Evm, 1);
	let legacy = LegacyTxInfoBuilder::new()
		.from("0x01")
		.contract("0xtoken")
		.source_endpoint(LegacyEndpoint::new("0x01", "0xtoken", Amount::from_u64(5)))
		.destination_endpoint(LegacyEndpoint::new("0x02", "0xtoken", Amount::from_u64(5)))
		.fee(7)
		.build();

	let tx = service
		.tx_info_from_legacy(&ChainId::new("ETH"), &legacy, Some(MappingStrategy::Account))
		.unwrap();

	assert_eq!(tx.fees.len(), 1);
	assert_eq!(tx.fees[0].contract.as_str(), "ETH");
	assert_eq!(tx.fees[0].balance.to_string(), "7");
}

#[test]
fn test_unknown_chain_is_an_error() {
	let service = service_for("ETH", Driver::Evm, 1);
	let legacy = LegacyTxInfoBuilder::new().build();
	let result = service.tx_info_from_legacy(&ChainId::new("SOL"), &legacy, None);
	assert!(matches!(result, Err(RepositoryError::UnknownChain(_))));
}

#[test]
#[tracing_test::traced_test]
fn test_unknown_fee_payer_is_logged() {
	let service = service_for("ETH", Driver::Evm, 1);
	let legacy = LegacyTxInfoBuilder::new()
		.destination("0x02", 5)
		.fee(3)
		.fee_contract("0xother")
		.build();

	let tx = service
		.tx_info_from_legacy(&ChainId::new("ETH"), &legacy, None)
		.unwrap();

	let fee = tx
		.movements
		.iter()
		.find(|m| m.asset_id.as_str() == "0xother")
		.unwrap();
	assert!(fee.from[0].address_id.is_empty());
	assert!(logs_contain("no fee payer could be inferred"));
}
