//! Chain configuration loading from disk.

use std::collections::HashMap;

use crosschain_tx_core::{
	models::{ChainId, Driver},
	repositories::{ChainRepository, ChainRepositoryTrait, ChainService, RepositoryError},
};
use tempfile::TempDir;

use crate::integration::mocks::{create_test_chain, write_chain_file, MockChainRepository};

#[test]
fn test_load_chains_from_directory() {
	let dir = TempDir::new().unwrap();
	write_chain_file(dir.path(), "bitcoin", &create_test_chain("BTC", Driver::Bitcoin, 6));
	write_chain_file(dir.path(), "ethereum", &create_test_chain("ETH", Driver::Evm, 12));
	std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

	let repository = ChainRepository::new(Some(dir.path())).unwrap();
	let chains = repository.get_all();
	assert_eq!(chains.len(), 2);
	assert_eq!(repository.get("BTC").unwrap().confirmations_final, 6);
	assert_eq!(repository.get("ETH").unwrap().driver, Driver::Evm);
	assert!(repository.get("bitcoin").is_none());
}

#[test]
fn test_invalid_files_are_skipped() {
	let dir = TempDir::new().unwrap();
	write_chain_file(dir.path(), "ethereum", &create_test_chain("ETH", Driver::Evm, 12));
	write_chain_file(dir.path(), "zero", &create_test_chain("SOL", Driver::Solana, 0));
	std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

	let service = ChainService::<ChainRepository>::new(Some(dir.path())).unwrap();
	assert_eq!(service.get_all().len(), 1);
	assert!(service.get(&ChainId::new("SOL")).is_none());
}

#[test]
fn test_duplicate_chain_is_rejected() {
	let dir = TempDir::new().unwrap();
	write_chain_file(dir.path(), "eth-a", &create_test_chain("ETH", Driver::Evm, 12));
	write_chain_file(dir.path(), "eth-b", &create_test_chain("ETH", Driver::Evm, 6));

	let result = ChainRepository::new(Some(dir.path()));
	assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
}

#[test]
fn test_missing_directory_is_a_load_error() {
	let dir = TempDir::new().unwrap();
	let missing = dir.path().join("absent");
	let result = ChainRepository::new(Some(&missing));
	assert!(matches!(result, Err(RepositoryError::LoadError(_))));
}

#[test]
fn test_service_delegates_to_repository() {
	let mut repository = MockChainRepository::new();
	repository.expect_get_all().times(1).returning(|| {
		HashMap::from([(
			"ADA".to_string(),
			create_test_chain("ADA", Driver::Cardano, 10),
		)])
	});
	repository.expect_get().returning(|_| None);

	let service = ChainService::new_with_repository(repository).unwrap();
	assert!(service.get_all().contains_key("ADA"));
	assert!(matches!(
		service.bridge(&ChainId::new("ADA")),
		Err(RepositoryError::UnknownChain(_))
	));
}
