use crosschain_tx_core::models::{Amount, ChainId, EvmTxInput, HederaTxInput, Movement};
use proptest::prelude::*;

const MIN_COLLECTION_SIZE: usize = 0;
const MAX_COLLECTION_SIZE: usize = 12;
const MAX_LEGS: usize = 4;

pub fn chain() -> ChainId {
	ChainId::new("ETH")
}

/// Native asset or one of a few token contracts.
pub fn contract_strategy() -> impl Strategy<Value = String> {
	prop::sample::select(vec!["", "0xaa", "0xbb", "0xcc"]).prop_map(|s| s.to_string())
}

fn leg_strategy() -> impl Strategy<Value = (String, u64)> {
	("0x[0-9a-f]{2}".prop_map(|s| s.to_string()), 0u64..1_000_000)
}

pub fn movement_strategy() -> impl Strategy<Value = Movement> {
	(
		contract_strategy(),
		prop::collection::vec(leg_strategy(), 0..MAX_LEGS),
		prop::collection::vec(leg_strategy(), 0..MAX_LEGS),
	)
		.prop_map(|(contract, from, to)| {
			let chain = chain();
			let mut movement = Movement::new(&chain, &contract);
			for (address, amount) in from {
				movement.add_source(&address, Amount::from_u64(amount), None);
			}
			for (address, amount) in to {
				movement.add_destination(&address, Amount::from_u64(amount), None);
			}
			movement
		})
}

pub fn movements_strategy() -> impl Strategy<Value = Vec<Movement>> {
	prop::collection::vec(movement_strategy(), MIN_COLLECTION_SIZE..MAX_COLLECTION_SIZE)
}

pub fn evm_input_strategy() -> impl Strategy<Value = EvmTxInput> {
	(0u64..1_000, "0x[0-9a-f]{4}").prop_map(|(nonce, from_address)| EvmTxInput {
		nonce,
		from_address,
		..Default::default()
	})
}

pub fn hedera_input_strategy() -> impl Strategy<Value = HederaTxInput> {
	(0i64..1_000_000_000_000_000_000, 1i64..600).prop_map(|(start, valid_time)| HederaTxInput {
		valid_start_timestamp: start,
		valid_time,
		..Default::default()
	})
}
