use std::time::Duration;

use crate::properties::strategies::{evm_input_strategy, hedera_input_strategy};

use crosschain_tx_core::models::{outlived, TxInput, TxInputSafety};
use proptest::{prelude::*, test_runner::Config};

const NANOS: i64 = 1_000_000_000;

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// A retry is safe exactly when it cannot be included alongside the original
	#[test]
	fn test_sequence_predicates_are_exclusive(new in evm_input_strategy(), old in evm_input_strategy()) {
		let new = TxInput::Evm(new);
		let old = TxInput::Evm(old);
		let verdict = new.compare(Some(&old));
		prop_assert_ne!(verdict.independent, verdict.safe_from_double_send);
	}

	#[test]
	fn test_same_nonce_is_safe(input in evm_input_strategy()) {
		let new = TxInput::Evm(input.clone());
		let old = TxInput::Evm(input);
		prop_assert!(new.safe_from_double_send(Some(&old)));
		prop_assert!(!new.independent_of(Some(&old)));
	}

	#[test]
	fn test_missing_old_is_conservative(input in evm_input_strategy()) {
		let new = TxInput::Evm(input);
		prop_assert!(!new.independent_of(None));
		prop_assert!(!new.safe_from_double_send(None));
	}

	// Safe only once window and margin have passed
	#[test]
	fn test_time_window_boundary(old in hedera_input_strategy()) {
		let deadline = old.valid_start_timestamp + 2 * old.valid_time * NANOS;
		let mut after = old.clone();
		after.valid_start_timestamp = deadline + 1;
		let mut at = old.clone();
		at.valid_start_timestamp = deadline;
		let mut inside_margin = old.clone();
		inside_margin.valid_start_timestamp = old.valid_start_timestamp + old.valid_time * NANOS + 1;

		let old = TxInput::Hedera(old);
		prop_assert!(TxInput::Hedera(after).safe_from_double_send(Some(&old)));
		prop_assert!(!TxInput::Hedera(at).safe_from_double_send(Some(&old)));
		prop_assert!(!TxInput::Hedera(inside_margin).safe_from_double_send(Some(&old)));
	}

	#[test]
	fn test_outlived_monotonic(start in 0i64..1_000_000, window in 0u64..600, margin in 0u64..600, step in 1i64..1_000) {
		let window = Duration::from_secs(window);
		let margin = Duration::from_secs(margin);
		let new = start as i128 * NANOS as i128;
		let old = 0i128;
		if outlived(new, old, window, margin) {
			prop_assert!(outlived(new + step as i128, old, window, margin));
		}
	}
}
