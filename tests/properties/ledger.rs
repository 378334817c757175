use std::collections::HashSet;

use crate::properties::strategies::{chain, movements_strategy};

use crosschain_tx_core::services::ledger::BalanceLedger;
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// At most one non-zero entry per asset touched
	#[test]
	fn test_fee_entries_bounded_by_assets(movements in movements_strategy()) {
		let assets: HashSet<_> = movements.iter().map(|m| m.asset_id.clone()).collect();
		let fees = BalanceLedger::calculate_fees(&chain(), &movements);

		prop_assert!(fees.len() <= assets.len());
		prop_assert!(fees.iter().all(|f| !f.balance.is_zero()));
		prop_assert!(fees.iter().all(|f| assets.contains(&f.contract)));
	}

	// Deterministic order regardless of input order
	#[test]
	fn test_fees_sorted_and_order_independent(movements in movements_strategy()) {
		let fees = BalanceLedger::calculate_fees(&chain(), &movements);
		prop_assert!(fees.windows(2).all(|w| w[0].contract < w[1].contract));

		let mut reversed = movements.clone();
		reversed.reverse();
		prop_assert_eq!(fees, BalanceLedger::calculate_fees(&chain(), &reversed));
	}

	// Repeated evaluation yields the same result
	#[test]
	fn test_fees_idempotent(movements in movements_strategy()) {
		let first = BalanceLedger::calculate_fees(&chain(), &movements);
		let second = BalanceLedger::calculate_fees(&chain(), &movements);
		prop_assert_eq!(first, second);
	}
}
