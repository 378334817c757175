//! Feeds arbitrary JSON into the tx input envelope and compares whatever
//! decodes against itself. Neither decoding nor the safety predicates may
//! panic.

#![no_main]

use crosschain_tx_core::models::{TxInput, TxInputSafety};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let Ok(json) = std::str::from_utf8(data) else {
		return;
	};
	let Ok(input) = TxInput::from_json(json) else {
		return;
	};

	let _ = input.independent_of(None);
	let verdict = input.compare(Some(&input));
	assert!(!(verdict.independent && verdict.safe_from_double_send));

	if let Ok(encoded) = input.to_json() {
		assert!(TxInput::from_json(&encoded).is_ok());
	}
});
