//! Movement coalescing.
//!
//! UTXO drivers report one movement per input and output. Coalescing merges
//! every movement of an asset into the first one seen for it, so the result
//! has one movement per asset. Asset order and the order of balance changes
//! follow discovery order.

use std::collections::HashMap;

use crate::models::{AssetId, Movement};

/// Merges movements sharing an asset id. Applying it twice changes nothing.
pub fn coalesce(movements: Vec<Movement>) -> Vec<Movement> {
	let mut merged: Vec<Movement> = Vec::with_capacity(movements.len());
	let mut index: HashMap<AssetId, usize> = HashMap::new();

	for movement in movements {
		match index.get(&movement.asset_id) {
			Some(&position) => {
				let target = &mut merged[position];
				target.from.extend(movement.from);
				target.to.extend(movement.to);
			}
			None => {
				index.insert(movement.asset_id.clone(), merged.len());
				merged.push(movement);
			}
		}
	}

	merged
}
