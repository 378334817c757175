//! Address and transaction hash normalization.
//!
//! Drivers receive identifiers from many sources (RPC nodes, explorers, user
//! input) that disagree on case, prefixes and zero padding. These helpers map
//! every spelling onto one canonical form per driver. Case sensitive encodings
//! (base58, bech32, base32) are left untouched.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{ChainId, Driver};

lazy_static! {
	static ref HEX_PREFIXED: Regex = Regex::new("0[xX][0-9a-fA-F]+").unwrap();
	static ref HEX_LEADING: Regex = Regex::new("^[0-9a-fA-F]+").unwrap();
}

/// Normalizes a Move address, e.g. `coin::Coin<0x11AA::coin::NAME>`.
///
/// Only the hex account part is lowercased; the `coin::Coin<>` wrapper is removed.
pub fn move_address(address: &str) -> String {
	let mut address = address.to_string();
	if address.contains("coin::Coin<") {
		address = address.replacen("coin::Coin<", "", 1).replacen('>', "", 1);
	}
	if !address.starts_with("0x") && HEX_LEADING.is_match(&address) {
		address = format!("0x{}", address);
	}

	if let Some(found) = HEX_PREFIXED.find(&address) {
		let lower = found.as_str().to_lowercase();
		return address.replacen(found.as_str(), &lower, 1);
	}
	if hex::decode(&address).is_ok() {
		return address.to_lowercase();
	}
	address
}

/// Left pads the hex part of `value` with zeros to `target_len` characters.
fn zero_pad_hex(prefix: &str, value: &str, target_len: usize) -> String {
	let digits = value.strip_prefix(prefix).unwrap_or(value);
	format!("{}{:0>width$}", prefix, digits.to_lowercase(), width = target_len)
}

fn strip_0x(value: &str) -> &str {
	value.strip_prefix("0x").unwrap_or(value)
}

/// Normalizes an address or contract id for `chain`.
pub fn address(address: &str, chain: &ChainId) -> String {
	if address.is_empty() {
		return String::new();
	}
	if address == chain.as_str() {
		return address.to_string();
	}
	let address = address.trim();

	let driver = match Driver::for_chain(chain) {
		Some(driver) => driver,
		None if address.starts_with("0x") => Driver::Evm,
		None => return address.to_string(),
	};

	match driver {
		Driver::Aptos => {
			let address = move_address(address);
			if address.starts_with("0x") && !address.contains(':') && !address.contains('-') {
				zero_pad_hex("0x", &address, 64)
			} else {
				address
			}
		}
		Driver::Bitcoin | Driver::BitcoinCash => match address.split_once(':') {
			Some((_, rest)) => rest.to_string(),
			None => address.to_string(),
		},
		Driver::Evm => {
			let prefix = if chain.as_str() == "XDC" { "xdc" } else { "0x" };
			let bare = address
				.strip_prefix("xdc")
				.or_else(|| address.strip_prefix("0x"))
				.unwrap_or(address);
			format!("{}{}", prefix, bare).to_lowercase()
		}
		Driver::InternetComputer => strip_0x(address).to_lowercase(),
		Driver::Sui => move_address(address),
		Driver::Hedera => {
			if address.contains('.') || address.contains('-') {
				address.to_string()
			} else {
				format!("0x{}", strip_0x(address)).to_lowercase()
			}
		}
		_ => address.to_string(),
	}
}

/// Normalizes a transaction hash for `chain`.
pub fn transaction_hash(hash: &str, chain: &ChainId) -> String {
	if hash.is_empty() {
		return String::new();
	}
	let hash = hash.trim();

	let Some(driver) = Driver::for_chain(chain) else {
		return hash.to_string();
	};

	match driver {
		Driver::Evm | Driver::Substrate => {
			if chain.as_str() == "XDC" {
				let bare = hash.strip_prefix("0x").unwrap_or(hash);
				zero_pad_hex("xdc", bare, 64)
			} else {
				zero_pad_hex("0x", hash, 64)
			}
		}
		Driver::Bitcoin | Driver::BitcoinCash => strip_0x(hash).to_lowercase(),
		Driver::Aptos => move_address(hash),
		Driver::Cosmos
		| Driver::Eos
		| Driver::Kaspa
		| Driver::Tron
		| Driver::Xlm
		| Driver::Xrp => zero_pad_hex("", strip_0x(hash), 64),
		Driver::Hedera => {
			if hash.contains('.') {
				hash.to_string()
			} else {
				zero_pad_hex("0x", hash, 64)
			}
		}
		_ => hash.to_string(),
	}
}

/// Returns true if both spellings normalize to the same address on `chain`.
pub fn addresses_equal(a: &str, b: &str, chain: &ChainId) -> bool {
	address(a, chain) == address(b, chain)
}
