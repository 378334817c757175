//! Blockchain amounts.
//!
//! Amounts are kept in the chain's smallest unit. Every chain supported by the
//! drivers fits its balances in 256 bits, so magnitudes are `U256` and fee nets
//! are `I256`. Both serialize as decimal strings so JSON consumers never lose
//! precision.

use std::{fmt, str::FromStr};

use alloy::primitives::{I256, U256};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative magnitude in the chain's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(U256);

impl Amount {
	pub const ZERO: Self = Self(U256::ZERO);

	pub fn new(value: U256) -> Self {
		Self(value)
	}

	pub fn from_u64(value: u64) -> Self {
		Self(U256::from(value))
	}

	pub fn as_u256(&self) -> U256 {
		self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	/// Converts to a human readable decimal using `decimals` places.
	///
	/// Returns `None` when the amount does not fit the decimal representation
	/// (more than 96 bits of mantissa or more than 28 decimals).
	pub fn to_human(&self, decimals: u32) -> Option<Decimal> {
		let mantissa = u128::try_from(self.0).ok()?;
		let mantissa = i128::try_from(mantissa).ok()?;
		Decimal::try_from_i128_with_scale(mantissa, decimals)
			.ok()
			.map(|d| d.normalize())
	}
}

impl From<u64> for Amount {
	fn from(value: u64) -> Self {
		Self::from_u64(value)
	}
}

impl From<U256> for Amount {
	fn from(value: U256) -> Self {
		Self(value)
	}
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for Amount {
	type Err = String;

	/// Accepts decimal strings and `0x` prefixed hex strings.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
			Some(hex) => U256::from_str_radix(hex, 16),
			None => U256::from_str_radix(s, 10),
		};
		parsed
			.map(Self)
			.map_err(|e| format!("not a valid integer amount '{}': {}", s, e))
	}
}

impl Serialize for Amount {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0.to_string())
	}
}

struct AmountVisitor;

impl de::Visitor<'_> for AmountVisitor {
	type Value = Amount;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("a non-negative integer or an integer string")
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
		Ok(Amount::from_u64(v))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
		u64::try_from(v)
			.map(Amount::from_u64)
			.map_err(|_| E::custom(format!("negative amount: {}", v)))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
		v.parse().map_err(E::custom)
	}
}

impl<'de> Deserialize<'de> for Amount {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(AmountVisitor)
	}
}

/// A signed net amount, as produced by the fee ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SignedAmount(I256);

impl SignedAmount {
	pub const ZERO: Self = Self(I256::ZERO);

	pub fn new(value: I256) -> Self {
		Self(value)
	}

	/// Net of `debits - credits`, saturating at the signed 256 bit range.
	pub fn net(debits: U256, credits: U256) -> Self {
		if debits >= credits {
			Self(I256::try_from(debits - credits).unwrap_or(I256::MAX))
		} else {
			Self(-I256::try_from(credits - debits).unwrap_or(I256::MAX))
		}
	}

	pub fn as_i256(&self) -> I256 {
		self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	pub fn is_negative(&self) -> bool {
		self.0.is_negative()
	}
}

impl From<Amount> for SignedAmount {
	fn from(amount: Amount) -> Self {
		Self::net(amount.as_u256(), U256::ZERO)
	}
}

impl fmt::Display for SignedAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for SignedAmount {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0.to_string())
	}
}

impl<'de> Deserialize<'de> for SignedAmount {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		I256::from_dec_str(raw.trim())
			.map(Self)
			.map_err(|e| de::Error::custom(format!("invalid signed amount '{}': {}", raw, e)))
	}
}
