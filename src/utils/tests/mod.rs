//! Test helper utilities
//!
//! - `builders`: Test helper utilities for creating test instances of models

pub mod builders {
	pub mod chain;
	pub mod legacy;
}

pub use builders::*;
