//! Utility modules for common functionality.
//!
//! - logging: tracing subscriber setup
//! - normalize: per-driver address and hash normalization
//! - tests: builders for test instances of models

pub mod logging;
pub mod normalize;
pub mod tests;
