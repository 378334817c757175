//! Mock implementations and shared fixtures for integration tests.

mod models;

pub use models::*;
pub use repositories::*;
