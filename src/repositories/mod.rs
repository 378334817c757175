//! Configuration repositories.
//!
//! A repository owns the loaded chain configurations; the service on top of
//! it resolves chains and runs the legacy bridge for them.

mod chain;
mod error;

pub use chain::{ChainRepository, ChainRepositoryTrait, ChainService};
pub use error::RepositoryError;
