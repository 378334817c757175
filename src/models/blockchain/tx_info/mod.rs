//! Chain-agnostic transaction result model.
//!
//! Drivers map their raw results onto [`TxInfo`]: a list of asset-scoped
//! [`Movement`]s, the fees netted from them and the block the transaction
//! landed in.

mod balance;
mod block;
mod movement;
mod transaction;

pub use balance::{Balance, Stake, Unstake};
pub use block::Block;
pub use movement::{BalanceChange, Event, Movement, MovementVariant};
pub use transaction::{TxInfo, TxState};
