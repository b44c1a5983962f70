//! Transaction cost surface
//!
//! Minimal transaction shapes and the fee accountant that prices them.

pub mod fees;
pub mod transaction;

pub use fees::{calc_bytes_cost, cost_of_transaction, CostAccountant};
pub use transaction::{
    BaseTx, EvmOutput, ImportTx, InputCost, SecpInput, TransactionCost, COST_PER_SIGNATURE,
};
