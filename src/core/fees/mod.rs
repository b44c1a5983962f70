//! Fee calculation for transactions
//!
//! Cost is the serialized byte length times the network's byte-gas rate,
//! plus the cost each spent input reports for itself.

pub mod accountant;

pub use accountant::{calc_bytes_cost, CostAccountant};

use crate::config::NetworkTable;
use crate::core::transaction::TransactionCost;
use crate::error::Result;

/// Cost of `tx` under the rates of `network_id` in `table`
pub fn cost_of_transaction<T: TransactionCost + ?Sized>(
    tx: &T,
    table: &NetworkTable,
    network_id: Option<u32>,
) -> Result<u64> {
    CostAccountant::for_network(table, network_id).cost_of_transaction(tx)
}
