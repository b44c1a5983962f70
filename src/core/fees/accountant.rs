use crate::config::{EvmChainParameters, NetworkTable};
use crate::core::transaction::TransactionCost;
use crate::error::Result;
use log::{debug, warn};

/// Byte-proportional gas for a serialized transaction of `len` bytes
pub fn calc_bytes_cost(len: usize, tx_bytes_gas: u64) -> u64 {
    (len as u64).saturating_mul(tx_bytes_gas)
}

/// Computes transaction costs from one network's EVM-chain rates.
///
/// Costs are derived from the transaction's current bytes on every call;
/// nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostAccountant {
    params: EvmChainParameters,
}

impl CostAccountant {
    pub fn new(params: EvmChainParameters) -> Self {
        Self { params }
    }

    /// Rates for `network_id`; omitted or unknown IDs use the default network.
    pub fn for_network(table: &NetworkTable, network_id: Option<u32>) -> Self {
        let params = match table.resolve(network_id) {
            Some(params) => params,
            None => {
                warn!(
                    "Unknown network ID {network_id:?}, using fee rates of network {}",
                    table.default_network_id()
                );
                table.default_network()
            }
        };
        Self::new(params.c_chain.clone())
    }

    pub fn params(&self) -> &EvmChainParameters {
        &self.params
    }

    /// Byte cost of the transaction alone
    pub fn base_cost<T: TransactionCost + ?Sized>(&self, tx: &T) -> Result<u64> {
        let len = tx.to_bytes()?.len();
        Ok(calc_bytes_cost(len, self.params.tx_bytes_gas))
    }

    /// Byte cost plus the reported cost of every spent input
    pub fn cost_of_transaction<T: TransactionCost + ?Sized>(&self, tx: &T) -> Result<u64> {
        let base = self.base_cost(tx)?;
        let inputs = tx
            .spent_inputs()
            .iter()
            .fold(0u64, |acc, input| acc.saturating_add(input.cost()));
        debug!("Transaction cost: {base} bytes gas + {inputs} input gas");
        Ok(base.saturating_add(inputs))
    }

    /// Fee for `cost` gas at `gas_price`, the price clamped to the chain's bounds
    pub fn fee(&self, cost: u64, gas_price: u64) -> u64 {
        // parameters built outside a NetworkTable may carry min > max
        let price = gas_price
            .max(self.params.min_gas_price)
            .min(self.params.max_gas_price);
        cost.saturating_mul(price)
    }
}
