// Transaction shapes as far as cost accounting needs them: a canonical
// byte form and, for import transactions, the inputs being consumed.

use crate::config::EvmChainParameters;
use crate::error::Result;
use crate::utils::serialize;
use serde::{Deserialize, Serialize};

/// Gas charged per signature an input requires
pub const COST_PER_SIGNATURE: u64 = 1000;

/// An input that can report its own cost
pub trait InputCost {
    fn cost(&self) -> u64;
}

/// What the fee accountant needs from a transaction
pub trait TransactionCost {
    /// Canonical serialized form
    fn to_bytes(&self) -> Result<Vec<u8>>;

    /// Inputs whose costs are added on top of the byte cost
    fn spent_inputs(&self) -> Vec<&dyn InputCost> {
        Vec::new()
    }
}

/// A secp256k1 transfer input consumed from another chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct SecpInput {
    tx_id: Vec<u8>,
    output_index: u32,
    asset_id: Vec<u8>,
    amount: u64,
    sig_indices: Vec<u32>,
}

impl SecpInput {
    pub fn new(tx_id: &[u8], output_index: u32, asset_id: &[u8], amount: u64) -> SecpInput {
        SecpInput {
            tx_id: tx_id.to_vec(),
            output_index,
            asset_id: asset_id.to_vec(),
            amount,
            sig_indices: vec![],
        }
    }

    /// Require the signature at `index` of the owning output
    pub fn add_signature_index(&mut self, index: u32) {
        self.sig_indices.push(index);
    }

    pub fn signature_indices(&self) -> &[u32] {
        self.sig_indices.as_slice()
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Cost under an explicit per-signature rate
    pub fn cost_with(&self, params: &EvmChainParameters) -> u64 {
        (self.sig_indices.len() as u64).saturating_mul(params.cost_per_signature)
    }
}

impl InputCost for SecpInput {
    fn cost(&self) -> u64 {
        (self.sig_indices.len() as u64).saturating_mul(COST_PER_SIGNATURE)
    }
}

/// Credit to an EVM account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct EvmOutput {
    address: Vec<u8>,
    amount: u64,
    asset_id: Vec<u8>,
}

impl EvmOutput {
    pub fn new(address: &[u8], amount: u64, asset_id: &[u8]) -> EvmOutput {
        EvmOutput {
            address: address.to_vec(),
            amount,
            asset_id: asset_id.to_vec(),
        }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}

/// Transaction without external inputs
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct BaseTx {
    network_id: u32,
    blockchain_id: Vec<u8>,
    outs: Vec<EvmOutput>,
    memo: Vec<u8>,
}

impl BaseTx {
    pub fn new(network_id: u32, blockchain_id: &[u8]) -> BaseTx {
        BaseTx {
            network_id,
            blockchain_id: blockchain_id.to_vec(),
            ..Default::default()
        }
    }

    pub fn add_output(&mut self, output: EvmOutput) {
        self.outs.push(output);
    }

    pub fn set_memo(&mut self, memo: &[u8]) {
        self.memo = memo.to_vec();
    }
}

impl TransactionCost for BaseTx {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        serialize(self)
    }
}

/// Moves funds into the EVM chain by consuming inputs from `source_chain`
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct ImportTx {
    network_id: u32,
    blockchain_id: Vec<u8>,
    source_chain: Vec<u8>,
    import_ins: Vec<SecpInput>,
    outs: Vec<EvmOutput>,
}

impl ImportTx {
    pub fn new(network_id: u32, blockchain_id: &[u8], source_chain: &[u8]) -> ImportTx {
        ImportTx {
            network_id,
            blockchain_id: blockchain_id.to_vec(),
            source_chain: source_chain.to_vec(),
            ..Default::default()
        }
    }

    pub fn add_input(&mut self, input: SecpInput) {
        self.import_ins.push(input);
    }

    pub fn add_output(&mut self, output: EvmOutput) {
        self.outs.push(output);
    }

    pub fn import_inputs(&self) -> &[SecpInput] {
        self.import_ins.as_slice()
    }

    pub fn outputs(&self) -> &[EvmOutput] {
        self.outs.as_slice()
    }

    pub fn network_id(&self) -> u32 {
        self.network_id
    }
}

impl TransactionCost for ImportTx {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        serialize(self)
    }

    fn spent_inputs(&self) -> Vec<&dyn InputCost> {
        self.import_ins
            .iter()
            .map(|input| input as &dyn InputCost)
            .collect()
    }
}
