//! # Architect SDK - My Client Layer for Talking to Architect Nodes
//!
//! This is the part of my SDK that everything else sits on top of.
//! When I come back to this code, here's what I need to remember:
//!
//! ## What I Built
//! - **Binary Codec**: cb58, base58 with a 4-byte SHA-256 checksum
//! - **Identity Formatting**: `PrivateKey-`, `NodeID-` and `<hrp>1...` address strings
//! - **Network Table**: HRPs and fee rates per network ID, with soft fallbacks
//! - **RPC Dispatch**: connection descriptor, API module registry, uniform
//!   GET/POST/PUT/PATCH/DELETE executor and a JSON-RPC 2.0 module
//! - **Fee Accounting**: byte-proportional transaction cost plus input costs
//!
//! ## How I Organized My Code
//! - `encoding/`: cb58 encode/decode
//! - `identity/`: identifier strings and their parsed forms
//! - `config/`: network table and environment-driven client settings
//! - `rpc/`: transport boundary, dispatcher, registry, JSON-RPC
//! - `core/`: transaction cost surface and the fee accountant
//! - `utils/`: digests, raw base58, bincode serialization
//! - `cli/`: command-line interface for the binary
//!
//! ## Key Design Decisions I Made
//! - HTTP lives behind the [`Transport`] trait; [`HttpTransport`] is the `reqwest` one
//! - Modules get a cloned [`Dispatcher`], so the registry never holds a cycle
//! - Unknown network IDs get the fallback HRP instead of an error
//! - Nothing here retries or times out a call on its own
//!
//! ## When I Need to Understand Something
//! 1. Start with `main.rs` to see the CLI commands
//! 2. Look at `encoding/cb58.rs` for the checksum rules
//! 3. Check `identity/` for the string forms built on top of it
//! 4. Review `rpc/middleware.rs` for how calls are dispatched

pub mod cli;
pub mod config;
pub mod core;
pub mod encoding;
pub mod error;
pub mod identity;
pub mod rpc;
pub mod utils;

#[cfg(test)]
pub mod testnet;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{
    ClientConfig, EvmChainParameters, NetworkParameters, NetworkTable, DEFAULT_NETWORKS,
    DEFAULT_NETWORK_ID, FALLBACK_HRP,
};
pub use crate::core::{
    calc_bytes_cost, cost_of_transaction, BaseTx, CostAccountant, EvmOutput, ImportTx, InputCost,
    SecpInput, TransactionCost,
};
pub use encoding::{cb58_decode, cb58_encode, checksum, CHECKSUM_LEN};
pub use error::{Result, SdkError};
pub use identity::{
    address_from_public_key, format_address, format_chain_address, node_id_from_string,
    node_id_to_string, parse_address, parse_chain_address, preferred_hrp,
    private_key_from_string, private_key_to_string, ChainAddress, Identifier, IdentifierKind,
    NODE_ID_PREFIX, PRIVATE_KEY_PREFIX,
};
pub use rpc::{
    ApiModule, ApiRegistry, ConnectionDescriptor, Dispatcher, HttpTransport, JsonRpcModule,
    Method, NodeClient, RequestResponse, Transport, TransportRequest, TransportResponse,
};
