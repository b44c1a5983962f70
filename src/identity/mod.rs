//! Identity formatting
//!
//! Human-facing identifier strings built on the cb58 codec:
//! - `PrivateKey-<cb58>` for secp256k1 private keys
//! - `NodeID-<cb58>` for node identities
//! - `<hrp>1<cb58>` for addresses, optionally chain-qualified (`X-avax1...`)
//!
//! All conversions are pure functions of their input and the network table.

pub mod address;
pub mod identifier;
pub mod keys;

pub use address::{
    address_from_public_key, format_address, format_chain_address, parse_address,
    parse_chain_address, ChainAddress, ADDRESS_LEN,
};
pub use identifier::{Identifier, IdentifierKind};
pub use keys::{
    node_id_from_string, node_id_to_string, private_key_from_string, private_key_to_string,
    NODE_ID_PREFIX, PRIVATE_KEY_PREFIX,
};

use crate::config::NetworkTable;

/// HRP for `network_id` from `table`; see [`NetworkTable::preferred_hrp`].
pub fn preferred_hrp(table: &NetworkTable, network_id: Option<u32>) -> &str {
    table.preferred_hrp(network_id)
}
