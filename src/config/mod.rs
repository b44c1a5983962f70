//! Configuration management
//!
//! The network table (HRPs and fee rates per network ID) and the
//! environment-driven connection settings for a node client.

pub mod network;
pub mod settings;

pub use network::{
    EvmChainParameters, NetworkParameters, NetworkTable, ADDRESS_SEPARATOR, DEFAULT_NETWORKS,
    DEFAULT_NETWORK_ID, FALLBACK_HRP, GWEI, MILLI_AVAX, NANO_AVAX,
};
pub use settings::ClientConfig;
