use crate::error::{Result, SdkError};
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Network used when a caller supplies no network ID
pub const DEFAULT_NETWORK_ID: u32 = 1;
/// HRP returned for network IDs the table does not know
pub const FALLBACK_HRP: &str = "custom";
/// Separator between the HRP and the encoded address bytes
pub const ADDRESS_SEPARATOR: char = '1';

pub const NANO_AVAX: u64 = 1;
pub const MILLI_AVAX: u64 = 1_000_000 * NANO_AVAX;
pub const GWEI: u64 = 1_000_000_000;

/// Built-in network table, loaded once on first use
pub static DEFAULT_NETWORKS: Lazy<Arc<NetworkTable>> =
    Lazy::new(|| Arc::new(NetworkTable::builtin()));

/// Byte-gas and signature costs for the EVM sub-chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvmChainParameters {
    pub tx_bytes_gas: u64,
    pub cost_per_signature: u64,
    pub min_gas_price: u64,
    pub max_gas_price: u64,
}

impl Default for EvmChainParameters {
    fn default() -> Self {
        Self {
            tx_bytes_gas: 1,
            cost_per_signature: 1000,
            min_gas_price: 25 * GWEI,
            max_gas_price: 1000 * GWEI,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParameters {
    pub network_id: u32,
    pub name: String,
    pub hrp: String,
    #[serde(default = "default_tx_fee")]
    pub tx_fee: u64,
    #[serde(default = "default_creation_tx_fee")]
    pub creation_tx_fee: u64,
    #[serde(default)]
    pub c_chain: EvmChainParameters,
}

fn default_tx_fee() -> u64 {
    MILLI_AVAX
}

fn default_creation_tx_fee() -> u64 {
    10 * MILLI_AVAX
}

impl NetworkParameters {
    pub fn new(network_id: u32, name: &str, hrp: &str) -> Self {
        Self {
            network_id,
            name: name.to_string(),
            hrp: hrp.to_string(),
            tx_fee: default_tx_fee(),
            creation_tx_fee: default_creation_tx_fee(),
            c_chain: EvmChainParameters::default(),
        }
    }
}

/// On-disk TOML shape of a network table
#[derive(Debug, Deserialize)]
struct NetworkTableFile {
    #[serde(default = "default_network_id")]
    default_network_id: u32,
    #[serde(default = "fallback_hrp")]
    fallback_hrp: String,
    networks: Vec<NetworkParameters>,
}

fn default_network_id() -> u32 {
    DEFAULT_NETWORK_ID
}

fn fallback_hrp() -> String {
    FALLBACK_HRP.to_string()
}

/// Immutable mapping from network ID to its parameters.
///
/// Built once before any client is constructed and shared behind an `Arc`;
/// nothing mutates a table after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTable {
    networks: HashMap<u32, NetworkParameters>,
    default_network_id: u32,
    fallback_hrp: String,
}

impl Default for NetworkTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NetworkTable {
    /// Build a table, checking that the default network is present and
    /// that every HRP can be split from an encoded address.
    pub fn new(
        networks: Vec<NetworkParameters>,
        default_network_id: u32,
        fallback_hrp: &str,
    ) -> Result<Self> {
        validate_hrp(fallback_hrp)?;
        let mut map = HashMap::with_capacity(networks.len());
        for params in networks {
            validate_hrp(&params.hrp)?;
            validate_gas_bounds(&params)?;
            if map.insert(params.network_id, params).is_some() {
                return Err(SdkError::Config(
                    "duplicate network ID in network table".to_string(),
                ));
            }
        }
        if !map.contains_key(&default_network_id) {
            return Err(SdkError::Config(format!(
                "default network ID {default_network_id} is not in the table"
            )));
        }
        Ok(Self {
            networks: map,
            default_network_id,
            fallback_hrp: fallback_hrp.to_string(),
        })
    }

    pub fn builtin() -> Self {
        let networks = [
            (0, "Custom Network", "custom"),
            (1, "Mainnet", "avax"),
            (2, "Cascade", "cascade"),
            (3, "Denali", "denali"),
            (4, "Everest", "everest"),
            (5, "Fuji", "fuji"),
            (12345, "Local Network", "local"),
        ];
        let networks = networks
            .iter()
            .map(|(id, name, hrp)| (*id, NetworkParameters::new(*id, name, hrp)))
            .collect();
        Self {
            networks,
            default_network_id: DEFAULT_NETWORK_ID,
            fallback_hrp: FALLBACK_HRP.to_string(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: NetworkTableFile = toml::from_str(text)?;
        Self::new(file.networks, file.default_network_id, &file.fallback_hrp)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&text)?;
        debug!(
            "Loaded {} networks from {}",
            table.networks.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn get(&self, network_id: u32) -> Option<&NetworkParameters> {
        self.networks.get(&network_id)
    }

    pub fn default_network_id(&self) -> u32 {
        self.default_network_id
    }

    pub fn default_network(&self) -> &NetworkParameters {
        // presence checked in `new`, and `builtin` always carries it
        &self.networks[&self.default_network_id]
    }

    pub fn fallback_hrp(&self) -> &str {
        &self.fallback_hrp
    }

    /// Parameters for `network_id`, or for the default network when omitted.
    pub fn resolve(&self, network_id: Option<u32>) -> Option<&NetworkParameters> {
        match network_id {
            Some(id) => self.get(id),
            None => Some(self.default_network()),
        }
    }

    /// HRP for `network_id`.
    ///
    /// Omitted IDs resolve to the default network's HRP; IDs the table does
    /// not know resolve to the fallback HRP rather than failing.
    pub fn preferred_hrp(&self, network_id: Option<u32>) -> &str {
        match self.resolve(network_id) {
            Some(params) => &params.hrp,
            None => &self.fallback_hrp,
        }
    }

    pub fn network_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.networks.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

fn validate_hrp(hrp: &str) -> Result<()> {
    if hrp.is_empty() || hrp.contains(ADDRESS_SEPARATOR) || hrp.contains('-') {
        return Err(SdkError::Config(format!(
            "HRP \"{hrp}\" must be non-empty and contain neither '{ADDRESS_SEPARATOR}' nor '-'"
        )));
    }
    Ok(())
}

fn validate_gas_bounds(params: &NetworkParameters) -> Result<()> {
    let c_chain = &params.c_chain;
    if c_chain.min_gas_price > c_chain.max_gas_price {
        return Err(SdkError::Config(format!(
            "network {}: min_gas_price {} exceeds max_gas_price {}",
            params.network_id, c_chain.min_gas_price, c_chain.max_gas_price
        )));
    }
    Ok(())
}
