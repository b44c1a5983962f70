use crate::config::network::{NetworkTable, DEFAULT_NETWORKS};
use crate::error::{Result, SdkError};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

static DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9650;
static DEFAULT_PROTOCOL: &str = "http";

const NODE_HOST_KEY: &str = "NODE_HOST";
const NODE_PORT_KEY: &str = "NODE_PORT";
const NODE_PROTOCOL_KEY: &str = "NODE_PROTOCOL";
const NETWORK_ID_KEY: &str = "NETWORK_ID";
const NETWORK_CONFIG_KEY: &str = "NETWORK_CONFIG";

/// Connection settings for a node client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub network_id: Option<u32>,
    /// TOML network table replacing the built-in one
    pub network_config: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            protocol: DEFAULT_PROTOCOL.to_string(),
            network_id: None,
            network_config: None,
        }
    }
}

impl ClientConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<ClientConfig> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();
        if let Some(host) = lookup(NODE_HOST_KEY) {
            config.host = host;
        }
        if let Some(port) = lookup(NODE_PORT_KEY) {
            config.port = port
                .parse()
                .map_err(|e| SdkError::Config(format!("{NODE_PORT_KEY}={port}: {e}")))?;
        }
        if let Some(protocol) = lookup(NODE_PROTOCOL_KEY) {
            config.protocol = protocol;
        }
        if let Some(id) = lookup(NETWORK_ID_KEY) {
            let id = id
                .parse()
                .map_err(|e| SdkError::Config(format!("{NETWORK_ID_KEY}={id}: {e}")))?;
            config.network_id = Some(id);
        }
        config.network_config = lookup(NETWORK_CONFIG_KEY).map(PathBuf::from);
        Ok(config)
    }

    /// Network table named by `network_config`, or the built-in table
    pub fn load_network_table(&self) -> Result<Arc<NetworkTable>> {
        match &self.network_config {
            Some(path) => Ok(Arc::new(NetworkTable::from_file(path)?)),
            None => Ok(Arc::clone(&DEFAULT_NETWORKS)),
        }
    }
}
