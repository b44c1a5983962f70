use crate::error::{Result, SdkError};
use crate::identity::address::{format_address, format_chain_address, parse_chain_address};
use crate::identity::keys::{
    decode_prefixed, node_id_to_string, private_key_to_string, NODE_ID_PREFIX, PRIVATE_KEY_PREFIX,
};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Discriminator for the self-describing identifier string forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    PrivateKey,
    NodeId,
    Address,
}

impl IdentifierKind {
    /// Classify a string by its literal prefix; anything unprefixed is an address.
    pub fn detect(s: &str) -> IdentifierKind {
        if s.starts_with(PRIVATE_KEY_PREFIX) {
            IdentifierKind::PrivateKey
        } else if s.starts_with(NODE_ID_PREFIX) {
            IdentifierKind::NodeId
        } else {
            IdentifierKind::Address
        }
    }

    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            IdentifierKind::PrivateKey => Some(PRIVATE_KEY_PREFIX),
            IdentifierKind::NodeId => Some(NODE_ID_PREFIX),
            IdentifierKind::Address => None,
        }
    }
}

impl FromStr for IdentifierKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private-key" | "privatekey" => Ok(IdentifierKind::PrivateKey),
            "node-id" | "nodeid" => Ok(IdentifierKind::NodeId),
            "address" => Ok(IdentifierKind::Address),
            _ => Err(format!(
                "Invalid identifier kind: {s}. Valid options: private-key, node-id, address"
            )),
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::PrivateKey => write!(f, "private-key"),
            IdentifierKind::NodeId => write!(f, "node-id"),
            IdentifierKind::Address => write!(f, "address"),
        }
    }
}

/// A decoded identifier of any kind
#[derive(Clone, PartialEq, Eq)]
pub enum Identifier {
    PrivateKey(Zeroizing<Vec<u8>>),
    NodeId(Vec<u8>),
    Address {
        chain: Option<String>,
        hrp: String,
        bytes: Vec<u8>,
    },
}

impl Identifier {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Identifier::PrivateKey(_) => IdentifierKind::PrivateKey,
            Identifier::NodeId(_) => IdentifierKind::NodeId,
            Identifier::Address { .. } => IdentifierKind::Address,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Identifier::PrivateKey(bytes) => bytes.as_slice(),
            Identifier::NodeId(bytes) => bytes.as_slice(),
            Identifier::Address { bytes, .. } => bytes.as_slice(),
        }
    }

    /// Parse `s`, first tagging it by prefix and then running the matching decoder.
    pub fn parse(s: &str) -> Result<Identifier> {
        match IdentifierKind::detect(s) {
            IdentifierKind::PrivateKey => {
                let bytes = decode_prefixed(s, PRIVATE_KEY_PREFIX)?;
                Ok(Identifier::PrivateKey(Zeroizing::new(bytes)))
            }
            IdentifierKind::NodeId => Ok(Identifier::NodeId(decode_prefixed(s, NODE_ID_PREFIX)?)),
            IdentifierKind::Address => {
                let parsed = parse_chain_address(s)?;
                Ok(Identifier::Address {
                    chain: parsed.chain,
                    hrp: parsed.hrp,
                    bytes: parsed.bytes,
                })
            }
        }
    }
}

impl FromStr for Identifier {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        Identifier::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::PrivateKey(bytes) => f.write_str(&private_key_to_string(bytes)),
            Identifier::NodeId(bytes) => f.write_str(&node_id_to_string(bytes)),
            Identifier::Address {
                chain: Some(chain),
                hrp,
                bytes,
            } => f.write_str(&format_chain_address(chain, hrp, bytes)),
            Identifier::Address {
                chain: None,
                hrp,
                bytes,
            } => f.write_str(&format_address(hrp, bytes)),
        }
    }
}

// Key material stays out of logs
impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::PrivateKey(_) => f.write_str("PrivateKey(<redacted>)"),
            other => write!(f, "{}({other})", other.kind()),
        }
    }
}
