//! Error handling for the SDK
//!
//! Codec and identity errors are raised synchronously at the point of
//! malformed input. Transport errors surface when the call resolves.

use std::fmt;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Error kinds produced by the SDK
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// Identifier string lacks the required literal prefix
    InvalidPrefix { expected: String, found: String },
    /// Decoded checksum does not match the payload
    Checksum(String),
    /// Input is not valid base58
    Base58(String),
    /// Malformed address string
    InvalidAddress(String),
    /// Network failure or non-success HTTP status
    Transport { status: Option<u16>, message: String },
    /// JSON-RPC error member returned by the node
    JsonRpc { code: i64, message: String },
    /// Serialization/deserialization errors
    Serialization(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::InvalidPrefix { expected, found } => {
                write!(f, "Invalid identifier: expected prefix \"{expected}\", got \"{found}\"")
            }
            SdkError::Checksum(msg) => write!(f, "Checksum error: {msg}"),
            SdkError::Base58(msg) => write!(f, "Base58 error: {msg}"),
            SdkError::InvalidAddress(addr) => write!(f, "Invalid address: {addr}"),
            SdkError::Transport {
                status: Some(status),
                message,
            } => write!(f, "Transport error ({status}): {message}"),
            SdkError::Transport {
                status: None,
                message,
            } => write!(f, "Transport error: {message}"),
            SdkError::JsonRpc { code, message } => write!(f, "JSON-RPC error {code}: {message}"),
            SdkError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            SdkError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SdkError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for SdkError {}

impl From<std::io::Error> for SdkError {
    fn from(err: std::io::Error) -> Self {
        SdkError::Io(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for SdkError {
    fn from(err: bincode::error::EncodeError) -> Self {
        SdkError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SdkError {
    fn from(err: toml::de::Error) -> Self {
        SdkError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        SdkError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
