//! Utility functions and helpers
//!
//! Digest functions, raw base58 and the bincode serialization layer.

pub mod crypto;
pub mod serialization;

pub use crypto::{base58_decode, base58_encode, ripemd160_digest, sha256_digest};

pub use serialization::{deserialize, serialize};
