//! Binary codec
//!
//! Canonical conversion between raw byte buffers and their checksummed
//! base58 ("cb58") string form. Every identifier string in the SDK is
//! built on top of this codec.

pub mod cb58;

pub use cb58::{cb58_decode, cb58_encode, checksum, CHECKSUM_LEN};
