use crate::config::ADDRESS_SEPARATOR;
use crate::encoding::{cb58_decode, cb58_encode};
use crate::error::{Result, SdkError};
use crate::utils::{ripemd160_digest, sha256_digest};

/// Length of an address payload (ripemd160 of sha256 of the public key)
pub const ADDRESS_LEN: usize = 20;

/// A parsed, optionally chain-qualified address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAddress {
    pub chain: Option<String>,
    pub hrp: String,
    pub bytes: Vec<u8>,
}

/// Address payload for a serialized public key
pub fn address_from_public_key(public_key: &[u8]) -> Vec<u8> {
    let pub_key_sha256 = sha256_digest(public_key);
    ripemd160_digest(&pub_key_sha256)
}

pub fn format_address(hrp: &str, bytes: &[u8]) -> String {
    format!("{hrp}{ADDRESS_SEPARATOR}{}", cb58_encode(bytes))
}

/// `X-avax1...` form
pub fn format_chain_address(chain: &str, hrp: &str, bytes: &[u8]) -> String {
    format!("{chain}-{}", format_address(hrp, bytes))
}

/// Split `<hrp>1<cb58>` into the HRP and the decoded payload.
///
/// HRPs never contain the separator, so the first one ends the HRP; the
/// encoded part may itself contain `1` digits.
pub fn parse_address(address: &str) -> Result<(String, Vec<u8>)> {
    let (hrp, encoded) = address
        .split_once(ADDRESS_SEPARATOR)
        .ok_or_else(|| SdkError::InvalidAddress(format!("{address}: missing separator")))?;
    if hrp.is_empty() {
        return Err(SdkError::InvalidAddress(format!("{address}: empty HRP")));
    }
    if hrp.contains('-') {
        return Err(SdkError::InvalidAddress(format!(
            "{address}: chain-qualified address, use parse_chain_address"
        )));
    }
    let bytes = cb58_decode(encoded)?;
    Ok((hrp.to_string(), bytes))
}

/// Parse an address with or without a leading `<chain>-` alias.
pub fn parse_chain_address(address: &str) -> Result<ChainAddress> {
    let (chain, rest) = match address.split_once('-') {
        Some((chain, rest)) if !chain.is_empty() => (Some(chain.to_string()), rest),
        Some(_) => {
            return Err(SdkError::InvalidAddress(format!(
                "{address}: empty chain alias"
            )))
        }
        None => (None, address),
    };
    let (hrp, bytes) = parse_address(rest)?;
    Ok(ChainAddress { chain, hrp, bytes })
}
