use ring::digest::{Context, SHA256};
use ripemd::{Digest as RipemdDigest, Ripemd160};

use crate::error::{Result, SdkError};

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn ripemd160_digest(data: &[u8]) -> Vec<u8> {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| SdkError::Base58(format!("Invalid base58 encoding: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let digest = sha256_digest(b"abc");
        assert_eq!(
            data_encoding::HEXLOWER.encode(&digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_ripemd160_length() {
        assert_eq!(ripemd160_digest(b"").len(), 20);
    }

    #[test]
    fn test_base58_rejects_invalid_alphabet() {
        // '0', 'O', 'I' and 'l' are not in the bitcoin alphabet
        assert!(matches!(base58_decode("0OIl"), Err(SdkError::Base58(_))));
    }

    #[test]
    fn test_base58_leading_zeros() {
        let encoded = base58_encode(&[0, 0, 1]);
        assert!(encoded.starts_with("11"));
        assert_eq!(base58_decode(&encoded).unwrap(), vec![0, 0, 1]);
    }
}
