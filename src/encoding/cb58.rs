use crate::error::{Result, SdkError};
use crate::utils::{base58_decode, base58_encode, sha256_digest};

/// Number of checksum bytes appended to every payload
pub const CHECKSUM_LEN: usize = 4;

/// Trailing four bytes of the SHA-256 digest of `payload`
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256_digest(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
    out
}

/// Encode `payload ‖ checksum` as base58.
pub fn cb58_encode(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));
    base58_encode(&buf)
}

/// Decode a cb58 string and return the payload with its checksum stripped.
///
/// Fails if the string is not base58, is too short to carry a checksum,
/// or if the trailing checksum does not match the payload.
pub fn cb58_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut buf = base58_decode(encoded)?;
    if buf.len() < CHECKSUM_LEN {
        return Err(SdkError::Checksum(format!(
            "decoded length {} is shorter than the {CHECKSUM_LEN}-byte checksum",
            buf.len()
        )));
    }

    let claimed = buf.split_off(buf.len() - CHECKSUM_LEN);
    if claimed != checksum(&buf) {
        return Err(SdkError::Checksum(format!(
            "checksum mismatch for \"{encoded}\""
        )));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload() {
        let encoded = cb58_encode(&[]);
        assert!(!encoded.is_empty());
        assert_eq!(cb58_decode(&encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let payload = b"node identity bytes";
        assert_eq!(cb58_encode(payload), cb58_encode(payload));
    }

    #[test]
    fn test_checksum_is_sha256_tail() {
        let digest = sha256_digest(b"payload");
        assert_eq!(checksum(b"payload").as_slice(), &digest[28..]);
    }

    #[test]
    fn test_known_payload() {
        // 32-byte payload of 0x00..0x1f
        let payload: Vec<u8> = (0u8..32).collect();
        let encoded = cb58_encode(&payload);
        let raw = base58_decode(&encoded).unwrap();
        assert_eq!(raw.len(), 36);
        assert_eq!(&raw[..32], payload.as_slice());
        assert_eq!(cb58_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let mut raw = b"hello world".to_vec();
        raw.extend_from_slice(&checksum(b"hello world"));
        raw[0] ^= 0x01;
        let tampered = base58_encode(&raw);
        assert!(matches!(cb58_decode(&tampered), Err(SdkError::Checksum(_))));
    }

    #[test]
    fn test_too_short_rejected() {
        let short = base58_encode(&[1, 2, 3]);
        assert!(matches!(cb58_decode(&short), Err(SdkError::Checksum(_))));
    }

    #[test]
    fn test_not_base58_rejected() {
        assert!(matches!(cb58_decode("0x1234"), Err(SdkError::Base58(_))));
    }
}
