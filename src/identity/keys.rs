use crate::encoding::{cb58_decode, cb58_encode};
use crate::error::{Result, SdkError};
use zeroize::Zeroizing;

pub const PRIVATE_KEY_PREFIX: &str = "PrivateKey-";
pub const NODE_ID_PREFIX: &str = "NodeID-";

pub fn private_key_to_string(key: &[u8]) -> String {
    format!("{PRIVATE_KEY_PREFIX}{}", cb58_encode(key))
}

/// Decode a `PrivateKey-` string. The returned buffer is wiped on drop.
pub fn private_key_from_string(encoded: &str) -> Result<Zeroizing<Vec<u8>>> {
    decode_prefixed(encoded, PRIVATE_KEY_PREFIX).map(Zeroizing::new)
}

pub fn node_id_to_string(node_id: &[u8]) -> String {
    format!("{NODE_ID_PREFIX}{}", cb58_encode(node_id))
}

pub fn node_id_from_string(encoded: &str) -> Result<Vec<u8>> {
    decode_prefixed(encoded, NODE_ID_PREFIX)
}

pub(crate) fn decode_prefixed(encoded: &str, prefix: &str) -> Result<Vec<u8>> {
    if !encoded.starts_with(prefix) {
        return Err(SdkError::InvalidPrefix {
            expected: prefix.to_string(),
            found: encoded.to_string(),
        });
    }
    // base58 never contains '-', so the last segment is the whole body
    let body = encoded.rsplit('-').next().unwrap_or_default();
    cb58_decode(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_key_round_trip() {
        let key: Vec<u8> = (1u8..=32).collect();
        let encoded = private_key_to_string(&key);
        assert!(encoded.starts_with("PrivateKey-"));
        assert_eq!(*private_key_from_string(&encoded).unwrap(), key);
    }

    #[test]
    fn test_node_id_round_trip() {
        let node_id = vec![0xAB; 20];
        let encoded = node_id_to_string(&node_id);
        assert!(encoded.starts_with("NodeID-"));
        assert_eq!(node_id_from_string(&encoded).unwrap(), node_id);
    }

    #[test]
    fn test_wrong_prefix_names_expected() {
        let err = private_key_from_string("NotAPrefix-abc").unwrap_err();
        assert_eq!(
            err,
            SdkError::InvalidPrefix {
                expected: "PrivateKey-".to_string(),
                found: "NotAPrefix-abc".to_string(),
            }
        );
    }

    #[test]
    fn test_prefixes_are_not_interchangeable() {
        let encoded = node_id_to_string(&[7; 20]);
        assert!(matches!(
            private_key_from_string(&encoded),
            Err(SdkError::InvalidPrefix { .. })
        ));
        let encoded = private_key_to_string(&[7; 32]);
        assert!(matches!(
            node_id_from_string(&encoded),
            Err(SdkError::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let encoded = node_id_to_string(&[1; 20]).replacen("NodeID-", "nodeid-", 1);
        assert!(node_id_from_string(&encoded).is_err());
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let mut encoded = node_id_to_string(&[9; 20]);
        // swap the final character for a different base58 digit
        let last = encoded.pop().unwrap();
        encoded.push(if last == '2' { '3' } else { '2' });
        assert!(node_id_from_string(&encoded).is_err());
    }
}
