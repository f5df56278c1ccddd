//! Wallet Import Format encoding of private-key scalars.
//!
//! A WIF string is the Base58Check encoding of `0x80 || scalar` for keys
//! whose public key is serialized uncompressed, or `0x80 || scalar || 0x01`
//! for compressed ones. Only the mainnet version byte is accepted.

use crate::encoding;
use crate::error::{KeyError, Result};

/// Version byte marking a mainnet private key.
pub const WIF_VERSION: u8 = 0x80;

/// Trailing byte on keys bound to a compressed public key.
pub const COMPRESSION_SUFFIX: u8 = 0x01;

/// A WIF string taken apart: the raw scalar and its compression marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWif {
    pub scalar: [u8; 32],
    pub compressed: bool,
}

/// Encode a 32-byte scalar as mainnet WIF.
pub fn wif_encode(scalar: &[u8; 32], compressed: bool) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(WIF_VERSION);
    payload.extend_from_slice(scalar);
    if compressed {
        payload.push(COMPRESSION_SUFFIX);
    }

    encoding::base58check_encode(&payload)
}

/// Decode a mainnet WIF string back to its scalar and compression flag.
///
/// Verifies the checksum, the version byte, and that the key payload is
/// either 32 bytes bare or 33 bytes ending in the compression marker. The
/// scalar comes back unvalidated; range checking is the caller's concern.
pub fn wif_decode(s: &str) -> Result<DecodedWif> {
    let payload = encoding::base58check_decode(s)?;

    let (&version, key) = payload.split_first().ok_or(KeyError::PayloadTooShort)?;
    if version != WIF_VERSION {
        return Err(KeyError::BadWifVersion(version));
    }

    let (bytes, compressed) = match key.len() {
        32 => (key, false),
        33 => {
            if key[32] != COMPRESSION_SUFFIX {
                return Err(KeyError::BadWifSuffix(key[32]));
            }
            (&key[..32], true)
        }
        n => return Err(KeyError::BadWifPayloadLength(n)),
    };

    let mut scalar = [0u8; 32];
    scalar.copy_from_slice(bytes);

    Ok(DecodedWif { scalar, compressed })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_from_hex(s: &str) -> [u8; 32] {
        let bytes = hex::decode(s).unwrap();
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        out
    }

    // SHA256 of the well-worn brainwallet phrase "correct horse battery staple".
    const BRAINWALLET_KEY: &str =
        "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a";

    #[test]
    fn test_wif_encode_brainwallet_key() {
        let scalar = scalar_from_hex(BRAINWALLET_KEY);

        assert_eq!(
            wif_encode(&scalar, false),
            "5KJvsngHeMpm884wtkJNzQGaCErckhHJBGFsvd3VyK5qMZXj3hS"
        );
        assert_eq!(
            wif_encode(&scalar, true),
            "L3p8oAcQTtuokSCRHQ7i4MhjWc9zornvpJLfmg62sYpLRJF9woSu"
        );
    }

    #[test]
    fn test_wif_encode_minimal_scalar() {
        let mut scalar = [0u8; 32];
        scalar[31] = 1;

        assert_eq!(
            wif_encode(&scalar, false),
            "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"
        );
        assert_eq!(
            wif_encode(&scalar, true),
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
        );
    }

    #[test]
    fn test_wif_decode_round_trip() {
        let scalar = scalar_from_hex(BRAINWALLET_KEY);

        let uncompressed = wif_decode("5KJvsngHeMpm884wtkJNzQGaCErckhHJBGFsvd3VyK5qMZXj3hS").unwrap();
        assert_eq!(uncompressed.scalar, scalar);
        assert!(!uncompressed.compressed);

        let compressed = wif_decode("L3p8oAcQTtuokSCRHQ7i4MhjWc9zornvpJLfmg62sYpLRJF9woSu").unwrap();
        assert_eq!(compressed.scalar, scalar);
        assert!(compressed.compressed);
    }

    #[test]
    fn test_wif_decode_rejects_foreign_version() {
        // Same scalar under the testnet version byte.
        let mut payload = vec![0xef];
        payload.extend_from_slice(&scalar_from_hex(BRAINWALLET_KEY));
        let encoded = encoding::base58check_encode(&payload);

        assert_eq!(wif_decode(&encoded), Err(KeyError::BadWifVersion(0xef)));
    }

    #[test]
    fn test_wif_decode_rejects_bad_suffix() {
        let mut payload = vec![WIF_VERSION];
        payload.extend_from_slice(&scalar_from_hex(BRAINWALLET_KEY));
        payload.push(0x02);
        let encoded = encoding::base58check_encode(&payload);

        assert_eq!(wif_decode(&encoded), Err(KeyError::BadWifSuffix(0x02)));
    }

    #[test]
    fn test_wif_decode_rejects_bad_payload_length() {
        let mut payload = vec![WIF_VERSION];
        payload.extend_from_slice(&[0u8; 31]);
        let encoded = encoding::base58check_encode(&payload);

        assert_eq!(wif_decode(&encoded), Err(KeyError::BadWifPayloadLength(31)));
    }

    #[test]
    fn test_wif_decode_rejects_corruption_and_foreign_alphabet() {
        // A checksum character flipped in an otherwise valid WIF.
        assert_eq!(
            wif_decode("5KJvsngHeMpm884wtkJNzQGaCErckhHJBGFsvd3VyK5qMZXj3hT"),
            Err(KeyError::BadChecksum)
        );
        assert_eq!(wif_decode("not-a-wif!"), Err(KeyError::NotBase58));
    }
}
