//! Key derivation - expand raw key material into every canonical form.

use ripemd::Ripemd160;
use secp256k1::{constants, All, PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

use crate::encoding;
use crate::error::{KeyError, Result};
use crate::wif;

/// Version byte of a mainnet pay-to-pubkey-hash address.
pub const ADDRESS_VERSION: u8 = 0x00;

/// Derived private key with all public representations.
#[derive(Debug, Clone)]
pub struct DerivedKey {
    /// Raw private key hex (64 chars)
    pub private_key_hex: String,
    /// Compressed public key hex (66 chars)
    pub public_key_compressed: String,
    /// Uncompressed public key hex (130 chars)
    pub public_key_uncompressed: String,
    /// WIF compressed (starts with K or L)
    pub wif_compressed: String,
    /// WIF uncompressed (starts with 5)
    pub wif_uncompressed: String,
    /// P2PKH address (compressed pubkey)
    pub address_p2pkh_compressed: String,
    /// P2PKH address (uncompressed pubkey)
    pub address_p2pkh_uncompressed: String,
}

/// Derived forms of a bare public key, hashed exactly as provided.
#[derive(Debug, Clone)]
pub struct DerivedPubkey {
    /// SEC1 public key hex, compressed or uncompressed
    pub public_key: String,
    /// RIPEMD160(SHA256(pubkey)) hex (40 chars)
    pub hash160: String,
    /// P2PKH address for that hash
    pub address_p2pkh: String,
}

/// RIPEMD160 of SHA256, the hash inside every P2PKH address.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);

    let mut out = [0u8; 20];
    out.copy_from_slice(&ripe);
    out
}

/// Base58Check address for a 20-byte public key hash.
pub fn p2pkh_address(hash: &[u8; 20]) -> String {
    let mut payload = Vec::with_capacity(21);
    payload.push(ADDRESS_VERSION);
    payload.extend_from_slice(hash);

    encoding::base58check_encode(&payload)
}

/// True when the scalar lies in [1, n-1] for the secp256k1 group order n.
pub fn scalar_in_range(scalar: &[u8; 32]) -> bool {
    scalar.iter().any(|&b| b != 0) && scalar[..] < constants::CURVE_ORDER[..]
}

/// Key deriver - converts raw key material to display representations.
pub struct KeyDeriver {
    secp: Secp256k1<All>,
}

impl KeyDeriver {
    /// Create new deriver for mainnet.
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Derive all representations of a private-key scalar.
    ///
    /// The scalar must already lie in the valid range; zero and anything
    /// at or above the group order come back as `ScalarOutOfRange`.
    pub fn derive(&self, scalar: &[u8; 32]) -> Result<DerivedKey> {
        let secret_key =
            SecretKey::from_slice(scalar).map_err(|_| KeyError::ScalarOutOfRange)?;

        let public_key = PublicKey::from_secret_key(&self.secp, &secret_key);
        let compressed = public_key.serialize();
        let uncompressed = public_key.serialize_uncompressed();

        Ok(DerivedKey {
            private_key_hex: encoding::bytes_to_hex(scalar),
            public_key_compressed: encoding::bytes_to_hex(&compressed),
            public_key_uncompressed: encoding::bytes_to_hex(&uncompressed),
            wif_compressed: wif::wif_encode(scalar, true),
            wif_uncompressed: wif::wif_encode(scalar, false),
            address_p2pkh_compressed: p2pkh_address(&hash160(&compressed)),
            address_p2pkh_uncompressed: p2pkh_address(&hash160(&uncompressed)),
        })
    }

    /// Derive the hash160 and address of a SEC1-encoded public key.
    ///
    /// The hash covers the bytes exactly as given, so a compressed and an
    /// uncompressed encoding of the same point produce different addresses.
    pub fn derive_pubkey(&self, sec1: &[u8]) -> Result<DerivedPubkey> {
        let valid_shape = match sec1.len() {
            33 => sec1[0] == 0x02 || sec1[0] == 0x03,
            65 => sec1[0] == 0x04,
            _ => false,
        };
        if !valid_shape {
            return Err(KeyError::InvalidPublicKey);
        }

        // Confirms the encoded point actually lies on the curve.
        PublicKey::from_slice(sec1).map_err(|_| KeyError::InvalidPublicKey)?;

        let hash = hash160(sec1);

        Ok(DerivedPubkey {
            public_key: encoding::bytes_to_hex(sec1),
            hash160: encoding::bytes_to_hex(&hash),
            address_p2pkh: p2pkh_address(&hash),
        })
    }
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new()
    }
}
