//! Hex and Base58/Base58Check codecs.
//!
//! Base58 treats the byte string as one big-endian integer and converts it
//! to radix 58, with the convention that every leading zero byte is carried
//! as a leading `'1'` so byte-length information survives the integer
//! round-trip. Base58Check appends a 4-byte double-SHA256 checksum before
//! encoding.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::error::{KeyError, Result};

/// Base58 alphabet: digits and letters minus the ambiguous 0, O, I, l.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup from ASCII byte to digit value, -1 outside the alphabet.
const ALPHABET_INDEX: [i8; 128] = {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Lower-case hex of `bytes`; total inverse of [`hex_to_bytes`].
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a non-empty, even-length hex string (either case).
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>> {
    if s.is_empty() {
        return Err(KeyError::InvalidHex);
    }
    hex::decode(s).map_err(|_| KeyError::InvalidHex)
}

/// Encode bytes as Base58, one `'1'` per leading zero byte.
pub fn base58_encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    let mut out = String::with_capacity(zeros + (data.len() - zeros) * 138 / 100 + 1);
    for _ in 0..zeros {
        out.push('1');
    }

    if zeros < data.len() {
        let int = BigUint::from_bytes_be(&data[zeros..]);
        for digit in int.to_radix_be(58) {
            out.push(ALPHABET[digit as usize] as char);
        }
    }

    out
}

/// Decode a Base58 string back to bytes.
///
/// Returns `None` for any character outside the alphabet; callers probe
/// speculative formats with this, so absence is not an error. Leading `'1'`
/// characters are restored as leading zero bytes, and the empty string
/// decodes to the empty byte string.
pub fn base58_decode(s: &str) -> Option<Vec<u8>> {
    let mut digits = Vec::with_capacity(s.len());
    for &b in s.as_bytes() {
        let idx = *ALPHABET_INDEX.get(b as usize)?;
        if idx < 0 {
            return None;
        }
        digits.push(idx as u8);
    }

    let ones = s.as_bytes().iter().take_while(|&&b| b == b'1').count();

    let mut out = vec![0u8; ones];
    if ones < digits.len() {
        let int = BigUint::from_radix_be(&digits[ones..], 58)?;
        out.extend(int.to_bytes_be());
    }

    Some(out)
}

/// First four bytes of SHA256(SHA256(data)).
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);

    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}

/// Base58 encode `payload` with its 4-byte checksum appended.
pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    base58_encode(&data)
}

/// Decode a Base58Check string, verifying the trailing checksum.
pub fn base58check_decode(s: &str) -> Result<Vec<u8>> {
    let raw = base58_decode(s).ok_or(KeyError::NotBase58)?;
    if raw.len() < 5 {
        return Err(KeyError::PayloadTooShort);
    }

    let (payload, check) = raw.split_at(raw.len() - 4);
    if checksum(payload) != check {
        return Err(KeyError::BadChecksum);
    }

    Ok(payload.to_vec())
}
