//! Error taxonomy for key-material parsing and derivation.

use std::fmt;

pub type Result<T> = std::result::Result<T, KeyError>;

/// Failure modes of the classification and encoding pipeline.
///
/// Structural mismatches (wrong alphabet, wrong length) are recoverable:
/// the classifier falls through to the next candidate format. Failures
/// after a format has committed (a 64-char hex string whose scalar is out
/// of range) end the analysis with that error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Input was empty after trimming
    BlankInput,
    /// Not a non-empty, even-length hex string
    InvalidHex,
    /// Scalar is zero or not below the secp256k1 group order
    ScalarOutOfRange,
    /// Character outside the Base58 alphabet
    NotBase58,
    /// Base58Check payload shorter than the 4-byte checksum requires
    PayloadTooShort,
    /// Base58Check checksum did not match the payload
    BadChecksum,
    /// WIF version byte other than 0x80 (mainnet private key)
    BadWifVersion(u8),
    /// WIF key payload is neither 32 nor 33 bytes
    BadWifPayloadLength(usize),
    /// 33-byte WIF payload whose trailing byte is not the 0x01 marker
    BadWifSuffix(u8),
    /// Byte string is not a valid SEC1 point on secp256k1
    InvalidPublicKey,
    /// No recognized format matched the input
    UnrecognizedFormat,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::BlankInput => write!(f, "Input cannot be blank."),
            KeyError::InvalidHex => write!(f, "invalid hex string"),
            KeyError::ScalarOutOfRange => {
                write!(f, "private key must be above zero and below the curve order")
            }
            KeyError::NotBase58 => write!(f, "not a base58 string"),
            KeyError::PayloadTooShort => write!(f, "payload too short for a checksum"),
            KeyError::BadChecksum => write!(f, "checksum mismatch"),
            KeyError::BadWifVersion(v) => write!(f, "unsupported WIF version byte 0x{:02x}", v),
            KeyError::BadWifPayloadLength(n) => write!(f, "invalid WIF payload length: {}", n),
            KeyError::BadWifSuffix(b) => {
                write!(f, "invalid WIF compression suffix 0x{:02x}", b)
            }
            KeyError::InvalidPublicKey => write!(f, "invalid public key"),
            KeyError::UnrecognizedFormat => write!(f, "Unrecognized input format."),
        }
    }
}

impl std::error::Error for KeyError {}
