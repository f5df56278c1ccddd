//! Input classification - decide what kind of key material a string holds.
//!
//! Candidate formats are probed in a fixed order: raw private-key hex,
//! then WIF, then SEC1 public-key hex. A 64-character hex string commits
//! the analysis to the private-key interpretation, so an out-of-range
//! scalar there is a hard error. The later probes are speculative and
//! any failure inside them moves on to the next candidate.

use crate::derive::{DerivedKey, DerivedPubkey, KeyDeriver};
use crate::encoding;
use crate::error::{KeyError, Result};
use crate::wif;

/// Recognized input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    PrivateKeyHex,
    Wif,
    CompressedPublicKey,
    UncompressedPublicKey,
}

impl KeyFormat {
    /// Stable snake_case tag used in reports.
    pub fn tag(&self) -> &'static str {
        match self {
            KeyFormat::PrivateKeyHex => "private_key_hex",
            KeyFormat::Wif => "wif",
            KeyFormat::CompressedPublicKey => "compressed_public_key",
            KeyFormat::UncompressedPublicKey => "uncompressed_public_key",
        }
    }
}

/// Everything derivable from the recognized input.
#[derive(Debug, Clone)]
pub enum Representations {
    Key(DerivedKey),
    Pubkey(DerivedPubkey),
}

impl Representations {
    /// Private-key representation set, when the input held a scalar.
    pub fn key(&self) -> Option<&DerivedKey> {
        match self {
            Representations::Key(derived) => Some(derived),
            Representations::Pubkey(_) => None,
        }
    }

    /// Public-key representation set, when only the point was known.
    pub fn pubkey(&self) -> Option<&DerivedPubkey> {
        match self {
            Representations::Key(_) => None,
            Representations::Pubkey(derived) => Some(derived),
        }
    }
}

/// Outcome of a successful classification.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Format the input matched
    pub format: KeyFormat,
    /// Normalized echo of the input: hex is lowercased, WIF kept verbatim
    pub input: String,
    /// All representations derived from the input
    pub representations: Representations,
}

/// Classifies key-material strings and derives their representations.
pub struct Classifier {
    deriver: KeyDeriver,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            deriver: KeyDeriver::new(),
        }
    }

    /// Classify a string and derive every representation it supports.
    pub fn analyze(&self, input: &str) -> Result<Analysis> {
        let input = input.trim();
        if input.is_empty() {
            return Err(KeyError::BlankInput);
        }

        if is_hex_key(input) {
            return self.analyze_hex_key(input);
        }

        if let Some(analysis) = self.try_wif(input) {
            return Ok(analysis);
        }

        if let Some(analysis) = self.try_public_key(input) {
            return Ok(analysis);
        }

        Err(KeyError::UnrecognizedFormat)
    }

    fn analyze_hex_key(&self, input: &str) -> Result<Analysis> {
        let bytes = encoding::hex_to_bytes(input)?;

        let mut scalar = [0u8; 32];
        scalar.copy_from_slice(&bytes);

        let derived = self.deriver.derive(&scalar)?;

        Ok(Analysis {
            format: KeyFormat::PrivateKeyHex,
            input: input.to_ascii_lowercase(),
            representations: Representations::Key(derived),
        })
    }

    fn try_wif(&self, input: &str) -> Option<Analysis> {
        let decoded = wif::wif_decode(input).ok()?;
        let derived = self.deriver.derive(&decoded.scalar).ok()?;

        Some(Analysis {
            format: KeyFormat::Wif,
            input: input.to_string(),
            representations: Representations::Key(derived),
        })
    }

    fn try_public_key(&self, input: &str) -> Option<Analysis> {
        let format = match input.len() {
            66 if input.starts_with("02") || input.starts_with("03") => {
                KeyFormat::CompressedPublicKey
            }
            130 if input.starts_with("04") => KeyFormat::UncompressedPublicKey,
            _ => return None,
        };

        let bytes = encoding::hex_to_bytes(input).ok()?;
        let derived = self.deriver.derive_pubkey(&bytes).ok()?;

        Some(Analysis {
            format,
            input: derived.public_key.clone(),
            representations: Representations::Pubkey(derived),
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn is_hex_key(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit())
}
