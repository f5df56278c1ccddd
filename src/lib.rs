//! Keyscope - classify Bitcoin key material and derive every canonical representation.
//!
//! Give it an opaque string and it decides whether that string is raw
//! private-key hex, a WIF, or a SEC1 public key, then derives every sibling
//! representation: both public-key encodings, both WIF variants, and the
//! P2PKH addresses.

pub mod classify;
pub mod derive;
pub mod encoding;
pub mod error;
pub mod range;
pub mod report;
pub mod wif;

#[cfg(feature = "puzzles")]
pub mod puzzles;

pub use classify::{Analysis, Classifier, KeyFormat};
pub use error::KeyError;
