//! Candidate key ranges for the numbered puzzle wallets.
//!
//! Puzzle wallet n holds a key somewhere in [2^(n-1), 2^n - 1]. This module
//! picks a starting key inside that range: the lower bound itself, a uniform
//! random point, or a fixed percentage of the way through.

use num_bigint::{BigUint, RandBigInt};
use std::fmt;

/// Highest numbered puzzle wallet.
pub const MAX_WALLET_NUMBER: u32 = 160;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    WalletNumberOutOfRange,
    InvalidMethod,
    PercentageOutOfRange,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::WalletNumberOutOfRange => {
                write!(f, "Wallet number must be between 1 and {}", MAX_WALLET_NUMBER)
            }
            RangeError::InvalidMethod => write!(f, "Invalid generation method"),
            RangeError::PercentageOutOfRange => {
                write!(f, "Percentage must be between 1 and 100")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// How the starting key is placed inside the wallet range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMethod {
    /// Lower bound of the range
    Start,
    /// Uniform random point in the range
    Random,
    /// Fixed percentage of the way through the range
    Percentual,
}

impl GenerationMethod {
    pub fn from_str(s: &str) -> Result<Self, RangeError> {
        match s.to_lowercase().as_str() {
            "start" => Ok(GenerationMethod::Start),
            "random" => Ok(GenerationMethod::Random),
            "percentual" => Ok(GenerationMethod::Percentual),
            _ => Err(RangeError::InvalidMethod),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMethod::Start => "start",
            GenerationMethod::Random => "random",
            GenerationMethod::Percentual => "percentual",
        }
    }
}

/// A wallet range with its chosen starting key.
#[derive(Debug, Clone)]
pub struct GeneratedRange {
    pub wallet_number: u32,
    pub method: GenerationMethod,
    /// 2^(wallet_number - 1)
    pub range_start: BigUint,
    /// 2^wallet_number - 1
    pub range_end: BigUint,
    /// Chosen key, always within [range_start, range_end]
    pub initial_key: BigUint,
    /// Echoed back only for the percentual method
    pub percentage: Option<u32>,
}

impl GeneratedRange {
    /// Number of keys in the range.
    pub fn total_keys(&self) -> BigUint {
        &self.range_end - &self.range_start + 1u8
    }

    /// Range bounds as unpadded uppercase hex.
    pub fn range_start_hex(&self) -> String {
        format!("{:X}", self.range_start)
    }

    pub fn range_end_hex(&self) -> String {
        format!("{:X}", self.range_end)
    }

    /// Starting key as uppercase hex padded to a full 64 digits.
    pub fn initial_key_hex(&self) -> String {
        format!("{:0>64}", format!("{:X}", self.initial_key))
    }
}

/// Build the range for a puzzle wallet and place a starting key in it.
///
/// `percentage` is only consulted for the percentual method, where it must
/// be between 1 and 100; the offset is computed in integer arithmetic so
/// 160-bit ranges do not lose precision.
pub fn generate(
    wallet_number: u32,
    method: GenerationMethod,
    percentage: Option<u32>,
) -> Result<GeneratedRange, RangeError> {
    if wallet_number < 1 || wallet_number > MAX_WALLET_NUMBER {
        return Err(RangeError::WalletNumberOutOfRange);
    }

    let range_start = BigUint::from(1u8) << (wallet_number - 1);
    let range_end = (BigUint::from(1u8) << wallet_number) - 1u8;
    let range_size = &range_end - &range_start;

    let (initial_key, percentage) = match method {
        GenerationMethod::Start => (range_start.clone(), None),
        GenerationMethod::Random => {
            let mut rng = rand::thread_rng();
            let offset = rng.gen_biguint_below(&(&range_size + 1u8));
            (&range_start + offset, None)
        }
        GenerationMethod::Percentual => {
            let percentage = percentage.ok_or(RangeError::PercentageOutOfRange)?;
            if percentage < 1 || percentage > 100 {
                return Err(RangeError::PercentageOutOfRange);
            }
            let offset = &range_size * percentage / 100u8;
            (&range_start + offset, Some(percentage))
        }
    };

    Ok(GeneratedRange {
        wallet_number,
        method,
        range_start,
        range_end,
        initial_key,
        percentage,
    })
}
