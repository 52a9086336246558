//! Packed word size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Width in bits of each packed output word.
///
/// Serialized as the plain number of bits (`8` or `16`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitDepth {
    /// 8-bit words (`uint8_t`).
    Eight,
    /// 16-bit words (`uint16_t`).
    #[default]
    Sixteen,
}

impl BitDepth {
    /// Number of bits per word.
    pub fn bits(self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }

    /// Number of hex digits in a formatted word (`bits / 4`).
    pub fn hex_digits(self) -> usize {
        (self.bits() / 4) as usize
    }

    /// C integer type used for the emitted table.
    pub fn c_type(self) -> &'static str {
        match self {
            BitDepth::Eight => "uint8_t",
            BitDepth::Sixteen => "uint16_t",
        }
    }

    /// Largest value a word of this depth can hold.
    pub fn max_word(self) -> u16 {
        match self {
            BitDepth::Eight => u8::MAX as u16,
            BitDepth::Sixteen => u16::MAX,
        }
    }

    /// Number of words needed for one row of `width` pixels.
    pub fn words_per_row(self, width: usize) -> usize {
        width.div_ceil(self.bits() as usize)
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = GridError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            other => Err(GridError::InvalidBitDepth(other.to_string())),
        }
    }
}

impl From<BitDepth> for u32 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

impl FromStr for BitDepth {
    type Err = GridError;

    /// Accepts `8`, `16`, `8-bit`, and `16-bit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix("-bit").unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map_err(|_| GridError::InvalidBitDepth(s.to_string()))
            .and_then(BitDepth::try_from)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
