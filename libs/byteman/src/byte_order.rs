//! Byte order selector for every encode/decode operation
//!
//! A closed two-variant enum. Word-swapped layouts (CDAB, BADC) are not
//! byte orders of a single value and are rejected when parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BytemanError;

/// Byte layout of multi-byte values
///
/// Uses ABCD notation where A is the most significant byte.
///
/// For 32-bit value `0x12345678`:
/// - `BigEndian (ABCD)`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian (DCBA)`: [0x78, 0x56, 0x34, 0x12]
///
/// Serialises as `big_endian` / `little_endian`; deserialises through
/// [`ByteOrder::parse`], so config files take every spelling the CLI takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ByteOrder {
    /// Little-endian: DCBA (least significant byte first)
    ///
    /// Intel x86 native byte order.
    LittleEndian,

    /// Big-endian: ABCD (most significant byte first)
    ///
    /// Network byte order.
    BigEndian,
}

impl ByteOrder {
    /// Convert from common string spellings
    ///
    /// - "BE", "BIG", "BIG_ENDIAN", "ABCD", "AB-CD" → BigEndian
    /// - "LE", "LITTLE", "LITTLE_ENDIAN", "DCBA", "DC-BA" → LittleEndian
    ///
    /// Matching ignores case and `-`.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "BE" | "BIG" | "BIG_ENDIAN" | "BIGENDIAN" | "AB" | "ABCD" | "ABCDEFGH" => {
                Some(Self::BigEndian)
            },
            "LE" | "LITTLE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" | "BA" | "DCBA" | "HGFEDCBA" => {
                Some(Self::LittleEndian)
            },
            _ => None,
        }
    }

    /// Byte order of the machine this binary was built for
    pub const fn host() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LittleEndian => "DCBA (Little-Endian)",
            Self::BigEndian => "ABCD (Big-Endian)",
        }
    }

    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

impl FromStr for ByteOrder {
    type Err = BytemanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| BytemanError::unknown_byte_order(s))
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = BytemanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::BigEndian
    }
}
