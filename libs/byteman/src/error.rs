//! Byteman Error Types
//!
//! The codec itself never fails: wrong-length input decodes to zero and
//! type mismatches come back as `None`. These errors cover the strict
//! decode path and text parsing.

use thiserror::Error;

/// Result type for byteman operations
pub type Result<T> = std::result::Result<T, BytemanError>;

/// Byteman errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BytemanError {
    /// Byte sequence length does not match the requested width
    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Malformed hexadecimal text
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Unrecognised byte order name
    #[error("Unknown byte order: {0}")]
    UnknownByteOrder(String),

    /// Unrecognised numeric kind name
    #[error("Unknown numeric kind: {0}")]
    UnknownKind(String),

    /// Text that does not parse as a number of the requested kind
    #[error("Invalid {kind} value: {input}")]
    InvalidNumber { kind: String, input: String },
}

impl From<hex::FromHexError> for BytemanError {
    fn from(err: hex::FromHexError) -> Self {
        BytemanError::InvalidHex(err.to_string())
    }
}

// Helper methods for creating errors
impl BytemanError {
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        BytemanError::LengthMismatch { expected, actual }
    }

    pub fn unknown_byte_order(name: impl Into<String>) -> Self {
        BytemanError::UnknownByteOrder(name.into())
    }

    pub fn unknown_kind(name: impl Into<String>) -> Self {
        BytemanError::UnknownKind(name.into())
    }

    pub fn invalid_number(kind: impl ToString, input: impl Into<String>) -> Self {
        BytemanError::InvalidNumber {
            kind: kind.to_string(),
            input: input.into(),
        }
    }

    /// Check if this error came from a decode of the wrong length
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, BytemanError::LengthMismatch { .. })
    }
}
