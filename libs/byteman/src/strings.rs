//! Text ↔ bytes helpers
//!
//! `size` follows the [`resize`](crate::bytes::resize) convention: `0` keeps
//! the decoded length, positive truncates or zero-pads, negative trims from
//! the end.

use tracing::debug;

use crate::bytes::resize;
use crate::error::Result;

/// Bytes of `text` (UTF-8), resized to `size`
pub fn from_string(text: &str, size: isize) -> Vec<u8> {
    resize(text.as_bytes(), size)
}

/// Decode hex digits and resize to `size`
///
/// Fails on odd length or non-hex characters. Either case is accepted.
pub fn parse_hex(hex_digits: &str, size: isize) -> Result<Vec<u8>> {
    let decoded = hex::decode(hex_digits)?;
    Ok(resize(&decoded, size))
}

/// Decode hex digits and resize to `size`, `None` on malformed input
pub fn from_hex(hex_digits: &str, size: isize) -> Option<Vec<u8>> {
    match parse_hex(hex_digits, size) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            debug!("Rejected hex input {:?}: {}", hex_digits, e);
            None
        },
    }
}

/// Encode bytes to lowercase hex
/// Example: [0x12, 0x34, 0xAB] -> "1234ab"
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Encode bytes to uppercase hex
/// Example: [0x12, 0x34, 0xAB] -> "1234AB"
pub fn to_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(data)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::error::BytemanError;
    use tracing_test::traced_test;

    #[test]
    fn test_from_string() {
        let cases: [(&str, isize, &[u8]); 10] = [
            ("foo", 0, b"foo"),
            ("bar", 1, b"b"),
            ("baz", 2, b"ba"),
            ("qux", 3, b"qux"),
            ("foo", 4, &[0x66, 0x6f, 0x6f, 0x00]),
            ("foo", -1, b"fo"),
            ("bar", -2, b"b"),
            ("baz", -3, &[]),
            ("qux", -4, &[]),
            ("", 0, &[]),
        ];

        for (text, size, expected) in cases {
            assert_eq!(from_string(text, size), expected, "Failed for {:?} {}", text, size);
        }
    }

    #[test]
    fn test_from_hex() {
        let cases: [(&str, isize, &[u8]); 10] = [
            ("414243", 0, b"ABC"),
            ("414243", 1, b"A"),
            ("414243", 2, b"AB"),
            ("414243", 3, b"ABC"),
            ("414243", 4, &[0x41, 0x42, 0x43, 0x00]),
            ("414243", -1, b"AB"),
            ("414243", -2, b"A"),
            ("414243", -3, &[]),
            ("414243", -4, &[]),
            ("", 0, &[]),
        ];

        for (digits, size, expected) in cases {
            assert_eq!(from_hex(digits, size).as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_from_hex_malformed() {
        assert_eq!(from_hex("414", 0), None);
        assert_eq!(from_hex("zz", 0), None);
        assert_eq!(from_hex("0x41", 0), None);
        assert!(matches!(parse_hex("4", 0), Err(BytemanError::InvalidHex(_))));
    }

    #[test]
    fn test_from_hex_mixed_case() {
        assert_eq!(from_hex("aBcD", 0), Some(vec![0xab, 0xcd]));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x12, 0x34, 0xAB]), "1234ab");
        assert_eq!(to_hex_upper(&[0x12, 0x34, 0xAB]), "1234AB");
        assert_eq!(to_hex(&[]), "");
        assert_eq!(
            to_hex_upper(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]),
            "0123456789ABCDEF"
        );
    }

    #[test]
    #[traced_test]
    fn test_malformed_hex_is_logged() {
        assert_eq!(from_hex("xyz", 0), None);
        assert!(logs_contain("Rejected hex input"));
    }
}
