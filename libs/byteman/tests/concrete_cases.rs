//! Concrete Codec Cases
//!
//! Fixed byte patterns the codec must reproduce exactly, including the
//! degenerate ones (zero on wrong length, native truncation).

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use byteman::{
    combine, decode_int, decode_u16, decode_u32, decode_uint, encode_int, encode_native_uint,
    encode_u16, encode_uint, from_hex, from_string, resize, to_hex, try_decode_kind, ByteOrder,
    BytemanError, NativeWidth, NumericKind, NumericValue, NATIVE_WIDTH,
};

const BE: ByteOrder = ByteOrder::BigEndian;
const LE: ByteOrder = ByteOrder::LittleEndian;

#[test]
fn test_encode_u16_12345() {
    assert_eq!(encode_u16(12345, BE), vec![0x30, 0x39]);
    assert_eq!(encode_u16(12345, LE), vec![0x39, 0x30]);
}

#[test]
fn test_decode_u32_1234567890() {
    let be = [0x49, 0x96, 0x02, 0xd2];
    let mut le = be;
    le.reverse();

    assert_eq!(decode_u32(&be, BE), 1234567890);
    assert_eq!(decode_u32(&le, LE), 1234567890);
}

#[test]
fn test_decode_empty_is_zero() {
    assert_eq!(decode_u16(&[], BE), 0);
    assert_eq!(decode_u16(&[], LE), 0);
    assert_eq!(decode_uint(&[], BE), 0);
    assert_eq!(decode_int(&[], LE), 0);
}

#[test]
fn test_encode_native_max_signed() {
    let value = NumericValue::Uint(i64::MAX as u64);
    let be = encode_uint(value, BE).unwrap();
    let le = encode_uint(value, LE).unwrap();

    if NativeWidth::HOST == NativeWidth::W64 {
        assert_eq!(be, vec![0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(le, vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]);
    } else {
        assert_eq!(be, vec![0xff, 0xff, 0xff, 0xff]);
        assert_eq!(le, vec![0xff, 0xff, 0xff, 0xff]);
    }

    // Both paths stay reachable whatever the build width
    assert_eq!(encode_native_uint(i64::MAX as u64, BE, NativeWidth::W32), vec![0xff; 4]);
    assert_eq!(encode_native_uint(i64::MAX as u64, BE, NativeWidth::W64)[0], 0x7f);
}

#[test]
fn test_encode_int_minus_one_byte() {
    assert_eq!(encode_int(NumericValue::I8(-1), BE), Some(vec![0xff]));
    assert_eq!(encode_int(-1i8, LE), Some(vec![0xff]));
}

#[test]
fn test_native_encode_length() {
    let bytes = encode_uint(0usize, BE).unwrap();
    assert_eq!(bytes.len() as u32 * 8, NATIVE_WIDTH);

    let bytes = encode_int(isize::MIN, LE).unwrap();
    assert_eq!(bytes.len() as u32 * 8, NATIVE_WIDTH);
}

#[test]
fn test_native_decode_roundtrip_host() {
    let bytes = encode_uint(0xdead_beef_usize, BE).unwrap();
    assert_eq!(decode_uint(&bytes, BE), 0xdead_beef);

    let bytes = encode_int(-12345isize, LE).unwrap();
    assert_eq!(decode_int(&bytes, LE), -12345);
}

#[test]
fn test_strict_decode_distinguishes_zero() {
    assert_eq!(
        try_decode_kind(NumericKind::U16, &[0x00, 0x00], BE),
        Ok(NumericValue::U16(0))
    );
    assert_eq!(
        try_decode_kind(NumericKind::U16, &[], BE),
        Err(BytemanError::LengthMismatch {
            expected: 2,
            actual: 0
        })
    );
}

#[test]
fn test_resize_trim_from_end() {
    assert_eq!(resize(&[0x66, 0x6f, 0x6f], -1), vec![0x66, 0x6f]);
}

#[test]
fn test_text_helpers_feed_the_codec() {
    let bytes = from_hex("3039", 0).unwrap();
    assert_eq!(decode_u16(&bytes, BE), 12345);

    let padded = combine(&[&from_string("ab", 0)[..], &[0x00u8, 0x01][..]]);
    assert_eq!(to_hex(&padded), "61620001");
    assert_eq!(decode_u32(&padded, BE), 0x6162_0001);
}
