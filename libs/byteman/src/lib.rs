//! Byteman
//!
//! Byte order aware conversions between integers, text, and raw bytes.
//!
//! # Architecture
//!
//! This library provides:
//! - **Byte order**: `ByteOrder` selects big- or little-endian layout
//! - **Native width**: `NativeWidth` fixes the native int codec at 32 or 64 bits
//! - **Numeric codec**: encode/decode for 8/16/32/64-bit and native integers
//! - **Byte helpers**: `combine`, `resize`
//! - **Text helpers**: raw string and hex text to bytes
//!
//! # Features
//!
//! - `native-32` - Use the 32-bit native int path even on 64-bit targets
//!
//! # Example
//!
//! ```
//! use byteman::{decode_u32, encode_u16, ByteOrder};
//!
//! assert_eq!(encode_u16(12345, ByteOrder::BigEndian), vec![0x30, 0x39]);
//! assert_eq!(decode_u32(&[0x49, 0x96, 0x02, 0xd2], ByteOrder::BigEndian), 1234567890);
//! // Wrong length decodes to zero
//! assert_eq!(decode_u32(&[0x49], ByteOrder::BigEndian), 0);
//! ```

pub mod byte_order;
pub mod bytes;
pub mod error;
pub mod native;
pub mod numbers;
pub mod strings;

// Re-export core types
pub use byte_order::ByteOrder;
pub use error::{BytemanError, Result};
pub use native::{NativeWidth, NATIVE_WIDTH};
pub use numbers::{FixedWidth, NumericKind, NumericValue};

pub use bytes::{combine, resize};
pub use numbers::{
    decode_fixed, decode_i16, decode_i32, decode_i64, decode_i8, decode_int, decode_kind,
    decode_native_int, decode_native_uint, decode_u16, decode_u32, decode_u64, decode_u8,
    decode_uint, encode, encode_i16, encode_i32, encode_i64, encode_i8, encode_int,
    encode_native_int, encode_native_uint, encode_u16, encode_u32, encode_u64, encode_u8,
    encode_uint, encode_with_width, try_decode, try_decode_kind,
};
pub use strings::{from_hex, from_string, parse_hex, to_hex, to_hex_upper};
