//! Numeric codec: integers ↔ byte sequences under a [`ByteOrder`]
//!
//! Provides functions for converting between:
//! - Fixed-width integers (8/16/32/64-bit, signed and unsigned) ↔ bytes
//! - Native-width integers (32 or 64 bits, see [`NativeWidth`]) ↔ bytes
//! - Tagged [`NumericValue`]s ↔ bytes
//!
//! Decoding never fails. A byte sequence of the wrong length decodes to the
//! zero value of the requested type, so a decoded zero is ambiguous; callers
//! that need to tell the two apart use [`try_decode`] / [`try_decode_kind`].
//!
//! Signed values share the byte pattern of their unsigned two's-complement
//! reinterpretation; there is no separate sign handling.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::byte_order::ByteOrder;
use crate::error::{BytemanError, Result};
use crate::native::NativeWidth;

// ============================================================================
// Fixed-width primitives
// ============================================================================

/// Integer type with a fixed byte width and byte order aware layout
pub trait FixedWidth: Copy + Default + Sized {
    /// Encoded length in bytes
    const WIDTH: usize;

    /// Lay out `self` in `order`; always exactly `WIDTH` bytes
    fn to_order_bytes(self, order: ByteOrder) -> Vec<u8>;

    /// Read a value laid out in `order`, `None` unless `bytes.len() == WIDTH`
    fn from_order_bytes(bytes: &[u8], order: ByteOrder) -> Option<Self>;
}

macro_rules! impl_fixed_width_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn to_order_bytes(self, order: ByteOrder) -> Vec<u8> {
                    match order {
                        ByteOrder::BigEndian => self.to_be_bytes().to_vec(),
                        ByteOrder::LittleEndian => self.to_le_bytes().to_vec(),
                    }
                }

                fn from_order_bytes(bytes: &[u8], order: ByteOrder) -> Option<Self> {
                    let array: [u8; std::mem::size_of::<$ty>()] = bytes.try_into().ok()?;
                    Some(match order {
                        ByteOrder::BigEndian => <$ty>::from_be_bytes(array),
                        ByteOrder::LittleEndian => <$ty>::from_le_bytes(array),
                    })
                }
            }
        )*
    };
}

// Signed types go through their unsigned partner of the same width.
macro_rules! impl_fixed_width_signed {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const WIDTH: usize = <$unsigned as FixedWidth>::WIDTH;

                fn to_order_bytes(self, order: ByteOrder) -> Vec<u8> {
                    (self as $unsigned).to_order_bytes(order)
                }

                fn from_order_bytes(bytes: &[u8], order: ByteOrder) -> Option<Self> {
                    <$unsigned>::from_order_bytes(bytes, order).map(|v| v as $ty)
                }
            }
        )*
    };
}

impl_fixed_width_unsigned!(u8, u16, u32, u64);
impl_fixed_width_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

// ============================================================================
// Tagged values
// ============================================================================

/// The supported numeric kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    U8,
    U16,
    U32,
    U64,
    /// Native-width unsigned
    Uint,
    I8,
    I16,
    I32,
    I64,
    /// Native-width signed
    Int,
}

impl NumericKind {
    pub const ALL: [NumericKind; 10] = [
        NumericKind::U8,
        NumericKind::U16,
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::Uint,
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::Int,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::Uint => "uint",
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::Int => "int",
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            NumericKind::I8 | NumericKind::I16 | NumericKind::I32 | NumericKind::I64 | NumericKind::Int
        )
    }

    pub fn is_native(&self) -> bool {
        matches!(self, NumericKind::Uint | NumericKind::Int)
    }

    /// Encoded length in bytes; native kinds follow `width`
    pub fn byte_len(&self, width: NativeWidth) -> usize {
        match self {
            NumericKind::U8 | NumericKind::I8 => 1,
            NumericKind::U16 | NumericKind::I16 => 2,
            NumericKind::U32 | NumericKind::I32 => 4,
            NumericKind::U64 | NumericKind::I64 => 8,
            NumericKind::Uint | NumericKind::Int => width.bytes(),
        }
    }

    /// Parse decimal text into a value of this kind
    ///
    /// Native kinds accept the full 64-bit range; narrowing happens on encode.
    pub fn parse_value(&self, text: &str) -> Result<NumericValue> {
        let text = text.trim();
        let invalid = |_: std::num::ParseIntError| BytemanError::invalid_number(self, text);
        let value = match self {
            NumericKind::U8 => NumericValue::U8(text.parse().map_err(invalid)?),
            NumericKind::U16 => NumericValue::U16(text.parse().map_err(invalid)?),
            NumericKind::U32 => NumericValue::U32(text.parse().map_err(invalid)?),
            NumericKind::U64 => NumericValue::U64(text.parse().map_err(invalid)?),
            NumericKind::Uint => NumericValue::Uint(text.parse().map_err(invalid)?),
            NumericKind::I8 => NumericValue::I8(text.parse().map_err(invalid)?),
            NumericKind::I16 => NumericValue::I16(text.parse().map_err(invalid)?),
            NumericKind::I32 => NumericValue::I32(text.parse().map_err(invalid)?),
            NumericKind::I64 => NumericValue::I64(text.parse().map_err(invalid)?),
            NumericKind::Int => NumericValue::Int(text.parse().map_err(invalid)?),
        };
        Ok(value)
    }
}

impl FromStr for NumericKind {
    type Err = BytemanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "u8" | "uint8" | "byte" => Ok(NumericKind::U8),
            "u16" | "uint16" => Ok(NumericKind::U16),
            "u32" | "uint32" => Ok(NumericKind::U32),
            "u64" | "uint64" => Ok(NumericKind::U64),
            "uint" | "usize" => Ok(NumericKind::Uint),
            "i8" | "int8" => Ok(NumericKind::I8),
            "i16" | "int16" => Ok(NumericKind::I16),
            "i32" | "int32" => Ok(NumericKind::I32),
            "i64" | "int64" => Ok(NumericKind::I64),
            "int" | "isize" => Ok(NumericKind::Int),
            _ => Err(BytemanError::unknown_kind(s)),
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric value tagged with its kind
///
/// `Uint` and `Int` hold native-width values in 64 bits. Under a 32-bit
/// [`NativeWidth`] only the low 32 bits are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Uint(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Int(i64),
}

impl NumericValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericValue::U8(_) => NumericKind::U8,
            NumericValue::U16(_) => NumericKind::U16,
            NumericValue::U32(_) => NumericKind::U32,
            NumericValue::U64(_) => NumericKind::U64,
            NumericValue::Uint(_) => NumericKind::Uint,
            NumericValue::I8(_) => NumericKind::I8,
            NumericValue::I16(_) => NumericKind::I16,
            NumericValue::I32(_) => NumericKind::I32,
            NumericValue::I64(_) => NumericKind::I64,
            NumericValue::Int(_) => NumericKind::Int,
        }
    }

    /// Zero of the given kind
    pub fn zero(kind: NumericKind) -> Self {
        match kind {
            NumericKind::U8 => NumericValue::U8(0),
            NumericKind::U16 => NumericValue::U16(0),
            NumericKind::U32 => NumericValue::U32(0),
            NumericKind::U64 => NumericValue::U64(0),
            NumericKind::Uint => NumericValue::Uint(0),
            NumericKind::I8 => NumericValue::I8(0),
            NumericKind::I16 => NumericValue::I16(0),
            NumericKind::I32 => NumericValue::I32(0),
            NumericKind::I64 => NumericValue::I64(0),
            NumericKind::Int => NumericValue::Int(0),
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::U8(v) => write!(f, "{}", v),
            NumericValue::U16(v) => write!(f, "{}", v),
            NumericValue::U32(v) => write!(f, "{}", v),
            NumericValue::U64(v) | NumericValue::Uint(v) => write!(f, "{}", v),
            NumericValue::I8(v) => write!(f, "{}", v),
            NumericValue::I16(v) => write!(f, "{}", v),
            NumericValue::I32(v) => write!(f, "{}", v),
            NumericValue::I64(v) | NumericValue::Int(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for NumericValue {
                fn from(value: $ty) -> Self {
                    NumericValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
);

impl From<usize> for NumericValue {
    fn from(value: usize) -> Self {
        NumericValue::Uint(value as u64)
    }
}

impl From<isize> for NumericValue {
    fn from(value: isize) -> Self {
        NumericValue::Int(value as i64)
    }
}

// ============================================================================
// Encode
// ============================================================================

/// Encode a u8; the byte order has no effect on a single byte
pub fn encode_u8(value: u8, order: ByteOrder) -> Vec<u8> {
    value.to_order_bytes(order)
}

/// Encode a u16 as 2 bytes
pub fn encode_u16(value: u16, order: ByteOrder) -> Vec<u8> {
    value.to_order_bytes(order)
}

/// Encode a u32 as 4 bytes
pub fn encode_u32(value: u32, order: ByteOrder) -> Vec<u8> {
    value.to_order_bytes(order)
}

/// Encode a u64 as 8 bytes
pub fn encode_u64(value: u64, order: ByteOrder) -> Vec<u8> {
    value.to_order_bytes(order)
}

pub fn encode_i8(value: i8, order: ByteOrder) -> Vec<u8> {
    encode_u8(value as u8, order)
}

pub fn encode_i16(value: i16, order: ByteOrder) -> Vec<u8> {
    encode_u16(value as u16, order)
}

pub fn encode_i32(value: i32, order: ByteOrder) -> Vec<u8> {
    encode_u32(value as u32, order)
}

pub fn encode_i64(value: i64, order: ByteOrder) -> Vec<u8> {
    encode_u64(value as u64, order)
}

/// Encode a native-width unsigned value as `width.bytes()` bytes
///
/// Under [`NativeWidth::W32`] the value is narrowed to its low 32 bits.
/// Lost high bits are not an error.
pub fn encode_native_uint(value: u64, order: ByteOrder, width: NativeWidth) -> Vec<u8> {
    match width {
        NativeWidth::W64 => encode_u64(value, order),
        NativeWidth::W32 => {
            if !width.fits(value) {
                trace!(value, "native uint truncated to 32 bits");
            }
            encode_u32(value as u32, order)
        },
    }
}

/// Encode a native-width signed value as `width.bytes()` bytes
///
/// Under [`NativeWidth::W32`] the two's-complement pattern is narrowed to its
/// low 32 bits.
pub fn encode_native_int(value: i64, order: ByteOrder, width: NativeWidth) -> Vec<u8> {
    if width == NativeWidth::W32 && i32::try_from(value).is_err() {
        trace!(value, "native int truncated to 32 bits");
    }
    match width {
        NativeWidth::W64 => encode_i64(value, order),
        NativeWidth::W32 => encode_u32(value as u64 as u32, order),
    }
}

/// Encode any tagged value; native kinds use `width`
pub fn encode_with_width(value: NumericValue, order: ByteOrder, width: NativeWidth) -> Vec<u8> {
    match value {
        NumericValue::U8(v) => encode_u8(v, order),
        NumericValue::U16(v) => encode_u16(v, order),
        NumericValue::U32(v) => encode_u32(v, order),
        NumericValue::U64(v) => encode_u64(v, order),
        NumericValue::Uint(v) => encode_native_uint(v, order, width),
        NumericValue::I8(v) => encode_i8(v, order),
        NumericValue::I16(v) => encode_i16(v, order),
        NumericValue::I32(v) => encode_i32(v, order),
        NumericValue::I64(v) => encode_i64(v, order),
        NumericValue::Int(v) => encode_native_int(v, order, width),
    }
}

/// Encode any tagged value at the build's native width
pub fn encode(value: NumericValue, order: ByteOrder) -> Vec<u8> {
    encode_with_width(value, order, NativeWidth::HOST)
}

/// Encode an unsigned value
///
/// Returns `None` when given a signed kind.
pub fn encode_uint(value: impl Into<NumericValue>, order: ByteOrder) -> Option<Vec<u8>> {
    let value = value.into();
    if value.kind().is_signed() {
        debug!(kind = %value.kind(), "encode_uint given a signed value");
        return None;
    }
    Some(encode(value, order))
}

/// Encode a signed value
///
/// Returns `None` when given an unsigned kind.
pub fn encode_int(value: impl Into<NumericValue>, order: ByteOrder) -> Option<Vec<u8>> {
    let value = value.into();
    if !value.kind().is_signed() {
        debug!(kind = %value.kind(), "encode_int given an unsigned value");
        return None;
    }
    Some(encode(value, order))
}

// ============================================================================
// Decode
// ============================================================================

/// Decode a fixed-width value, zero unless `bytes.len() == T::WIDTH`
pub fn decode_fixed<T: FixedWidth>(bytes: &[u8], order: ByteOrder) -> T {
    match T::from_order_bytes(bytes, order) {
        Some(value) => value,
        None => {
            debug!(
                expected = T::WIDTH,
                actual = bytes.len(),
                "length mismatch, decoding as zero"
            );
            T::default()
        },
    }
}

/// Decode a fixed-width value, failing unless `bytes.len() == T::WIDTH`
pub fn try_decode<T: FixedWidth>(bytes: &[u8], order: ByteOrder) -> Result<T> {
    T::from_order_bytes(bytes, order)
        .ok_or_else(|| BytemanError::length_mismatch(T::WIDTH, bytes.len()))
}

pub fn decode_u8(bytes: &[u8], order: ByteOrder) -> u8 {
    decode_fixed(bytes, order)
}

pub fn decode_u16(bytes: &[u8], order: ByteOrder) -> u16 {
    decode_fixed(bytes, order)
}

pub fn decode_u32(bytes: &[u8], order: ByteOrder) -> u32 {
    decode_fixed(bytes, order)
}

pub fn decode_u64(bytes: &[u8], order: ByteOrder) -> u64 {
    decode_fixed(bytes, order)
}

pub fn decode_i8(bytes: &[u8], order: ByteOrder) -> i8 {
    decode_u8(bytes, order) as i8
}

pub fn decode_i16(bytes: &[u8], order: ByteOrder) -> i16 {
    decode_u16(bytes, order) as i16
}

pub fn decode_i32(bytes: &[u8], order: ByteOrder) -> i32 {
    decode_u32(bytes, order) as i32
}

pub fn decode_i64(bytes: &[u8], order: ByteOrder) -> i64 {
    decode_u64(bytes, order) as i64
}

/// Byte window read by the native decoders
///
/// Exactly 8 bytes under a 64-bit width are read whole; otherwise the first
/// 4 bytes are read as a 32-bit value, whatever the total length.
enum NativeWindow<'a> {
    Wide(&'a [u8]),
    Narrow(&'a [u8]),
}

fn native_window(bytes: &[u8], width: NativeWidth) -> Option<NativeWindow<'_>> {
    if width == NativeWidth::W64 && bytes.len() == 8 {
        return Some(NativeWindow::Wide(bytes));
    }
    match bytes.get(..4) {
        Some(head) => Some(NativeWindow::Narrow(head)),
        None => {
            debug!(actual = bytes.len(), "native decode needs at least 4 bytes, decoding as zero");
            None
        },
    }
}

/// Decode a native-width unsigned value
///
/// 64-bit width and exactly 8 bytes: 64-bit read. Otherwise at least 4 bytes:
/// the first 4 are read as a u32. Anything shorter decodes as zero.
pub fn decode_native_uint(bytes: &[u8], order: ByteOrder, width: NativeWidth) -> u64 {
    match native_window(bytes, width) {
        Some(NativeWindow::Wide(all)) => decode_u64(all, order),
        Some(NativeWindow::Narrow(head)) => decode_u32(head, order) as u64,
        None => 0,
    }
}

/// Decode a native-width signed value
///
/// Reads the same bytes as [`decode_native_uint`]. A 4-byte read is
/// sign-extended under a 32-bit width and zero-extended under a 64-bit width,
/// where the 32-bit pattern is taken as an unsigned quantity.
pub fn decode_native_int(bytes: &[u8], order: ByteOrder, width: NativeWidth) -> i64 {
    match native_window(bytes, width) {
        Some(NativeWindow::Wide(all)) => decode_i64(all, order),
        Some(NativeWindow::Narrow(head)) => {
            let raw = decode_u32(head, order);
            match width {
                NativeWidth::W32 => raw as i32 as i64,
                NativeWidth::W64 => raw as i64,
            }
        },
        None => 0,
    }
}

/// Decode a native uint at the build's native width
pub fn decode_uint(bytes: &[u8], order: ByteOrder) -> usize {
    decode_native_uint(bytes, order, NativeWidth::HOST) as usize
}

/// Decode a native int at the build's native width
pub fn decode_int(bytes: &[u8], order: ByteOrder) -> isize {
    decode_native_int(bytes, order, NativeWidth::HOST) as isize
}

/// Decode a value of `kind` with the silent zero-default policy
pub fn decode_kind(kind: NumericKind, bytes: &[u8], order: ByteOrder) -> NumericValue {
    let width = NativeWidth::HOST;
    match kind {
        NumericKind::U8 => NumericValue::U8(decode_u8(bytes, order)),
        NumericKind::U16 => NumericValue::U16(decode_u16(bytes, order)),
        NumericKind::U32 => NumericValue::U32(decode_u32(bytes, order)),
        NumericKind::U64 => NumericValue::U64(decode_u64(bytes, order)),
        NumericKind::Uint => NumericValue::Uint(decode_native_uint(bytes, order, width)),
        NumericKind::I8 => NumericValue::I8(decode_i8(bytes, order)),
        NumericKind::I16 => NumericValue::I16(decode_i16(bytes, order)),
        NumericKind::I32 => NumericValue::I32(decode_i32(bytes, order)),
        NumericKind::I64 => NumericValue::I64(decode_i64(bytes, order)),
        NumericKind::Int => NumericValue::Int(decode_native_int(bytes, order, width)),
    }
}

/// Decode a value of `kind`, rejecting input of the wrong length
///
/// Native kinds accept exactly `NativeWidth::HOST.bytes()` bytes, or exactly 4.
pub fn try_decode_kind(kind: NumericKind, bytes: &[u8], order: ByteOrder) -> Result<NumericValue> {
    let value = match kind {
        NumericKind::U8 => NumericValue::U8(try_decode(bytes, order)?),
        NumericKind::U16 => NumericValue::U16(try_decode(bytes, order)?),
        NumericKind::U32 => NumericValue::U32(try_decode(bytes, order)?),
        NumericKind::U64 => NumericValue::U64(try_decode(bytes, order)?),
        NumericKind::I8 => NumericValue::I8(try_decode(bytes, order)?),
        NumericKind::I16 => NumericValue::I16(try_decode(bytes, order)?),
        NumericKind::I32 => NumericValue::I32(try_decode(bytes, order)?),
        NumericKind::I64 => NumericValue::I64(try_decode(bytes, order)?),
        NumericKind::Uint | NumericKind::Int => {
            let expected = NativeWidth::HOST.bytes();
            if bytes.len() != expected && bytes.len() != 4 {
                return Err(BytemanError::length_mismatch(expected, bytes.len()));
            }
            decode_kind(kind, bytes, order)
        },
    };
    Ok(value)
}
