//! Native integer width
//!
//! The "native" int/uint codec path is 32 or 64 bits wide. The width is
//! fixed when the crate is built: the target pointer width, unless the
//! `native-32` feature pins it to 32 bits.

use std::fmt;

/// Bit width of the native integer codec path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeWidth {
    W32,
    W64,
}

/// Native width in bits for this build (32 or 64)
pub const NATIVE_WIDTH: u32 = NativeWidth::HOST.bits();

impl NativeWidth {
    /// Width selected at build time
    #[cfg(any(target_pointer_width = "32", feature = "native-32"))]
    pub const HOST: NativeWidth = NativeWidth::W32;

    /// Width selected at build time
    #[cfg(not(any(target_pointer_width = "32", feature = "native-32")))]
    pub const HOST: NativeWidth = NativeWidth::W64;

    pub const fn bits(self) -> u32 {
        match self {
            NativeWidth::W32 => 32,
            NativeWidth::W64 => 64,
        }
    }

    pub const fn bytes(self) -> usize {
        match self {
            NativeWidth::W32 => 4,
            NativeWidth::W64 => 8,
        }
    }

    /// Whether `value` survives narrowing to this width
    pub const fn fits(self, value: u64) -> bool {
        match self {
            NativeWidth::W32 => value <= u32::MAX as u64,
            NativeWidth::W64 => true,
        }
    }
}

impl fmt::Display for NativeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(NativeWidth::W32.bits(), 32);
        assert_eq!(NativeWidth::W32.bytes(), 4);
        assert_eq!(NativeWidth::W64.bits(), 64);
        assert_eq!(NativeWidth::W64.bytes(), 8);
        assert_eq!(NATIVE_WIDTH as usize, NativeWidth::HOST.bytes() * 8);
    }

    #[test]
    fn test_host_width() {
        if cfg!(feature = "native-32") {
            assert_eq!(NativeWidth::HOST, NativeWidth::W32);
        } else {
            assert_eq!(NativeWidth::HOST.bytes(), std::mem::size_of::<usize>());
        }
    }

    #[test]
    fn test_fits() {
        assert!(NativeWidth::W32.fits(u32::MAX as u64));
        assert!(!NativeWidth::W32.fits(u32::MAX as u64 + 1));
        assert!(NativeWidth::W64.fits(u64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(NativeWidth::W32.to_string(), "32-bit");
        assert_eq!(NativeWidth::W64.to_string(), "64-bit");
    }
}
