//! Generic byte-sequence helpers
//!
//! No byte order involved; these work on raw sequences only.

/// Concatenate byte slices in order
pub fn combine(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

/// Resolve a `resize`-style size against a source length
///
/// - `size == 0`: keep `len`
/// - `size > 0`: exactly `size`
/// - `size < 0`: `len - |size|`, floor at 0
pub(crate) fn target_len(len: usize, size: isize) -> usize {
    match size {
        0 => len,
        s if s > 0 => s as usize,
        s => len.saturating_sub(s.unsigned_abs()),
    }
}

/// Resize a byte sequence
///
/// A positive `size` truncates or zero-pads on the right to exactly `size`
/// bytes, a negative `size` trims `|size|` bytes from the end, and `0` keeps
/// the input as-is.
pub fn resize(bytes: &[u8], size: isize) -> Vec<u8> {
    let len = target_len(bytes.len(), size);
    let mut out = vec![0u8; len];
    let copied = len.min(bytes.len());
    out[..copied].copy_from_slice(&bytes[..copied]);
    out
}
