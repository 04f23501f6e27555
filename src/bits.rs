//! Single-bit primitives over 8-bit channel values.
//!
//! Both pipelines go through these two functions so the bit convention
//! lives in exactly one place: the least-significant bit of a red channel
//! value carries one mask bit (0 = black, 1 = white).

/// Return the least-significant bit of `value`, as 0 or 1.
#[inline]
pub fn read_lsb(value: u8) -> u8 {
    value & 1
}

/// Return `value` with its least-significant bit replaced by `bit`.
///
/// The upper seven bits are preserved. `bit` must be 0 or 1.
#[inline]
pub fn write_lsb(value: u8, bit: u8) -> u8 {
    debug_assert!(bit <= 1, "bit must be 0 or 1, got {}", bit);
    (value & 0xFE) | bit
}
