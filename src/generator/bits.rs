//! Integer-to-float bit conversion
//!
//! A raw word is turned into a uniform float in `[0.0, 1.0)` without any
//! division: the low mantissa-width bits of the word are combined with the
//! exponent pattern of `1.0`, the result is reinterpreted as a float in
//! `[1.0, 2.0)`, and `1.0` is subtracted.
//!
//! Every representable output is equally likely, and the mapping is exact
//! at both ends: `0` maps to `0.0` and an all-ones word maps to
//! `1.0 - EPSILON` for the respective precision.

/// Exponent bits of `1.0f32`.
pub const F32_ONE_EXPONENT: u32 = 0x3F80_0000;

/// Mantissa bits of an `f32` (23 bits).
pub const F32_MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Exponent bits of `1.0f64`.
pub const F64_ONE_EXPONENT: u64 = 0x3FF0_0000_0000_0000;

/// Mantissa bits of an `f64` (52 bits).
pub const F64_MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

/// Maps a 32-bit word to a uniform `f32` in `[0.0, 1.0)`.
#[inline]
pub fn unit_f32(word: u32) -> f32 {
    f32::from_bits((word & F32_MANTISSA_MASK) | F32_ONE_EXPONENT) - 1.0
}

/// Maps a 64-bit word to a uniform `f64` in `[0.0, 1.0)`.
#[inline]
pub fn unit_f64(word: u64) -> f64 {
    f64::from_bits((word & F64_MANTISSA_MASK) | F64_ONE_EXPONENT) - 1.0
}

/// Recovers the 52 mantissa bits of a value in `[1.0, 2.0)`.
///
/// This is the inverse of [`unit_f64`] on its image: for any `u` it
/// returned, `mantissa_f64(u + 1.0)` gives back the bits that produced it.
#[inline]
pub fn mantissa_f64(value: f64) -> u64 {
    value.to_bits() & F64_MANTISSA_MASK
}
