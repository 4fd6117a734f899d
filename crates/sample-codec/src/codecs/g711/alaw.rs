//! A-law compression and expansion
//!
//! The encoder picks the smallest segment whose ceiling covers the
//! magnitude and keeps four mantissa bits below the segment's leading one.
//! Segment 0 and segment 1 share the same step size. The assembled byte is
//! XORed with 0xD5, which flips the sign bit and every even bit as the
//! A-law transmission convention requires.

use super::{segment, SignMagnitude, MAX_MAGNITUDE};

/// Mask applied to every A-law byte on the wire
pub const ALAW_INVERSION: u8 = 0xD5;

/// A-law compression
///
/// Compresses a sign/magnitude pair to an 8-bit A-law code.
pub fn alaw_compress(value: SignMagnitude) -> u8 {
    let sign: u8 = if value.negative { 0x80 } else { 0x00 };
    let magnitude = value.magnitude.min(MAX_MAGNITUDE);

    let exponent = segment(magnitude);
    let shift = if exponent == 0 { 4 } else { exponent + 3 };
    let mantissa = ((magnitude >> shift) & 0x0F) as u8;

    (sign | (exponent << 4) | mantissa) ^ ALAW_INVERSION
}

/// A-law expansion
///
/// Expands an 8-bit A-law code to a signed 16-bit linear level. The result
/// is the midpoint of the code's quantization interval.
pub fn alaw_expand(code: u8) -> i16 {
    let code = code ^ ALAW_INVERSION;

    let exponent = (code >> 4) & 0x07;
    let mantissa = i16::from(code & 0x0F);

    let magnitude = if exponent == 0 {
        (mantissa << 4) + 0x0008
    } else {
        ((mantissa << 4) + 0x0108) << (exponent - 1)
    };

    if code & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}
