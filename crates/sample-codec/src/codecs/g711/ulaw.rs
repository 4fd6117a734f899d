//! μ-law compression and expansion
//!
//! A bias of 0x84 is added to the magnitude before the segment search, so
//! every segment, including the first, has a leading one and the mantissa
//! is always the four bits below it. The assembled byte is complemented.

use super::{segment, SignMagnitude, MAX_MAGNITUDE};

/// Bias added to the magnitude before segment lookup
pub const ULAW_BIAS: u16 = 0x84;

/// μ-law compression
///
/// Compresses a sign/magnitude pair to an 8-bit μ-law code.
pub fn ulaw_compress(value: SignMagnitude) -> u8 {
    let sign: u8 = if value.negative { 0x80 } else { 0x00 };
    let magnitude = value
        .magnitude
        .saturating_add(ULAW_BIAS)
        .min(MAX_MAGNITUDE);

    let exponent = segment(magnitude);
    let mantissa = ((magnitude >> (exponent + 3)) & 0x0F) as u8;

    !(sign | (exponent << 4) | mantissa)
}

/// μ-law expansion
///
/// Expands an 8-bit μ-law code to a signed 16-bit linear level.
pub fn ulaw_expand(code: u8) -> i16 {
    let code = !code;

    let exponent = (code >> 4) & 0x07;
    let mantissa = i16::from(code & 0x0F);

    let bias = ULAW_BIAS as i16;
    let magnitude = (((mantissa << 3) + bias) << exponent) - bias;

    if code & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}
