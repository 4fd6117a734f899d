//! G.711 A-law and μ-law codecs
//!
//! Both laws compress one sample into a single sign/segment/mantissa byte.
//! Encoding first quantizes the floating-point sample onto the signed 16-bit
//! scale exactly like 16-bit linear PCM, then splits it into a sign flag and
//! a truncated magnitude. For integer 16-bit levels this reproduces the
//! ITU-T G.711 reference coder bit for bit, including the one's-complement
//! treatment of negative inputs.
//!
//! ## Reference
//!
//! - ITU-T Recommendation G.711: "Pulse code modulation (PCM) of voice frequencies"
//!
//! ## Byte layout
//!
//! | Law   | Sign | Segment | Mantissa | Transmission inversion |
//! |-------|------|---------|----------|------------------------|
//! | A-law | 0x80 | 0x70    | 0x0F     | XOR 0xD5               |
//! | μ-law | 0x80 | 0x70    | 0x0F     | one's complement       |

use crate::types::{SampleCodec, SampleFormat, SampleRecord};
use crate::utils::numeric;

pub mod alaw;
pub mod tables;
pub mod ulaw;

pub use alaw::{alaw_compress, alaw_expand};
pub use tables::{alaw_expand_table, init_tables, ulaw_expand_table};
pub use ulaw::{ulaw_compress, ulaw_expand};

#[cfg(test)]
mod tests;

/// Divisor that maps the signed 16-bit scale back to `[-1.0, 1.0)`
pub(crate) const SCALE_16: f64 = 32768.0;

/// Largest magnitude either law accepts before segment lookup
pub(crate) const MAX_MAGNITUDE: u16 = 0x7FFF;

/// Upper bound of each of the 8 segments, on the 16-bit magnitude scale
pub(crate) const SEGMENT_CEILINGS: [u16; 8] = [
    0x00FF, 0x01FF, 0x03FF, 0x07FF, 0x0FFF, 0x1FFF, 0x3FFF, 0x7FFF,
];

/// Index of the first segment whose ceiling covers `magnitude`
#[inline]
pub(crate) fn segment(magnitude: u16) -> u8 {
    SEGMENT_CEILINGS
        .iter()
        .position(|&ceiling| magnitude <= ceiling)
        .map_or(7, |exponent| exponent as u8)
}

/// A sample split into sign and 16-bit-scale magnitude
///
/// `negative` with a zero magnitude is a valid state: inputs just below
/// the midpoint round to a negative zero, as in the reference coder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignMagnitude {
    /// Sign flag
    pub negative: bool,
    /// Magnitude on the 16-bit scale, at most `0x7FFF`
    pub magnitude: u16,
}

impl SignMagnitude {
    /// Quantize a floating-point sample
    ///
    /// The sample is saturated to the 16-bit code space, offset by half a
    /// step and re-centred; the magnitude is truncated towards zero.
    pub fn from_sample(sample: f64) -> Self {
        let centered = numeric::saturate(sample, 2) + 0.5 - SCALE_16;
        Self {
            negative: centered < 0.0,
            magnitude: centered.abs() as u16,
        }
    }

    /// Split a signed 16-bit linear level
    ///
    /// Negative levels map to their one's complement, matching
    /// [`SignMagnitude::from_sample`] for `level / 32768.0`.
    pub fn from_linear(level: i16) -> Self {
        if level < 0 {
            Self {
                negative: true,
                magnitude: !level as u16,
            }
        } else {
            Self {
                negative: false,
                magnitude: level as u16,
            }
        }
    }
}

/// G.711 A-law (PCMA) codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ALawCodec;

impl SampleCodec for ALawCodec {
    fn format(&self) -> SampleFormat {
        SampleFormat::ALaw
    }

    fn encode(&self, record: &mut SampleRecord) {
        encode_alaw(record);
    }

    fn decode(&self, record: &mut SampleRecord) {
        decode_alaw(record);
    }
}

/// G.711 μ-law (PCMU) codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MuLawCodec;

impl SampleCodec for MuLawCodec {
    fn format(&self) -> SampleFormat {
        SampleFormat::MuLaw
    }

    fn encode(&self, record: &mut SampleRecord) {
        encode_ulaw(record);
    }

    fn decode(&self, record: &mut SampleRecord) {
        decode_ulaw(record);
    }
}

/// Encode `record.sample` as A-law into `record.bytes[0]`
pub fn encode_alaw(record: &mut SampleRecord) {
    record.bytes[0] = alaw_compress(SignMagnitude::from_sample(record.sample));
}

/// Decode the A-law code in `record.bytes[0]` into `record.sample`
pub fn decode_alaw(record: &mut SampleRecord) {
    record.sample = f64::from(alaw_expand_table(record.bytes[0])) / SCALE_16;
}

/// Encode `record.sample` as μ-law into `record.bytes[0]`
pub fn encode_ulaw(record: &mut SampleRecord) {
    record.bytes[0] = ulaw_compress(SignMagnitude::from_sample(record.sample));
}

/// Decode the μ-law code in `record.bytes[0]` into `record.sample`
pub fn decode_ulaw(record: &mut SampleRecord) {
    record.sample = f64::from(ulaw_expand_table(record.bytes[0])) / SCALE_16;
}
