//! Linear PCM codecs (8/16/24/32-bit)
//!
//! All four widths share one algorithm:
//!
//! - **Encode**: map `[-1.0, 1.0)` onto `[0, 2^bits)`, saturate to
//!   `[0, 2^bits - 1]`, round half up. 8-bit stores that unsigned level
//!   directly (offset-binary, 128 is zero); wider formats subtract the half
//!   range and store the two's-complement result little-endian.
//! - **Decode**: the most-significant byte carries the sign, the lower
//!   bytes add unsigned weight, and the sum is divided by the half range.
//!   8-bit uses `(byte - 128) / 128`.

use crate::types::{SampleCodec, SampleFormat, SampleRecord};
use crate::utils::numeric;

/// Linear PCM codec of a fixed byte width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearPcm {
    width: usize,
}

impl LinearPcm {
    /// 8-bit unsigned linear PCM
    pub const PCM8: Self = Self { width: 1 };
    /// 16-bit signed linear PCM
    pub const PCM16: Self = Self { width: 2 };
    /// 24-bit signed linear PCM
    pub const PCM24: Self = Self { width: 3 };
    /// 32-bit signed linear PCM
    pub const PCM32: Self = Self { width: 4 };

    /// Linear codec for `format`, or `None` for a companded format
    pub fn for_format(format: SampleFormat) -> Option<Self> {
        match format {
            SampleFormat::Pcm8 => Some(Self::PCM8),
            SampleFormat::Pcm16 => Some(Self::PCM16),
            SampleFormat::Pcm24 => Some(Self::PCM24),
            SampleFormat::Pcm32 => Some(Self::PCM32),
            #[cfg(feature = "g711")]
            SampleFormat::ALaw | SampleFormat::MuLaw => None,
        }
    }

    /// Width in bytes
    pub const fn width(self) -> usize {
        self.width
    }
}

impl SampleCodec for LinearPcm {
    fn format(&self) -> SampleFormat {
        match self.width {
            1 => SampleFormat::Pcm8,
            2 => SampleFormat::Pcm16,
            3 => SampleFormat::Pcm24,
            _ => SampleFormat::Pcm32,
        }
    }

    fn encode(&self, record: &mut SampleRecord) {
        encode_linear(record, self.width);
    }

    fn decode(&self, record: &mut SampleRecord) {
        decode_linear(record, self.width);
    }
}

/// Unsigned level in `[0, 2^(8·width) - 1]` for a sample
#[inline]
fn unsigned_level(sample: f64, width: usize) -> f64 {
    numeric::round_half_up(numeric::saturate(sample, width))
}

/// Encode `record.sample` into `record.bytes[..width]`
///
/// `width` must be in `1..=4`.
#[inline]
pub fn encode_linear(record: &mut SampleRecord, width: usize) {
    let level = unsigned_level(record.sample, width);
    if width == 1 {
        record.bytes[0] = level as u8;
        return;
    }

    // two's complement, truncated to `width` bytes
    let signed = (level - numeric::half_scale(width)) as i64;
    let code = (signed as u64).to_le_bytes();
    record.bytes[..width].copy_from_slice(&code[..width]);
}

/// Decode `record.bytes[..width]` into `record.sample`
///
/// `width` must be in `1..=4`.
#[inline]
pub fn decode_linear(record: &mut SampleRecord, width: usize) {
    if width == 1 {
        record.sample = (f64::from(record.bytes[0]) - 128.0) / 128.0;
        return;
    }

    let msb = numeric::signed_msb(record.bytes[width - 1]);
    let level = record.bytes[..width - 1]
        .iter()
        .rev()
        .fold(msb, |acc, &byte| acc * 256.0 + f64::from(byte));
    record.sample = level / numeric::half_scale(width);
}

/// Encode 8-bit linear PCM
pub fn encode_pcm8(record: &mut SampleRecord) {
    encode_linear(record, 1);
}

/// Decode 8-bit linear PCM
pub fn decode_pcm8(record: &mut SampleRecord) {
    decode_linear(record, 1);
}

/// Encode 16-bit linear PCM
pub fn encode_pcm16(record: &mut SampleRecord) {
    encode_linear(record, 2);
}

/// Decode 16-bit linear PCM
pub fn decode_pcm16(record: &mut SampleRecord) {
    decode_linear(record, 2);
}

/// Encode 24-bit linear PCM
pub fn encode_pcm24(record: &mut SampleRecord) {
    encode_linear(record, 3);
}

/// Decode 24-bit linear PCM
pub fn decode_pcm24(record: &mut SampleRecord) {
    decode_linear(record, 3);
}

/// Encode 32-bit linear PCM
pub fn encode_pcm32(record: &mut SampleRecord) {
    encode_linear(record, 4);
}

/// Decode 32-bit linear PCM
pub fn decode_pcm32(record: &mut SampleRecord) {
    decode_linear(record, 4);
}
