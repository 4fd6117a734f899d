//! Numeric helpers shared by every codec variant
//!
//! All encoders start the same way: map the nominal `[-1.0, 1.0)` sample
//! domain onto `[0, 2^bits)`, saturate to the representable range, and
//! round half up. Decoders finish by dividing by the signed half range.

/// Size of the unsigned code space for a `bytes`-wide format, `2^(8·bytes)`
#[inline]
pub fn full_scale(bytes: usize) -> f64 {
    (1u64 << (8 * bytes)) as f64
}

/// Signed half range for a `bytes`-wide format, `2^(8·bytes - 1)`
#[inline]
pub fn half_scale(bytes: usize) -> f64 {
    (1u64 << (8 * bytes - 1)) as f64
}

/// Map a sample from `[-1.0, 1.0)` onto `[0.0, scale)`
#[inline]
pub fn normalize(sample: f64, scale: f64) -> f64 {
    (sample + 1.0) / 2.0 * scale
}

/// Saturate `x` to `[low, high]`
///
/// Unlike [`f64::clamp`] this never panics and sends NaN to `low`.
#[inline]
pub fn clamp(x: f64, low: f64, high: f64) -> f64 {
    if x > high {
        high
    } else if x >= low {
        x
    } else {
        low
    }
}

/// Round to the nearest integer, ties towards positive infinity
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Normalize and saturate a sample onto the unsigned code space of a
/// `bytes`-wide format, `[0, 2^(8·bytes) - 1]`
#[inline]
pub fn saturate(sample: f64, bytes: usize) -> f64 {
    let scale = full_scale(bytes);
    clamp(normalize(sample, scale), 0.0, scale - 1.0)
}

/// Read a most-significant byte as a signed 8-bit value
///
/// `0x00..=0x7F` keep their value, `0x80..=0xFF` map to `-128..=-1`.
#[inline]
pub fn signed_msb(byte: u8) -> f64 {
    f64::from(byte as i8)
}
