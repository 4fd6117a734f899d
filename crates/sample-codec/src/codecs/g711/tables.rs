//! G.711 Lookup Tables
//!
//! Pre-computed expansion tables for A-law and μ-law decoding. Each table
//! holds the 16-bit linear level for all 256 codes and is generated once,
//! on first use, from the algorithmic expanders.
//!
//! Encoding has no table: its input is a floating-point sample.

use super::alaw::alaw_expand;
use super::ulaw::ulaw_expand;
use std::sync::LazyLock;

/// Pre-computed A-law decoding table (8-bit A-law → 16-bit linear)
static ALAW_DECODE_TABLE: LazyLock<[i16; 256]> = LazyLock::new(|| {
    let mut table = [0i16; 256];

    for (code, entry) in table.iter_mut().enumerate() {
        *entry = alaw_expand(code as u8);
    }

    table
});

/// Pre-computed μ-law decoding table (8-bit μ-law → 16-bit linear)
static ULAW_DECODE_TABLE: LazyLock<[i16; 256]> = LazyLock::new(|| {
    let mut table = [0i16; 256];

    for (code, entry) in table.iter_mut().enumerate() {
        *entry = ulaw_expand(code as u8);
    }

    table
});

/// A-law expansion using the lookup table
pub fn alaw_expand_table(code: u8) -> i16 {
    ALAW_DECODE_TABLE[usize::from(code)]
}

/// μ-law expansion using the lookup table
pub fn ulaw_expand_table(code: u8) -> i16 {
    ULAW_DECODE_TABLE[usize::from(code)]
}

/// Force generation of both tables
///
/// Optional; the tables build themselves on first lookup. Calling this at
/// startup keeps that cost off the first decode.
pub fn init_tables() {
    LazyLock::force(&ALAW_DECODE_TABLE);
    LazyLock::force(&ULAW_DECODE_TABLE);
    tracing::debug!("G.711 decode tables initialized");
}
