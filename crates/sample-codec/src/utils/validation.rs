//! Input validation for populating sample records from byte slices

use crate::error::{CodecError, Result};
use crate::types::{SampleFormat, MAX_SAMPLE_BYTES};

/// Validate that a byte slice fits the record's slots
pub fn validate_slot_count(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() || bytes.len() > MAX_SAMPLE_BYTES {
        return Err(CodecError::InvalidSlotCount {
            actual: bytes.len(),
        });
    }

    Ok(())
}

/// Validate that a byte slice is exactly as wide as `format`
pub fn validate_byte_count(format: SampleFormat, bytes: &[u8]) -> Result<()> {
    let expected = format.bytes_per_sample();

    if bytes.len() != expected {
        return Err(CodecError::InvalidByteCount {
            format: format.name(),
            expected,
            actual: bytes.len(),
        });
    }

    Ok(())
}
