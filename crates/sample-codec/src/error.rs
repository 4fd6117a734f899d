//! Error handling for the sample codec library
//!
//! The encode and decode transforms never fail: out-of-range samples are
//! saturated and every byte pattern decodes to a finite value. Errors only
//! come from the surfaces around them, such as resolving a format from a
//! name or a RIFF format tag, or filling a record from a byte slice.

use std::fmt;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec selection and record population
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Format identifier not recognised
    #[error("Unsupported sample format: {name}")]
    UnsupportedFormat {
        /// Identifier as supplied by the caller
        name: String,
    },

    /// RIFF format tag / bit depth pair with no codec behind it
    #[error("Unsupported WAVE format: tag 0x{tag:04X} with {bits_per_sample} bits per sample")]
    UnsupportedWaveFormat {
        /// `wFormatTag` value
        tag: u16,
        /// `wBitsPerSample` value
        bits_per_sample: u16,
    },

    /// Byte slice does not match the width of the format
    #[error("Invalid byte count for {format}: expected {expected}, got {actual}")]
    InvalidByteCount {
        /// Format name
        format: &'static str,
        /// Bytes the format occupies
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },

    /// Byte slice cannot fit in a sample record
    #[error("Invalid byte slot count: {actual} (supported: 1-4)")]
    InvalidSlotCount {
        /// Bytes supplied
        actual: usize,
    },
}

impl CodecError {
    /// Create a new unsupported format error
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    /// Create a new unsupported WAVE format error
    pub fn unsupported_wave_format(tag: u16, bits_per_sample: u16) -> Self {
        Self::UnsupportedWaveFormat {
            tag,
            bits_per_sample,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedFormat { .. } | Self::UnsupportedWaveFormat { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidByteCount { .. } | Self::InvalidSlotCount { .. } => {
                ErrorCategory::Processing
            }
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Format selection errors
    Configuration,
    /// Record population errors
    Processing,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Processing => write!(f, "Processing"),
        }
    }
}
