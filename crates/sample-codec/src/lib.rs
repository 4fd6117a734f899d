//! # Sample-Codec: Sample-Level Audio Codecs
//!
//! This library converts a single normalized floating-point audio sample to
//! and from its binary representation. It covers the formats found in
//! uncompressed and G.711-compressed WAVE data.
//!
//! ## Formats
//!
//! - **Linear PCM**: 8-bit unsigned, 16/24/32-bit signed little-endian
//! - **G.711 A-law (PCMA)**: ITU-T compliant, bit-exact with the reference coder
//! - **G.711 μ-law (PCMU)**: ITU-T compliant, bit-exact with the reference coder
//!
//! Every transform is a pure, constant-time function over a caller-owned
//! [`SampleRecord`]. Encoding never fails: samples outside `[-1.0, 1.0)`
//! saturate at the nearest representable code. Framing, channel
//! interleaving and container parsing are left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use sample_codec::{CodecRegistry, Direction, SampleFormat, SampleRecord};
//!
//! let registry = CodecRegistry::global();
//!
//! // Encode one sample as 16-bit PCM
//! let mut record = SampleRecord::new(-1.0);
//! registry.apply(Direction::Encode, SampleFormat::Pcm16, &mut record);
//! assert_eq!(record.encoded(SampleFormat::Pcm16), &[0x00, 0x80]);
//!
//! // Decode it back
//! registry.apply(Direction::Decode, SampleFormat::Pcm16, &mut record);
//! assert_eq!(record.sample, -1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `g711`: G.711 A-law/μ-law codecs (enabled by default)

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use codecs::{CodecFactory, CodecRegistry};
pub use error::{CodecError, Result};
pub use types::{Direction, SampleCodec, SampleFormat, SampleRecord, Transform};

use tracing_subscriber::EnvFilter;

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported format names
pub const SUPPORTED_FORMATS: &[&str] = &[
    "PCM8",
    "PCM16",
    "PCM24",
    "PCM32",
    #[cfg(feature = "g711")]
    "PCMA",
    #[cfg(feature = "g711")]
    "PCMU",
];

/// Initialize the codec library
///
/// Installs a `tracing` subscriber filtered by `RUST_LOG` unless one is
/// already set, and builds the G.711 lookup tables. Calling it is optional
/// and safe to repeat.
pub fn init() {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    #[cfg(feature = "g711")]
    codecs::g711::init_tables();

    tracing::info!("Sample-Codec v{} initialized", VERSION);
    tracing::info!("Supported formats: {:?}", SUPPORTED_FORMATS);
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_formats: SUPPORTED_FORMATS.to_vec(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// List of supported format names
    pub supported_formats: Vec<&'static str>,
}

/// Encode one sample and return the populated record
pub fn encode_sample(format: SampleFormat, sample: f64) -> SampleRecord {
    let mut record = SampleRecord::new(sample);
    CodecRegistry::global().encode(format, &mut record);
    record
}

/// Decode one sample from exactly `format.bytes_per_sample()` bytes
pub fn decode_sample(format: SampleFormat, bytes: &[u8]) -> Result<f64> {
    let mut record = SampleRecord::default();
    record.set_encoded(format, bytes)?;
    CodecRegistry::global().decode(format, &mut record);
    Ok(record.sample)
}
