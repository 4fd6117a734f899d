//! Core types and traits for the sample codec library
//!
//! This module defines the record exchanged with every codec call, the
//! format and direction identifiers used to select a transform, and the
//! trait every codec variant implements.

use crate::error::{CodecError, Result};
use crate::utils::validation;
use std::fmt;
use std::str::FromStr;

/// RIFF `wFormatTag` for integer linear PCM
pub const WAVE_FORMAT_PCM: u16 = 0x0001;
/// RIFF `wFormatTag` for G.711 A-law
pub const WAVE_FORMAT_ALAW: u16 = 0x0006;
/// RIFF `wFormatTag` for G.711 μ-law
pub const WAVE_FORMAT_MULAW: u16 = 0x0007;

/// Number of byte slots in a [`SampleRecord`]
pub const MAX_SAMPLE_BYTES: usize = 4;

/// Signature shared by every encode and decode transform
pub type Transform = fn(&mut SampleRecord);

/// One audio sample together with its serialized form
///
/// Encoding reads `sample` and overwrites the leading bytes of `bytes`;
/// decoding reads those bytes and overwrites `sample`. Nothing else is
/// touched, so slots a format does not use keep whatever they held before.
///
/// `bytes[0]` is the least-significant byte. An N-byte format owns
/// `bytes[..N]`; reading slots beyond the width of the last call is a
/// caller error that the codecs do not detect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleRecord {
    /// Sample value, nominally in `[-1.0, 1.0)`
    pub sample: f64,
    /// Little-endian serialized representation
    pub bytes: [u8; MAX_SAMPLE_BYTES],
}

impl SampleRecord {
    /// Create a record holding `sample` with zeroed byte slots
    pub const fn new(sample: f64) -> Self {
        Self {
            sample,
            bytes: [0; MAX_SAMPLE_BYTES],
        }
    }

    /// Create a record from 1 to 4 little-endian bytes
    ///
    /// Slots past the end of `bytes` are zero and `sample` is `0.0`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::validate_slot_count(bytes)?;
        let mut record = Self::default();
        record.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(record)
    }

    /// The byte slots that carry `format`'s encoding
    pub fn encoded(&self, format: SampleFormat) -> &[u8] {
        &self.bytes[..format.bytes_per_sample()]
    }

    /// Overwrite the byte slots owned by `format`
    ///
    /// Fails if `bytes` is not exactly as wide as the format. The sample
    /// and the remaining slots are left as they are.
    pub fn set_encoded(&mut self, format: SampleFormat, bytes: &[u8]) -> Result<()> {
        validation::validate_byte_count(format, bytes)?;
        self.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

/// Transform direction
///
/// The discriminants are the registry row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Bytes to sample
    Decode = 0,
    /// Sample to bytes
    Encode = 1,
}

impl Direction {
    /// Both directions in registry row order
    pub const ALL: [Direction; 2] = [Direction::Decode, Direction::Encode];

    /// Registry row index
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode => write!(f, "decode"),
            Self::Encode => write!(f, "encode"),
        }
    }
}

/// Supported sample formats
///
/// Declaration order is the registry column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// 8-bit unsigned linear PCM, 128 is zero
    Pcm8,
    /// 16-bit signed little-endian linear PCM
    Pcm16,
    /// 24-bit signed little-endian linear PCM
    Pcm24,
    /// 32-bit signed little-endian linear PCM
    Pcm32,
    /// G.711 A-law (PCMA)
    #[cfg(feature = "g711")]
    ALaw,
    /// G.711 μ-law (PCMU)
    #[cfg(feature = "g711")]
    MuLaw,
}

impl SampleFormat {
    /// Every format compiled into this build, in registry column order
    pub const ALL: &'static [SampleFormat] = &[
        Self::Pcm8,
        Self::Pcm16,
        Self::Pcm24,
        Self::Pcm32,
        #[cfg(feature = "g711")]
        Self::ALaw,
        #[cfg(feature = "g711")]
        Self::MuLaw,
    ];

    /// Number of formats compiled into this build
    pub const COUNT: usize = Self::ALL.len();

    /// Registry column index
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the format name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pcm8 => "PCM8",
            Self::Pcm16 => "PCM16",
            Self::Pcm24 => "PCM24",
            Self::Pcm32 => "PCM32",
            #[cfg(feature = "g711")]
            Self::ALaw => "PCMA",
            #[cfg(feature = "g711")]
            Self::MuLaw => "PCMU",
        }
    }

    /// Bytes occupied by one encoded sample
    pub const fn bytes_per_sample(self) -> usize {
        match self {
            Self::Pcm8 => 1,
            Self::Pcm16 => 2,
            Self::Pcm24 => 3,
            Self::Pcm32 => 4,
            #[cfg(feature = "g711")]
            Self::ALaw | Self::MuLaw => 1,
        }
    }

    /// Bits occupied by one encoded sample
    pub const fn bits_per_sample(self) -> u32 {
        self.bytes_per_sample() as u32 * 8
    }

    /// Whether the format is logarithmically companded
    pub const fn is_companded(self) -> bool {
        match self {
            Self::Pcm8 | Self::Pcm16 | Self::Pcm24 | Self::Pcm32 => false,
            #[cfg(feature = "g711")]
            Self::ALaw | Self::MuLaw => true,
        }
    }

    /// RIFF `wFormatTag` value for this format
    pub const fn wave_format_tag(self) -> u16 {
        match self {
            Self::Pcm8 | Self::Pcm16 | Self::Pcm24 | Self::Pcm32 => WAVE_FORMAT_PCM,
            #[cfg(feature = "g711")]
            Self::ALaw => WAVE_FORMAT_ALAW,
            #[cfg(feature = "g711")]
            Self::MuLaw => WAVE_FORMAT_MULAW,
        }
    }

    /// Resolve a format from a RIFF `wFormatTag` and `wBitsPerSample`
    pub fn from_wave_format(tag: u16, bits_per_sample: u16) -> Result<Self> {
        let format = match (tag, bits_per_sample) {
            (WAVE_FORMAT_PCM, 8) => Self::Pcm8,
            (WAVE_FORMAT_PCM, 16) => Self::Pcm16,
            (WAVE_FORMAT_PCM, 24) => Self::Pcm24,
            (WAVE_FORMAT_PCM, 32) => Self::Pcm32,
            #[cfg(feature = "g711")]
            (WAVE_FORMAT_ALAW, 8) => Self::ALaw,
            #[cfg(feature = "g711")]
            (WAVE_FORMAT_MULAW, 8) => Self::MuLaw,
            _ => {
                tracing::debug!(tag, bits_per_sample, "no codec for WAVE format");
                return Err(CodecError::unsupported_wave_format(tag, bits_per_sample));
            }
        };
        Ok(format)
    }

    /// Worst-case `|decode(encode(s)) - s|` for `s` in `[-1.0, 1.0)`
    ///
    /// For linear PCM this is one least-significant step. The companded
    /// formats are bounded by the step of their widest segment, 1024 on
    /// the 16-bit scale.
    pub fn quantization_step(self) -> f64 {
        if self.is_companded() {
            return 1024.0 / 32768.0;
        }
        1.0 / (1u64 << (self.bits_per_sample() - 1)) as f64
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let format = match s.to_lowercase().as_str() {
            "pcm8" => Self::Pcm8,
            "pcm16" => Self::Pcm16,
            "pcm24" => Self::Pcm24,
            "pcm32" => Self::Pcm32,
            #[cfg(feature = "g711")]
            "pcma" | "alaw" | "a-law" => Self::ALaw,
            #[cfg(feature = "g711")]
            "pcmu" | "ulaw" | "mulaw" | "u-law" | "µ-law" | "μ-law" => Self::MuLaw,
            _ => {
                tracing::debug!(name = s, "unrecognised sample format");
                return Err(CodecError::unsupported_format(s));
            }
        };
        Ok(format)
    }
}

/// Encode/decode capability shared by every codec variant
pub trait SampleCodec: Send + Sync {
    /// Format this codec reads and writes
    fn format(&self) -> SampleFormat;

    /// Serialize `record.sample` into the format's byte slots
    ///
    /// Never fails; samples outside `[-1.0, 1.0)` saturate.
    fn encode(&self, record: &mut SampleRecord);

    /// Reconstruct `record.sample` from the format's byte slots
    ///
    /// Every bit pattern yields a finite sample.
    fn decode(&self, record: &mut SampleRecord);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_properties() {
        assert_eq!(SampleFormat::Pcm24.name(), "PCM24");
        assert_eq!(SampleFormat::Pcm24.bytes_per_sample(), 3);
        assert_eq!(SampleFormat::Pcm24.bits_per_sample(), 24);
        assert_eq!(SampleFormat::Pcm8.wave_format_tag(), WAVE_FORMAT_PCM);
        assert!(!SampleFormat::Pcm32.is_companded());
    }

    #[test]
    fn test_format_indices_follow_declaration_order() {
        for (i, format) in SampleFormat::ALL.iter().enumerate() {
            assert_eq!(format.index(), i);
        }
        assert_eq!(Direction::Decode.index(), 0);
        assert_eq!(Direction::Encode.index(), 1);
    }

    #[test]
    fn test_quantization_step_shrinks_with_width() {
        let steps: Vec<f64> = [
            SampleFormat::Pcm8,
            SampleFormat::Pcm16,
            SampleFormat::Pcm24,
            SampleFormat::Pcm32,
        ]
        .iter()
        .map(|f| f.quantization_step())
        .collect();
        assert_eq!(steps[0], 1.0 / 128.0);
        assert_eq!(steps[1], 1.0 / 32768.0);
        assert!(steps.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_from_wave_format() {
        assert_eq!(
            SampleFormat::from_wave_format(WAVE_FORMAT_PCM, 16).unwrap(),
            SampleFormat::Pcm16
        );
        assert_eq!(
            SampleFormat::from_wave_format(WAVE_FORMAT_PCM, 32).unwrap(),
            SampleFormat::Pcm32
        );
        assert!(SampleFormat::from_wave_format(WAVE_FORMAT_PCM, 12).is_err());
        assert!(SampleFormat::from_wave_format(0x0003, 32).is_err());
    }

    #[test]
    #[cfg(feature = "g711")]
    fn test_from_wave_format_g711() {
        assert_eq!(
            SampleFormat::from_wave_format(WAVE_FORMAT_ALAW, 8).unwrap(),
            SampleFormat::ALaw
        );
        assert_eq!(
            SampleFormat::from_wave_format(WAVE_FORMAT_MULAW, 8).unwrap(),
            SampleFormat::MuLaw
        );
        assert!(SampleFormat::from_wave_format(WAVE_FORMAT_MULAW, 16).is_err());
        for format in SampleFormat::ALL {
            let tag = format.wave_format_tag();
            let bits = format.bits_per_sample() as u16;
            assert_eq!(SampleFormat::from_wave_format(tag, bits).unwrap(), *format);
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("pcm16".parse::<SampleFormat>().unwrap(), SampleFormat::Pcm16);
        assert_eq!("PCM8".parse::<SampleFormat>().unwrap(), SampleFormat::Pcm8);
        let err = "G729".parse::<SampleFormat>().unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedFormat { .. }));
        for format in SampleFormat::ALL {
            assert_eq!(format.to_string().parse::<SampleFormat>().unwrap(), *format);
        }
    }

    #[test]
    #[cfg(feature = "g711")]
    fn test_format_aliases() {
        assert_eq!("alaw".parse::<SampleFormat>().unwrap(), SampleFormat::ALaw);
        assert_eq!("A-Law".parse::<SampleFormat>().unwrap(), SampleFormat::ALaw);
        assert_eq!("μ-law".parse::<SampleFormat>().unwrap(), SampleFormat::MuLaw);
        assert_eq!("ULAW".parse::<SampleFormat>().unwrap(), SampleFormat::MuLaw);
        assert!(SampleFormat::ALaw.is_companded());
        assert_eq!(SampleFormat::MuLaw.quantization_step(), 1.0 / 32.0);
    }

    #[test]
    fn test_record_from_bytes() {
        let record = SampleRecord::from_bytes(&[0x34, 0x12]).unwrap();
        assert_eq!(record.bytes, [0x34, 0x12, 0x00, 0x00]);
        assert_eq!(record.sample, 0.0);
        assert_eq!(record.encoded(SampleFormat::Pcm16), &[0x34, 0x12]);

        assert!(SampleRecord::from_bytes(&[]).is_err());
        assert!(SampleRecord::from_bytes(&[0; 5]).is_err());
    }

    #[test]
    fn test_record_set_encoded_leaves_other_slots() {
        let mut record = SampleRecord {
            sample: 0.25,
            bytes: [0xAA, 0xBB, 0xCC, 0xDD],
        };
        record.set_encoded(SampleFormat::Pcm16, &[0x01, 0x02]).unwrap();
        assert_eq!(record.bytes, [0x01, 0x02, 0xCC, 0xDD]);
        assert_eq!(record.sample, 0.25);

        let err = record.set_encoded(SampleFormat::Pcm24, &[0x01]).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidByteCount {
                format: "PCM24",
                expected: 3,
                actual: 1
            }
        );
        assert_eq!(record.bytes, [0x01, 0x02, 0xCC, 0xDD]);
    }
}
