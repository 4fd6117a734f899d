//! Codec implementations, registry and factory

use crate::error::Result;
use crate::types::{Direction, SampleCodec, SampleFormat, SampleRecord, Transform};

// Codec implementations
pub mod linear;

#[cfg(feature = "g711")]
pub mod g711;

/// The process-wide transform table
static REGISTRY: CodecRegistry = CodecRegistry::new();

/// Fixed `[direction][format]` table of transforms
///
/// Rows are indexed by [`Direction::index`], columns by
/// [`SampleFormat::index`]. The table is built at compile time and never
/// changes, so lookups need no synchronization.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    table: [[Transform; SampleFormat::COUNT]; 2],
}

impl CodecRegistry {
    /// Build the table
    pub const fn new() -> Self {
        Self {
            table: [
                [
                    linear::decode_pcm8,
                    linear::decode_pcm16,
                    linear::decode_pcm24,
                    linear::decode_pcm32,
                    #[cfg(feature = "g711")]
                    g711::decode_alaw,
                    #[cfg(feature = "g711")]
                    g711::decode_ulaw,
                ],
                [
                    linear::encode_pcm8,
                    linear::encode_pcm16,
                    linear::encode_pcm24,
                    linear::encode_pcm32,
                    #[cfg(feature = "g711")]
                    g711::encode_alaw,
                    #[cfg(feature = "g711")]
                    g711::encode_ulaw,
                ],
            ],
        }
    }

    /// The shared read-only registry
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Look up the transform for a direction and format
    pub fn transform(&self, direction: Direction, format: SampleFormat) -> Transform {
        tracing::trace!(%direction, %format, "codec lookup");
        self.table[direction.index()][format.index()]
    }

    /// Run the transform for a direction and format on `record`
    pub fn apply(&self, direction: Direction, format: SampleFormat, record: &mut SampleRecord) {
        (self.transform(direction, format))(record);
    }

    /// Encode `record.sample` as `format`
    pub fn encode(&self, format: SampleFormat, record: &mut SampleRecord) {
        self.apply(Direction::Encode, format, record);
    }

    /// Decode `record`'s bytes as `format`
    pub fn decode(&self, format: SampleFormat, record: &mut SampleRecord) {
        self.apply(Direction::Decode, format, record);
    }

    /// Formats the table has columns for
    pub fn formats(&self) -> &'static [SampleFormat] {
        SampleFormat::ALL
    }

    /// Number of formats in the table
    pub fn len(&self) -> usize {
        SampleFormat::COUNT
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleCodec for SampleFormat {
    fn format(&self) -> SampleFormat {
        *self
    }

    fn encode(&self, record: &mut SampleRecord) {
        match self {
            Self::Pcm8 | Self::Pcm16 | Self::Pcm24 | Self::Pcm32 => {
                linear::encode_linear(record, self.bytes_per_sample())
            }
            #[cfg(feature = "g711")]
            Self::ALaw => g711::encode_alaw(record),
            #[cfg(feature = "g711")]
            Self::MuLaw => g711::encode_ulaw(record),
        }
    }

    fn decode(&self, record: &mut SampleRecord) {
        match self {
            Self::Pcm8 | Self::Pcm16 | Self::Pcm24 | Self::Pcm32 => {
                linear::decode_linear(record, self.bytes_per_sample())
            }
            #[cfg(feature = "g711")]
            Self::ALaw => g711::decode_alaw(record),
            #[cfg(feature = "g711")]
            Self::MuLaw => g711::decode_ulaw(record),
        }
    }
}

/// Codec factory for creating boxed codec instances
pub struct CodecFactory;

impl CodecFactory {
    /// Create the codec for a format
    pub fn create(format: SampleFormat) -> Box<dyn SampleCodec> {
        match format {
            SampleFormat::Pcm8 => Box::new(linear::LinearPcm::PCM8),
            SampleFormat::Pcm16 => Box::new(linear::LinearPcm::PCM16),
            SampleFormat::Pcm24 => Box::new(linear::LinearPcm::PCM24),
            SampleFormat::Pcm32 => Box::new(linear::LinearPcm::PCM32),
            #[cfg(feature = "g711")]
            SampleFormat::ALaw => Box::new(g711::ALawCodec),
            #[cfg(feature = "g711")]
            SampleFormat::MuLaw => Box::new(g711::MuLawCodec),
        }
    }

    /// Create a codec by name, e.g. `"PCM16"` or `"alaw"`
    pub fn create_by_name(name: &str) -> Result<Box<dyn SampleCodec>> {
        Ok(Self::create(name.parse()?))
    }

    /// Create a codec from a RIFF `wFormatTag` and `wBitsPerSample`
    pub fn create_by_wave_format(tag: u16, bits_per_sample: u16) -> Result<Box<dyn SampleCodec>> {
        Ok(Self::create(SampleFormat::from_wave_format(tag, bits_per_sample)?))
    }

    /// Get all supported format names
    pub fn supported_formats() -> Vec<&'static str> {
        SampleFormat::ALL.iter().map(|format| format.name()).collect()
    }

    /// Check if a format name is supported
    pub fn is_supported(name: &str) -> bool {
        name.parse::<SampleFormat>().is_ok()
    }
}
