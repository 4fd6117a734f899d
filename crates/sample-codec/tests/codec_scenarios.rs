//! End-to-end scenarios through the public API

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sample_codec::{
    CodecFactory, CodecRegistry, Direction, SampleCodec, SampleFormat, SampleRecord,
};

fn transform(direction: Direction, format: SampleFormat) -> fn(&mut SampleRecord) {
    CodecRegistry::global().transform(direction, format)
}

#[test]
fn test_linear16_boundary_scenario() {
    let encode = transform(Direction::Encode, SampleFormat::Pcm16);
    let decode = transform(Direction::Decode, SampleFormat::Pcm16);

    let mut record = SampleRecord::new(-1.0);
    encode(&mut record);
    assert_eq!(record.encoded(SampleFormat::Pcm16), &[0x00, 0x80]);
    decode(&mut record);
    assert_eq!(record.sample, -1.0);

    let mut record = SampleRecord::new(1.0 - 1e-9);
    encode(&mut record);
    assert_eq!(record.encoded(SampleFormat::Pcm16), &[0xFF, 0x7F]);

    let mut record = SampleRecord::from_bytes(&[0x00, 0x00]).unwrap();
    decode(&mut record);
    assert_eq!(record.sample, 0.0);
}

#[test]
fn test_full_scale_per_width() {
    let cases: [(SampleFormat, &[u8], &[u8]); 4] = [
        (SampleFormat::Pcm8, &[0x00], &[0xFF]),
        (SampleFormat::Pcm16, &[0x00, 0x80], &[0xFF, 0x7F]),
        (SampleFormat::Pcm24, &[0x00, 0x00, 0x80], &[0xFF, 0xFF, 0x7F]),
        (SampleFormat::Pcm32, &[0x00, 0x00, 0x00, 0x80], &[0xFF, 0xFF, 0xFF, 0x7F]),
    ];

    for (format, minimum, maximum) in cases {
        assert_eq!(sample_codec::encode_sample(format, -1.0).encoded(format), minimum);
        assert_eq!(sample_codec::encode_sample(format, 1.0).encoded(format), maximum);
        assert_eq!(sample_codec::decode_sample(format, minimum).unwrap(), -1.0);
    }
}

#[test]
fn test_random_round_trips() {
    // seeded sweep over the nominal domain, every format
    let mut rng = SmallRng::seed_from_u64(0x5EED);

    for _ in 0..2000 {
        let sample: f64 = rng.gen_range(-1.0..1.0);
        for &format in SampleFormat::ALL {
            let codec = CodecFactory::create(format);
            let mut record = SampleRecord::new(sample);
            codec.encode(&mut record);
            codec.decode(&mut record);
            let error = (record.sample - sample).abs();
            assert!(
                error <= format.quantization_step() * (1.0 + 1e-9),
                "{} sample {} error {}",
                format,
                sample,
                error
            );
        }
    }
}

#[test]
fn test_steps_shrink_with_width() {
    let mut rng = SmallRng::seed_from_u64(42);
    let linear = [
        SampleFormat::Pcm8,
        SampleFormat::Pcm16,
        SampleFormat::Pcm24,
        SampleFormat::Pcm32,
    ];

    let mut worst = [0.0f64; 4];
    for _ in 0..5000 {
        let sample: f64 = rng.gen_range(-1.0..1.0);
        for (i, &format) in linear.iter().enumerate() {
            let record = sample_codec::encode_sample(format, sample);
            let decoded = sample_codec::decode_sample(format, record.encoded(format)).unwrap();
            worst[i] = worst[i].max((decoded - sample).abs());
        }
    }

    assert!(worst.windows(2).all(|w| w[1] < w[0]), "{:?}", worst);
}

#[test]
fn test_record_is_independent_per_call() {
    // reusing a record across formats leaves foreign slots alone
    let mut record = SampleRecord::new(0.25);
    SampleFormat::Pcm32.encode(&mut record);
    assert_eq!(record.bytes, [0x00, 0x00, 0x00, 0x20]);

    SampleFormat::Pcm8.encode(&mut record);
    assert_eq!(record.bytes, [0xA0, 0x00, 0x00, 0x20]);

    SampleFormat::Pcm32.decode(&mut record);
    assert_eq!(record.sample, (0x2000_00A0 as f64) / 2_147_483_648.0);
}

#[test]
#[cfg(feature = "g711")]
fn test_g711_standard_vectors() {
    let alaw = sample_codec::encode_sample(SampleFormat::ALaw, 0.0);
    assert_eq!(alaw.bytes[0], 0xD5);
    let ulaw = sample_codec::encode_sample(SampleFormat::MuLaw, 0.0);
    assert_eq!(ulaw.bytes[0], 0xFF);

    assert_eq!(sample_codec::decode_sample(SampleFormat::MuLaw, &[0xFF]).unwrap(), 0.0);
    let alaw_zero = sample_codec::decode_sample(SampleFormat::ALaw, &[0xD5]).unwrap();
    assert!(alaw_zero.abs() <= 8.0 / 32768.0);
}

#[test]
#[cfg(feature = "g711")]
fn test_g711_selection_by_wave_format() {
    let codec = CodecFactory::create_by_wave_format(0x0007, 8).unwrap();
    assert_eq!(codec.format(), SampleFormat::MuLaw);

    let mut record = SampleRecord::new(-1.0);
    codec.encode(&mut record);
    assert_eq!(record.bytes[0], 0x00);
    codec.decode(&mut record);
    assert_eq!(record.sample, -32124.0 / 32768.0);
}
