//! WAV container decoding
//!
//! Parses PCM wave bytes into an AudioBuffer using the hound crate.
//! Integer samples are converted to floats proportionally to the
//! full-scale magnitude of their bit depth.

use crate::audio::AudioBuffer;
use crate::error::{FeatureError, Result};
use hound::{SampleFormat, WavReader};
use std::io::Cursor;
use std::path::Path;

/// Decode WAV container bytes into an AudioBuffer
///
/// Pure parse: no I/O, no side effects. Fails with a decode error on
/// wrong magic bytes, a truncated header, or an unsupported encoding.
pub fn decode_wav(bytes: &[u8]) -> Result<AudioBuffer> {
    let reader = WavReader::new(Cursor::new(bytes)).map_err(|e| FeatureError::Decode {
        reason: "not a valid WAV container".to_string(),
        source: Some(e),
    })?;

    let spec = reader.spec();
    let channels = spec.channels;
    let sample_rate = spec.sample_rate;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| {
                s.map_err(|e| FeatureError::Decode {
                    reason: "truncated or corrupt float sample data".to_string(),
                    source: Some(e),
                })
            })
            .collect::<Result<Vec<f32>>>()?,
        SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            let max_val = (1u32 << (bits - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| {
                    s.map(|v| v as f32 / max_val)
                        .map_err(|e| FeatureError::Decode {
                            reason: "truncated or corrupt integer sample data".to_string(),
                            source: Some(e),
                        })
                })
                .collect::<Result<Vec<f32>>>()?
        }
    };

    tracing::debug!(
        sample_rate,
        channels,
        samples = samples.len(),
        "decoded waveform"
    );

    AudioBuffer::new(samples, channels, sample_rate)
}

/// Decode a WAV file from disk
///
/// Convenience wrapper for callers that hand over a stored upload path.
pub fn decode_wav_file<P: AsRef<Path>>(path: P) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| FeatureError::Decode {
        reason: format!("failed to read {}", path.display()),
        source: Some(hound::Error::IoError(e)),
    })?;
    decode_wav(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use tempfile::tempdir;

    fn wav_bytes_i16(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_decode_16bit_full_scale() {
        let bytes = wav_bytes_i16(&[i16::MIN, 0, i16::MAX], 8000, 1);
        let decoded = decode_wav(&bytes).unwrap();

        assert_eq!(decoded.sample_rate(), 8000);
        assert_eq!(decoded.channels(), 1);
        let samples = decoded.samples();
        assert!((samples[0] - (-1.0)).abs() < 1e-6);
        assert_eq!(samples[1], 0.0);
        // i16::MAX is one step below full scale
        assert!((samples[2] - 32767.0 / 32768.0).abs() < 1e-6);
    }

    #[test]
    fn test_decode_preserves_channel_layout() {
        let bytes = wav_bytes_i16(&[100, -100, 200, -200], 44100, 2);
        let decoded = decode_wav(&bytes).unwrap();

        assert_eq!(decoded.channels(), 2);
        assert_eq!(decoded.num_frames(), 2);
        let left = decoded.channel_samples(0);
        let right = decoded.channel_samples(1);
        assert!(left.iter().all(|&s| s > 0.0));
        assert!(right.iter().all(|&s| s < 0.0));
    }

    #[test]
    fn test_decode_malformed_bytes() {
        let result = decode_wav(b"definitely not a wave file");
        assert!(matches!(result, Err(FeatureError::Decode { .. })));
        assert!(result.unwrap_err().is_caller_fault());
    }

    #[test]
    fn test_decode_truncated_header() {
        let mut bytes = wav_bytes_i16(&[0; 100], 8000, 1);
        bytes.truncate(10);
        let result = decode_wav(&bytes);
        assert!(matches!(result, Err(FeatureError::Decode { .. })));
    }

    #[test]
    fn test_decode_wav_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");
        std::fs::write(&path, wav_bytes_i16(&[0, 1000, -1000], 8000, 1)).unwrap();

        let decoded = decode_wav_file(&path).unwrap();
        assert_eq!(decoded.num_frames(), 3);
    }

    #[test]
    fn test_decode_nonexistent_file() {
        let result = decode_wav_file("nonexistent_file.wav");
        assert!(matches!(result, Err(FeatureError::Decode { .. })));
    }
}
