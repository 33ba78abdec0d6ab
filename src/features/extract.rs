//! Extraction orchestrator
//!
//! Composes decode, resample, window, and normalize into one pure
//! transform from waveform bytes to a feature vector.

use crate::audio::decode_wav;
use crate::error::{FeatureError, Result};
use crate::features::{normalize, resample, window, FEATURE_LEN, TARGET_SAMPLE_RATE};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed-length normalized feature vector
///
/// Every element is finite and in [0, 1]. This is the single-row
/// tensor the inference collaborator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    /// Wrap an already-extracted vector
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Get the elements as a slice
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Consume the vector, returning its elements
    pub fn into_vec(self) -> Vec<f32> {
        self.0
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Stateless feature extraction pipeline
///
/// A pure function of the input bytes: no shared state, safe to call
/// concurrently from independent requests. When the input has more
/// than one channel only channel 0 is used; this mirrors the trained
/// model's input and is a documented simplification, not a mixdown.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    target_rate: u32,
    feature_len: usize,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self {
            target_rate: TARGET_SAMPLE_RATE,
            feature_len: FEATURE_LEN,
        }
    }
}

impl FeatureExtractor {
    /// Create an extractor with a custom rate and length
    ///
    /// The canonical configuration is [`FeatureExtractor::default`];
    /// both parameters are validated here so a misconfigured extractor
    /// cannot be constructed.
    pub fn new(target_rate: u32, feature_len: usize) -> Result<Self> {
        if target_rate == 0 {
            return Err(FeatureError::InvalidRate {
                source_rate: 0,
                target_rate,
            });
        }
        if feature_len == 0 {
            return Err(FeatureError::InvalidLength { len: feature_len });
        }
        Ok(Self {
            target_rate,
            feature_len,
        })
    }

    /// Target sample rate in Hz
    pub fn target_rate(&self) -> u32 {
        self.target_rate
    }

    /// Output vector length
    pub fn feature_len(&self) -> usize {
        self.feature_len
    }

    /// Extract a feature vector from raw waveform bytes
    ///
    /// Fails fast with the first stage's error: decode errors are
    /// caller fault, rate and resampling errors are server fault.
    pub fn extract(&self, bytes: &[u8]) -> Result<FeatureVector> {
        let decoded = decode_wav(bytes)?;

        let mono = decoded.channel_samples(0);
        let resampled = resample(&mono, decoded.sample_rate(), self.target_rate)?;
        debug!(
            source_rate = decoded.sample_rate(),
            target_rate = self.target_rate,
            input_len = mono.len(),
            resampled_len = resampled.len(),
            "resampled channel 0"
        );

        let windowed = window(&resampled, self.feature_len);
        let normalized = normalize(&windowed);

        Ok(FeatureVector(normalized))
    }
}
