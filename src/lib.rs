//! Wavevector - Audio Feature Extraction for Classification
//!
//! Wavevector turns raw uploaded waveform bytes into the fixed-length,
//! normalized feature vector a pretrained classifier expects.
//!
//! # Pipeline
//!
//! Extraction is a pure, deterministic transform with four stages:
//! - Decode: parse WAV container bytes into per-channel float samples
//! - Resample: convert channel 0 to the canonical 1000 Hz rate
//! - Window: truncate or zero-pad to exactly 1200 samples
//! - Normalize: min-max rescale the window into [0, 1]
//!
//! The inference runtime is an external collaborator behind the
//! [`model::InferenceModel`] trait; this crate forwards the vector and
//! passes the prediction through without interpreting it.

pub mod audio;
pub mod error;
pub mod features;
pub mod model;

// Re-export commonly used types
pub use audio::AudioBuffer;
pub use error::{FeatureError, Result};
pub use features::{FeatureExtractor, FeatureVector, FEATURE_LEN, TARGET_SAMPLE_RATE};
pub use model::{Classifier, InferenceModel, Prediction};
