//! Feature extraction pipeline
//!
//! Turns decoded audio into the fixed-length normalized vector the
//! classifier consumes:
//! - Resample: channel 0 converted to the canonical rate
//! - Window: truncate or zero-pad to the feature length
//! - Normalize: min-max rescale into [0, 1]

mod extract;
mod normalize;
mod resample;
mod window;

pub use extract::{FeatureExtractor, FeatureVector};
pub use normalize::normalize;
pub use resample::resample;
pub use window::window;

/// Canonical sample rate the classifier was trained at, in Hz
pub const TARGET_SAMPLE_RATE: u32 = 1000;

/// Number of elements in a feature vector
pub const FEATURE_LEN: usize = 1200;
