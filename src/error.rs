//! Error types for Wavevector
//!
//! All errors use the FeatureError type, with enough detail to
//! distinguish a bad upload from a server-side problem.

use thiserror::Error;

/// Result type alias using FeatureError
pub type Result<T> = std::result::Result<T, FeatureError>;

/// All possible errors in the extraction pipeline
#[derive(Error, Debug)]
pub enum FeatureError {
    // Decode errors
    #[error("Failed to decode waveform: {reason}")]
    Decode {
        reason: String,
        #[source]
        source: Option<hound::Error>,
    },

    // Configuration errors
    #[error("Invalid sample rate: source {source_rate} Hz, target {target_rate} Hz")]
    InvalidRate { source_rate: u32, target_rate: u32 },

    #[error("Invalid feature length: {len}")]
    InvalidLength { len: usize },

    // Internal errors
    #[error("Resampling failed: {cause}")]
    Resample { cause: String },

    // Collaborator errors
    #[error("Inference failed: {reason}")]
    Inference { reason: String },
}

impl FeatureError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "DECODE_ERROR",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::InvalidLength { .. } => "INVALID_LENGTH",
            Self::Resample { .. } => "RESAMPLE_ERROR",
            Self::Inference { .. } => "INFERENCE_ERROR",
        }
    }

    /// Whether the caller's input is at fault, as opposed to a
    /// server-side problem. The HTTP layer maps this to 4xx vs 5xx.
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
