//! Inference collaborator boundary
//!
//! The classification model lives outside this crate. We hand it a
//! feature vector through the InferenceModel trait and pass its
//! prediction through without interpreting it.

mod mock;

pub use mock::MockModel;

use crate::error::Result;
use crate::features::{FeatureExtractor, FeatureVector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Interface to the external inference runtime
pub trait InferenceModel: Send + Sync {
    /// Run the model on one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<Prediction>;
}

/// Opaque prediction returned by the inference runtime
///
/// The contents are forwarded to the caller as-is; this crate never
/// inspects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw output rows, one per input row
    pub scores: Vec<Vec<f32>>,

    /// Runtime-specific details, passed through untouched
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Prediction {
    pub fn new(scores: Vec<Vec<f32>>) -> Self {
        Self {
            scores,
            metadata: HashMap::new(),
        }
    }
}

/// Extraction pipeline plus an injected model handle
///
/// Replaces ambient global model state with an explicitly constructed,
/// lifetime-scoped dependency, so the pipeline stays testable without
/// a loaded model.
pub struct Classifier {
    extractor: FeatureExtractor,
    model: Box<dyn InferenceModel>,
}

impl Classifier {
    /// Create a classifier with the canonical extraction configuration
    pub fn new(model: Box<dyn InferenceModel>) -> Self {
        Self {
            extractor: FeatureExtractor::default(),
            model,
        }
    }

    /// Create a classifier with a custom extractor
    pub fn with_extractor(model: Box<dyn InferenceModel>, extractor: FeatureExtractor) -> Self {
        Self { extractor, model }
    }

    /// Classify raw waveform bytes
    ///
    /// Extracts the feature vector and forwards it to the model.
    /// The prediction is returned unchanged.
    pub fn classify(&self, bytes: &[u8]) -> Result<Prediction> {
        let features = self.extractor.extract(bytes)?;
        info!(features = features.len(), "running inference");
        self.model.predict(&features)
    }
}
