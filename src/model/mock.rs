//! Mock inference model for testing
//!
//! Does no real inference; lets pipeline tests run without a loaded
//! model and makes the forwarded vector observable.

use super::{InferenceModel, Prediction};
use crate::error::Result;
use crate::features::FeatureVector;

/// Deterministic stand-in for the inference runtime
pub struct MockModel {
    scores: Option<Vec<f32>>,
}

impl MockModel {
    /// A mock that returns the feature vector itself as its single
    /// score row, so tests can verify it arrived unchanged
    pub fn echo() -> Self {
        Self { scores: None }
    }

    /// A mock that always returns the given scores
    pub fn with_scores(scores: Vec<f32>) -> Self {
        Self {
            scores: Some(scores),
        }
    }
}

impl InferenceModel for MockModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let row = match &self.scores {
            Some(scores) => scores.clone(),
            None => features.as_slice().to_vec(),
        };
        Ok(Prediction::new(vec![row]))
    }
}
