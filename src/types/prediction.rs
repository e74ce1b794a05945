//! Prediction result and label interpretation

use serde::{Deserialize, Serialize};

/// Binary diagnosis label derived from the model probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diagnosis {
    Positive,
    Negative,
}

impl Diagnosis {
    /// Threshold the probability at exactly 0.5. Strict greater-than:
    /// a probability of exactly 0.5 is negative.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.5 {
            Diagnosis::Positive
        } else {
            Diagnosis::Negative
        }
    }
}

/// One prediction for one submission; created per request and discarded
/// after display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Probability of heart disease (0.0 - 1.0)
    pub probability: f64,
    /// Label from thresholding the probability at 0.5
    pub diagnosis: Diagnosis,
}

impl PredictionResult {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            probability,
            diagnosis: Diagnosis::from_probability(probability),
        }
    }
}
