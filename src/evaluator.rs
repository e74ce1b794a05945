//! Evaluation entry point: raw record in, prediction out.

use crate::config::AppConfig;
use crate::error::EvaluateError;
use crate::features::FeatureVectorBuilder;
use crate::models::{OnnxClassifier, ProbabilityModel};
use crate::scaler::StandardScaler;
use crate::types::prediction::PredictionResult;
use crate::types::record::RawInputRecord;
use anyhow::Result;
use tracing::{debug, info};

/// Owns the startup artifacts and exposes the one logical operation of the
/// core: `evaluate`.
///
/// The scaler parameters and model weights are immutable after
/// construction, so an `Evaluator` can be shared across threads freely.
pub struct Evaluator {
    builder: FeatureVectorBuilder,
    scaler: StandardScaler,
    model: Box<dyn ProbabilityModel>,
}

impl Evaluator {
    /// Fit the scaler from the reference dataset and load the classifier.
    ///
    /// Any failure here is fatal: the process must not serve requests
    /// without valid parameters and model.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let scaler = StandardScaler::from_reference_csv(&config.data.reference_path)?;
        let model = OnnxClassifier::load(&config.model.path, config.model.onnx_threads)?;

        info!(
            model = %config.model.path,
            reference = %config.data.reference_path,
            "Evaluator initialized"
        );

        Ok(Self::with_parts(scaler, Box::new(model)))
    }

    /// Assemble from already-built parts. Tests inject a fake model here.
    pub fn with_parts(scaler: StandardScaler, model: Box<dyn ProbabilityModel>) -> Self {
        Self {
            builder: FeatureVectorBuilder::new(),
            scaler,
            model,
        }
    }

    /// Validate, encode, standardize, score, and label one submission.
    ///
    /// Errors are returned as tagged values and never thrown past this
    /// boundary. When any field is missing, neither the scaler nor the
    /// model is invoked.
    pub fn evaluate(&self, record: &RawInputRecord) -> Result<PredictionResult, EvaluateError> {
        let features = self.builder.build(record)?;
        let standardized = self.scaler.transform(&features);
        let probability = self.model.score(&standardized)?;

        let result = PredictionResult::from_probability(probability);
        debug!(
            probability = result.probability,
            diagnosis = ?result.diagnosis,
            "Evaluation complete"
        );
        Ok(result)
    }
}
