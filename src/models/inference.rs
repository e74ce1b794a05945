//! Classifier adapter over the loaded ONNX session

use crate::features::FEATURE_COUNT;
use crate::models::loader::{LoadedModel, ModelLoader};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::RwLock;
use tracing::debug;

/// Seam between the evaluation core and the pre-trained classifier.
///
/// The core depends only on a deterministic scalar in [0, 1] for a
/// standardized 13-length vector; tests substitute a fake implementation.
pub trait ProbabilityModel: Send + Sync {
    /// Score a standardized feature vector; returns P(disease).
    fn score(&self, features: &[f32; FEATURE_COUNT]) -> Result<f64>;
}

/// ONNX-backed classifier. Pure pass-through to the loaded model: no
/// retraining, no updates after startup.
pub struct OnnxClassifier {
    /// Session access is serialized; run() needs a mutable session
    model: RwLock<LoadedModel>,
}

impl OnnxClassifier {
    /// Load the classifier artifact. Failure here is fatal for startup.
    pub fn load<P: AsRef<Path>>(path: P, onnx_threads: usize) -> Result<Self> {
        let loader = ModelLoader::with_threads(onnx_threads)?;
        let model = loader.load(path)?;
        Ok(Self {
            model: RwLock::new(model),
        })
    }
}

impl ProbabilityModel for OnnxClassifier {
    fn score(&self, features: &[f32; FEATURE_COUNT]) -> Result<f64> {
        use ort::value::Tensor;

        // Prepare input tensor - shape [1, num_features]
        let shape = vec![1_i64, FEATURE_COUNT as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))
            .context("Failed to create input tensor")?;

        let mut model = self
            .model
            .write()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        let output_name = model.output_name.clone();
        let input_name = model.input_name.clone();

        let outputs = model
            .session
            .run(ort::inputs![input_name => input_tensor])?;

        let probability = extract_probability(&outputs, &output_name)?;
        // The contract promises [0, 1]; clip converted-model rounding noise
        Ok(probability.clamp(0.0, 1.0))
    }
}

/// Extract the disease probability from the model output
fn extract_probability(outputs: &ort::session::SessionOutputs, output_name: &str) -> Result<f64> {
    if let Some(output) = outputs.get(output_name) {
        if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
            let dims: Vec<i64> = shape.iter().copied().collect();
            return Ok(probability_from_tensor(&dims, data));
        }
    }

    // Fallback: iterate all outputs and try extraction
    for (name, output) in outputs.iter() {
        // Skip "label" output
        if name.contains("label") {
            continue;
        }

        if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
            let dims: Vec<i64> = shape.iter().copied().collect();
            let prob = probability_from_tensor(&dims, data);
            debug!(output = %name, prob = prob, "Extracted probability from fallback output");
            return Ok(prob);
        }
    }

    anyhow::bail!("Model produced no float tensor output")
}

/// Interpret tensor data as a disease probability.
///
/// Handles both sigmoid scalars ([1, 1] or [1]) and two-class probability
/// outputs ([1, 2] or [2]), where the positive class sits at index 1.
fn probability_from_tensor(dims: &[i64], data: &[f32]) -> f64 {
    let classes = dims.last().copied().unwrap_or(0);
    if classes >= 2 && data.len() >= 2 {
        f64::from(data[1])
    } else {
        data.first().copied().map(f64::from).unwrap_or(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sigmoid_output() {
        assert_eq!(probability_from_tensor(&[1, 1], &[0.82]), 0.82_f32 as f64);
        assert_eq!(probability_from_tensor(&[1], &[0.25]), 0.25_f32 as f64);
    }

    #[test]
    fn test_two_class_output_takes_positive_class() {
        assert_eq!(
            probability_from_tensor(&[1, 2], &[0.3, 0.7]),
            0.7_f32 as f64
        );
        assert_eq!(probability_from_tensor(&[2], &[0.9, 0.1]), 0.1_f32 as f64);
    }
}
