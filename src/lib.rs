//! Heart-Disease Risk Screener Library
//!
//! Validates thirteen clinical measurements, encodes them into a fixed-order
//! feature vector, standardizes them with parameters fitted once from a
//! reference population, and scores them with a pre-trained ONNX classifier.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod features;
pub mod mappings;
pub mod metrics;
pub mod models;
pub mod scaler;
pub mod types;

pub use config::AppConfig;
pub use error::EvaluateError;
pub use evaluator::Evaluator;
pub use features::FeatureVectorBuilder;
pub use models::{OnnxClassifier, ProbabilityModel};
pub use scaler::StandardScaler;
pub use types::{Diagnosis, PredictionResult, RawInputRecord};
