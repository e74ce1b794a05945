//! Classifier loading and inference

pub mod inference;
pub mod loader;

pub use inference::{OnnxClassifier, ProbabilityModel};
pub use loader::ModelLoader;
