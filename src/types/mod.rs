//! Type definitions for the screening core

pub mod prediction;
pub mod record;

pub use prediction::{Diagnosis, PredictionResult};
pub use record::RawInputRecord;
