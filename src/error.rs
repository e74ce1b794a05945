//! Per-request error taxonomy for the evaluation boundary

use thiserror::Error;

/// Errors returned to the presentation layer from `Evaluator::evaluate`.
///
/// These are tagged values, never panics: the presentation layer is solely
/// responsible for rendering them. Startup failures (missing model or
/// reference dataset) are not represented here; they abort the process
/// before any request is served.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// One or more required fields were left blank. User-recoverable; no
    /// partial prediction is attempted.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingInput(Vec<&'static str>),

    /// A numeric field could not be parsed. User-recoverable.
    #[error("field '{field}' is not a valid number: {value:?}")]
    InvalidNumericInput { field: &'static str, value: String },

    /// A categorical label has no mapping. The presentation layer only
    /// offers enumerated choices, so this indicates a contract violation
    /// rather than a user mistake.
    #[error("field '{field}' has no mapping for label {label:?}")]
    UnknownCategory { field: &'static str, label: String },

    /// The model call itself failed.
    #[error("inference failed: {0}")]
    Inference(#[from] anyhow::Error),
}

impl EvaluateError {
    /// Stable tag for the presentation boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            EvaluateError::MissingInput(_) => "missing_input",
            EvaluateError::InvalidNumericInput { .. } => "invalid_numeric_input",
            EvaluateError::UnknownCategory { .. } => "unknown_category",
            EvaluateError::Inference(_) => "inference",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_lists_fields() {
        let err = EvaluateError::MissingInput(vec!["age", "thal"]);
        assert_eq!(err.to_string(), "missing required fields: age, thal");
        assert_eq!(err.kind(), "missing_input");
    }

    #[test]
    fn test_unknown_category_message() {
        let err = EvaluateError::UnknownCategory {
            field: "gender",
            label: "unmapped".to_string(),
        };
        assert!(err.to_string().contains("gender"));
        assert!(err.to_string().contains("unmapped"));
        assert_eq!(err.kind(), "unknown_category");
    }
}
