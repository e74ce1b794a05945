//! Feature vector construction for classifier inference.
//!
//! Converts a raw input record into the fixed-order numeric vector the
//! model expects. The per-field schema below is the single source of truth
//! for field names, types, and mapping tables; its order must exactly match
//! the order the standardization parameters and the classifier were fitted
//! with.

use crate::error::EvaluateError;
use crate::mappings::{self, CategoryMap};
use crate::types::record::RawInputRecord;

/// Number of features the classifier was trained on.
pub const FEATURE_COUNT: usize = 13;

/// How a raw field converts to its numeric feature.
enum FieldKind {
    /// Whole-number measurement
    Integer,
    /// Real-valued measurement
    Float,
    /// Enumerated label resolved through a category table
    Categorical(&'static CategoryMap),
}

struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
}

/// Field schema in training order. Aligned with `RawInputRecord::raw_values`.
static SCHEMA: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec { name: "age", kind: FieldKind::Integer },
    FieldSpec { name: "gender", kind: FieldKind::Categorical(&mappings::GENDER) },
    FieldSpec { name: "chest_pain", kind: FieldKind::Categorical(&mappings::CHEST_PAIN) },
    FieldSpec { name: "blood_pressure", kind: FieldKind::Integer },
    FieldSpec { name: "cholesterol", kind: FieldKind::Integer },
    FieldSpec { name: "blood_sugar", kind: FieldKind::Categorical(&mappings::BLOOD_SUGAR) },
    FieldSpec { name: "electro_results", kind: FieldKind::Categorical(&mappings::ELECTRO_RESULTS) },
    FieldSpec { name: "max_heart_rate", kind: FieldKind::Integer },
    FieldSpec { name: "angina", kind: FieldKind::Categorical(&mappings::ANGINA) },
    FieldSpec { name: "oldpeak", kind: FieldKind::Float },
    FieldSpec { name: "slope", kind: FieldKind::Integer },
    FieldSpec { name: "vessels_colored", kind: FieldKind::Integer },
    FieldSpec { name: "thal", kind: FieldKind::Categorical(&mappings::THAL) },
];

/// Builder that validates and encodes raw records into feature vectors.
///
/// Pure: no side effects, no retained state between calls.
pub struct FeatureVectorBuilder;

impl FeatureVectorBuilder {
    /// Create a new feature vector builder.
    pub fn new() -> Self {
        Self
    }

    /// Build the feature vector from a raw record.
    ///
    /// All blank fields are collected and reported together before any
    /// conversion is attempted; partial scoring is never performed.
    pub fn build(&self, record: &RawInputRecord) -> Result<[f32; FEATURE_COUNT], EvaluateError> {
        let values = record.raw_values();

        let missing: Vec<&'static str> = SCHEMA
            .iter()
            .zip(values.iter())
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(spec, _)| spec.name)
            .collect();
        if !missing.is_empty() {
            return Err(EvaluateError::MissingInput(missing));
        }

        let mut features = [0.0_f32; FEATURE_COUNT];
        for (slot, (spec, value)) in features.iter_mut().zip(SCHEMA.iter().zip(values.iter())) {
            let raw = value.trim();
            *slot = match &spec.kind {
                FieldKind::Integer => raw
                    .parse::<i64>()
                    .map_err(|_| EvaluateError::InvalidNumericInput {
                        field: spec.name,
                        value: raw.to_string(),
                    })? as f32,
                FieldKind::Float => raw
                    .parse::<f64>()
                    .map_err(|_| EvaluateError::InvalidNumericInput {
                        field: spec.name,
                        value: raw.to_string(),
                    })? as f32,
                FieldKind::Categorical(map) => {
                    map.code(raw)
                        .ok_or_else(|| EvaluateError::UnknownCategory {
                            field: spec.name,
                            label: raw.to_string(),
                        })? as f32
                }
            };
        }

        Ok(features)
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Get feature names in training order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        SCHEMA.iter().map(|spec| spec.name).collect()
    }
}

impl Default for FeatureVectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> RawInputRecord {
        RawInputRecord {
            age: "63".to_string(),
            gender: "1.Nam".to_string(),
            chest_pain: "0.Không đau ngực".to_string(),
            blood_pressure: "145".to_string(),
            cholesterol: "233".to_string(),
            blood_sugar: "1.> 120mg/dl".to_string(),
            electro_results: "0. Bình thường".to_string(),
            max_heart_rate: "150".to_string(),
            angina: "Không".to_string(),
            oldpeak: "2".to_string(),
            slope: "0".to_string(),
            vessels_colored: "0".to_string(),
            thal: "1. Bị nhẹ".to_string(),
        }
    }

    #[test]
    fn test_builds_vector_in_training_order() {
        let builder = FeatureVectorBuilder::new();
        let features = builder.build(&complete_record()).unwrap();

        let expected = [
            63.0, 1.0, 0.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.0, 0.0, 0.0, 1.0,
        ];
        assert_eq!(features, expected);
    }

    #[test]
    fn test_blank_fields_are_all_reported() {
        let builder = FeatureVectorBuilder::new();
        let mut record = complete_record();
        record.age = String::new();
        record.thal = "   ".to_string();

        match builder.build(&record) {
            Err(EvaluateError::MissingInput(fields)) => {
                assert_eq!(fields, vec!["age", "thal"]);
            }
            other => panic!("expected MissingInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_is_not_missing() {
        let builder = FeatureVectorBuilder::new();
        let mut record = complete_record();
        record.oldpeak = "0".to_string();

        let features = builder.build(&record).unwrap();
        assert_eq!(features[9], 0.0);
    }

    #[test]
    fn test_invalid_numeric_input() {
        let builder = FeatureVectorBuilder::new();
        let mut record = complete_record();
        record.blood_pressure = "abc".to_string();

        match builder.build(&record) {
            Err(EvaluateError::InvalidNumericInput { field, value }) => {
                assert_eq!(field, "blood_pressure");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidNumericInput, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_field_rejects_fraction() {
        let builder = FeatureVectorBuilder::new();
        let mut record = complete_record();
        record.age = "63.5".to_string();

        assert!(matches!(
            builder.build(&record),
            Err(EvaluateError::InvalidNumericInput { field: "age", .. })
        ));
    }

    #[test]
    fn test_oldpeak_accepts_fraction() {
        let builder = FeatureVectorBuilder::new();
        let mut record = complete_record();
        record.oldpeak = "2.3".to_string();

        let features = builder.build(&record).unwrap();
        assert!((features[9] - 2.3).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let builder = FeatureVectorBuilder::new();
        let mut record = complete_record();
        record.gender = "male".to_string();

        match builder.build(&record) {
            Err(EvaluateError::UnknownCategory { field, label }) => {
                assert_eq!(field, "gender");
                assert_eq!(label, "male");
            }
            other => panic!("expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_feature_names_match_schema() {
        let builder = FeatureVectorBuilder::new();
        let names = builder.feature_names();
        assert_eq!(names.len(), builder.feature_count());
        assert_eq!(names[0], "age");
        assert_eq!(names[12], "thal");
    }
}
