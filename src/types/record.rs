//! Raw input record collected by the presentation layer

use serde::{Deserialize, Serialize};

/// The thirteen clinical measurements as the user entered them.
///
/// Every field is kept as a raw string at this boundary: numeric fields are
/// free-form text, categorical fields are one of the enumerated labels. An
/// empty string (after trimming) means the field was left blank, which keeps
/// absence distinguishable from a legitimate `"0"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInputRecord {
    /// Age in years
    #[serde(default)]
    pub age: String,

    /// Gender label
    #[serde(default)]
    pub gender: String,

    /// Chest pain type label
    #[serde(default)]
    pub chest_pain: String,

    /// Resting blood pressure (mm Hg)
    #[serde(default)]
    pub blood_pressure: String,

    /// Serum cholesterol (mg/dl)
    #[serde(default)]
    pub cholesterol: String,

    /// Fasting blood sugar label
    #[serde(default)]
    pub blood_sugar: String,

    /// Resting electrocardiogram result label
    #[serde(default)]
    pub electro_results: String,

    /// Maximum heart rate achieved
    #[serde(default)]
    pub max_heart_rate: String,

    /// Exercise-induced angina label
    #[serde(default)]
    pub angina: String,

    /// ST depression induced by exercise relative to rest
    #[serde(default)]
    pub oldpeak: String,

    /// Slope of the peak exercise ST segment
    #[serde(default)]
    pub slope: String,

    /// Number of major vessels (0-3) colored by fluoroscopy
    #[serde(default)]
    pub vessels_colored: String,

    /// Thalassemia status label
    #[serde(default)]
    pub thal: String,
}

impl RawInputRecord {
    /// Raw values in the fixed training order. Must stay aligned with the
    /// field schema in `features`.
    pub fn raw_values(&self) -> [&str; 13] {
        [
            &self.age,
            &self.gender,
            &self.chest_pain,
            &self.blood_pressure,
            &self.cholesterol,
            &self.blood_sugar,
            &self.electro_results,
            &self.max_heart_rate,
            &self.angina,
            &self.oldpeak,
            &self.slope,
            &self.vessels_colored,
            &self.thal,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let record = RawInputRecord {
            age: "63".to_string(),
            gender: "1.Nam".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: RawInputRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record.age, deserialized.age);
        assert_eq!(record.gender, deserialized.gender);
        assert_eq!(deserialized.thal, "");
    }

    #[test]
    fn test_absent_fields_deserialize_as_blank() {
        let record: RawInputRecord = serde_json::from_str(r#"{"age":"0"}"#).unwrap();
        // A submitted zero is not the same as an absent field
        assert_eq!(record.age, "0");
        assert_eq!(record.cholesterol, "");
    }
}
