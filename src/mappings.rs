//! Category label tables for the categorical clinical fields.
//!
//! One immutable table per categorical field, fixed at process start. The
//! label strings are the exact strings the form presents to the user; codes
//! match the encoding the classifier was trained on.

/// Lookup table from a human-readable category label to its integer code.
pub struct CategoryMap {
    field: &'static str,
    entries: &'static [(&'static str, i64)],
}

impl CategoryMap {
    /// Resolve a label to its code. Unknown labels return `None` so the
    /// caller can report them; they must never coerce to a default code,
    /// which would mislabel the input as a specific diagnostic category.
    pub fn code(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == label)
            .map(|&(_, code)| code)
    }

    /// Field this table belongs to.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Labels in presentation order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(label, _)| label)
    }
}

pub static GENDER: CategoryMap = CategoryMap {
    field: "gender",
    entries: &[("0.Nữ", 0), ("1.Nam", 1)],
};

pub static CHEST_PAIN: CategoryMap = CategoryMap {
    field: "chest_pain",
    entries: &[
        ("0.Không đau ngực", 0),
        ("1.Đau thắt ngực ổn định", 1),
        ("2.Đau thắt ngực không ổn định", 2),
        ("3.Biến thể đau thắt ngực", 3),
        ("4.Đau thắt ngực vi mạch", 4),
    ],
};

pub static BLOOD_SUGAR: CategoryMap = CategoryMap {
    field: "blood_sugar",
    entries: &[("0.<= 120mg/dl", 0), ("1.> 120mg/dl", 1)],
};

pub static ELECTRO_RESULTS: CategoryMap = CategoryMap {
    field: "electro_results",
    entries: &[
        ("0. Bình thường", 0),
        ("1. Có sóng ST-T biến đổi không bình thường", 1),
        ("2. Có sóng ST-T bất thường", 2),
    ],
};

pub static ANGINA: CategoryMap = CategoryMap {
    field: "angina",
    entries: &[("Không", 0), ("Có", 1)],
};

pub static THAL: CategoryMap = CategoryMap {
    field: "thal",
    entries: &[
        ("0. Không bị", 0),
        ("1. Bị nhẹ", 1),
        ("2. Tổn thương khổn thể khắc phục", 2),
        ("3. Tổn thương có thể khắc phục", 3),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_resolve() {
        assert_eq!(GENDER.code("1.Nam"), Some(1));
        assert_eq!(GENDER.code("0.Nữ"), Some(0));
        assert_eq!(CHEST_PAIN.code("0.Không đau ngực"), Some(0));
        assert_eq!(CHEST_PAIN.code("4.Đau thắt ngực vi mạch"), Some(4));
        assert_eq!(ANGINA.code("Không"), Some(0));
        assert_eq!(THAL.code("1. Bị nhẹ"), Some(1));
    }

    #[test]
    fn test_unknown_label_is_not_defaulted() {
        assert_eq!(GENDER.code("male"), None);
        assert_eq!(CHEST_PAIN.code(""), None);
        assert_eq!(THAL.code("0.Không bị"), None); // missing space, not the table label
    }

    #[test]
    fn test_lookup_is_deterministic() {
        // Same label always yields the same code regardless of call order
        let first = BLOOD_SUGAR.code("1.> 120mg/dl");
        let _ = BLOOD_SUGAR.code("0.<= 120mg/dl");
        let second = BLOOD_SUGAR.code("1.> 120mg/dl");
        assert_eq!(first, second);
        assert_eq!(first, Some(1));
    }

    #[test]
    fn test_labels_enumerate_in_order() {
        let labels: Vec<_> = ELECTRO_RESULTS.labels().collect();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0], "0. Bình thường");
        assert_eq!(ELECTRO_RESULTS.field(), "electro_results");
    }
}
