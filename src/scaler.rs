//! Feature standardization fitted from the reference dataset.
//!
//! Parameters are fitted exactly once at startup and never change for the
//! process lifetime; fitting is not part of the per-request path.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::features::FEATURE_COUNT;

/// One row of the reference dataset, in training column order. The label
/// column is read but unused for fitting.
#[derive(Debug, Deserialize)]
struct ReferenceRow {
    age: f64,
    sex: f64,
    cp: f64,
    trestbps: f64,
    chol: f64,
    fbs: f64,
    restecg: f64,
    thalach: f64,
    exang: f64,
    oldpeak: f64,
    slope: f64,
    ca: f64,
    thal: f64,
    #[serde(default)]
    #[allow(dead_code)]
    target: f64,
}

impl ReferenceRow {
    fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.sex,
            self.cp,
            self.trestbps,
            self.chol,
            self.fbs,
            self.restecg,
            self.thalach,
            self.exang,
            self.oldpeak,
            self.slope,
            self.ca,
            self.thal,
        ]
    }
}

/// Per-feature affine standardization: subtract the fitted mean, divide by
/// the fitted standard deviation.
pub struct StandardScaler {
    means: [f64; FEATURE_COUNT],
    stds: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Fit standardization parameters from the reference CSV file.
    ///
    /// A failure here is a process-start precondition violation and must be
    /// treated as fatal by the caller.
    pub fn from_reference_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open reference dataset {}", path.display()))?;

        let rows = read_rows(reader)
            .with_context(|| format!("Failed to parse reference dataset {}", path.display()))?;
        let scaler = Self::fit(&rows)?;

        info!(
            rows = rows.len(),
            path = %path.display(),
            "Standardization parameters fitted"
        );
        Ok(scaler)
    }

    /// Fit per-feature mean and population standard deviation (ddof = 0).
    pub fn fit(rows: &[[f64; FEATURE_COUNT]]) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Reference dataset contains no rows");
        }
        let n = rows.len() as f64;

        let mut means = [0.0; FEATURE_COUNT];
        for row in rows {
            for (mean, value) in means.iter_mut().zip(row.iter()) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut stds = [0.0; FEATURE_COUNT];
        for row in rows {
            for ((sum, value), mean) in stds.iter_mut().zip(row.iter()).zip(means.iter()) {
                *sum += (value - mean) * (value - mean);
            }
        }
        for std in &mut stds {
            *std = (*std / n).sqrt();
            // Constant columns standardize to zero instead of dividing by zero
            if *std == 0.0 {
                *std = 1.0;
            }
        }

        Ok(Self { means, stds })
    }

    /// Apply the fitted transform.
    pub fn transform(&self, features: &[f32; FEATURE_COUNT]) -> [f32; FEATURE_COUNT] {
        let mut out = [0.0_f32; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            out[i] = ((f64::from(features[i]) - self.means[i]) / self.stds[i]) as f32;
        }
        out
    }

    /// Fitted per-feature means.
    pub fn means(&self) -> &[f64; FEATURE_COUNT] {
        &self.means
    }

    /// Fitted per-feature standard deviations.
    pub fn stds(&self) -> &[f64; FEATURE_COUNT] {
        &self.stds
    }
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<[f64; FEATURE_COUNT]>> {
    let mut rows = Vec::new();
    for (index, row) in reader.deserialize::<ReferenceRow>().enumerate() {
        let row = row.with_context(|| format!("Malformed reference row {}", index + 1))?;
        rows.push(row.features());
    }
    Ok(rows)
}
