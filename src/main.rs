//! Heart-Disease Risk Screener - Main Entry Point
//!
//! Loads the startup artifacts (reference dataset, ONNX classifier), then
//! evaluates one JSON input record per stdin line, writing one JSON result
//! per line to stdout. The rendering of inputs and outputs belongs to the
//! presentation layer; this binary is the wiring around the core.

use anyhow::Result;
use heart_risk_screener::{
    config::{AppConfig, LoggingConfig},
    evaluator::Evaluator,
    metrics::ScreeningMetrics,
    types::Diagnosis,
    types::RawInputRecord,
    EvaluateError,
};
use serde_json::json;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Build the log filter from the configured level; `RUST_LOG` can still
/// override per-target directives.
fn build_env_filter(logging: &LoggingConfig) -> Result<EnvFilter> {
    let directive = format!("heart_risk_screener={}", logging.level).parse()?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Initialize logging from the configured level and format
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let fmt = tracing_subscriber::fmt().with_env_filter(build_env_filter(logging)?);
    match logging.format.as_str() {
        "json" => fmt.json().init(),
        _ => fmt.pretty().init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Configuration is loaded first so its logging section drives init
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;

    info!("Starting Heart-Disease Risk Screener");
    info!("Configuration loaded successfully");

    // Fit the scaler and load the classifier; both are startup
    // preconditions, so any failure aborts before requests are served
    let evaluator = Evaluator::new(&config)?;

    let metrics = ScreeningMetrics::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: RawInputRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Failed to deserialize input record");
                metrics.record_rejected();
                let payload = json!({
                    "error": { "kind": "malformed_record", "message": e.to_string() }
                });
                serde_json::to_writer(&mut stdout, &payload)?;
                stdout.write_all(b"\n")?;
                continue;
            }
        };

        match evaluator.evaluate(&record) {
            Ok(result) => {
                metrics.record_prediction(
                    result.probability,
                    result.diagnosis == Diagnosis::Positive,
                );
                serde_json::to_writer(&mut stdout, &result)?;
                stdout.write_all(b"\n")?;
            }
            Err(e) => {
                metrics.record_rejected();
                match &e {
                    // The form only offers enumerated labels, so an unknown
                    // category is a contract violation, not a user mistake
                    EvaluateError::UnknownCategory { .. } | EvaluateError::Inference(_) => {
                        error!(kind = e.kind(), error = %e, "Evaluation failed");
                    }
                    _ => {
                        warn!(kind = e.kind(), error = %e, "Submission rejected");
                    }
                }
                let payload = json!({
                    "error": { "kind": e.kind(), "message": e.to_string() }
                });
                serde_json::to_writer(&mut stdout, &payload)?;
                stdout.write_all(b"\n")?;
            }
        }
    }

    info!("Screener shutting down...");
    metrics.print_summary();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str, format: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: format.to_string(),
        }
    }

    #[test]
    fn test_filter_uses_configured_level() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let filter = build_env_filter(&logging(level, "pretty")).unwrap();
            assert!(filter.to_string().contains(level));
        }
    }

    #[test]
    fn test_invalid_level_is_an_error() {
        assert!(build_env_filter(&logging("loud", "pretty")).is_err());
    }
}
