//! Process-lifetime counters for the screening loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Instant;
use tracing::info;

/// Metrics collector for the evaluation loop
pub struct ScreeningMetrics {
    /// Total submissions evaluated
    pub evaluations: AtomicU64,
    /// Evaluations labeled positive
    pub positives: AtomicU64,
    /// Submissions rejected at the input boundary
    pub rejected_inputs: AtomicU64,
    /// Probability distribution buckets
    probability_buckets: RwLock<[u64; 10]>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl ScreeningMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            evaluations: AtomicU64::new(0),
            positives: AtomicU64::new(0),
            rejected_inputs: AtomicU64::new(0),
            probability_buckets: RwLock::new([0; 10]),
            start_time: Instant::now(),
        }
    }

    /// Record one completed prediction
    pub fn record_prediction(&self, probability: f64, positive: bool) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        if positive {
            self.positives.fetch_add(1, Ordering::Relaxed);
        }

        let bucket = (probability * 10.0).min(9.0) as usize;
        if let Ok(mut buckets) = self.probability_buckets.write() {
            buckets[bucket] += 1;
        }
    }

    /// Record a submission rejected before scoring
    pub fn record_rejected(&self) {
        self.rejected_inputs.fetch_add(1, Ordering::Relaxed);
    }

    /// Log a summary of the run
    pub fn print_summary(&self) {
        let evaluations = self.evaluations.load(Ordering::Relaxed);
        let positives = self.positives.load(Ordering::Relaxed);
        let rejected = self.rejected_inputs.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed();

        info!(
            evaluations = evaluations,
            positives = positives,
            rejected_inputs = rejected,
            elapsed_secs = elapsed.as_secs(),
            "Screening summary"
        );

        if let Ok(buckets) = self.probability_buckets.read() {
            for (i, count) in buckets.iter().enumerate() {
                if *count > 0 {
                    info!(
                        bucket = format!("{:.1}-{:.1}", i as f64 / 10.0, (i + 1) as f64 / 10.0),
                        count = count,
                        "Probability distribution"
                    );
                }
            }
        }
    }
}

impl Default for ScreeningMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_counters() {
        let metrics = ScreeningMetrics::new();

        metrics.record_prediction(0.82, true);
        metrics.record_prediction(0.12, false);
        metrics.record_rejected();

        assert_eq!(metrics.evaluations.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.positives.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.rejected_inputs.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_bucket_edges() {
        let metrics = ScreeningMetrics::new();

        metrics.record_prediction(0.0, false);
        metrics.record_prediction(1.0, true);

        let buckets = metrics.probability_buckets.read().unwrap();
        assert_eq!(buckets[0], 1);
        assert_eq!(buckets[9], 1);
    }
}
