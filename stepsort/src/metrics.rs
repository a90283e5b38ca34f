//! Metrics for the sorting engine, using the `metrics` crate facade.
//!
//! No recorder is installed here; embedders pick their own exporter.
//!
//! # Metrics
//!
//! ## Counters
//! - `stepsort_comparisons_total` - Charged comparison primitives
//! - `stepsort_writes_total` - Effective swap/write primitives
//! - `stepsort_runs_total` - Runs by outcome (completed, paused, failed)

use metrics::counter;

/// Metric names as constants for consistency.
pub mod names {
    /// Charged comparisons counter.
    pub const COMPARISONS_TOTAL: &str = "stepsort_comparisons_total";
    /// Effective writes counter.
    pub const WRITES_TOTAL: &str = "stepsort_writes_total";
    /// Runs counter.
    pub const RUNS_TOTAL: &str = "stepsort_runs_total";
}

/// Run outcome labels.
pub mod outcome {
    pub const COMPLETED: &str = "completed";
    pub const PAUSED: &str = "paused";
    pub const FAILED: &str = "failed";
}

/// Record one charged comparison.
pub fn record_comparison() {
    counter!(names::COMPARISONS_TOTAL).increment(1);
}

/// Record one effective write.
pub fn record_write() {
    counter!(names::WRITES_TOTAL).increment(1);
}

/// Record a finished run with its outcome label.
pub fn record_run(outcome: &str) {
    counter!(names::RUNS_TOTAL, "outcome" => outcome.to_string()).increment(1);
}
