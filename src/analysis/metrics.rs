//! Analysis metrics and observability.
//!
//! Counters for completed and failed analyses plus limit rejections from
//! the usage layer. Global singleton, atomics only, safe to bump from any
//! handler.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global analysis metrics singleton.
pub struct AnalysisMetrics {
    /// Analyses that produced a full result
    completed: AtomicUsize,

    /// Analyses that failed inside the engine
    failed: AtomicUsize,

    /// Requests rejected by the daily usage limit before reaching the engine
    limit_rejections: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<AnalysisMetrics> = OnceLock::new();

impl AnalysisMetrics {
    /// Get the global analysis metrics instance.
    pub fn global() -> &'static AnalysisMetrics {
        METRICS.get_or_init(|| AnalysisMetrics {
            completed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            limit_rejections: AtomicUsize::new(0),
        })
    }

    /// Record a completed analysis.
    pub fn record_completed(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an engine failure.
    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request rejected by the daily limit.
    pub fn record_limit_rejection(&self) {
        self.limit_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current completed count.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Get the current failed count.
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    /// Get the current limit rejection count.
    pub fn limit_rejections(&self) -> usize {
        self.limit_rejections.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let completed = self.completed();
        let failed = self.failed();
        let attempts = completed + failed;
        let success_rate = if attempts > 0 {
            (completed as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            completed,
            failed,
            limit_rejections: self.limit_rejections(),
            success_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.completed.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        self.limit_rejections.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current analysis statistics.
///
/// Serialized camelCase like every other frontend-facing payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    /// Analyses that produced a full result
    pub completed: usize,

    /// Analyses that failed inside the engine
    pub failed: usize,

    /// Requests rejected by the daily usage limit
    pub limit_rejections: usize,

    /// Engine success rate as a percentage (0-100)
    pub success_rate: f64,
}
