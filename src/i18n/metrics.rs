//! Lookup metrics and observability.
//!
//! Counts how lookups resolved so that degraded rendering (raw keys on screen)
//! shows up in logs rather than only on the page.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by one `Localizer`.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups that ended at a leaf string
    resolved: AtomicUsize,

    /// Lookups where some segment was absent
    missing: AtomicUsize,

    /// Lookups that ended at a sub-tree
    not_leaf: AtomicUsize,

    /// Calls to `set_language`
    language_switches: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing(&self) {
        self.missing.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_leaf(&self) {
        self.not_leaf.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_switch(&self) {
        self.language_switches.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolved = self.resolved.load(Ordering::Relaxed);
        let missing = self.missing.load(Ordering::Relaxed);
        let not_leaf = self.not_leaf.load(Ordering::Relaxed);
        let total = resolved + missing + not_leaf;
        let fallback_rate = if total > 0 {
            ((missing + not_leaf) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolved,
            missing,
            not_leaf,
            fallback_rate,
            language_switches: self.language_switches.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub resolved: usize,
    pub missing: usize,
    pub not_leaf: usize,

    /// Share of lookups that fell back to the raw path, as a percentage (0-100)
    pub fallback_rate: f64,

    pub language_switches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_empty() {
        let report = LookupMetrics::new().report();

        assert_eq!(report.resolved, 0);
        assert_eq!(report.missing, 0);
        assert_eq!(report.not_leaf, 0);
        assert_eq!(report.fallback_rate, 0.0);
        assert_eq!(report.language_switches, 0);
    }

    #[test]
    fn test_report_fallback_rate() {
        let metrics = LookupMetrics::new();

        // 3 resolved, 1 fallback = 25%
        metrics.record_resolved();
        metrics.record_resolved();
        metrics.record_resolved();
        metrics.record_missing();

        let report = metrics.report();
        assert_eq!(report.resolved, 3);
        assert_eq!(report.missing, 1);
        assert_eq!(report.fallback_rate, 25.0);
    }

    #[test]
    fn test_not_leaf_counts_as_fallback() {
        let metrics = LookupMetrics::new();
        metrics.record_not_leaf();

        let report = metrics.report();
        assert_eq!(report.not_leaf, 1);
        assert_eq!(report.fallback_rate, 100.0);
    }

    #[test]
    fn test_language_switches_do_not_affect_rate() {
        let metrics = LookupMetrics::new();
        metrics.record_language_switch();
        metrics.record_language_switch();
        metrics.record_resolved();

        let report = metrics.report();
        assert_eq!(report.language_switches, 2);
        assert_eq!(report.fallback_rate, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LookupMetrics::new();
        metrics.record_resolved();

        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"resolved\":1"));
        assert!(json.contains("fallback_rate"));
    }
}
