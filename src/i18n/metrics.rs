//! Lookup metrics for a language context.
//!
//! Each `LanguageContext` owns its own counters so independent contexts
//! (separate test cases, separately rendered pages) never mix their numbers.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation lookups and language switches.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Number of `translate` calls
    lookups: AtomicUsize,

    /// Number of lookups that returned the raw key
    fallbacks: AtomicUsize,

    /// Number of effective language changes
    language_switches: AtomicUsize,

    /// Number of language changes refused because the code was invalid
    rejected_switches: AtomicUsize,
}

impl LookupMetrics {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup that found its key.
    pub fn record_hit(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the raw key.
    pub fn record_fallback(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an effective language change.
    pub fn record_switch(&self) {
        self.language_switches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a refused language change.
    pub fn record_rejected_switch(&self) {
        self.rejected_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn language_switches(&self) -> usize {
        self.language_switches.load(Ordering::Relaxed)
    }

    pub fn rejected_switches(&self) -> usize {
        self.rejected_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let fallbacks = self.fallbacks();
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            fallbacks,
            fallback_rate,
            language_switches: self.language_switches(),
            rejected_switches: self.rejected_switches(),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.language_switches.store(0, Ordering::Relaxed);
        self.rejected_switches.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of a context's lookup statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of lookups
    pub lookups: usize,

    /// Number of lookups answered with the raw key
    pub fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,

    /// Number of effective language changes
    pub language_switches: usize,

    /// Number of refused language changes
    pub rejected_switches: usize,
}
