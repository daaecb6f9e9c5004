//! Lookup metrics and observability.
//!
//! Each [`Locale`](crate::i18n::Locale) owns its counters, so separate
//! registries never share numbers.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation lookups.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups answered by the requested language
    direct_hits: AtomicUsize,

    /// Lookups answered by another language through fallback
    fallback_hits: AtomicUsize,

    /// Lookups that found the key in no searched language
    misses: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let direct = self.direct_hits();
        let fallback = self.fallback_hits();
        let misses = self.misses();
        let total = direct + fallback + misses;
        let hit_rate = if total > 0 {
            ((direct + fallback) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            direct_hits: direct,
            fallback_hits: fallback,
            misses,
            hit_rate,
        }
    }

    /// Reset all counters to zero.
    #[cfg(test)]
    pub fn reset(&self) {
        self.direct_hits.store(0, Ordering::Relaxed);
        self.fallback_hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

// Clones carry a snapshot of the counters.
impl Clone for LookupMetrics {
    fn clone(&self) -> Self {
        Self {
            direct_hits: AtomicUsize::new(self.direct_hits()),
            fallback_hits: AtomicUsize::new(self.fallback_hits()),
            misses: AtomicUsize::new(self.misses()),
        }
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of lookups answered by the requested language
    pub direct_hits: usize,

    /// Number of lookups answered through fallback
    pub fallback_hits: usize,

    /// Number of failed lookups
    pub misses: usize,

    /// Share of successful lookups as a percentage (0-100)
    pub hit_rate: f64,
}
