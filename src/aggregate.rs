//! Unified sample aggregation across all scenarios and variants.
//!
//! The store is built incrementally while scenarios are processed and
//! handed to the distribution plotter once, as the authoritative combined
//! dataset. Insertion order is preserved: scenario-major, tuned before
//! control within a scenario. There is no removal operation.

use serde::{Deserialize, Serialize};

use crate::scenario::{Scenario, Variant};

/// One aggregated sample, annotated with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRecord {
    /// Scenario that produced the sample
    pub scenario: Scenario,
    /// Variant that produced the sample
    pub variant: Variant,
    /// Latency in nanoseconds, already outlier-filtered
    pub latency_ns: u64,
}

/// Ordered collection of all (scenario, variant, sample) records.
#[derive(Debug, Clone, Default)]
pub struct AggregateStore {
    records: Vec<AggregateRecord>,
}

impl AggregateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one filtered sample set, expanding it into individual
    /// records in the samples' own order.
    pub fn append(&mut self, scenario: Scenario, variant: Variant, samples: &[u64]) {
        self.records.extend(samples.iter().map(|&latency_ns| AggregateRecord {
            scenario,
            variant,
            latency_ns,
        }));
    }

    /// Read-only snapshot of all records accumulated so far, in
    /// insertion order.
    #[must_use]
    pub fn records(&self) -> &[AggregateRecord] {
        &self.records
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Samples belonging to one (scenario, variant) pair, in insertion
    /// order.
    #[must_use]
    pub fn samples_for(&self, scenario: Scenario, variant: Variant) -> Vec<u64> {
        self.records
            .iter()
            .filter(|r| r.scenario == scenario && r.variant == variant)
            .map(|r| r.latency_ns)
            .collect()
    }

    /// Minimum and maximum latency over all records, for a shared plot
    /// axis. `None` when the store is empty.
    #[must_use]
    pub fn sample_bounds(&self) -> Option<(u64, u64)> {
        let mut iter = self.records.iter().map(|r| r.latency_ns);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
        Some((min, max))
    }
}
