//! Workload scenario and process-variant identifiers.
//!
//! The scenario list is fixed: nine named workloads, grouped into three
//! triads by payload size. Enumeration order is significant: it drives
//! report ordering, triad separators, and plot color assignment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named benchmark workload configuration.
///
/// Declaration order is the processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Slow request pattern, no payload
    SlowNoData,
    /// Burst request pattern, no payload
    BurstNoData,
    /// Consistent request pattern, no payload
    ConsistentNoData,
    /// Slow request pattern, small payload
    SlowWithData,
    /// Burst request pattern, small payload
    BurstWithData,
    /// Consistent request pattern, small payload
    ConsistentWithData,
    /// Slow request pattern, large payload
    SlowLargeData,
    /// Burst request pattern, large payload
    BurstLargeData,
    /// Consistent request pattern, large payload
    ConsistentLargeData,
}

impl Scenario {
    /// All scenarios in processing order.
    pub const ALL: [Scenario; 9] = [
        Scenario::SlowNoData,
        Scenario::BurstNoData,
        Scenario::ConsistentNoData,
        Scenario::SlowWithData,
        Scenario::BurstWithData,
        Scenario::ConsistentWithData,
        Scenario::SlowLargeData,
        Scenario::BurstLargeData,
        Scenario::ConsistentLargeData,
    ];

    /// Stable name, matching the on-disk sample file stem.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::SlowNoData => "SlowNoData",
            Scenario::BurstNoData => "BurstNoData",
            Scenario::ConsistentNoData => "ConsistentNoData",
            Scenario::SlowWithData => "SlowWithData",
            Scenario::BurstWithData => "BurstWithData",
            Scenario::ConsistentWithData => "ConsistentWithData",
            Scenario::SlowLargeData => "SlowLargeData",
            Scenario::BurstLargeData => "BurstLargeData",
            Scenario::ConsistentLargeData => "ConsistentLargeData",
        }
    }

    /// Position in the processing order (0-based).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Payload-size triad this scenario belongs to.
    #[must_use]
    pub fn group(self) -> ScenarioGroup {
        match self {
            Scenario::SlowNoData | Scenario::BurstNoData | Scenario::ConsistentNoData => {
                ScenarioGroup::NoData
            },
            Scenario::SlowWithData | Scenario::BurstWithData | Scenario::ConsistentWithData => {
                ScenarioGroup::WithData
            },
            Scenario::SlowLargeData | Scenario::BurstLargeData | Scenario::ConsistentLargeData => {
                ScenarioGroup::LargeData
            },
        }
    }

    /// Whether this is the last scenario of its triad in processing order.
    ///
    /// Derived from group membership rather than name comparisons, so the
    /// report separator survives reordering or extension of the list.
    #[must_use]
    pub fn is_group_final(self) -> bool {
        Self::ALL
            .iter()
            .filter(|s| s.group() == self.group())
            .next_back()
            == Some(&self)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload-size triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioGroup {
    /// Requests carry no payload
    NoData,
    /// Requests carry a small payload
    WithData,
    /// Requests carry a large payload
    LargeData,
}

/// The process configuration that produced a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Optimized configuration under evaluation
    Tuned,
    /// Baseline configuration
    Control,
}

impl Variant {
    /// Both variants, in processing order (tuned before control).
    pub const ALL: [Variant; 2] = [Variant::Tuned, Variant::Control];

    /// Stable lowercase name, matching the on-disk directory name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Tuned => "tuned",
            Variant::Control => "control",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
