//! Outlier filtering and latency summary statistics.
//!
//! Samples arrive in nanoseconds and are reported in microseconds.
//! Conventions (fixed, and relied on by the comparison values):
//! - standard deviation is the sample standard deviation (divide by N−1)
//! - each statistic is converted to µs and rounded first; the relative
//!   percentage is computed from the rounded integer values
//! - rounding is half-away-from-zero (`f64::round`)

#![allow(clippy::cast_precision_loss)] // Statistical functions need u64->f64
#![allow(clippy::cast_possible_truncation)] // Rounded stats fit i64

use serde::{Deserialize, Serialize};

use crate::error::{CompararError, Result};
use crate::scenario::{Scenario, Variant};

/// Upper bound for plausible samples, in nanoseconds.
///
/// Samples at or above this are discarded as corrupt before any statistic
/// is computed. The current value is far above any real measurement, so it
/// acts as a safety valve rather than an active filter.
pub const OUTLIER_THRESHOLD_NS: u64 = 30_000_000_000_000 * 1000;

/// Conversion from the native sample unit (ns) to reported µs.
pub const UNIT_DIVISOR: f64 = 1000.0;

/// Keep samples strictly below the threshold, preserving order.
///
/// Applied independently per scenario/variant. Empty input yields empty
/// output; the operation is idempotent.
#[must_use]
pub fn filter_outliers(samples: &[u64], threshold_ns: u64) -> Vec<u64> {
    samples
        .iter()
        .copied()
        .filter(|&s| s < threshold_ns)
        .collect()
}

/// Mean latency of a sample set, in the native unit.
///
/// Returns `None` for an empty set rather than NaN, so callers must
/// surface the condition instead of propagating a poisoned float.
#[must_use]
pub fn mean(samples: &[u64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let sum: f64 = samples.iter().map(|&s| s as f64).sum();
    Some(sum / samples.len() as f64)
}

/// Sample standard deviation (N−1) of a sample set, in the native unit.
///
/// A single-element set has zero spread by this convention. Returns `None`
/// for an empty set.
#[must_use]
pub fn std_dev(samples: &[u64]) -> Option<f64> {
    let m = mean(samples)?;
    if samples.len() < 2 {
        return Some(0.0);
    }
    let n = samples.len() as f64;
    let variance = samples
        .iter()
        .map(|&s| (s as f64 - m).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    Some(variance.sqrt())
}

/// Summary statistics for one filtered (scenario, variant) sample set,
/// converted to microseconds and rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySummary {
    /// Rounded mean latency in µs
    pub mean_us: i64,
    /// Rounded sample standard deviation in µs
    pub std_us: i64,
}

impl LatencySummary {
    /// Compute the summary over an already-filtered sample set.
    ///
    /// `divisor` converts the native unit to the reporting unit; the
    /// production value is [`UNIT_DIVISOR`].
    ///
    /// # Errors
    ///
    /// `EmptySampleSet` if no samples remain for the pair: a fatal
    /// configuration problem, not a skippable one.
    pub fn from_samples(
        samples: &[u64],
        divisor: f64,
        scenario: Scenario,
        variant: Variant,
    ) -> Result<Self> {
        let mean_ns = mean(samples).ok_or(CompararError::EmptySampleSet { scenario, variant })?;
        let std_ns = std_dev(samples).ok_or(CompararError::EmptySampleSet { scenario, variant })?;
        Ok(Self {
            mean_us: (mean_ns / divisor).round() as i64,
            std_us: (std_ns / divisor).round() as i64,
        })
    }
}

/// Relative performance of a tuned statistic against its control
/// counterpart: `round((tuned / control) * 100 - 100)`, in percent.
///
/// Negative means the tuned variant is faster (lower latency). The formula
/// is deliberately not a symmetric percent difference.
///
/// # Errors
///
/// `UndefinedRelativePerformance` when the control value is zero; the
/// ratio is undefined and must not be coerced to infinity or zero.
pub fn relative_perf(
    tuned: i64,
    control: i64,
    scenario: Scenario,
    metric: &'static str,
) -> Result<i64> {
    if control == 0 {
        return Err(CompararError::UndefinedRelativePerformance { scenario, metric });
    }
    Ok(((tuned as f64 / control as f64) * 100.0 - 100.0).round() as i64)
}
