//! Crate-level error types.
//!
//! Every failure is fatal to the run: the aggregate visualization is only
//! defined over a complete scenario set, so there is no partial-result
//! degradation. Variants carry enough context to name the scenario,
//! variant, and kind that caused the abort.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scenario::{Scenario, Variant};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CompararError>;

/// Errors that abort an analysis run.
#[derive(Debug, Error)]
pub enum CompararError {
    /// The sample file for a (scenario, variant) pair is missing or unreadable
    #[error("sample source unavailable for {scenario}/{variant} at {path}: {source}")]
    SourceUnavailable {
        /// Scenario whose samples were requested
        scenario: Scenario,
        /// Variant whose samples were requested
        variant: Variant,
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A non-blank, non-integer line in a sample file
    #[error("malformed sample for {scenario}/{variant} at line {line}: {content:?}")]
    MalformedSample {
        /// Scenario being parsed
        scenario: Scenario,
        /// Variant being parsed
        variant: Variant,
        /// 1-based line number of the offending line
        line: usize,
        /// The line content that failed to parse
        content: String,
    },

    /// Statistics requested over zero samples
    #[error("no samples for {scenario}/{variant}: statistics are undefined")]
    EmptySampleSet {
        /// Scenario with the empty sample set
        scenario: Scenario,
        /// Variant with the empty sample set
        variant: Variant,
    },

    /// The control-side statistic is zero, so the percentage is undefined
    #[error("relative performance undefined for {scenario} {metric}: control value is zero")]
    UndefinedRelativePerformance {
        /// Scenario whose comparison failed
        scenario: Scenario,
        /// Which statistic ("mean" or "std") was being compared
        metric: &'static str,
    },

    /// I/O failure outside sample loading (report output, JSON export)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON report serialization failure
    #[error("JSON report error: {0}")]
    Json(#[from] serde_json::Error),
}
