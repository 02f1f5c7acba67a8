//! # Comparar
//!
//! Comparar (Spanish: "to compare") analyzes latency measurements from two
//! variants of a benchmarked process, "tuned" and "control", across a
//! fixed set of workload scenarios, printing per-scenario summary
//! statistics with relative-performance percentages and an overlaid
//! latency-distribution view for the terminal.
//!
//! ## Pipeline
//!
//! For each scenario, in a fixed order: load both variants' raw samples,
//! drop outliers above a fixed threshold, compute mean and standard
//! deviation (reported in µs), derive the tuned-vs-control percentages,
//! and append the filtered samples to one unified store. After the last
//! scenario the store is rendered once as the distribution plot.
//!
//! All failures are fatal: a single missing, malformed, or empty sample
//! set aborts the run before any plot is rendered.
//!
//! ## Example
//!
//! ```rust
//! use comparar::scenario::Scenario;
//! use comparar::stats::{filter_outliers, relative_perf};
//!
//! let filtered = filter_outliers(&[1000, 2000, 3000], 2500);
//! assert_eq!(filtered, vec![1000, 2000]);
//!
//! let pct = relative_perf(1667, 2000, Scenario::SlowNoData, "mean").unwrap();
//! assert_eq!(pct, -17);
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod aggregate;
/// Analysis orchestration (the per-scenario processing loop)
pub mod analyze;
pub mod error;
pub mod loader;
/// Terminal distribution plotting with deterministic scenario colors
pub mod plot;
pub mod report;
pub mod scenario;
/// Outlier filtering, summary statistics, relative performance
pub mod stats;

pub use aggregate::{AggregateRecord, AggregateStore};
pub use analyze::{run_analysis, AnalysisOutcome};
pub use error::{CompararError, Result};
pub use loader::{DirSource, SampleSource};
pub use report::{AnsiReporter, PlainReporter, Reporter, ScenarioReport};
pub use scenario::{Scenario, ScenarioGroup, Variant};
pub use stats::LatencySummary;
