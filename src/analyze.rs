//! Analysis orchestration: load, filter, summarize, aggregate, report.
//!
//! Scenarios are processed strictly sequentially, once each, in
//! enumeration order. Any failure aborts the whole run: the aggregate
//! visualization is only defined over a complete scenario set, so there
//! is no partial-failure tolerance and the plot is never rendered after
//! an error.

use std::io::Write;

use crate::aggregate::AggregateStore;
use crate::error::Result;
use crate::loader::SampleSource;
use crate::report::{Reporter, ScenarioReport};
use crate::scenario::{Scenario, Variant};
use crate::stats::{
    filter_outliers, relative_perf, LatencySummary, OUTLIER_THRESHOLD_NS, UNIT_DIVISOR,
};

/// Everything a completed run produces: per-scenario comparison rows and
/// the unified sample store for plotting.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// One comparison row per scenario, in processing order
    pub reports: Vec<ScenarioReport>,
    /// All filtered samples, scenario-major, tuned before control
    pub store: AggregateStore,
}

/// Process one scenario: load both variants, filter, summarize, compare,
/// and append to the store (tuned first).
fn process_scenario(
    scenario: Scenario,
    source: &dyn SampleSource,
    store: &mut AggregateStore,
) -> Result<ScenarioReport> {
    let tuned = filter_outliers(
        &source.load(scenario, Variant::Tuned)?,
        OUTLIER_THRESHOLD_NS,
    );
    let control = filter_outliers(
        &source.load(scenario, Variant::Control)?,
        OUTLIER_THRESHOLD_NS,
    );

    let tuned_summary =
        LatencySummary::from_samples(&tuned, UNIT_DIVISOR, scenario, Variant::Tuned)?;
    let control_summary =
        LatencySummary::from_samples(&control, UNIT_DIVISOR, scenario, Variant::Control)?;

    let mean_perf_pct = relative_perf(
        tuned_summary.mean_us,
        control_summary.mean_us,
        scenario,
        "mean",
    )?;
    let std_perf_pct = relative_perf(
        tuned_summary.std_us,
        control_summary.std_us,
        scenario,
        "std",
    )?;

    store.append(scenario, Variant::Tuned, &tuned);
    store.append(scenario, Variant::Control, &control);

    Ok(ScenarioReport {
        scenario,
        tuned: tuned_summary,
        control: control_summary,
        mean_perf_pct,
        std_perf_pct,
    })
}

/// Run the full comparison over every scenario, writing one report block
/// per scenario to `out` as it completes.
///
/// # Errors
///
/// Fails fast on the first `SourceUnavailable`, `MalformedSample`,
/// `EmptySampleSet`, or `UndefinedRelativePerformance`; blocks already
/// written stay on `out`, but no outcome (and hence no plot input) is
/// produced.
pub fn run_analysis<W: Write>(
    source: &dyn SampleSource,
    reporter: &dyn Reporter,
    out: &mut W,
) -> Result<AnalysisOutcome> {
    let mut store = AggregateStore::new();
    let mut reports = Vec::with_capacity(Scenario::ALL.len());

    writeln!(out)?;
    write!(out, "{}", reporter.header())?;
    writeln!(out)?;

    for scenario in Scenario::ALL {
        let report = process_scenario(scenario, source, &mut store)?;
        write!(out, "{}", reporter.scenario_block(&report))?;
        writeln!(out)?;
        if scenario.is_group_final() {
            write!(out, "{}", reporter.group_separator())?;
            writeln!(out)?;
        }
        reports.push(report);
    }

    Ok(AnalysisOutcome { reports, store })
}
