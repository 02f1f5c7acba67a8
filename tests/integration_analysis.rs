//! End-to-end analysis runs over on-disk sample trees.
//!
//! Each test builds a temporary `tuned/` + `control/` layout, runs the
//! full pipeline through `DirSource`, and checks the observable contract:
//! report content, aggregate ordering, and fail-fast behavior.

use std::fs;
use std::path::Path;

use comparar::error::CompararError;
use comparar::loader::{DirSource, SampleSource};
use comparar::plot::render_distribution;
use comparar::report::PlainReporter;
use comparar::run_analysis;
use comparar::scenario::{Scenario, Variant};
use comparar::stats::{relative_perf, LatencySummary};

/// Write one sample file for every (scenario, variant) pair.
fn write_uniform_tree(root: &Path, tuned: &[u64], control: &[u64]) {
    for variant in Variant::ALL {
        let dir = root.join(variant.as_str());
        fs::create_dir_all(&dir).unwrap();
        let samples = match variant {
            Variant::Tuned => tuned,
            Variant::Control => control,
        };
        let body: String = samples.iter().map(|s| format!("{s}\n")).collect();
        for scenario in Scenario::ALL {
            fs::write(dir.join(format!("{scenario}.txt")), &body).unwrap();
        }
    }
}

#[test]
fn full_run_over_disk_tree() {
    let dir = tempfile::tempdir().unwrap();
    write_uniform_tree(
        dir.path(),
        &[1_000_000, 2_000_000, 3_000_000],
        &[2_000_000, 4_000_000, 6_000_000],
    );

    let source = DirSource::new(dir.path());
    let mut out = Vec::new();
    let outcome = run_analysis(&source, &PlainReporter, &mut out).unwrap();

    // One report per scenario, in enumeration order.
    assert_eq!(outcome.reports.len(), 9);
    assert_eq!(outcome.reports[0].scenario, Scenario::SlowNoData);
    assert_eq!(outcome.reports[8].scenario, Scenario::ConsistentLargeData);

    // tuned: mean 2000us std 1000us; control: mean 4000us std 2000us
    for report in &outcome.reports {
        assert_eq!(report.tuned.mean_us, 2000);
        assert_eq!(report.tuned.std_us, 1000);
        assert_eq!(report.control.mean_us, 4000);
        assert_eq!(report.control.std_us, 2000);
        assert_eq!(report.mean_perf_pct, -50);
        assert_eq!(report.std_perf_pct, -50);
    }

    // 9 scenarios x (3 tuned + 3 control) samples
    assert_eq!(outcome.store.len(), 54);

    // Report text includes every scenario block and three separators.
    let text = String::from_utf8(out).unwrap();
    for scenario in Scenario::ALL {
        assert!(text.contains(&format!("=---------= {scenario} =---------=")));
    }
    assert_eq!(
        text.lines().filter(|l| l.starts_with("=-=-=-=-=")).count(),
        3
    );

    // The completed store renders a plot row for every pair.
    let plot = render_distribution(&outcome.store, 60, false);
    assert_eq!(plot.lines().count(), 2 + 18 + 1);
}

#[test]
fn mean_is_rounded_before_percentage() {
    // tuned [1000, 1000, 3000], control [2000, 2000, 2000], divisor 1:
    // tuned mean 1666.67 rounds to 1667, control mean 2000,
    // relative performance on mean = round((1667/2000)*100 - 100) = -17.
    let tuned = LatencySummary::from_samples(
        &[1000, 1000, 3000],
        1.0,
        Scenario::SlowNoData,
        Variant::Tuned,
    )
    .unwrap();
    let control = LatencySummary::from_samples(
        &[2000, 2000, 2000],
        1.0,
        Scenario::SlowNoData,
        Variant::Control,
    )
    .unwrap();

    assert_eq!(tuned.mean_us, 1667);
    assert_eq!(control.mean_us, 2000);

    let pct = relative_perf(
        tuned.mean_us,
        control.mean_us,
        Scenario::SlowNoData,
        "mean",
    )
    .unwrap();
    assert_eq!(pct, -17);
}

#[test]
fn blank_lines_are_dropped_not_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let tuned = dir.path().join("tuned");
    fs::create_dir_all(&tuned).unwrap();
    fs::write(tuned.join("SlowNoData.txt"), "100\n\n200\n").unwrap();

    let source = DirSource::new(dir.path());
    let samples = source.load(Scenario::SlowNoData, Variant::Tuned).unwrap();
    assert_eq!(samples, vec![100, 200]);
}

#[test]
fn empty_tuned_set_aborts_before_any_outcome() {
    let dir = tempfile::tempdir().unwrap();
    write_uniform_tree(
        dir.path(),
        &[1_000_000, 2_000_000],
        &[2_000_000, 3_000_000],
    );
    // Blank out one tuned file: parses to zero samples.
    fs::write(dir.path().join("tuned").join("BurstWithData.txt"), "\n\n").unwrap();

    let source = DirSource::new(dir.path());
    let mut out = Vec::new();
    let err = run_analysis(&source, &PlainReporter, &mut out).unwrap_err();

    // No outcome means the caller has no store to plot from.
    assert!(matches!(
        err,
        CompararError::EmptySampleSet {
            scenario: Scenario::BurstWithData,
            variant: Variant::Tuned,
        }
    ));
}

#[test]
fn malformed_sample_names_line_and_pair() {
    let dir = tempfile::tempdir().unwrap();
    write_uniform_tree(
        dir.path(),
        &[1_000_000, 2_000_000],
        &[2_000_000, 3_000_000],
    );
    fs::write(
        dir.path().join("control").join("SlowNoData.txt"),
        "100\n1.5e3\n",
    )
    .unwrap();

    let source = DirSource::new(dir.path());
    let mut out = Vec::new();
    let err = run_analysis(&source, &PlainReporter, &mut out).unwrap_err();

    match err {
        CompararError::MalformedSample {
            scenario,
            variant,
            line,
            content,
        } => {
            assert_eq!(scenario, Scenario::SlowNoData);
            assert_eq!(variant, Variant::Control);
            assert_eq!(line, 2);
            assert_eq!(content, "1.5e3");
        },
        other => panic!("expected MalformedSample, got {other}"),
    }
}

#[test]
fn missing_variant_directory_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    // Only tuned data present; control directory never created.
    let tuned = dir.path().join("tuned");
    fs::create_dir_all(&tuned).unwrap();
    for scenario in Scenario::ALL {
        fs::write(tuned.join(format!("{scenario}.txt")), "100\n200\n").unwrap();
    }

    let source = DirSource::new(dir.path());
    let mut out = Vec::new();
    let err = run_analysis(&source, &PlainReporter, &mut out).unwrap_err();
    assert!(matches!(
        err,
        CompararError::SourceUnavailable {
            scenario: Scenario::SlowNoData,
            variant: Variant::Control,
            ..
        }
    ));
}

#[test]
fn json_report_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    write_uniform_tree(
        dir.path(),
        &[1_000_000, 2_000_000, 3_000_000],
        &[2_000_000, 4_000_000, 6_000_000],
    );

    let source = DirSource::new(dir.path());
    let mut out = Vec::new();
    let outcome = run_analysis(&source, &PlainReporter, &mut out).unwrap();

    let json = serde_json::to_string(&outcome.reports).unwrap();
    let parsed: Vec<comparar::report::ScenarioReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, outcome.reports);
}
