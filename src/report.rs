//! Per-scenario statistics report rendering.
//!
//! Rendering is split behind the [`Reporter`] trait so the core never
//! depends on a specific text-styling mechanism: `PlainReporter` emits
//! bare text, `AnsiReporter` the styled-terminal form. Both return
//! `String`s, which keeps the output testable byte-for-byte.

use std::fmt::Write as FmtWrite;

use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;
use crate::stats::LatencySummary;

/// Complete comparison result for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario these statistics describe
    pub scenario: Scenario,
    /// Tuned-variant summary (µs)
    pub tuned: LatencySummary,
    /// Control-variant summary (µs)
    pub control: LatencySummary,
    /// Relative performance on the mean, in percent
    pub mean_perf_pct: i64,
    /// Relative performance on the standard deviation, in percent
    pub std_perf_pct: i64,
}

/// Renders report sections as text.
pub trait Reporter {
    /// Banner printed once before the first scenario block.
    fn header(&self) -> String;

    /// One formatted block for a scenario's statistics.
    fn scenario_block(&self, report: &ScenarioReport) -> String;

    /// Visual break emitted after the last scenario of each triad.
    fn group_separator(&self) -> String;
}

const HEADER_TEXT: &str = "=-=-= Kernel Tuning | Latency Stats (us) =-=-=";
const SEPARATOR_TEXT: &str = "=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=";

fn block_body(report: &ScenarioReport, perf_prefix: &str, perf_suffix: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=---------= {} =---------=", report.scenario);
    let _ = writeln!(
        out,
        "Tuned       | Mean: {} | Std: {}",
        report.tuned.mean_us, report.tuned.std_us
    );
    let _ = writeln!(
        out,
        "Control     | Mean: {} | Std: {}",
        report.control.mean_us, report.control.std_us
    );
    let _ = writeln!(
        out,
        "{perf_prefix}Performance | Mean: {}% | Std: {}%{perf_suffix}",
        report.mean_perf_pct, report.std_perf_pct
    );
    out
}

/// Unstyled text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainReporter;

impl Reporter for PlainReporter {
    fn header(&self) -> String {
        format!("{HEADER_TEXT}\n")
    }

    fn scenario_block(&self, report: &ScenarioReport) -> String {
        block_body(report, "", "")
    }

    fn group_separator(&self) -> String {
        format!("{SEPARATOR_TEXT}\n")
    }
}

/// ANSI escape codes used by the styled reporter.
mod ansi {
    /// Bright magenta, for section banners
    pub const HEADER: &str = "\x1b[95m";
    /// Bright cyan, for the performance comparison line
    pub const CYAN: &str = "\x1b[96m";
    /// Reset styling
    pub const RESET: &str = "\x1b[0m";
}

/// Styled terminal output: magenta banners, cyan performance lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiReporter;

impl Reporter for AnsiReporter {
    fn header(&self) -> String {
        format!("{}{HEADER_TEXT}{}\n", ansi::HEADER, ansi::RESET)
    }

    fn scenario_block(&self, report: &ScenarioReport) -> String {
        block_body(report, ansi::CYAN, ansi::RESET)
    }

    fn group_separator(&self) -> String {
        format!("{}{SEPARATOR_TEXT}{}\n", ansi::HEADER, ansi::RESET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;

    fn sample_report() -> ScenarioReport {
        ScenarioReport {
            scenario: Scenario::SlowNoData,
            tuned: LatencySummary {
                mean_us: 1667,
                std_us: 943,
            },
            control: LatencySummary {
                mean_us: 2000,
                std_us: 1000,
            },
            mean_perf_pct: -17,
            std_perf_pct: -6,
        }
    }

    #[test]
    fn test_plain_block_contains_all_statistics() {
        let block = PlainReporter.scenario_block(&sample_report());
        assert!(block.contains("=---------= SlowNoData =---------="));
        assert!(block.contains("Tuned       | Mean: 1667 | Std: 943"));
        assert!(block.contains("Control     | Mean: 2000 | Std: 1000"));
        assert!(block.contains("Performance | Mean: -17% | Std: -6%"));
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let reporter = PlainReporter;
        let all = format!(
            "{}{}{}",
            reporter.header(),
            reporter.scenario_block(&sample_report()),
            reporter.group_separator()
        );
        assert!(!all.contains('\x1b'));
    }

    #[test]
    fn test_ansi_block_styles_performance_line() {
        let block = AnsiReporter.scenario_block(&sample_report());
        assert!(block.contains("\x1b[96mPerformance"));
        assert!(block.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_ansi_header_is_magenta() {
        let header = AnsiReporter.header();
        assert!(header.starts_with("\x1b[95m"));
        assert!(header.contains("Latency Stats"));
    }

    #[test]
    fn test_plain_and_ansi_agree_on_content() {
        // Stripping escapes from the styled form must yield the plain form.
        let plain = PlainReporter.scenario_block(&sample_report());
        let ansi = AnsiReporter
            .scenario_block(&sample_report())
            .replace(super::ansi::CYAN, "")
            .replace(super::ansi::RESET, "");
        assert_eq!(plain, ansi);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        assert!(json.contains("\"SlowNoData\""));
        assert!(json.contains("\"mean_perf_pct\":-17"));
    }
}
