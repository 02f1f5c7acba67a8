//! Overlaid latency distribution rendering for the terminal.
//!
//! Each (scenario, variant) pair gets one density row on a shared
//! latency axis: densities are computed over a fixed 1000-bin histogram,
//! downsampled to the requested width, and drawn with an intensity ramp
//! in the scenario's palette color. A marker shows the pair's mean,
//! dashed for tuned and solid for control.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::fmt::Write as FmtWrite;

use crate::aggregate::AggregateStore;
use crate::scenario::{Scenario, Variant};
use crate::stats;

/// Number of histogram bins used for density computation.
pub const HISTOGRAM_BINS: usize = 1000;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// ANSI truecolor foreground escape for this color.
    #[must_use]
    pub fn fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b }
}

/// Fixed, ordered plot palette. Longer than the scenario list, so no
/// color repeats within one run.
pub const PALETTE: &[Color] = &[
    rgb(0x21, 0xfc, 0xed),
    rgb(0x21, 0xfc, 0x80),
    rgb(0xfc, 0x21, 0x30),
    rgb(0x21, 0x9e, 0xfc),
    rgb(0xed, 0x21, 0xfc),
    rgb(0x80, 0x21, 0xfc),
    rgb(0x30, 0xfc, 0x21),
    rgb(0xfc, 0x80, 0x21),
    rgb(0xff, 0xff, 0x00),
    rgb(0xfd, 0xec, 0xa0),
    rgb(0xff, 0x00, 0xff),
    rgb(0x00, 0xff, 0xff),
    rgb(0xff, 0x00, 0x00),
    rgb(0x00, 0xff, 0x00),
    rgb(0x00, 0x00, 0xff),
    rgb(0xff, 0x80, 0x00),
];

/// Deterministic color for a scenario's position in the processing order.
///
/// Pure modular lookup into the immutable palette: the same index always
/// maps to the same color, with no consumable list state.
#[must_use]
pub fn color_for(scenario_index: usize) -> Color {
    PALETTE[scenario_index % PALETTE.len()]
}

/// Intensity ramp from empty to peak density (9 levels).
const DENSITY_RAMP: &[char] = &[' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Mean marker glyphs: dashed for tuned, solid for control.
fn marker_glyph(variant: Variant) -> char {
    match variant {
        Variant::Tuned => '┆',
        Variant::Control => '│',
    }
}

/// One density row: histogram over the shared `[min, max]` axis,
/// downsampled to `width` columns and mapped onto the intensity ramp,
/// with the mean marker overlaid.
fn density_row(samples: &[u64], min: u64, max: u64, width: usize, variant: Variant) -> Vec<char> {
    let mut cells = vec![0.0_f64; width];
    if samples.is_empty() || width == 0 {
        return cells.iter().map(|_| ' ').collect();
    }

    let range = (max.saturating_sub(min)).max(1) as f64;
    let bin_width = range / HISTOGRAM_BINS as f64;

    // Count into the fixed bins, then fold bins into columns keeping the
    // per-column peak so narrow spikes survive the downsampling.
    let mut counts = vec![0_usize; HISTOGRAM_BINS];
    for &s in samples {
        let bin = ((s.saturating_sub(min) as f64 / bin_width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }
    let n = samples.len() as f64;
    for (bin, &count) in counts.iter().enumerate() {
        let density = count as f64 / (n * bin_width);
        let col = bin * width / HISTOGRAM_BINS;
        if density > cells[col] {
            cells[col] = density;
        }
    }

    let peak = cells.iter().copied().fold(0.0_f64, f64::max);
    let mut row: Vec<char> = cells
        .iter()
        .map(|&d| {
            if peak <= 0.0 {
                ' '
            } else {
                let level = (d / peak * (DENSITY_RAMP.len() - 1) as f64).round() as usize;
                DENSITY_RAMP[level.min(DENSITY_RAMP.len() - 1)]
            }
        })
        .collect();

    // Mean marker overwrites the density cell at its position.
    if let Some(mean_ns) = stats::mean(samples) {
        let pos = ((mean_ns - min as f64) / range * (width - 1) as f64).round();
        let col = (pos.max(0.0) as usize).min(width - 1);
        row[col] = marker_glyph(variant);
    }

    row
}

/// Render the full overlaid distribution view for a completed store.
///
/// Returns an empty string when the store holds no records. `use_color`
/// switches the ANSI truecolor escapes off for plain output.
#[must_use]
pub fn render_distribution(store: &AggregateStore, width: usize, use_color: bool) -> String {
    let Some((min, max)) = store.sample_bounds() else {
        return String::new();
    };
    let width = width.max(10);

    let mut out = String::new();
    let _ = writeln!(out, "=-=-= Kernel Tuning | Latency Distribution =-=-=");
    let _ = writeln!(out, "axis: {} .. {} us", min / 1000, max / 1000);

    for scenario in Scenario::ALL {
        let color = color_for(scenario.index());
        for variant in Variant::ALL {
            let samples = store.samples_for(scenario, variant);
            if samples.is_empty() {
                continue;
            }
            let row: String = density_row(&samples, min, max, width, variant)
                .into_iter()
                .collect();
            let label = format!("{:>19} {:>7}", scenario.as_str(), variant.as_str());
            if use_color {
                let _ = writeln!(out, "{label} |{}{row}\x1b[0m|", color.fg());
            } else {
                let _ = writeln!(out, "{label} |{row}|");
            }
        }
    }

    let _ = writeln!(out, "mean markers: {} tuned, {} control",
        marker_glyph(Variant::Tuned),
        marker_glyph(Variant::Control));
    out
}
