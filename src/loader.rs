//! Reading raw latency samples from disk.
//!
//! Sample storage layout is one newline-delimited integer file per
//! scenario per variant: `<root>/<variant>/<Scenario>.txt`, values in
//! nanoseconds. Blank lines are dropped during parsing; any other
//! non-integer line is rejected, not silently skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CompararError, Result};
use crate::scenario::{Scenario, Variant};

/// Source of raw latency samples for one (scenario, variant) pair.
///
/// The seam exists so the analysis driver can be exercised against
/// in-memory fixtures as well as the on-disk layout.
pub trait SampleSource {
    /// Load the full raw sample sequence for one pair, in file order.
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the underlying data does not exist or cannot
    /// be read; `MalformedSample` if a non-blank line is not an integer.
    fn load(&self, scenario: Scenario, variant: Variant) -> Result<Vec<u64>>;
}

/// Production sample source backed by a directory tree.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at a directory containing `tuned/` and
    /// `control/` subdirectories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the sample file for one pair.
    #[must_use]
    pub fn sample_path(&self, scenario: Scenario, variant: Variant) -> PathBuf {
        self.root
            .join(variant.as_str())
            .join(format!("{}.txt", scenario.as_str()))
    }
}

impl SampleSource for DirSource {
    fn load(&self, scenario: Scenario, variant: Variant) -> Result<Vec<u64>> {
        let path = self.sample_path(scenario, variant);
        let text = fs::read_to_string(&path).map_err(|source| {
            CompararError::SourceUnavailable {
                scenario,
                variant,
                path,
                source,
            }
        })?;
        parse_samples(&text, scenario, variant)
    }
}

/// Parse newline-delimited integer samples.
///
/// Blank lines (including whitespace-only lines) are dropped. Line numbers
/// in errors are 1-based and count blank lines, so they match the file.
///
/// # Errors
///
/// `MalformedSample` for any non-blank line that does not parse as `u64`.
pub fn parse_samples(text: &str, scenario: Scenario, variant: Variant) -> Result<Vec<u64>> {
    let mut samples = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let value = line
            .parse::<u64>()
            .map_err(|_| CompararError::MalformedSample {
                scenario,
                variant,
                line: i + 1,
                content: raw.to_string(),
            })?;
        samples.push(value);
    }
    Ok(samples)
}

/// Check that the expected variant directories exist under a root.
///
/// Purely a nicer early failure for the CLI; `load` still reports the
/// precise missing pair if this is skipped.
#[must_use]
pub fn layout_present(root: &Path) -> bool {
    Variant::ALL
        .iter()
        .all(|v| root.join(v.as_str()).is_dir())
}
