//! Run report

use forge_materialize::WriteOutcome;
use serde::Serialize;
use std::path::PathBuf;

/// Terminal artifact of one pipeline run
///
/// Carries the extraction provenance and one [`WriteOutcome`] per extracted
/// file, in extraction order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Name of the strategy that produced the files
    pub strategy: &'static str,

    /// True when the extractor fell back to emitting the whole response
    pub fallback: bool,

    /// Per-file outcomes, in extraction order
    pub outcomes: Vec<WriteOutcome>,
}

impl RunReport {
    /// Paths written, in order
    #[must_use]
    pub fn written(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(WriteOutcome::written_path)
            .collect()
    }

    /// Outcomes that skipped their file
    #[must_use]
    pub fn skipped(&self) -> Vec<&WriteOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.written_path().is_none())
            .collect()
    }

    /// Check if any file failed on I/O
    #[inline]
    #[must_use]
    pub fn has_io_failures(&self) -> bool {
        self.outcomes.iter().any(WriteOutcome::is_io_failure)
    }

    /// Check if every file was written and no fallback fired
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.fallback && self.skipped().is_empty()
    }
}
