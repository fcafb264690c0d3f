//! Extraction → materialization pipeline

use crate::report::RunReport;
use forge_extract::{Extraction, Extractor};
use forge_materialize::Materializer;
use std::path::Path;

/// Run the full pipeline: extract files from the response text and write
/// them under the destination root
///
/// Total per file: every extracted file shows up in the report exactly
/// once, as written or skipped. The run itself never fails.
#[must_use]
pub fn run(text: &str, root: &Path) -> RunReport {
    let extraction = Extractor::new().extract(text);
    tracing::info!(
        "extracted {} file(s) via '{}'",
        extraction.files.len(),
        extraction.strategy
    );

    let outcomes = Materializer::new(root).materialize(&extraction.files);
    let written = outcomes.iter().filter(|o| o.written_path().is_some()).count();
    tracing::info!("written {}/{} file(s)", written, outcomes.len());

    RunReport {
        strategy: extraction.strategy,
        fallback: extraction.fallback,
        outcomes,
    }
}

/// Extraction only, nothing written
///
/// Dry-run surface for inspecting what a response would produce.
#[must_use]
pub fn inspect(text: &str) -> Extraction {
    Extractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_extracts_without_a_root() {
        let extraction = inspect("=== a.txt ===\ncontent\n");
        assert_eq!(extraction.files.get("a.txt"), Some("content"));
    }
}
