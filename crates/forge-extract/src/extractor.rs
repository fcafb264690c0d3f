//! Strategy trait and the ordered extraction chain

use crate::files::{ExtractedFiles, Extraction};
use crate::strategies::{BoldLabel, DelimitedSections, HeadingFence};

/// Default document name used when no strategy recognizes anything
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Strategy name reported when the raw fallback fires
const FALLBACK: &str = "raw-fallback";

/// A pattern strategy for locating named files in generated text
///
/// Strategies are pure: same text, same result. Returning an empty mapping
/// means the strategy found nothing and the chain moves on.
pub trait ExtractionStrategy: Send + Sync {
    /// Strategy name (for provenance/logging)
    fn name(&self) -> &'static str;

    /// Extract every file this strategy can find in the text
    fn extract(&self, text: &str) -> ExtractedFiles;
}

/// Built-in strategies in chain priority order
#[inline]
#[must_use]
pub fn default_strategies() -> Vec<Box<dyn ExtractionStrategy>> {
    vec![
        Box::new(DelimitedSections::new()),
        Box::new(HeadingFence::new()),
        Box::new(BoldLabel::new()),
    ]
}

/// Ordered strategy chain with a guaranteed fallback
///
/// Strategies are tried in strict priority order; the first that yields at
/// least one file wins and later strategies are never consulted. When every
/// strategy comes back empty, the whole input is emitted untrimmed under
/// [`DEFAULT_DOCUMENT`] and a warning is logged, so extraction is total:
/// it cannot fail and cannot return zero files.
pub struct Extractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    default_document: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("default_document", &self.default_document)
            .finish()
    }
}

impl Extractor {
    /// Create extractor with the built-in strategy chain
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: default_strategies(),
            default_document: DEFAULT_DOCUMENT.to_string(),
        }
    }

    /// Create extractor with a custom strategy chain
    ///
    /// Order is priority order. An empty chain degenerates to the fallback
    /// for every input.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self {
            strategies,
            default_document: DEFAULT_DOCUMENT.to_string(),
        }
    }

    /// Override the fallback document name
    #[must_use]
    pub fn with_default_document(mut self, name: impl Into<String>) -> Self {
        self.default_document = name.into();
        self
    }

    /// Extract named files from a response text
    ///
    /// Total: always returns at least one entry. The returned
    /// [`Extraction`] records which strategy produced the files and whether
    /// the fallback fired.
    #[must_use]
    pub fn extract(&self, text: &str) -> Extraction {
        for strategy in &self.strategies {
            let files = strategy.extract(text);
            if !files.is_empty() {
                tracing::debug!(
                    "strategy '{}' extracted {} file(s)",
                    strategy.name(),
                    files.len()
                );
                return Extraction {
                    files,
                    strategy: strategy.name(),
                    fallback: false,
                };
            }
        }

        tracing::warn!(
            "could not parse named file sections, saving full response as '{}'",
            self.default_document
        );
        let mut files = ExtractedFiles::new();
        files.insert(self.default_document.clone(), text);
        Extraction {
            files,
            strategy: FALLBACK,
            fallback: true,
        }
    }
}
