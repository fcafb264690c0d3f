//! Extraction output types
//!
//! [`ExtractedFiles`] is the ordered name → content mapping produced by a
//! strategy; [`Extraction`] wraps it with provenance.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping from relative filename to file content
///
/// Iteration order is first-occurrence order of the names in the source
/// text. Inserting an existing name replaces its content but keeps its
/// original position, which gives duplicate sections last-write-wins
/// semantics without reordering the output.
///
/// Names are compared as exact strings: case-sensitive, no normalization.
/// They are untrusted until validated by the materialization layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFiles(IndexMap<String, String>);

impl ExtractedFiles {
    /// Create empty mapping
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Insert a file, overwriting any prior content under the same name
    #[inline]
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.0.insert(name.into(), content.into());
    }

    /// Get content by exact name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|s| s.as_str())
    }

    /// Number of files
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the mapping is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate (name, content) pairs in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate names in first-occurrence order
    #[inline]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }
}

impl FromIterator<(String, String)> for ExtractedFiles {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExtractedFiles {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of running the strategy chain over a response text
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    /// Extracted files, at least one entry
    pub files: ExtractedFiles,

    /// Name of the strategy that produced the files
    pub strategy: &'static str,

    /// True when no strategy matched and the whole response was emitted
    /// under the default document name
    pub fallback: bool,
}
