//! Heading + fenced-block strategy
//!
//! Catches responses that drift into markdown: a heading (or a fence line)
//! naming the file, then the content in a fenced code block.

use crate::extractor::ExtractionStrategy;
use crate::files::ExtractedFiles;
use once_cell::sync::Lazy;
use regex::Regex;

/// `### index.html` (or a fence-opener line followed by the filename), then
/// a fenced block holding the content
static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(?:#{1,4}\s*|```[a-z]*\n)([A-Za-z0-9_./-]+\.[A-Za-z]+)\n```[A-Za-z]*\n(.*?)```")
        .expect("heading pattern")
});

/// Markdown heading naming a file, followed by a fenced code block
///
/// The filename line must contain a `.` and consist of filename-safe
/// characters only. Every match in the text contributes an entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingFence;

impl HeadingFence {
    /// Create new heading-fence strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionStrategy for HeadingFence {
    fn name(&self) -> &'static str {
        "heading-fence"
    }

    fn extract(&self, text: &str) -> ExtractedFiles {
        let mut files = ExtractedFiles::new();
        for caps in PATTERN.captures_iter(text) {
            if let (Some(name), Some(body)) = (caps.get(1), caps.get(2)) {
                files.insert(name.as_str().trim(), body.as_str().trim());
            }
        }
        files
    }
}
