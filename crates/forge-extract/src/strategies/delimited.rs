//! Delimited-section strategy
//!
//! Recognizes the `=== filename ===` section format the producer is
//! instructed to use. Splits the text on the markers; the preamble before
//! the first marker is discarded.

use crate::extractor::ExtractionStrategy;
use crate::files::ExtractedFiles;
use once_cell::sync::Lazy;
use regex::Regex;

/// Section marker: `=== name ===` where name starts with a non-whitespace,
/// non-`=` character and contains no `=` or newline
static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"===\s*([^\s=][^=\n]*?)\s*===").unwrap());

/// Fence opener line at the start of a section body, optional language tag
static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```[A-Za-z]*\n?").unwrap());

/// Fence closer line at the end of a section body
static FENCE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n?```\s*$").unwrap());

/// Primary strategy: `=== filename ===` sections
///
/// A section body spans from its marker to the next marker or end of text.
/// Bodies are trimmed and unwrapped from at most one enclosing code fence;
/// sections with an empty name or empty remaining content are dropped.
/// Duplicate names resolve last-write-wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedSections;

impl DelimitedSections {
    /// Create new delimited-section strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Strip at most one leading fence opener and one trailing fence closer
fn strip_fences(body: &str) -> &str {
    let body = match FENCE_OPEN.find(body) {
        Some(m) => &body[m.end()..],
        None => body,
    };
    let body = body.trim_end();
    match FENCE_CLOSE.find(body) {
        Some(m) => &body[..m.start()],
        None => body,
    }
}

impl ExtractionStrategy for DelimitedSections {
    fn name(&self) -> &'static str {
        "delimited-sections"
    }

    fn extract(&self, text: &str) -> ExtractedFiles {
        let mut files = ExtractedFiles::new();

        // Marker spans and captured names, in order of appearance
        let markers: Vec<(usize, usize, &str)> = MARKER
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some((whole.start(), whole.end(), name.as_str()))
            })
            .collect();

        for (i, &(_, body_start, name)) in markers.iter().enumerate() {
            // A body spans from the end of its marker to the start of the
            // next marker, or end of text for the last section
            let body_end = markers
                .get(i + 1)
                .map(|&(next_start, _, _)| next_start)
                .unwrap_or(text.len());

            let body = &text[body_start..body_end];
            let content = strip_fences(body.trim()).trim();
            let name = name.trim();

            if name.is_empty() || content.is_empty() {
                continue;
            }
            files.insert(name, content);
        }

        files
    }
}
