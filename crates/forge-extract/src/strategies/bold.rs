//! Bold-label + fenced-block strategy
//!
//! Last pattern before the raw fallback: `**filename**` immediately
//! followed by a fenced code block.

use crate::extractor::ExtractionStrategy;
use crate::files::ExtractedFiles;
use once_cell::sync::Lazy;
use regex::Regex;

/// `**index.html**` then a fenced block holding the content
static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\*\*([A-Za-z0-9_./-]+\.[A-Za-z]+)\*\*\s*\n```[A-Za-z]*\n(.*?)```")
        .expect("bold-label pattern")
});

/// Bold-emphasis filename label followed by a fenced code block
#[derive(Debug, Clone, Copy, Default)]
pub struct BoldLabel;

impl BoldLabel {
    /// Create new bold-label strategy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionStrategy for BoldLabel {
    fn name(&self) -> &'static str {
        "bold-label"
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> ExtractedFiles {
        BoldLabel.extract(text)
    }

    #[test]
    fn bold_label_then_fence() {
        let text = "**main.js**\n```js\nlet x = 1;\n```\n";
        let files = extract(text);

        assert_eq!(files.get("main.js"), Some("let x = 1;"));
    }

    #[test]
    fn label_and_fence_separated_by_blank_line() {
        let text = "**style.css**  \n```css\nbody {}\n```\n";
        let files = extract(text);

        assert_eq!(files.get("style.css"), Some("body {}"));
    }

    #[test]
    fn bold_prose_is_ignored() {
        // Bold text that is not filename-shaped must not match
        let text = "**important note**\n```\ncontent\n```\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn bold_without_fence_is_ignored() {
        assert!(extract("**index.html** is the entry point\n").is_empty());
    }
}
