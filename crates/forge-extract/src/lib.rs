//! SiteForge extraction layer
//!
//! Turns one untrusted blob of generated text into an ordered mapping of
//! named files. The producer of the text is instructed to mark files with
//! `=== filename ===` sections but cannot be forced to obey a grammar, so
//! extraction runs an ordered chain of pattern strategies and falls back to
//! emitting the whole response as a single document when nothing matches.
//!
//! # Core Concepts
//!
//! - [`Extractor`]: the strategy chain; `extract` is total and always
//!   returns at least one file
//! - [`ExtractionStrategy`]: trait implemented by each pattern strategy
//! - [`ExtractedFiles`]: ordered name → content mapping
//! - [`Extraction`]: extracted files plus provenance (which strategy fired,
//!   whether the fallback was taken)
//!
//! # Example
//!
//! ```rust
//! use forge_extract::Extractor;
//!
//! let text = "=== index.html ===\n<html></html>\n=== style.css ===\nbody {}\n";
//! let extraction = Extractor::new().extract(text);
//! assert_eq!(extraction.files.get("index.html"), Some("<html></html>"));
//! assert!(!extraction.fallback);
//! ```

#![warn(unreachable_pub)]

mod extractor;
mod files;
pub mod strategies;

pub use extractor::{default_strategies, ExtractionStrategy, Extractor, DEFAULT_DOCUMENT};
pub use files::{ExtractedFiles, Extraction};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
