//! Pattern strategies for locating files in generated text
//!
//! Three recognizers, from the format the producer is asked for down to the
//! markdown conventions generators drift into:
//! - [`DelimitedSections`]: `=== filename ===` section markers (primary)
//! - [`HeadingFence`]: markdown heading or fence line naming a file, then a
//!   fenced code block
//! - [`BoldLabel`]: `**filename**` immediately followed by a fenced block
//!
//! Filename-looking tokens are recognized with the filename-safe character
//! class (letters, digits, `_ - . /`) and must contain a `.`.

mod bold;
mod delimited;
mod heading;

pub use bold::BoldLabel;
pub use delimited::DelimitedSections;
pub use heading::HeadingFence;
