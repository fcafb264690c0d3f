//! SiteForge materialization layer
//!
//! Persists an extracted file mapping to a destination tree. Every
//! candidate path comes from untrusted generated text, so each one passes
//! the pure [`sanitize`] check before anything touches the filesystem: a
//! path may never resolve outside the destination root.
//!
//! Writes are strictly sequential in mapping order. Each file is an
//! independent unit of work: an unsafe path or an I/O failure is recorded
//! in that file's [`WriteOutcome`] and the run continues.

#![warn(unreachable_pub)]

mod outcome;
mod path;
mod writer;

pub use outcome::{SkipReason, WriteOutcome};
pub use path::{sanitize, UnsafePath};
pub use writer::Materializer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
