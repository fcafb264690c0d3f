//! SiteForge pipeline
//!
//! Ties the two halves together: raw response text goes through the
//! [`forge_extract`] strategy chain, the resulting mapping through the
//! [`forge_materialize`] writer, and the caller gets one [`RunReport`]
//! describing everything that happened. Whether a partially-failed run
//! counts as failure is the caller's policy, not decided here.

#![warn(unreachable_pub)]

mod pipeline;
mod report;

pub use pipeline::{inspect, run};
pub use report::RunReport;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
