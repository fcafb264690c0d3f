//! Per-file write outcomes

use crate::path::UnsafePath;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Why a file was skipped instead of written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The candidate path failed validation
    UnsafePath(UnsafePath),

    /// A filesystem operation failed; the message carries the underlying
    /// error text
    Io(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsafePath(err) => write!(f, "unsafe path: {err}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

/// Terminal outcome for one extracted file
///
/// Exactly one outcome is produced per file, in mapping order. `Display`
/// renders the report line shown to operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WriteOutcome {
    /// File persisted at the normalized path
    Written {
        /// Normalized path relative to the destination root
        path: PathBuf,
        /// Characters written
        chars: usize,
    },

    /// File skipped; nothing was written for it
    Skipped {
        /// The candidate name as it appeared in the response
        name: String,
        /// Why the file was skipped
        reason: SkipReason,
    },
}

impl WriteOutcome {
    /// The written path, if this outcome is a write
    #[inline]
    #[must_use]
    pub fn written_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Written { path, .. } => Some(path),
            Self::Skipped { .. } => None,
        }
    }

    /// Check if this outcome is an I/O failure
    #[inline]
    #[must_use]
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            Self::Skipped {
                reason: SkipReason::Io(_),
                ..
            }
        )
    }
}

impl Display for WriteOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { path, chars } => {
                write!(f, "Written: {} ({} chars)", path.display(), chars)
            }
            Self::Skipped {
                name,
                reason: SkipReason::UnsafePath(_),
            } => write!(f, "SKIP: unsafe path '{name}'"),
            Self::Skipped { name, reason } => write!(f, "SKIP: {name} ({reason})"),
        }
    }
}
