//! Untrusted-path validation
//!
//! Pure lexical normalization of candidate paths from generated text.
//! Nothing here touches the filesystem, so the check is unit-testable in
//! isolation and cannot be confused by symlinks or the current directory.

use serde::Serialize;
use std::path::PathBuf;

/// Why a candidate path was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum UnsafePath {
    /// Normalization left a leading parent-traversal segment
    #[error("path '{0}' escapes the destination root")]
    Traversal(String),

    /// Absolute or drive-prefixed path
    ///
    /// Cannot be interpreted relative to the destination root without
    /// escaping it.
    #[error("path '{0}' is absolute")]
    Absolute(String),

    /// Path normalizes to nothing
    #[error("path '{0}' has no remaining segments")]
    Empty(String),
}

/// Normalize a candidate relative path without touching the filesystem
///
/// Separators are unified (`\` → `/`), `.` segments and empty segments are
/// dropped, and `..` segments cancel the preceding one. A candidate is
/// rejected when it is absolute, when a `..` would climb above the root,
/// or when nothing remains after normalization.
///
/// # Errors
/// Returns [`UnsafePath`] describing the violation; the caller must skip
/// the file.
pub fn sanitize(candidate: &str) -> Result<PathBuf, UnsafePath> {
    let unified = candidate.replace('\\', "/");

    if unified.starts_with('/') || has_drive_prefix(&unified) {
        return Err(UnsafePath::Absolute(candidate.to_string()));
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                if segments.pop().is_none() {
                    return Err(UnsafePath::Traversal(candidate.to_string()));
                }
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return Err(UnsafePath::Empty(candidate.to_string()));
    }

    Ok(segments.iter().collect())
}

/// `C:` style prefix, with either separator after it or none
fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
