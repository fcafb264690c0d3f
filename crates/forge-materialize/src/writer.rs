//! Sequential filesystem writer

use crate::outcome::{SkipReason, WriteOutcome};
use crate::path::sanitize;
use forge_extract::ExtractedFiles;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes extracted files under a destination root
///
/// Construction does not touch the filesystem; the root is only combined
/// with paths that already passed [`sanitize`], so every write lands inside
/// it. Files are processed strictly sequentially in mapping order and each
/// one is an independent unit of work.
#[derive(Debug, Clone)]
pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    /// Create materializer rooted at the given destination directory
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Destination root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write every file in the mapping, one outcome per file
    ///
    /// Unsafe paths and I/O failures are recorded in the corresponding
    /// outcome and never abort the remaining files. Existing files are
    /// truncated and overwritten, so re-running with the same mapping is
    /// idempotent.
    pub fn materialize(&self, files: &ExtractedFiles) -> Vec<WriteOutcome> {
        files
            .iter()
            .map(|(name, content)| self.write_one(name, content))
            .collect()
    }

    fn write_one(&self, name: &str, content: &str) -> WriteOutcome {
        let relative = match sanitize(name) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("skipping unsafe path '{}': {}", name, err);
                return WriteOutcome::Skipped {
                    name: name.to_string(),
                    reason: SkipReason::UnsafePath(err),
                };
            }
        };

        let target = self.root.join(&relative);

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = fs::create_dir_all(parent) {
                    tracing::error!("failed to create '{}': {}", parent.display(), err);
                    return WriteOutcome::Skipped {
                        name: name.to_string(),
                        reason: SkipReason::Io(err.to_string()),
                    };
                }
            }
        }

        match fs::write(&target, content) {
            Ok(()) => {
                let chars = content.chars().count();
                tracing::info!("written '{}' ({} chars)", relative.display(), chars);
                WriteOutcome::Written {
                    path: relative,
                    chars,
                }
            }
            Err(err) => {
                tracing::error!("failed to write '{}': {}", target.display(), err);
                WriteOutcome::Skipped {
                    name: name.to_string(),
                    reason: SkipReason::Io(err.to_string()),
                }
            }
        }
    }
}
