//! Per-entry traversal errors.

use std::io;
use std::path::{Path, PathBuf};

/// Error raised while classifying an entry or listing a directory.
///
/// Every variant is recoverable: the walker yields the error and continues
/// with the remaining entries, so one bad path never aborts a walk.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// Metadata lookup for an entry failed; the entry is skipped.
    #[error("failed to stat '{}': {source}", path.display())]
    Stat {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// A directory could not be listed; it contributes zero entries.
    #[error("failed to read directory '{}': {source}", path.display())]
    List {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    pub(crate) fn stat(path: PathBuf, source: io::Error) -> Self {
        Self::Stat { path, source }
    }

    pub(crate) fn list(path: PathBuf, source: io::Error) -> Self {
        Self::List { path, source }
    }

    /// Returns the path the failure refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Stat { path, .. } | Self::List { path, .. } => path,
        }
    }
}
