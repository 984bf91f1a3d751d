//! Path classification.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WalkError;

/// Kind of filesystem entry reported by [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Anything else: symbolic links, sockets, devices, FIFOs. The walker
    /// skips these entirely.
    Other,
}

/// Classification of a single filesystem entry: its path, kind, and the
/// identifier of the volume it resides on.
#[derive(Clone, Debug)]
pub struct Visit {
    path: PathBuf,
    kind: EntryKind,
    device: u64,
}

impl Visit {
    /// Returns the inspected path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the entry kind.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns the identifier of the volume owning the entry.
    ///
    /// On non-Unix platforms every entry reports volume `0`, which disables
    /// mount-boundary pruning.
    #[must_use]
    pub const fn device(&self) -> u64 {
        self.device
    }

    /// Consumes the visit and returns the owned path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Classifies `path` without following symbolic links.
///
/// Uses `lstat` semantics via [`fs::symlink_metadata`]; a symlink therefore
/// classifies as [`EntryKind::Other`] regardless of its target. Fails with
/// [`WalkError::Stat`] when the underlying lookup fails (permission denied,
/// path vanished, I/O error); callers treat that as non-fatal.
pub fn classify<P: Into<PathBuf>>(path: P) -> Result<Visit, WalkError> {
    let path = path.into();
    let metadata =
        fs::symlink_metadata(&path).map_err(|error| WalkError::stat(path.clone(), error))?;
    let file_type = metadata.file_type();
    let kind = if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    };
    let device = device_id(&metadata);

    Ok(Visit { path, kind, device })
}

#[cfg(unix)]
fn device_id(metadata: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;

    metadata.dev()
}

#[cfg(not(unix))]
fn device_id(_metadata: &fs::Metadata) -> u64 {
    0
}
