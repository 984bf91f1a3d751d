//! Traversal configuration.

use std::path::PathBuf;

use crate::walker::Walker;

/// Configures a breadth-first traversal over one or more root paths.
#[derive(Clone, Debug, Default)]
pub struct WalkBuilder {
    roots: Vec<PathBuf>,
    one_file_system: bool,
}

impl WalkBuilder {
    /// Creates a builder with no roots and mount-point crossing allowed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single root path. Roots are processed in insertion order.
    #[must_use]
    pub fn root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Appends several root paths, preserving their order.
    #[must_use]
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    /// Restricts traversal to the volume of each parent directory.
    ///
    /// When enabled, an entry residing on a different volume than the
    /// directory being listed is skipped entirely: files are not emitted and
    /// directories are not enqueued.
    #[must_use]
    pub const fn one_file_system(mut self, enabled: bool) -> Self {
        self.one_file_system = enabled;
        self
    }

    /// Builds the [`Walker`].
    ///
    /// Construction never touches the filesystem; a missing or unreadable
    /// root surfaces as an error item during iteration.
    #[must_use]
    pub fn build(self) -> Walker {
        Walker::new(self.roots, self.one_file_system)
    }
}
