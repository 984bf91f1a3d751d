//! Immutable per-run configuration.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Configuration for one traversal run. Read-only after construction.
#[derive(Clone, Debug)]
pub struct RunConfig {
    roots: Vec<PathBuf>,
    resume: Option<PathBuf>,
    one_file_system: bool,
    dry_run: bool,
    verbose: bool,
    passthrough: Vec<OsString>,
}

impl RunConfig {
    /// Creates a configuration for the given ordered root paths.
    ///
    /// At least one root is required for a meaningful run; the front-end
    /// rejects empty target lists before a config is ever built.
    #[must_use]
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            resume: None,
            one_file_system: false,
            dry_run: false,
            verbose: false,
            passthrough: Vec::new(),
        }
    }

    /// Sets the resume point: the exact textual path at which a prior run
    /// stopped. Files preceding it in traversal order are gated out.
    #[must_use]
    pub fn resume_from<P: Into<PathBuf>>(mut self, resume: Option<P>) -> Self {
        self.resume = resume.map(Into::into);
        self
    }

    /// Restricts traversal to each parent directory's volume.
    #[must_use]
    pub const fn one_file_system(mut self, enabled: bool) -> Self {
        self.one_file_system = enabled;
        self
    }

    /// Selects dry-run mode: no action is invoked and the walk halts once the
    /// resume point is located.
    #[must_use]
    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Selects verbose output; a verbose dry run prints each visited path.
    #[must_use]
    pub const fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Sets the option strings forwarded verbatim to the external command.
    #[must_use]
    pub fn passthrough(mut self, options: Vec<OsString>) -> Self {
        self.passthrough = options;
        self
    }

    /// Ordered root paths.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Configured resume point, if any.
    #[must_use]
    pub fn resume(&self) -> Option<&Path> {
        self.resume.as_deref()
    }

    /// Whether mount points must not be crossed.
    #[must_use]
    pub const fn is_one_file_system(&self) -> bool {
        self.one_file_system
    }

    /// Whether this is a dry run.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Whether verbose output was requested.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Option strings for the external command.
    #[must_use]
    pub fn passthrough_options(&self) -> &[OsString] {
        &self.passthrough
    }
}
