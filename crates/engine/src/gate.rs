//! Resume gating state machine.

use std::path::{Path, PathBuf};

/// Whether files are currently being forwarded to the rewrite action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateMode {
    /// Suppressing files until the resume point is observed.
    Skipping,
    /// Forwarding every file.
    Active,
}

/// Decision for a single file emitted by the traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Suppress the file; the rewrite action is not invoked.
    Skip,
    /// Forward the file to the rewrite action.
    Invoke,
    /// Stop the walk immediately: a dry run located the resume point.
    Halt,
}

/// Two-state gate consulted once per regular file, including during dry runs.
///
/// The gate transitions at most once per run, from [`GateMode::Skipping`] to
/// [`GateMode::Active`], when the resume point is observed. The resume point
/// itself is re-processed rather than skipped: an interrupted rewrite may
/// have left that file only partially done.
#[derive(Debug)]
pub struct ResumeGate {
    mode: GateMode,
    resume: Option<PathBuf>,
    dry_run: bool,
}

impl ResumeGate {
    /// Creates a gate for one run.
    ///
    /// The gate starts [`GateMode::Active`] when no resume path is configured
    /// or when dry-run is selected; otherwise it starts
    /// [`GateMode::Skipping`].
    #[must_use]
    pub fn new(resume: Option<PathBuf>, dry_run: bool) -> Self {
        let mode = if resume.is_none() || dry_run {
            GateMode::Active
        } else {
            GateMode::Skipping
        };
        Self {
            mode,
            resume,
            dry_run,
        }
    }

    /// Returns the current gate mode.
    #[must_use]
    pub const fn mode(&self) -> GateMode {
        self.mode
    }

    /// Evaluates one emitted file and returns what to do with it.
    ///
    /// The resume comparison is literal `OsStr` equality against the path
    /// exactly as the walker emits it. Callers are responsible for supplying
    /// the resume path in that textual form; no normalisation is applied.
    pub fn observe(&mut self, path: &Path) -> Verdict {
        if self.dry_run {
            // A dry run never invokes the action; its sole purpose is to
            // confirm the resume point exists at a deterministic position.
            if self.matches(path) {
                Verdict::Halt
            } else {
                Verdict::Skip
            }
        } else {
            match self.mode {
                GateMode::Active => Verdict::Invoke,
                GateMode::Skipping => {
                    if self.matches(path) {
                        self.mode = GateMode::Active;
                        Verdict::Invoke
                    } else {
                        Verdict::Skip
                    }
                }
            }
        }
    }

    /// True when a real run is still waiting for its resume point.
    #[must_use]
    pub fn resume_pending(&self) -> bool {
        self.mode == GateMode::Skipping
    }

    fn matches(&self, path: &Path) -> bool {
        self.resume
            .as_deref()
            .is_some_and(|resume| resume.as_os_str() == path.as_os_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_without_resume_is_active_immediately() {
        let mut gate = ResumeGate::new(None, false);
        assert_eq!(gate.mode(), GateMode::Active);
        assert_eq!(gate.observe(Path::new("/a/b")), Verdict::Invoke);
        assert!(!gate.resume_pending());
    }

    #[test]
    fn gate_skips_until_resume_point_then_invokes_it() {
        let mut gate = ResumeGate::new(Some(PathBuf::from("/a/two")), false);
        assert_eq!(gate.observe(Path::new("/a/one")), Verdict::Skip);
        assert!(gate.resume_pending());
        // The resume point itself is forwarded, not skipped.
        assert_eq!(gate.observe(Path::new("/a/two")), Verdict::Invoke);
        assert_eq!(gate.mode(), GateMode::Active);
        assert_eq!(gate.observe(Path::new("/a/three")), Verdict::Invoke);
    }

    #[test]
    fn gate_transitions_at_most_once() {
        let mut gate = ResumeGate::new(Some(PathBuf::from("/a/two")), false);
        assert_eq!(gate.observe(Path::new("/a/two")), Verdict::Invoke);
        // A second occurrence of the same textual path is just another file.
        assert_eq!(gate.observe(Path::new("/a/two")), Verdict::Invoke);
        assert_eq!(gate.observe(Path::new("/a/one")), Verdict::Invoke);
    }

    #[test]
    fn dry_run_halts_on_resume_point_and_never_invokes() {
        let mut gate = ResumeGate::new(Some(PathBuf::from("/a/two")), true);
        assert_eq!(gate.mode(), GateMode::Active);
        assert_eq!(gate.observe(Path::new("/a/one")), Verdict::Skip);
        assert_eq!(gate.observe(Path::new("/a/two")), Verdict::Halt);
    }

    #[test]
    fn dry_run_without_resume_only_skips() {
        let mut gate = ResumeGate::new(None, true);
        assert_eq!(gate.observe(Path::new("/a/one")), Verdict::Skip);
        assert_eq!(gate.observe(Path::new("/a/two")), Verdict::Skip);
    }

    #[test]
    fn comparison_is_literal_not_normalised() {
        let mut gate = ResumeGate::new(Some(PathBuf::from("/a//two")), false);
        // Same file, different spelling: no match.
        assert_eq!(gate.observe(Path::new("/a/two")), Verdict::Skip);
        assert!(gate.resume_pending());
    }
}
