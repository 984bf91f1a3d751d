//! Traversal session driver.

use std::io::Write;
use std::path::Path;

use tracing::{error, info, warn};
use walk::WalkBuilder;

use crate::action::RewriteAction;
use crate::config::RunConfig;
use crate::exit_code::ExitCode;
use crate::gate::{GateMode, ResumeGate, Verdict};

/// Drives one complete run: walker, resume gate, rewrite action.
///
/// Execution is strictly sequential; classification, gating, and the action
/// for one file complete before the next entry is examined, and a slow action
/// stalls the walk (no timeout is imposed here). All mutable traversal state
/// is owned by this invocation, so independent runs can share a process.
///
/// Verbose dry-run path listing goes to `stdout`; diagnostics are emitted via
/// `tracing`.
pub fn run<A, W>(config: &RunConfig, action: &A, stdout: &mut W) -> ExitCode
where
    A: RewriteAction + ?Sized,
    W: Write,
{
    let walker = WalkBuilder::new()
        .roots(config.roots().iter().cloned())
        .one_file_system(config.is_one_file_system())
        .build();
    let mut gate = ResumeGate::new(config.resume().map(Path::to_path_buf), config.is_dry_run());
    let mut located = false;

    for item in walker {
        let path = match item {
            Ok(path) => path,
            Err(walk_error) => {
                warn!("{walk_error}");
                continue;
            }
        };

        if config.is_dry_run() && config.is_verbose() {
            let _ = writeln!(stdout, "{}", path.display());
        }

        let was_skipping = gate.mode() == GateMode::Skipping;
        match gate.observe(&path) {
            Verdict::Skip => {}
            Verdict::Halt => {
                info!(
                    "dry run successful: found resume point '{}', exiting",
                    path.display()
                );
                located = true;
                break;
            }
            Verdict::Invoke => {
                if was_skipping {
                    info!("found resume point, resuming processing from '{}'", path.display());
                }
                if let Err(action_error) = action.rewrite(&path) {
                    error!("{action_error}");
                }
            }
        }
    }

    if config.is_dry_run() {
        if let Some(resume) = config.resume()
            && !located
        {
            warn!(
                "dry run finished but resume path '{}' was not found",
                resume.display()
            );
            return ExitCode::ResumeNotFound;
        }
        return ExitCode::Ok;
    }

    if gate.resume_pending()
        && let Some(resume) = config.resume()
    {
        warn!(
            "resume path '{}' was never found; no files were processed",
            resume.display()
        );
        return ExitCode::ResumeNotFound;
    }

    info!("all processing complete");
    ExitCode::Ok
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::action::ActionError;

    /// Fake action recording every invocation, optionally failing them all.
    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl Recording {
        fn failing() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail: true,
            }
        }

        fn calls(&self) -> Vec<PathBuf> {
            self.calls.borrow().clone()
        }
    }

    impl RewriteAction for Recording {
        fn rewrite(&self, path: &Path) -> Result<(), ActionError> {
            self.calls.borrow_mut().push(path.to_path_buf());
            if self.fail {
                Err(ActionError::Failed {
                    path: path.to_path_buf(),
                    code: 1,
                })
            } else {
                Ok(())
            }
        }
    }

    fn sample_tree() -> (tempfile::TempDir, Vec<PathBuf>) {
        let temp = tempfile::tempdir().expect("tempdir");
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).expect("mkdir");
        for name in ["a.txt", "b.txt", "c.txt"] {
            fs::write(temp.path().join(name), b"data").expect("write");
        }
        fs::write(sub.join("d.txt"), b"data").expect("write");

        // Capture the authoritative visitation order up front; resume indices
        // below are relative to it.
        let order: Vec<PathBuf> = WalkBuilder::new()
            .root(temp.path())
            .build()
            .collect::<Result<_, _>>()
            .expect("walk");
        assert_eq!(order.len(), 4);
        (temp, order)
    }

    fn config_for(temp: &tempfile::TempDir) -> RunConfig {
        RunConfig::new([temp.path().to_path_buf()])
    }

    #[test]
    fn run_without_resume_forwards_every_file() {
        let (temp, order) = sample_tree();
        let action = Recording::default();
        let mut stdout = Vec::new();

        let code = run(&config_for(&temp), &action, &mut stdout);
        assert_eq!(code, ExitCode::Ok);
        assert_eq!(action.calls(), order);
        assert!(stdout.is_empty());
    }

    #[test]
    fn resume_at_index_forwards_exactly_the_tail() {
        let (temp, order) = sample_tree();
        for k in [0, 2, order.len() - 1] {
            let action = Recording::default();
            let mut stdout = Vec::new();
            let config = config_for(&temp).resume_from(Some(order[k].clone()));

            let code = run(&config, &action, &mut stdout);
            assert_eq!(code, ExitCode::Ok);
            assert_eq!(action.calls(), order[k..].to_vec(), "resume index {k}");
        }
    }

    #[test]
    fn missing_resume_path_processes_nothing_and_fails() {
        let (temp, _order) = sample_tree();
        let action = Recording::default();
        let mut stdout = Vec::new();
        let config = config_for(&temp).resume_from(Some(temp.path().join("no-such-file")));

        let code = run(&config, &action, &mut stdout);
        assert_eq!(code, ExitCode::ResumeNotFound);
        assert!(action.calls().is_empty());
    }

    #[test]
    fn dry_run_halts_at_resume_point_without_invoking() {
        let (temp, order) = sample_tree();
        let action = Recording::default();
        let mut stdout = Vec::new();
        let config = config_for(&temp)
            .resume_from(Some(order[1].clone()))
            .dry_run(true)
            .verbose(true);

        let code = run(&config, &action, &mut stdout);
        assert_eq!(code, ExitCode::Ok);
        assert!(action.calls().is_empty());

        // Verbose dry-run output stops at the resume point; later entries are
        // never visited.
        let printed = String::from_utf8(stdout).expect("utf8");
        let lines: Vec<&str> = printed.lines().collect();
        let expected: Vec<String> = order[..=1]
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn dry_run_without_resume_walks_everything_silently_for_the_action() {
        let (temp, order) = sample_tree();
        let action = Recording::default();
        let mut stdout = Vec::new();
        let config = config_for(&temp).dry_run(true).verbose(true);

        let code = run(&config, &action, &mut stdout);
        assert_eq!(code, ExitCode::Ok);
        assert!(action.calls().is_empty());
        let printed = String::from_utf8(stdout).expect("utf8");
        assert_eq!(printed.lines().count(), order.len());
    }

    #[test]
    fn dry_run_with_missing_resume_fails_after_full_walk() {
        let (temp, order) = sample_tree();
        let action = Recording::default();
        let mut stdout = Vec::new();
        let config = config_for(&temp)
            .resume_from(Some(temp.path().join("no-such-file")))
            .dry_run(true)
            .verbose(true);

        let code = run(&config, &action, &mut stdout);
        assert_eq!(code, ExitCode::ResumeNotFound);
        assert!(action.calls().is_empty());
        let printed = String::from_utf8(stdout).expect("utf8");
        assert_eq!(printed.lines().count(), order.len());
    }

    #[test]
    fn action_failures_do_not_stop_the_walk() {
        let (temp, order) = sample_tree();
        let action = Recording::failing();
        let mut stdout = Vec::new();

        let code = run(&config_for(&temp), &action, &mut stdout);
        assert_eq!(code, ExitCode::Ok);
        assert_eq!(action.calls(), order);
    }

    #[test]
    fn non_dry_run_prints_nothing_even_when_verbose() {
        let (temp, _order) = sample_tree();
        let action = Recording::default();
        let mut stdout = Vec::new();
        let config = config_for(&temp).verbose(true);

        let code = run(&config, &action, &mut stdout);
        assert_eq!(code, ExitCode::Ok);
        assert!(stdout.is_empty());
    }
}
