//! External rewrite operation.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Failure of one external rewrite invocation.
///
/// Reported and recovered locally; the walk continues with the next file.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// The external command could not be started at all.
    #[error("failed to launch rewrite command for '{}': {source}", path.display())]
    Launch {
        /// File the invocation was for.
        path: PathBuf,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The external command ran but reported failure.
    #[error("rewrite command failed for '{}' (exit code: {code})", path.display())]
    Failed {
        /// File the invocation was for.
        path: PathBuf,
        /// Exit code of the command, `-1` when terminated by a signal.
        code: i32,
    },
}

/// Capability invoked once per qualifying regular file.
///
/// The driver observes only success or failure; what the action actually does
/// to the file is outside the traversal core. Injecting the action keeps the
/// driver testable with a recording fake instead of a real subprocess.
pub trait RewriteAction {
    /// Performs the external operation on `path`.
    fn rewrite(&self, path: &Path) -> Result<(), ActionError>;
}

/// Production action: spawns `zfs rewrite <options> -- <path>` and waits for
/// it to finish.
///
/// Pass-through options are forwarded verbatim, never interpreted. The mount
/// boundary flag is never forwarded: recursion limits are enforced during
/// traversal via volume-id checks, not by the external command.
#[derive(Clone, Debug)]
pub struct ZfsRewrite {
    program: OsString,
    passthrough: Vec<OsString>,
}

impl ZfsRewrite {
    /// Creates the action with the given pass-through option strings.
    #[must_use]
    pub fn new(passthrough: Vec<OsString>) -> Self {
        Self {
            program: OsString::from("zfs"),
            passthrough,
        }
    }

    /// Overrides the executable name, for alternate installations and tests.
    #[must_use]
    pub fn with_program<P: Into<OsString>>(mut self, program: P) -> Self {
        self.program = program.into();
        self
    }
}

impl RewriteAction for ZfsRewrite {
    fn rewrite(&self, path: &Path) -> Result<(), ActionError> {
        let status = Command::new(&self.program)
            .arg("rewrite")
            .args(&self.passthrough)
            .arg("--")
            .arg(path)
            .status()
            .map_err(|error| ActionError::Launch {
                path: path.to_path_buf(),
                source: error,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(ActionError::Failed {
                path: path.to_path_buf(),
                code: status.code().unwrap_or(-1),
            })
        }
    }
}
