//! Process exit codes.
//!
//! Usage errors exit 1; a missed resume point gets a distinct code so
//! scripts can tell "bad invocation" from "resume point not found".

use std::fmt;

/// Exit codes returned by a zrewrite run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// The walk completed and the resume condition, if any, was satisfied.
    Ok = 0,

    /// Syntax or usage error.
    Syntax = 1,

    /// The configured resume path never matched a visited file.
    ///
    /// For a real run this means zero files were processed; for a dry run it
    /// means the tree was exhausted without locating the resume point.
    ResumeNotFound = 2,
}

impl ExitCode {
    /// Returns the numeric exit code.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Syntax => "syntax or usage error",
            Self::ResumeNotFound => "resume path not found",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
