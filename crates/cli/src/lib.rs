#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end for the `zrewrite` binary. The
//! crate is intentionally small: it recognises the pass-through switches
//! (`-l`, `-o`, `-v`) and the wrapper switches (`-x`, `-c`, `-n`, `-h`),
//! collects the positional targets, and delegates the actual work to
//! [`engine::run`].
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so the full front-end can be exercised in-process by tests without
//! spawning a binary. Internally a [`clap`](https://docs.rs/clap/) command
//! definition performs the parse; help is rendered from a static snapshot so
//! the wording stays stable.
//!
//! # Invariants
//!
//! - `run` never panics; parse failures surface as exit code 1 with a
//!   diagnostic and the usage text on standard error.
//! - Pass-through options are forwarded to the external command verbatim and
//!   are never interpreted here.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cli::run(["zrewrite", "--help"], &mut stdout, &mut stderr);
//!
//! assert_eq!(code, 0);
//! assert!(!stdout.is_empty());
//! ```

mod frontend;

use std::ffi::OsString;
use std::io::Write;

use engine::{ExitCode, ZfsRewrite};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::frontend::ParseOutcome;

/// Parses `arguments` and executes the requested run.
///
/// Returns the numeric process exit code. Verbose dry-run output is written
/// to `stdout`; parse diagnostics go to `stderr`. Runtime diagnostics are
/// emitted through `tracing` on the process's standard error stream.
pub fn run<Args, Argv, Out, ErrOut>(arguments: Args, stdout: &mut Out, stderr: &mut ErrOut) -> i32
where
    Args: IntoIterator<Item = Argv>,
    Argv: Into<OsString> + Clone,
    Out: Write,
    ErrOut: Write,
{
    init_tracing();

    let config = match frontend::parse_args(arguments) {
        Ok(ParseOutcome::Run(config)) => config,
        Ok(ParseOutcome::Help) => {
            let _ = write!(stdout, "{}", frontend::render_help());
            return ExitCode::Ok.as_i32();
        }
        Err(message) => {
            let _ = writeln!(stderr, "{message}");
            let _ = write!(stderr, "\n{}", frontend::render_help());
            return ExitCode::Syntax.as_i32();
        }
    };

    if config.resume().is_some() && !config.is_dry_run() {
        info!("resume mode enabled: skipping files until the resume point is found");
    }
    if config.is_dry_run() {
        info!("dry run mode is active: simulating traversal");
    }

    let action = ZfsRewrite::new(config.passthrough_options().to_vec());
    engine::run(&config, &action, stdout).as_i32()
}

/// Installs the `tracing` subscriber: env-filtered, stderr, `info` default.
///
/// Repeated calls (as happens across in-process tests) keep the first
/// subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
