#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` drives one restartable rewrite run: it walks the configured roots
//! with [`walk`], passes every discovered regular file through the
//! [`ResumeGate`], and forwards qualifying files to an injected
//! [`RewriteAction`]. The production action shells out to `zfs rewrite`; tests
//! substitute a recording fake.
//!
//! # Design
//!
//! - [`RunConfig`] captures the immutable per-run configuration: ordered root
//!   paths, the optional resume point, the mount-boundary restriction, the
//!   dry-run and verbose flags, and the option strings forwarded verbatim to
//!   the external command.
//! - [`ResumeGate`] is the two-state machine deciding, per file, whether to
//!   suppress it, invoke the action, or halt the walk (dry-run success).
//! - [`run`] owns the whole traversal session. All mutable state (the
//!   walker's queue and the gate mode) lives inside the session, so multiple
//!   independent runs can coexist in one process.
//! - [`ExitCode`] maps run outcomes to the process exit status.
//!
//! # Errors
//!
//! Per-entry walk failures and [`ActionError`]s are reported through
//! `tracing` and never abort the run. The only failing outcome is
//! [`ExitCode::ResumeNotFound`]: the configured resume point did not match
//! any visited file over a complete walk.

mod action;
mod config;
mod exit_code;
mod gate;
mod run;

pub use crate::action::{ActionError, RewriteAction, ZfsRewrite};
pub use crate::config::RunConfig;
pub use crate::exit_code::ExitCode;
pub use crate::gate::{GateMode, ResumeGate, Verdict};
pub use crate::run::run;
