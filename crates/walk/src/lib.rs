#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the breadth-first filesystem traversal used by the
//! `zrewrite` driver when enumerating the regular files that an external
//! rewrite operation should visit. The walker emits every regular file of a
//! directory before descending into any of its subdirectories, matching the
//! traversal order of the recursive ZFS tooling it wraps so that a resume
//! point recorded mid-run identifies an unambiguous position in a later run.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options: the ordered set of root
//!   paths and whether mount points may be crossed.
//! - [`Walker`] implements [`Iterator`] and lazily yields absolute regular-file
//!   paths. Subdirectories are appended to a FIFO queue which is drained only
//!   after every root path has been processed, producing the breadth-first
//!   order.
//! - [`classify`] inspects a single path without following symbolic links and
//!   reports its [`EntryKind`] together with the identifier of the volume it
//!   resides on.
//! - [`WalkError`] describes per-entry failures. Errors are advisory: the
//!   iterator keeps producing items after yielding one, so a single
//!   inaccessible entry never aborts a walk.
//!
//! # Invariants
//!
//! - A directory is enqueued at most once per walk, in the order its parent's
//!   directory listing returned it, and dequeued before any directory enqueued
//!   later.
//! - Directory entries are visited in the order the operating system lists
//!   them. The listing order is treated as authoritative and is deliberately
//!   not sorted: resume points are matched by exact textual comparison against
//!   the emitted sequence, and reordering entries would silently invalidate
//!   resume points recorded by earlier runs. On an unmodified tree two walks
//!   with identical configuration therefore produce identical sequences.
//! - Symbolic links are never followed; they classify as [`EntryKind::Other`]
//!   and are skipped.
//!
//! # Errors
//!
//! Traversal yields [`WalkError`] items when metadata cannot be queried
//! ([`WalkError::Stat`]) or a directory cannot be listed
//! ([`WalkError::List`]). An unlistable directory contributes zero entries and
//! the walk continues with its siblings and the remaining queue.
//!
//! # Examples
//!
//! Walk a temporary tree and observe that files beneath the root are emitted
//! before files in nested directories.
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let nested = temp.path().join("nested");
//! fs::create_dir(&nested)?;
//! fs::write(temp.path().join("first.txt"), b"data")?;
//! fs::write(nested.join("second.txt"), b"data")?;
//!
//! let files: Vec<_> = WalkBuilder::new()
//!     .root(temp.path())
//!     .build()
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(files[0], temp.path().join("first.txt"));
//! assert_eq!(files[1], nested.join("second.txt"));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;


pub use crate::builder::WalkBuilder;
pub use crate::entry::{EntryKind, Visit, classify};
pub use crate::error::WalkError;
pub use crate::walker::Walker;
