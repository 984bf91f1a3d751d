//! Breadth-first traversal engine.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use crate::entry::{EntryKind, classify};
use crate::error::WalkError;

/// Lazy breadth-first iterator over the regular files beneath the configured
/// roots.
///
/// Each yielded `Ok` item is the absolute path of a regular file, produced in
/// the deterministic order described in the crate docs. `Err` items report
/// per-entry failures and are advisory; iteration continues afterwards.
pub struct Walker {
    roots: VecDeque<PathBuf>,
    queue: VecDeque<QueuedDir>,
    current: Option<DirState>,
    one_file_system: bool,
}

/// Pending directory together with the volume identifier serving as its
/// mount-boundary reference.
struct QueuedDir {
    path: PathBuf,
    device: u64,
}

/// Directory currently being processed: its remaining entry names in the
/// order the operating system listed them.
struct DirState {
    dir: PathBuf,
    device: u64,
    names: std::vec::IntoIter<OsString>,
}

impl Walker {
    pub(crate) fn new(roots: Vec<PathBuf>, one_file_system: bool) -> Self {
        Self {
            roots: roots.into(),
            queue: VecDeque::new(),
            current: None,
            one_file_system,
        }
    }

    /// Starts processing `path`, capturing its listing in OS order.
    ///
    /// The listing is deliberately not sorted; see the crate-level invariants.
    /// `read_dir` never reports the `.` and `..` entries, so no explicit
    /// filtering is required.
    fn open_dir(&mut self, path: PathBuf, device: u64) -> Result<(), WalkError> {
        let read_dir = fs::read_dir(&path).map_err(|error| WalkError::list(path.clone(), error))?;
        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|error| WalkError::list(path.clone(), error))?;
            names.push(entry.file_name());
        }
        self.current = Some(DirState {
            dir: path,
            device,
            names: names.into_iter(),
        });
        Ok(())
    }
}

impl Iterator for Walker {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Finish the directory being processed before anything else.
            if let Some(state) = self.current.as_mut() {
                let Some(name) = state.names.next() else {
                    self.current = None;
                    continue;
                };
                let visit = match classify(state.dir.join(name)) {
                    Ok(visit) => visit,
                    Err(error) => return Some(Err(error)),
                };
                if self.one_file_system && visit.device() != state.device {
                    continue;
                }
                match visit.kind() {
                    EntryKind::File => return Some(Ok(visit.into_path())),
                    EntryKind::Directory => {
                        // The listing directory's volume id travels with the
                        // queued entry as its mount-boundary reference.
                        let device = state.device;
                        self.queue.push_back(QueuedDir {
                            path: visit.into_path(),
                            device,
                        });
                    }
                    EntryKind::Other => {}
                }
                continue;
            }

            // Roots, in caller order. A root directory is processed
            // immediately rather than queued, using its own volume id as the
            // boundary reference.
            if let Some(root) = self.roots.pop_front() {
                let visit = match classify(root) {
                    Ok(visit) => visit,
                    Err(error) => return Some(Err(error)),
                };
                match visit.kind() {
                    EntryKind::File => return Some(Ok(visit.into_path())),
                    EntryKind::Directory => {
                        let device = visit.device();
                        if let Err(error) = self.open_dir(visit.into_path(), device) {
                            return Some(Err(error));
                        }
                    }
                    EntryKind::Other => {}
                }
                continue;
            }

            // Drain deferred directories FIFO, yielding the breadth-first
            // order.
            let queued = self.queue.pop_front()?;
            if let Err(error) = self.open_dir(queued.path, queued.device) {
                return Some(Err(error));
            }
        }
    }
}
