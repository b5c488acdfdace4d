//! Tree purger: deletes everything below a root directory, keeping the root.
//!
//! Two passes over a single walk of the tree. Every file is attempted first,
//! then every directory, deepest first, so a directory is only removed after
//! all of its descendants were tried. Failures never abort the run; they are
//! counted in [`PurgeResult::errors`].

use std::io;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::attributes;

/// Aggregate counters for one purge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PurgeResult {
    pub files_deleted: u64,
    pub dirs_deleted: u64,
    /// Pre-deletion lengths of the files counted in `files_deleted`.
    pub bytes_removed: u64,
    /// Files or directories that could not be removed, plus walk failures.
    pub errors: u64,
}

impl AddAssign for PurgeResult {
    fn add_assign(&mut self, other: Self) {
        self.files_deleted += other.files_deleted;
        self.dirs_deleted += other.dirs_deleted;
        self.bytes_removed += other.bytes_removed;
        self.errors += other.errors;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Dir,
}

/// One processed item, handed to the observer passed to [`purge_with`].
#[derive(Debug)]
pub enum PurgeEvent<'a> {
    Deleted {
        kind: ItemKind,
        path: &'a Path,
        bytes: u64,
    },
    Skipped {
        kind: ItemKind,
        path: &'a Path,
        error: &'a io::Error,
    },
    WalkFailed {
        path: Option<&'a Path>,
        error: &'a walkdir::Error,
    },
}

/// File-system primitives used by the purger.
pub trait FileOps {
    fn remove_file(&self, path: &Path) -> io::Result<()>;
    fn remove_dir(&self, path: &Path) -> io::Result<()>;
    fn normalize_attributes(&self, path: &Path) -> io::Result<()>;
}

/// The local file system.
pub struct LocalFs;

impl FileOps for LocalFs {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir(path)
    }

    fn normalize_attributes(&self, path: &Path) -> io::Result<()> {
        attributes::normalize_attributes(path)
    }
}

/// Purge `root` on the local file system without observing items.
pub fn purge(root: &Path) -> PurgeResult {
    purge_with(root, &mut |_| {})
}

/// Purge `root` on the local file system, reporting each item to `on_event`.
pub fn purge_with(root: &Path, on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult {
    Purger::new(LocalFs).run(root, on_event)
}

struct FileEntry {
    path: PathBuf,
    is_symlink: bool,
}

pub struct Purger<F: FileOps> {
    ops: F,
}

impl<F: FileOps> Purger<F> {
    pub fn new(ops: F) -> Self {
        Self { ops }
    }

    pub fn run(&self, root: &Path, on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult {
        let mut result = PurgeResult::default();

        if !root.is_dir() {
            debug!("purge target {} is not a directory, nothing to do", root.display());
            return result;
        }

        let mut files = Vec::new();
        let mut dirs = Vec::new();

        // Deleting a child can depend on its parent's attributes (Unix
        // permission bits), so directories are normalized as they are found,
        // before the file pass. The root is normalized but never removed.
        let _ = self.ops.normalize_attributes(root);

        // Only directories that appear in the walk are removed, so one walk
        // serves both passes and an unreadable subtree is counted once.
        for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
            match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    let _ = self.ops.normalize_attributes(entry.path());
                    dirs.push(entry.into_path());
                }
                Ok(entry) => {
                    files.push(FileEntry {
                        is_symlink: entry.path_is_symlink(),
                        path: entry.into_path(),
                    });
                }
                Err(error) => {
                    debug!("walk failed under {}: {error}", root.display());
                    result.errors += 1;
                    on_event(&PurgeEvent::WalkFailed {
                        path: error.path(),
                        error: &error,
                    });
                }
            }
        }

        for file in &files {
            let _ = self.ops.normalize_attributes(&file.path);
            // Temp files keep growing while the walk runs; measure at the last moment.
            let len = std::fs::symlink_metadata(&file.path)
                .map(|m| m.len())
                .unwrap_or(0);
            match self.remove_file_entry(file) {
                Ok(()) => {
                    debug!("deleted file {} ({len} bytes)", file.path.display());
                    result.files_deleted += 1;
                    result.bytes_removed += len;
                    on_event(&PurgeEvent::Deleted {
                        kind: ItemKind::File,
                        path: &file.path,
                        bytes: len,
                    });
                }
                Err(error) => {
                    debug!("skipped file {}: {error}", file.path.display());
                    result.errors += 1;
                    on_event(&PurgeEvent::Skipped {
                        kind: ItemKind::File,
                        path: &file.path,
                        error: &error,
                    });
                }
            }
        }

        sort_deepest_first(&mut dirs);

        for dir in &dirs {
            let _ = self.ops.normalize_attributes(dir);
            match self.ops.remove_dir(dir) {
                Ok(()) => {
                    debug!("deleted directory {}", dir.display());
                    result.dirs_deleted += 1;
                    on_event(&PurgeEvent::Deleted {
                        kind: ItemKind::Dir,
                        path: dir,
                        bytes: 0,
                    });
                }
                Err(error) => {
                    debug!("skipped directory {}: {error}", dir.display());
                    result.errors += 1;
                    on_event(&PurgeEvent::Skipped {
                        kind: ItemKind::Dir,
                        path: dir,
                        error: &error,
                    });
                }
            }
        }

        result
    }

    /// Directory symlinks and junctions on Windows need `remove_dir`.
    fn remove_file_entry(&self, file: &FileEntry) -> io::Result<()> {
        match self.ops.remove_file(&file.path) {
            Err(err) if file.is_symlink => self.ops.remove_dir(&file.path).map_err(|_| err),
            other => other,
        }
    }
}

/// Order directories so every descendant comes before its ancestors.
///
/// Sorted by component depth, deepest first; equal depths fall back to
/// reverse path order so the sequence is deterministic.
pub fn sort_deepest_first(dirs: &mut [PathBuf]) {
    dirs.sort_by(|a, b| {
        let depth_a = a.components().count();
        let depth_b = b.components().count();
        depth_b.cmp(&depth_a).then_with(|| b.cmp(a))
    });
}
