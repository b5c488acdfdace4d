use std::ops::AddAssign;
use std::path::PathBuf;

use crate::purge::{PurgeEvent, PurgeResult};

/// What cleaning a target would remove.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: u64,
    pub dirs: u64,
    pub bytes: u64,
    /// Entries that could not be enumerated.
    pub errors: u64,
}

impl AddAssign for ScanSummary {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.dirs += other.dirs;
        self.bytes += other.bytes;
        self.errors += other.errors;
    }
}

/// The trait every cleanup target implements.
pub trait Cleaner {
    /// Machine-readable name used in --category flag (e.g. "user-temp").
    fn name(&self) -> &str;

    /// Human-readable label for display (e.g. "User Temp").
    fn label(&self) -> &str;

    /// Directory whose volume is measured for freed space.
    fn root(&self) -> Option<PathBuf>;

    /// Count what would be cleaned. Never deletes anything.
    fn scan(&self) -> ScanSummary;

    /// Delete the target's contents, reporting each item to `on_event`.
    fn clean(&self, on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult;
}
