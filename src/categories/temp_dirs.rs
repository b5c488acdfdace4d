use std::path::{Path, PathBuf};

use crate::cleaner::{Cleaner, ScanSummary};
use crate::purge::{self, PurgeEvent, PurgeResult};
use crate::utils;

/// Per-user temporary directory (`%TEMP%` on Windows, `$TMPDIR` elsewhere).
pub struct UserTemp {
    dir: PathBuf,
}

impl UserTemp {
    pub fn new() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }
}

impl Cleaner for UserTemp {
    fn name(&self) -> &str {
        "user-temp"
    }

    fn label(&self) -> &str {
        "User Temp"
    }

    fn root(&self) -> Option<PathBuf> {
        Some(self.dir.clone())
    }

    fn scan(&self) -> ScanSummary {
        utils::survey(&self.dir)
    }

    fn clean(&self, on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult {
        purge::purge_with(&self.dir, on_event)
    }
}

/// Machine-wide temporary directory.
pub struct SystemTemp {
    dir: PathBuf,
}

impl SystemTemp {
    pub fn new() -> Self {
        Self {
            dir: system_temp_dir(),
        }
    }
}

#[cfg(windows)]
fn system_temp_dir() -> PathBuf {
    let system_root = std::env::var_os("SystemRoot")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
    system_root.join("Temp")
}

#[cfg(not(windows))]
fn system_temp_dir() -> PathBuf {
    PathBuf::from("/var/tmp")
}

impl Cleaner for SystemTemp {
    fn name(&self) -> &str {
        "system-temp"
    }

    fn label(&self) -> &str {
        "System Temp"
    }

    fn root(&self) -> Option<PathBuf> {
        Some(self.dir.clone())
    }

    fn scan(&self) -> ScanSummary {
        utils::survey(&self.dir)
    }

    fn clean(&self, on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult {
        purge::purge_with(&self.dir, on_event)
    }
}

/// A directory named on the command line with `--path`.
pub struct CustomDir {
    dir: PathBuf,
    label: String,
}

impl CustomDir {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            label: utils::display_path(dir),
        }
    }
}

impl Cleaner for CustomDir {
    fn name(&self) -> &str {
        "path"
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn root(&self) -> Option<PathBuf> {
        Some(self.dir.clone())
    }

    fn scan(&self) -> ScanSummary {
        utils::survey(&self.dir)
    }

    fn clean(&self, on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult {
        purge::purge_with(&self.dir, on_event)
    }
}
