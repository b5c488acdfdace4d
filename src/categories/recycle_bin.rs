use std::ffi::OsString;
use std::path::PathBuf;

use crate::cleaner::{Cleaner, ScanSummary};
use crate::purge::{PurgeEvent, PurgeResult};

pub struct RecycleBin;

/// Root of the drive whose bin is queried, emptied and measured.
#[cfg_attr(not(windows), allow(dead_code))]
fn bin_root(system_drive: Option<OsString>) -> OsString {
    let mut root = system_drive.unwrap_or_else(|| "C:".into());
    root.push("\\");
    root
}

impl Cleaner for RecycleBin {
    fn name(&self) -> &str {
        "recycle-bin"
    }

    fn label(&self) -> &str {
        "Recycle Bin"
    }

    fn root(&self) -> Option<PathBuf> {
        platform::volume_root()
    }

    fn scan(&self) -> ScanSummary {
        platform::scan()
    }

    fn clean(&self, on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult {
        platform::clean(on_event)
    }
}

#[cfg(windows)]
mod platform {
    use std::os::windows::ffi::OsStrExt;
    use std::path::PathBuf;
    use std::ptr;

    use log::{debug, warn};
    use winapi::um::shellapi::{
        SHEmptyRecycleBinW, SHQueryRecycleBinW, SHERB_NOCONFIRMATION, SHERB_NOPROGRESSUI,
        SHERB_NOSOUND, SHQUERYRBINFO,
    };

    use crate::cleaner::ScanSummary;
    use crate::purge::{PurgeEvent, PurgeResult};

    pub fn volume_root() -> Option<PathBuf> {
        Some(PathBuf::from(root()))
    }

    fn root() -> std::ffi::OsString {
        super::bin_root(std::env::var_os("SystemDrive"))
    }

    fn wide_root() -> Vec<u16> {
        root().encode_wide().chain(Some(0)).collect()
    }

    /// Item count and total size of the system drive's bin.
    fn query() -> Result<(u64, u64), i32> {
        let root = wide_root();
        let mut info = SHQUERYRBINFO {
            cbSize: std::mem::size_of::<SHQUERYRBINFO>() as u32,
            i64Size: 0,
            i64NumItems: 0,
        };
        let hr = unsafe { SHQueryRecycleBinW(root.as_ptr(), &mut info) };
        if hr != 0 {
            return Err(hr);
        }
        Ok((info.i64NumItems.max(0) as u64, info.i64Size.max(0) as u64))
    }

    pub fn scan() -> ScanSummary {
        match query() {
            Ok((items, bytes)) => ScanSummary {
                files: items,
                bytes,
                ..ScanSummary::default()
            },
            Err(hr) => {
                warn!("could not query recycle bin (HRESULT {hr:#x})");
                ScanSummary {
                    errors: 1,
                    ..ScanSummary::default()
                }
            }
        }
    }

    pub fn clean(_on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult {
        let (items, bytes) = match query() {
            Ok(found) => found,
            Err(hr) => {
                warn!("could not query recycle bin (HRESULT {hr:#x})");
                return PurgeResult {
                    errors: 1,
                    ..PurgeResult::default()
                };
            }
        };
        if items == 0 {
            debug!("recycle bin already empty");
            return PurgeResult::default();
        }

        // Only the system drive's bin, the volume whose free space is reported.
        let root = wide_root();
        let hr = unsafe {
            SHEmptyRecycleBinW(
                ptr::null_mut(),
                root.as_ptr(),
                SHERB_NOCONFIRMATION | SHERB_NOPROGRESSUI | SHERB_NOSOUND,
            )
        };
        if hr != 0 {
            warn!("failed to empty recycle bin (HRESULT {hr:#x})");
            return PurgeResult {
                errors: 1,
                ..PurgeResult::default()
            };
        }

        debug!("emptied recycle bin: {items} items, {bytes} bytes");
        PurgeResult {
            files_deleted: items,
            bytes_removed: bytes,
            ..PurgeResult::default()
        }
    }
}

#[cfg(not(windows))]
mod platform {
    use std::path::PathBuf;

    use crate::cleaner::ScanSummary;
    use crate::purge::{self, PurgeEvent, PurgeResult};
    use crate::utils;

    /// Directories whose contents make up the desktop trash.
    fn trash_dirs() -> Vec<PathBuf> {
        if cfg!(target_os = "macos") {
            return dirs::home_dir()
                .map(|home| vec![home.join(".Trash")])
                .unwrap_or_default();
        }
        dirs::data_dir()
            .map(|data| {
                let trash = data.join("Trash");
                vec![trash.join("files"), trash.join("info")]
            })
            .unwrap_or_default()
    }

    pub fn volume_root() -> Option<PathBuf> {
        trash_dirs().into_iter().next()
    }

    pub fn scan() -> ScanSummary {
        let mut total = ScanSummary::default();
        for dir in trash_dirs() {
            total += utils::survey(&dir);
        }
        total
    }

    pub fn clean(on_event: &mut dyn FnMut(&PurgeEvent)) -> PurgeResult {
        let mut total = PurgeResult::default();
        for dir in trash_dirs() {
            total += purge::purge_with(&dir, on_event);
        }
        total
    }
}
