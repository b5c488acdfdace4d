use std::path::{Path, PathBuf};

use sysinfo::Disks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskInfo {
    pub total: u64,
    pub available: u64,
    pub used: u64,
}

impl DiskInfo {
    pub fn usage_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.used as f32 / self.total as f32
    }
}

/// Space figures for the volume that holds `path`.
pub fn free_space(path: &Path) -> Option<DiskInfo> {
    let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let disks = Disks::new_with_refreshed_list();
    let mounts: Vec<(PathBuf, u64, u64)> = disks
        .list()
        .iter()
        .map(|d| {
            (
                d.mount_point().to_path_buf(),
                d.total_space(),
                d.available_space(),
            )
        })
        .collect();

    let (_, total, available) = best_mount(&path, &mounts)?;
    Some(DiskInfo {
        total: *total,
        available: *available,
        used: total.saturating_sub(*available),
    })
}

/// The mount whose mount point is the longest prefix of `path`.
fn best_mount<'a>(
    path: &Path,
    mounts: &'a [(PathBuf, u64, u64)],
) -> Option<&'a (PathBuf, u64, u64)> {
    mounts
        .iter()
        .filter(|(mount, _, _)| path.starts_with(mount))
        .max_by_key(|(mount, _, _)| mount.components().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_most_specific_mount() {
        let mounts = vec![
            (PathBuf::from("/"), 100, 10),
            (PathBuf::from("/var"), 50, 20),
            (PathBuf::from("/var/tmp"), 30, 25),
            (PathBuf::from("/home"), 70, 5),
        ];

        let found = best_mount(Path::new("/var/tmp/build"), &mounts).unwrap();
        assert_eq!(found.0, PathBuf::from("/var/tmp"));

        let found = best_mount(Path::new("/var/log"), &mounts).unwrap();
        assert_eq!(found.0, PathBuf::from("/var"));

        // Component match, not string prefix.
        let found = best_mount(Path::new("/variant"), &mounts).unwrap();
        assert_eq!(found.0, PathBuf::from("/"));
    }

    #[test]
    fn no_matching_mount() {
        let mounts = vec![(PathBuf::from("/data"), 1, 1)];
        assert!(best_mount(Path::new("/tmp"), &mounts).is_none());
    }

    #[test]
    fn usage_percent_handles_empty_disk() {
        let info = DiskInfo {
            total: 0,
            available: 0,
            used: 0,
        };
        assert_eq!(info.usage_percent(), 0.0);

        let info = DiskInfo {
            total: 200,
            available: 50,
            used: 150,
        };
        assert_eq!(info.usage_percent(), 0.75);
    }
}
