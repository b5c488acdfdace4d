use std::path::Path;
use walkdir::WalkDir;

use crate::cleaner::ScanSummary;

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Count what a purge of `root` would remove, without deleting anything.
pub fn survey(root: &Path) -> ScanSummary {
    let mut summary = ScanSummary::default();
    if !root.is_dir() {
        return summary;
    }

    for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => summary.dirs += 1,
            Ok(entry) => {
                summary.files += 1;
                summary.bytes += entry.metadata().map(|m| m.len()).unwrap_or(0);
            }
            Err(_) => summary.errors += 1,
        }
    }
    summary
}

/// Format byte count as human-readable string using 1024-based units.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Free-space gain between two readings. Other processes keep writing while
/// we clean, so a drop in free space counts as nothing freed.
pub fn freed_between(before: u64, after: u64) -> u64 {
    after.saturating_sub(before)
}

/// Shorten a path for display by replacing home dir with ~.
pub fn display_path(path: &Path) -> String {
    match dirs::home_dir() {
        Some(home) => match path.strip_prefix(&home) {
            Ok(relative) => format!("~/{}", relative.display()),
            Err(_) => path.display().to_string(),
        },
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_binary_units() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
        assert_eq!(format_size(5 * 1024u64.pow(4)), "5.00 TB");
    }

    #[test]
    fn stops_at_petabytes() {
        assert_eq!(format_size(2048 * 1024u64.pow(5)), "2048.00 PB");
    }

    #[test]
    fn negative_delta_frees_nothing() {
        assert_eq!(freed_between(100, 40), 0);
        assert_eq!(freed_between(100, 1124), 1024);
    }

    #[test]
    fn survey_counts_without_deleting() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
        std::fs::write(dir.path().join("a/one.tmp"), b"12345").unwrap();
        std::fs::write(dir.path().join("a/b/two.tmp"), b"678").unwrap();

        let summary = survey(dir.path());

        assert_eq!(summary.files, 2);
        assert_eq!(summary.dirs, 2);
        assert_eq!(summary.bytes, 8);
        assert_eq!(summary.errors, 0);
        assert!(dir.path().join("a/b/two.tmp").exists());
    }

    #[test]
    fn survey_of_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(survey(&dir.path().join("nope")), ScanSummary::default());
    }
}
