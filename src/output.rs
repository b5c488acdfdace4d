use colored::Colorize;

use crate::cleaner::ScanSummary;
use crate::disk_info::DiskInfo;
use crate::purge::{ItemKind, PurgeEvent, PurgeResult};
use crate::utils::{display_path, format_size};

pub fn print_banner() {
    println!(
        "{}",
        format!("tempsweep v{}", env!("CARGO_PKG_VERSION"))
            .bold()
            .cyan()
    );
    println!();
}

pub fn print_scan_header(label: &str) {
    println!("{}", format!("=== {label} ===").bold().white());
}

pub fn print_disk(info: &DiskInfo) {
    println!(
        "{} {} free of {} ({:.0}% used)",
        "Disk:".cyan().bold(),
        format_size(info.available).green(),
        format_size(info.total),
        info.usage_percent() * 100.0
    );
    println!();
}

pub fn print_scan_summary(summary: &ScanSummary) {
    println!(
        "  {} files and {} folders  {}",
        summary.files,
        summary.dirs,
        format_size(summary.bytes).yellow()
    );
    if summary.errors > 0 {
        println!(
            "  {}",
            format!("{} entries could not be read", summary.errors).dimmed()
        );
    }
    println!();
}

pub fn removed_message(result: &PurgeResult) -> String {
    format!(
        "Removed {} files and {} folders ({})",
        result.files_deleted,
        result.dirs_deleted,
        format_size(result.bytes_removed)
    )
}

pub fn skipped_message(result: &PurgeResult) -> Option<String> {
    (result.errors > 0).then(|| format!("skipped {} items", result.errors))
}

pub fn print_purge_result(result: &PurgeResult) {
    println!("  {}", removed_message(result).green());
    if let Some(skipped) = skipped_message(result) {
        println!("  {}", skipped.yellow());
    }
}

pub fn print_freed(freed: u64) {
    println!("  {}", format!("{} freed", format_size(freed)).green().bold());
    println!();
}

/// One line per item, used by `clean --verbose`.
pub fn print_event(event: &PurgeEvent) {
    match event {
        PurgeEvent::Deleted { kind, path, bytes } => {
            let size = match kind {
                ItemKind::File => format_size(*bytes),
                ItemKind::Dir => "dir".to_string(),
            };
            println!(
                "  {} {}  {}",
                "Deleted".red(),
                display_path(path).dimmed(),
                size.yellow()
            );
        }
        PurgeEvent::Skipped { path, error, .. } => {
            println!(
                "  {} {}: {}",
                "Skipped".yellow().bold(),
                display_path(path).dimmed(),
                error.to_string().red()
            );
        }
        PurgeEvent::WalkFailed { path, error } => {
            let location = (*path)
                .map(display_path)
                .unwrap_or_else(|| "<unknown>".to_string());
            println!(
                "  {} {}: {}",
                "Unreadable".yellow().bold(),
                location.dimmed(),
                error.to_string().red()
            );
        }
    }
}

pub fn print_summary_header() {
    println!("{}", "=== Summary ===".bold().white());
}

pub fn print_summary_row(label: &str, size: &str) {
    println!("  {:<30} {}", label, size.green());
}

pub fn print_separator() {
    println!("  {}", "─".repeat(45).dimmed());
}

pub fn print_grand_total(caption: &str, total: &str) {
    println!("  {} {}", format!("{caption:<30}").bold(), total.green().bold());
    println!();
}

pub fn print_info(msg: &str) {
    println!("{} {}", "Info:".cyan().bold(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg.red());
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Run `tempsweep clean --confirm` to delete."
            .yellow()
            .bold()
    );
}

pub fn print_no_confirm_warning() {
    println!(
        "{}",
        "No --confirm flag provided. Running as dry-run scan."
            .yellow()
            .bold()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lines() {
        let result = PurgeResult {
            files_deleted: 12,
            dirs_deleted: 3,
            bytes_removed: 1536,
            errors: 0,
        };
        assert_eq!(
            removed_message(&result),
            "Removed 12 files and 3 folders (1.50 KB)"
        );
        assert_eq!(skipped_message(&result), None);

        let result = PurgeResult { errors: 4, ..result };
        assert_eq!(skipped_message(&result).as_deref(), Some("skipped 4 items"));
    }
}
