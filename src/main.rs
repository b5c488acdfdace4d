mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use tempsweep::cleaner::{Cleaner, ScanSummary};
use tempsweep::error::AppError;
use tempsweep::purge::PurgeResult;
use tempsweep::{categories, disk_info, output, privilege, utils};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Scan { category, path } => {
            let cleaners = select_cleaners(category.as_deref(), &path)?;
            run_scan(&cleaners);
        }
        Command::Clean {
            confirm,
            category,
            path,
            verbose,
        } => {
            let cleaners = select_cleaners(category.as_deref(), &path)?;
            if confirm {
                run_clean(&cleaners, verbose);
            } else {
                output::print_no_confirm_warning();
                run_scan(&cleaners);
            }
        }
    }
    Ok(())
}

fn select_cleaners(
    category: Option<&str>,
    paths: &[PathBuf],
) -> Result<Vec<Box<dyn Cleaner>>, AppError> {
    if !paths.is_empty() {
        // A missing directory purges to nothing; a file would be a typo.
        if let Some(path) = paths.iter().find(|p| p.exists() && !p.is_dir()) {
            return Err(AppError::NotADirectory { path: path.clone() });
        }
        return Ok(categories::path_cleaners(paths));
    }

    match category {
        Some(name) => match categories::find_cleaner(name) {
            Some(cleaner) => Ok(vec![cleaner]),
            None => Err(AppError::UnknownCategory {
                name: name.to_string(),
                available: categories::all_cleaner_names().join(", "),
            }),
        },
        None => Ok(categories::all_cleaners()),
    }
}

fn run_scan(cleaners: &[Box<dyn Cleaner>]) {
    output::print_banner();

    let mut rows: Vec<(String, ScanSummary)> = Vec::new();
    for cleaner in cleaners {
        output::print_scan_header(cleaner.label());
        let summary = cleaner.scan();
        output::print_scan_summary(&summary);
        rows.push((cleaner.label().to_string(), summary));
    }

    output::print_summary_header();
    let mut total = ScanSummary::default();
    for (label, summary) in &rows {
        output::print_summary_row(label, &utils::format_size(summary.bytes));
        total += *summary;
    }
    output::print_separator();
    output::print_grand_total("Total reclaimable:", &utils::format_size(total.bytes));
    output::print_dry_run_footer();
}

fn run_clean(cleaners: &[Box<dyn Cleaner>], verbose: bool) {
    output::print_banner();

    if !privilege::is_elevated() {
        output::print_info("Not running elevated; items in system locations may be skipped.");
        println!();
    }

    if let Some(info) = cleaners
        .first()
        .and_then(|c| c.root())
        .and_then(|root| disk_info::free_space(&root))
    {
        output::print_disk(&info);
    }

    let mut rows: Vec<(String, PurgeResult, Option<u64>)> = Vec::new();
    for cleaner in cleaners {
        output::print_scan_header(cleaner.label());

        let root = cleaner.root();
        let before = root.as_deref().and_then(disk_info::free_space);

        let result = cleaner.clean(&mut |event| {
            if verbose {
                output::print_event(event);
            }
        });

        let after = root.as_deref().and_then(disk_info::free_space);
        let freed = match (before, after) {
            (Some(before), Some(after)) => {
                Some(utils::freed_between(before.available, after.available))
            }
            _ => None,
        };
        debug!("{}: {:?}, freed {:?}", cleaner.name(), result, freed);

        output::print_purge_result(&result);
        match freed {
            Some(freed) => output::print_freed(freed),
            None => println!(),
        }
        rows.push((cleaner.label().to_string(), result, freed));
    }

    output::print_summary_header();
    let mut total = PurgeResult::default();
    let mut total_freed = 0u64;
    for (label, result, freed) in &rows {
        output::print_summary_row(label, &output::removed_message(result));
        total += *result;
        total_freed += freed.unwrap_or(0);
    }
    output::print_separator();
    output::print_grand_total("Total removed:", &utils::format_size(total.bytes_removed));
    output::print_grand_total("Total freed:", &utils::format_size(total_freed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_lists_alternatives() {
        let err = select_cleaners(Some("downloads"), &[]).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Unknown category 'downloads'. Available: user-temp, system-temp, recycle-bin"
        );
    }

    #[test]
    fn no_selection_means_every_category() {
        let cleaners = select_cleaners(None, &[]).unwrap();
        assert_eq!(cleaners.len(), categories::all_cleaner_names().len());
    }

    #[test]
    fn paths_replace_categories() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("later");
        let cleaners = select_cleaners(None, &[dir.path().to_path_buf(), missing]).unwrap();
        assert_eq!(cleaners.len(), 2);
        assert!(cleaners.iter().all(|c| c.name() == "path"));
    }

    #[test]
    fn file_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, b"keep").unwrap();

        let err = select_cleaners(None, &[file.clone()]).err().unwrap();
        assert!(matches!(err, AppError::NotADirectory { path } if path == file));
    }

    #[test]
    fn clean_run_empties_custom_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("x/y")).unwrap();
        std::fs::write(dir.path().join("x/y/z.tmp"), b"abc").unwrap();

        let cleaners = select_cleaners(None, &[dir.path().to_path_buf()]).unwrap();
        run_clean(&cleaners, true);

        assert!(dir.path().is_dir());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
