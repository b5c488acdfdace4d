use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tempsweep",
    about = "Empty temp folders and the recycle bin, and report the space freed",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Count what would be removed (dry-run, no deletion)
    Scan {
        /// Only scan a specific category
        #[arg(long)]
        category: Option<String>,

        /// Scan these directories instead of the built-in categories
        #[arg(long, conflicts_with = "category")]
        path: Vec<PathBuf>,
    },

    /// Delete temp files (requires --confirm to actually delete)
    Clean {
        /// Actually delete files. Without this flag, behaves like scan.
        #[arg(long)]
        confirm: bool,

        /// Only clean a specific category
        #[arg(long)]
        category: Option<String>,

        /// Clean these directories instead of the built-in categories
        #[arg(long, conflicts_with = "category")]
        path: Vec<PathBuf>,

        /// Print every deleted or skipped item
        #[arg(short, long)]
        verbose: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_defaults_to_dry_run() {
        let cli = Cli::try_parse_from(["tempsweep", "clean"]).unwrap();
        match cli.command {
            Command::Clean {
                confirm,
                category,
                path,
                verbose,
            } => {
                assert!(!confirm);
                assert!(category.is_none());
                assert!(path.is_empty());
                assert!(!verbose);
            }
            Command::Scan { .. } => panic!("expected clean"),
        }
    }

    #[test]
    fn accepts_repeated_paths() {
        let cli =
            Cli::try_parse_from(["tempsweep", "scan", "--path", "/a", "--path", "/b"]).unwrap();
        match cli.command {
            Command::Scan { path, .. } => {
                assert_eq!(path, vec![PathBuf::from("/a"), PathBuf::from("/b")])
            }
            Command::Clean { .. } => panic!("expected scan"),
        }
    }

    #[test]
    fn path_and_category_conflict() {
        let parsed = Cli::try_parse_from([
            "tempsweep",
            "clean",
            "--category",
            "user-temp",
            "--path",
            "/a",
        ]);
        assert!(parsed.is_err());
    }
}
