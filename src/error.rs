use std::path::PathBuf;

/// Usage errors that stop a run before anything is cleaned.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// `--category` names no known cleaner.
    #[error("Unknown category '{name}'. Available: {available}")]
    UnknownCategory { name: String, available: String },

    /// `--path` points at something that is not a directory.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}
