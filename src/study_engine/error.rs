use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or validating a question bank.
#[derive(Error, Debug)]
pub enum BankError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate question id: {0}")]
    DuplicateId(String),

    #[error("Question {0} has an empty answer")]
    EmptyAnswer(String),
}

/// Failures reading or writing the stored theme preference.
///
/// Callers treat these as best-effort and only log them.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}
