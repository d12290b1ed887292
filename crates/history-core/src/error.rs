use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the journey-history pipeline.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// A source file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A structurally malformed CSV row or header in a source file.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A combined date/time string did not match any recognised format.
    #[error("Invalid date/time: {0}")]
    DateTimeParse(String),

    /// A non-empty charge field could not be parsed as a decimal amount.
    #[error("Invalid fare amount: {0}")]
    FareParse(String),

    /// Both an explicit file list and a directory were given, or neither.
    #[error("Conflicting input modes: {0}")]
    ConflictingInputModes(String),

    /// Row access beyond the end of a journey table.
    #[error("Row index {index} out of range for table of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the history crates.
pub type Result<T> = std::result::Result<T, HistoryError>;
