// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PickerError>;

#[derive(Error, Debug)]
pub enum PickerError {
    /// The response file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The response file is not valid CSV
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A data row is too short to hold a required column
    #[error("row {row} has no column {column} ({field})")]
    MissingColumn {
        row: usize,
        column: usize,
        field: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// A supporter was asked for the rank of a book it never listed.
    /// The scorer only assigns listed books, so this is a bug.
    #[error("internal error: {participant} does not rank \"{book}\"")]
    BookNotRanked { participant: String, book: String },

    /// Statistics were requested for a combo nobody supports
    #[error("combo [{combo}] has no supporters to compute statistics over")]
    NoSupporters { combo: String },

    #[error("failed to format the report: {0}")]
    Format(#[from] std::fmt::Error),
}

impl PickerError {
    /// Errors caused by the input file or the options it was read with.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PickerError::Io { .. }
                | PickerError::Csv(_)
                | PickerError::MissingColumn { .. }
                | PickerError::Config(_)
        )
    }

    /// Errors that point at a fault in the scoring pipeline itself.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            PickerError::BookNotRanked { .. }
                | PickerError::NoSupporters { .. }
                | PickerError::Format(_)
        )
    }
}
