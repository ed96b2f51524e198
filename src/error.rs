//! Error handling for the address book session.
//!
//! `AppError` collects every failure the program can hit, from out-of-range
//! entry numbers to CSV parse problems, together with a `Result` alias and
//! the `From` impls that let call sites lean on `?`. Source errors that are
//! not `Clone` sit behind an `Arc` so the enum itself stays cloneable.

use std::sync::Arc;
use thiserror::Error;

/// Everything that can go wrong while operating on the address book.
///
/// Every variant is recoverable: operations hand these back to the caller,
/// and the interactive session reports them and returns to the menu.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// A 1-based entry position outside the current `[1, count]` range.
    #[error("entry number {position} is out of range (the book holds {count} entries)")]
    OutOfRange { position: i64, count: usize },

    /// The CSV header row lacks one or more of the required columns.
    #[error("CSV is missing required column(s): {0}")]
    MissingColumns(String),

    /// Error during CSV parsing (`csv`). Wrapped in Arc as csv::Error is not Clone.
    #[error("CSV Error: {0}")]
    Csv(Arc<csv::Error>),

    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// Error related to progress bar style templating (`indicatif`).
    #[error("Progress Style Template Error: {0}")]
    Template(Arc<indicatif::style::TemplateError>),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// Conversions from library error types, so `?` works at the call sites.
// Non-Clone sources go behind Arc.

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(Arc::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl From<indicatif::style::TemplateError> for AppError {
    fn from(err: indicatif::style::TemplateError) -> Self {
        AppError::Template(Arc::new(err))
    }
}
