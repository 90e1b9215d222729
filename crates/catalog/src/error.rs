//! Error types for the catalog crate.
//!
//! All catalog failures are startup failures: the system cannot run without
//! its catalog, so these are surfaced immediately and never retried.

use thiserror::Error;

/// Errors that can occur while loading the catalog source.
///
/// The `#[derive(Error)]` macro from thiserror automatically implements
/// the `std::error::Error` trait and `Display` based on our `#[error(...)]`
/// attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected a record
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// The source table lacks a required column
    #[error("Catalog source is missing required column '{column}'")]
    MissingColumn { column: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
