//! Error types for the catalog-loader crate.
//!
//! Loading is the only fallible stage of the dashboard. Everything after it
//! (filtering, aggregation, view assembly) models "nothing matched" as an
//! empty result instead of an error.

use thiserror::Error;

/// Errors that can occur while loading the catalog.
///
/// All of these are fatal: the dashboard is not rendered from a partially
/// loaded source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Source file could not be found
    #[error("Failed to open catalog source: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected a record
    ///
    /// `line` is the 1-based line of the record when the reader knows it.
    #[error("Malformed CSV{}: {source}", line_suffix(.line))]
    Csv {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// The header row does not describe a usable catalog
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl From<csv::Error> for LoadError {
    fn from(source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line());
        LoadError::Csv { line, source }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" at line {}", line),
        None => String::new(),
    }
}

/// Problems with the header row, detected before any record is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A required column (identifier or type) is absent
    #[error("required column `{column}` is missing")]
    MissingColumn { column: String },

    /// The source has no header row at all
    #[error("source has no header row")]
    EmptyHeader,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LoadError>;
