//! Establishment Loader Library
//!
//! A Rust library for loading physical establishment records (location,
//! inspection cost/utility, opening hours) from delimited text files into
//! validated, strongly-typed values.
//!
//! This library provides tools for:
//! - Parsing delimited files with a header row into arbitrary record types
//! - Validating coordinate bounds and fixed-width opening-hours vectors
//! - Coercing raw textual fields into typed values with precise errors
//! - Rendering any record's field mapping as a diagnostic string

pub mod loader;
pub mod models;
pub mod render;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use loader::{CsvLoader, TabularRecord, load_establishments};
pub use models::{Coordinates, Establishment, OpeningHours};
pub use render::FieldMap;

use std::path::{Path, PathBuf};

/// Result type alias for the establishment loader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for establishment loading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source file cannot be located or opened
    #[error("Source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// A field's raw text cannot be coerced to its required shape
    #[error("Invalid {field} '{value}': expected {expected}")]
    FieldFormat {
        field: String,
        value: String,
        expected: String,
    },

    /// A coerced value violates a domain invariant
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A row's field count does not match the record shape's arity
    #[error("Row has {found} fields, expected {expected}")]
    RowArity { expected: usize, found: usize },

    /// A row could not be turned into a record; carries the raw row content
    #[error("Failed to parse row {line} '{row}': {source}")]
    RowParse {
        line: u64,
        row: String,
        #[source]
        source: Box<Error>,
    },

    /// I/O operation failed while reading a source
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The csv reader rejected the source content
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a source-not-found error for a path
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a field format error with the offending value and expectation
    pub fn field_format(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::FieldFormat {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a row arity error
    pub fn row_arity(expected: usize, found: usize) -> Self {
        Self::RowArity { expected, found }
    }

    /// Wrap an error raised while parsing one row, attaching the raw row
    pub fn row_parse(line: u64, row: impl Into<String>, source: Error) -> Self {
        Self::RowParse {
            line,
            row: row.into(),
            source: Box::new(source),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV reader error with path context
    pub fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
