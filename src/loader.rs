//! Generic tabular loader
//!
//! This module turns a delimited text source with a header row into an
//! ordered sequence of validated records. The loader is shape-agnostic: it
//! has no knowledge of what any column means and forwards each row's fields
//! positionally to the record shape, which performs all semantic validation.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::models::Establishment;
use crate::{Error, Result};

/// Contract between the loader and a record shape
///
/// A record shape declares its column names in source order, fixing the
/// arity and field order at definition time, and constructs one validated
/// instance from a row's raw fields.
pub trait TabularRecord: Sized {
    /// Source column names, in the order the shape's constructor expects
    const FIELD_NAMES: &'static [&'static str];

    /// Construct one record from a row's raw field values, in file order
    ///
    /// Fails with a row-arity error when `fields.len()` does not match
    /// [`Self::FIELD_NAMES`], and with format/validation errors when a
    /// field's content is unacceptable.
    fn from_row(fields: &[&str]) -> Result<Self>;
}

/// Loader for delimited text sources with a header row
///
/// One load is a single synchronous request/response: the source is read to
/// completion, the file handle is released on every exit path, and the first
/// invalid row aborts the whole load with no partial result.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvLoader {
    /// Create a loader with the default comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load every data row of a source into records of shape `R`
    ///
    /// The first line is the header and establishes column order; header
    /// names themselves are not validated. Each subsequent row's fields are
    /// forwarded positionally to `R::from_row`. A header-only source yields
    /// an empty sequence. Any row failure is wrapped in a row-parse error
    /// carrying the raw row content, and aborts the load.
    pub fn load<R: TabularRecord>(&self, path: impl AsRef<Path>) -> Result<Vec<R>> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::source_not_found(path),
            _ => Error::io(path, e),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| Error::csv(path, e))?;
        debug!(
            "Header of {} establishes {} columns for {} fields",
            path.display(),
            headers.len(),
            R::FIELD_NAMES.len()
        );

        let separator = (self.delimiter as char).to_string();
        let mut records = Vec::new();

        for (index, result) in reader.records().enumerate() {
            // 1-based source line, accounting for the header row
            let line = index as u64 + 2;

            let row = result.map_err(|e| Error::csv(path, e))?;
            let fields: Vec<&str> = row.iter().collect();

            let record = R::from_row(&fields)
                .map_err(|e| Error::row_parse(line, fields.join(separator.as_str()), e))?;
            records.push(record);
        }

        debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

/// Load a source of establishment rows with the default loader
pub fn load_establishments(path: impl AsRef<Path>) -> Result<Vec<Establishment>> {
    CsvLoader::new().load(path)
}
