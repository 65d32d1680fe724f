//! CSV input
//!
//! Reads a CSV file with a header row into named records, so an existing CSV
//! export can be re-encoded in this crate's dialect. Every cell becomes a
//! text field; no type inference is attempted.
//!
//! Uneven rows keep all their data. A row shorter than the header is padded
//! with `Undefined` fields, so every record lists every header column. Cells
//! beyond the header are kept under positional names (`column_4` for the
//! fourth cell).

use crate::core::traits::RecordSource;
use crate::types::{CsvResponseError, FieldValue, Record, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Reads a headed CSV file into named records
#[derive(Debug, Clone, Copy)]
pub struct CsvReader {
    delimiter: u8,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvReader {
    /// Create a reader for comma-separated input
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different input delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

/// Name given to a cell that has no header column
fn positional_name(index: usize) -> String {
    format!("column_{}", index + 1)
}

/// Pair the cells of `row` with the header names
fn named_row(headers: &StringRecord, row: &StringRecord) -> Vec<(String, FieldValue)> {
    let width = headers.len().max(row.len());
    (0..width)
        .map(|index| {
            let name = headers
                .get(index)
                .map(str::to_string)
                .unwrap_or_else(|| positional_name(index));
            let value = row.get(index).map_or(FieldValue::Undefined, FieldValue::from);
            (name, value)
        })
        .collect()
}

impl RecordSource for CsvReader {
    fn read(&self, path: &Path) -> Result<Vec<Record>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CsvResponseError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => e.into(),
        })?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::Headers)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(Record::Named(named_row(&headers, &row)));
        }

        Ok(records)
    }
}
