//! I/O module
//!
//! Handles record input and CSV output.
//!
//! # Components
//!
//! - `json_reader` - JSON documents and serializable values into records
//! - `csv_reader` - Headed CSV files into named records
//! - `csv_format` - Writing encoded documents to a sink

pub mod csv_format;
pub mod csv_reader;
pub mod json_reader;

pub use csv_format::write_csv;
pub use csv_reader::CsvReader;
pub use json_reader::{records_from_json, records_from_serialize, JsonReader};

use crate::cli::InputFormat;
use crate::core::traits::RecordSource;

/// Create a record source for the given input format
///
/// `delimiter` only applies to CSV input.
pub fn create_source(format: InputFormat, delimiter: u8) -> Box<dyn RecordSource> {
    match format {
        InputFormat::Json => Box::new(JsonReader),
        InputFormat::Csv => Box::new(CsvReader::with_delimiter(delimiter)),
    }
}
