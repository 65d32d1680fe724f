//! csv-response
//! # Overview
//!
//! This library turns a sequence of records into CSV text and sends it as an
//! HTTP response body from axum handlers.
//!
//! # Architecture
//!
//! The crate is organized into several key components:
//!
//! - [`types`] - Core data types (FieldValue, Record, errors)
//! - [`core`] - The encoder:
//!   - [`core::config`] - Per-call CSV dialect
//!   - [`core::encoder`] - Field escaping, header derivation, document encoding
//! - [`io`] - Record sources (JSON, CSV) and document output
//! - [`response`] - The `Csv` response type and `send_csv` for axum
//! - [`server`] - HTTP service used by the `serve` command
//! - [`cli`] - CLI arguments parsing
//!
//! # Output Format
//!
//! - Fields are joined by the separator (default `,`)
//! - Every record ends with the record separator (default `\r\n`)
//! - Fields are always double-quoted, with embedded `"` doubled
//! - `prevent_cast` prefixes each quoted field with `=`
//! - Null and undefined fields are left empty unless configured otherwise
//!
//! # Example
//!
//! ```
//! use csv_response::{encode, EncoderConfig, FieldValue, Record};
//!
//! let records = vec![Record::named([
//!     ("name", FieldValue::from("john")),
//!     ("id", FieldValue::from(1)),
//! ])];
//!
//! let csv = encode(&records, true, &EncoderConfig::default());
//! assert_eq!(csv, "\"name\",\"id\"\r\n\"john\",\"1\"\r\n");
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod response;
pub mod server;
pub mod types;

pub use self::core::{derive_header, encode, escape_field, format_record, EncoderConfig, RecordSource};
pub use io::{records_from_json, records_from_serialize, write_csv};
pub use response::{csv_extension, send_csv, Csv};
pub use types::{CsvResponseError, FieldValue, Record};
