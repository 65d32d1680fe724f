//! CSV encoder
//!
//! Pure string building: records and a dialect go in, one CSV document comes
//! out. Nothing here performs I/O or fails.
//!
//! # Output format
//!
//! ```text
//! "name","id"\r\n     <- header row, named records only, on request
//! "john","1"\r\n      <- one line per record, in input order
//! ```
//!
//! Every non-empty field is double-quoted, embedded quotes are doubled, and
//! with `prevent_cast` the opening quote is preceded by `=`.

use crate::core::config::EncoderConfig;
use crate::types::{FieldValue, Record};
use tracing::debug;

/// Escape a single field
///
/// Null and undefined values become an empty (unquoted) field when
/// `ignore_null_or_undefined` is set. Everything else is stringified, has its
/// double quotes doubled, and is wrapped in double quotes.
pub fn escape_field(value: &FieldValue, config: &EncoderConfig) -> String {
    if config.ignore_null_or_undefined && value.is_null_or_undefined() {
        return String::new();
    }

    let escaped = value.to_string().replace('"', "\"\"");
    if config.prevent_cast {
        format!("=\"{}\"", escaped)
    } else {
        format!("\"{}\"", escaped)
    }
}

/// Format a list of fields as one CSV line
///
/// `None` yields an empty string. An empty slice still yields a terminated
/// (blank) line.
pub fn format_record(fields: Option<&[FieldValue]>, config: &EncoderConfig) -> String {
    let Some(fields) = fields else {
        return String::new();
    };

    let separator = config.separator.to_string();
    let mut line = fields
        .iter()
        .map(|field| escape_field(field, config))
        .collect::<Vec<_>>()
        .join(&separator);
    line.push_str(&config.record_separator);
    line
}

/// Build the header line from the first record
///
/// Only named records carry field names. Returns `None` when there are no
/// records or the first one is ordered.
pub fn derive_header(records: &[Record], config: &EncoderConfig) -> Option<String> {
    let names = records.first()?.field_names()?;
    let fields: Vec<FieldValue> = names.into_iter().map(FieldValue::from).collect();
    Some(format_record(Some(fields.as_slice()), config))
}

/// Encode records into a CSV document
///
/// Records are written in input order. Rows are not checked against each
/// other, so records of different lengths produce ragged output.
pub fn encode(records: &[Record], include_header: bool, config: &EncoderConfig) -> String {
    let mut document = String::new();

    if include_header {
        if let Some(header) = derive_header(records, config) {
            document.push_str(&header);
        }
    }

    for record in records {
        let values = record.values();
        document.push_str(&format_record(Some(values.as_slice()), config));
    }

    debug!(
        records = records.len(),
        bytes = document.len(),
        include_header,
        "Encoded CSV document"
    );

    document
}
