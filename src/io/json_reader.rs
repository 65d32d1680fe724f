//! JSON input
//!
//! Resolves untyped JSON into `Record`s at the boundary. A document must be an
//! array; each element must be an array (ordered record) or an object (named
//! record, key order preserved). Anything else is rejected here rather than
//! coerced later in the encoder.

use crate::core::traits::RecordSource;
use crate::types::{CsvResponseError, FieldValue, Record, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Name of a JSON value's kind, for error messages
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert a JSON scalar into a field value
///
/// Nested arrays and objects have no column of their own; they are kept as
/// compact JSON text.
pub fn field_from_json(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Integer(i)
            } else if let Some(u) = n.as_u64() {
                FieldValue::Unsigned(u)
            } else {
                FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => FieldValue::Text(s),
        // compact JSON text, so the nested value survives in a single cell
        nested @ (Value::Array(_) | Value::Object(_)) => FieldValue::Text(nested.to_string()),
    }
}

/// Convert one JSON value into a record
fn record_from_json(index: usize, value: Value) -> Result<Record> {
    match value {
        Value::Array(values) => Ok(Record::Ordered(
            values.into_iter().map(field_from_json).collect(),
        )),
        Value::Object(map) => Ok(Record::Named(
            map.into_iter()
                .map(|(name, value)| (name, field_from_json(value)))
                .collect(),
        )),
        other => Err(CsvResponseError::invalid_record(index, kind_of(&other))),
    }
}

/// Convert a JSON array of arrays/objects into records
///
/// # Errors
///
/// - `NotASequence` if `value` is not an array
/// - `InvalidRecord` for the first element that is neither array nor object
pub fn records_from_json(value: Value) -> Result<Vec<Record>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| record_from_json(index, item))
            .collect(),
        other => Err(CsvResponseError::not_a_sequence(kind_of(&other))),
    }
}

/// Convert serializable values into records
///
/// Structs and maps become named records in field order; tuples, arrays and
/// vectors become ordered records.
///
/// ```
/// use csv_response::{encode, records_from_serialize, EncoderConfig};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: String, id: u32 }
///
/// let users = vec![User { name: "john".into(), id: 1 }];
/// let records = records_from_serialize(&users).unwrap();
/// assert_eq!(
///     encode(&records, true, &EncoderConfig::default()),
///     "\"name\",\"id\"\r\n\"john\",\"1\"\r\n"
/// );
/// ```
pub fn records_from_serialize<T: Serialize>(items: &[T]) -> Result<Vec<Record>> {
    records_from_json(serde_json::to_value(items)?)
}

/// Reads a JSON array file into records
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReader;

impl RecordSource for JsonReader {
    fn read(&self, path: &Path) -> Result<Vec<Record>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CsvResponseError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => e.into(),
        })?;

        let value: Value = serde_json::from_reader(BufReader::new(file))?;
        records_from_json(value)
    }
}
