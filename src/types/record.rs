//! Record types for the CSV encoder
//!
//! A record is one output row. Its shape is fixed when it is built: either a
//! plain ordered list of values, or a list of named fields whose insertion
//! order is preserved.

use super::field::FieldValue;

/// One logical row of output data
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Values in column order, with no field names
    ///
    /// Records of this shape never produce a header row.
    Ordered(Vec<FieldValue>),

    /// Named fields in insertion order
    ///
    /// The names of the first record in a batch become the header row.
    Named(Vec<(String, FieldValue)>),
}

impl Record {
    /// Build an ordered record from anything convertible to field values
    pub fn ordered<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        Record::Ordered(values.into_iter().map(Into::into).collect())
    }

    /// Build a named record from `(name, value)` pairs
    pub fn named<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Record::Named(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Field names of a named record, `None` for ordered records
    pub fn field_names(&self) -> Option<Vec<&str>> {
        match self {
            Record::Ordered(_) => None,
            Record::Named(fields) => Some(fields.iter().map(|(name, _)| name.as_str()).collect()),
        }
    }

    /// The record's values in output order
    ///
    /// Named records give their values in insertion order.
    pub fn values(&self) -> Vec<FieldValue> {
        match self {
            Record::Ordered(values) => values.clone(),
            Record::Named(fields) => fields.iter().map(|(_, value)| value.clone()).collect(),
        }
    }
}
