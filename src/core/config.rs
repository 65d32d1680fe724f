//! Encoder configuration
//!
//! The CSV dialect is a plain value handed to every encode call. There are no
//! process-wide defaults, so concurrent callers with different settings
//! never observe each other.

use serde::{Deserialize, Serialize};

/// Default field separator
pub const DEFAULT_SEPARATOR: char = ',';

/// Default record separator
pub const DEFAULT_RECORD_SEPARATOR: &str = "\r\n";

/// CSV dialect settings
///
/// Missing fields fall back to their defaults when deserialized, so a request
/// body may override a single setting:
///
/// ```
/// use csv_response::EncoderConfig;
///
/// let config: EncoderConfig = serde_json::from_str(r#"{"prevent_cast": true}"#).unwrap();
/// assert!(config.prevent_cast);
/// assert_eq!(config.separator, ',');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Placed between fields of a record
    pub separator: char,
    /// Appended after every record, including the last
    pub record_separator: String,
    /// Prefix quoted fields with `=` so spreadsheets keep them as text
    pub prevent_cast: bool,
    /// Render null and undefined fields as empty, unquoted fields
    pub ignore_null_or_undefined: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            record_separator: DEFAULT_RECORD_SEPARATOR.to_string(),
            prevent_cast: false,
            ignore_null_or_undefined: true,
        }
    }
}

impl EncoderConfig {
    /// Create a config with the default dialect
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the record separator
    pub fn record_separator(mut self, record_separator: impl Into<String>) -> Self {
        self.record_separator = record_separator.into();
        self
    }

    /// Enable or disable the `=` prefix
    pub fn prevent_cast(mut self, prevent_cast: bool) -> Self {
        self.prevent_cast = prevent_cast;
        self
    }

    /// Choose whether null and undefined fields are emptied
    pub fn ignore_null_or_undefined(mut self, ignore: bool) -> Self {
        self.ignore_null_or_undefined = ignore;
        self
    }
}
