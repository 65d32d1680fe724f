//! Error types for csv-response
//!
//! The encoder itself never fails: every value has a textual form. Errors
//! come from the edges, when input files are read, when untyped input is
//! resolved into records, or when an HTTP request asks for an invalid
//! status or header.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Input Errors**: Malformed JSON or CSV input, input of the wrong shape
//! - **Response Errors**: Invalid status codes or header names

use thiserror::Error;

/// Main error type for csv-response
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsvResponseError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Input could not be parsed as JSON or CSV
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The input document is not a sequence of records
    #[error("Expected an array of records, got {kind}")]
    NotASequence {
        /// The kind of value that was found instead
        kind: String,
    },

    /// A record is neither an ordered list nor a named mapping
    #[error("Record {index} must be an array or an object, got {kind}")]
    InvalidRecord {
        /// Position of the record in the input
        index: usize,
        /// The kind of value that was found instead
        kind: String,
    },

    /// Requested HTTP status code is out of range
    #[error("Invalid status code {code}")]
    InvalidStatus {
        /// The rejected status code
        code: u16,
    },

    /// Requested response header name or value is not valid HTTP
    #[error("Invalid response header '{name}'")]
    InvalidHeader {
        /// The rejected header name
        name: String,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CsvResponseError>;

impl From<std::io::Error> for CsvResponseError {
    fn from(error: std::io::Error) -> Self {
        CsvResponseError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for CsvResponseError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        CsvResponseError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for CsvResponseError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return CsvResponseError::IoError {
                message: error.to_string(),
            };
        }

        let line = match error.line() {
            0 => None,
            l => Some(l as u64),
        };

        CsvResponseError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl CsvResponseError {
    /// Create a NotASequence error
    pub fn not_a_sequence(kind: &str) -> Self {
        CsvResponseError::NotASequence {
            kind: kind.to_string(),
        }
    }

    /// Create an InvalidRecord error
    pub fn invalid_record(index: usize, kind: &str) -> Self {
        CsvResponseError::InvalidRecord {
            index,
            kind: kind.to_string(),
        }
    }

    /// Create an InvalidHeader error
    pub fn invalid_header(name: &str) -> Self {
        CsvResponseError::InvalidHeader {
            name: name.to_string(),
        }
    }
}
