//! Core traits
//!
//! Defines the seam between input formats and the encoder, so readers for
//! different file formats can be selected at runtime.

use crate::types::{Record, Result};
use std::path::Path;

/// A source of records
///
/// Implementations resolve their input into `Record`s up front; the encoder
/// never inspects raw input.
pub trait RecordSource: Send + Sync {
    /// Read every record from the file at `path`
    fn read(&self, path: &Path) -> Result<Vec<Record>>;
}
