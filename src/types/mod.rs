//! Types module
//!
//! Contains core data structures used throughout the crate:
//! - `field`: Scalar field values and their textual form
//! - `record`: Ordered and named records
//! - `error`: Error types

pub mod error;
pub mod field;
pub mod record;

pub use error::{CsvResponseError, Result};
pub use field::FieldValue;
pub use record::Record;
