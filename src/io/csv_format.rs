//! CSV document output
//!
//! Writes an encoded document to any `Write` sink. Encoding itself lives in
//! `core::encoder`; this module only owns the I/O.

use crate::core::config::EncoderConfig;
use crate::core::encoder::encode;
use crate::types::{Record, Result};
use std::io::Write;

/// Encode `records` and write the document to `output`
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(CsvResponseError::IoError)` if the sink failed
pub fn write_csv(
    records: &[Record],
    include_header: bool,
    config: &EncoderConfig,
    output: &mut dyn Write,
) -> Result<()> {
    let document = encode(records, include_header, config);
    output.write_all(document.as_bytes())?;
    output.flush()?;
    Ok(())
}
