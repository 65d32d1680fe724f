//! HTTP response adapter
//!
//! Plugs the encoder into an axum application. Nothing is patched onto shared
//! framework types: handlers return [`Csv`] (or call [`send_csv`]) and the
//! application registers its dialect with [`csv_extension`].
//!
//! - `csv` - The `Csv` response type and `send_csv`
//! - `error` - HTTP status mapping for `CsvResponseError`

pub mod csv;
pub mod error;

pub use self::csv::{csv_extension, send_csv, Csv, TEXT_CSV};
pub use error::ErrorBody;
