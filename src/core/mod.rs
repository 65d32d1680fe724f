//! Core module
//!
//! - `config` - Per-call CSV dialect settings
//! - `encoder` - Field escaping, header derivation and document encoding
//! - `traits` - Trait abstractions for record sources

pub mod config;
pub mod encoder;
pub mod traits;

pub use config::EncoderConfig;
pub use encoder::{derive_header, encode, escape_field, format_record};
pub use traits::RecordSource;
