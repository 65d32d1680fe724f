use crate::core::config::{EncoderConfig, DEFAULT_RECORD_SEPARATOR, DEFAULT_SEPARATOR};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Encode records as CSV, from files or over HTTP
#[derive(Parser, Debug)]
#[command(name = "csv-response")]
#[command(about = "Encode records as CSV, from files or over HTTP", long_about = None)]
pub struct CliArgs {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a JSON or CSV file to CSV on stdout
    Encode(EncodeArgs),
    /// Serve the encoder over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file path containing records
    #[arg(value_name = "INPUT", help = "Path to the input file")]
    pub input_file: PathBuf,

    /// Input file format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Input format: 'json' (array of arrays/objects) or 'csv' (with header row)"
    )]
    pub format: InputFormat,

    /// Delimiter of CSV input
    #[arg(
        long = "input-delimiter",
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_input_delimiter,
        help = "Delimiter of CSV input, a single ASCII character (default: ',')"
    )]
    pub input_delimiter: u8,

    /// Emit a header row derived from the first record
    #[arg(long = "header")]
    pub include_header: bool,

    #[command(flatten)]
    pub dialect: DialectArgs,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, value_name = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[command(flatten)]
    pub dialect: DialectArgs,
}

/// CSV dialect flags shared by every command
#[derive(Args, Debug, Default)]
pub struct DialectArgs {
    /// Field separator
    #[arg(long = "separator", value_name = "CHAR", help = "Field separator (default: ',')")]
    pub separator: Option<char>,

    /// Record separator, with \r, \n and \t escapes
    #[arg(
        long = "record-separator",
        value_name = "STRING",
        help = "Record separator, escapes \\r \\n \\t allowed (default: \\r\\n)"
    )]
    pub record_separator: Option<String>,

    /// Prefix fields with '=' so spreadsheets keep them as text
    #[arg(long = "prevent-cast")]
    pub prevent_cast: bool,

    /// Write null fields as "null" instead of leaving them empty
    #[arg(long = "keep-null")]
    pub keep_null: bool,
}

/// Supported input formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Csv,
}

/// Parse a single ASCII character into a CSV input delimiter
pub fn parse_input_delimiter(raw: &str) -> Result<u8, String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "input delimiter must be a single ASCII character, got '{}'",
            raw
        )),
    }
}

/// Replace `\r`, `\n`, `\t` and `\\` escape sequences with the characters
/// they name. Unknown escapes are kept as written.
pub fn unescape_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

impl DialectArgs {
    /// Create an EncoderConfig from CLI arguments
    ///
    /// Flags that were not given keep the default dialect.
    pub fn to_encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            separator: self.separator.unwrap_or(DEFAULT_SEPARATOR),
            record_separator: self
                .record_separator
                .as_deref()
                .map(unescape_separator)
                .unwrap_or_else(|| DEFAULT_RECORD_SEPARATOR.to_string()),
            prevent_cast: self.prevent_cast,
            ignore_null_or_undefined: !self.keep_null,
        }
    }
}
