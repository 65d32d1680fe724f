// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{unescape_separator, CliArgs, Command, DialectArgs, EncodeArgs, InputFormat, ServeArgs};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or --help),
/// clap prints an error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
