//! csv-response CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run -- encode records.json > records.csv
//! cargo run -- encode --header --format csv export.csv > records.csv
//! cargo run -- encode --separator ';' --record-separator '\n' --prevent-cast records.json
//! cargo run -- serve --port 3000
//! ```
//!
//! Logs go to stderr so stdout carries only CSV.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed input, bind failure, etc.)

use csv_response::cli::{self, Command, EncodeArgs};
use csv_response::io::{create_source, write_csv};
use csv_response::server;
use csv_response::types::Result;
use std::process;
use tracing::debug;

fn run_encode(args: &EncodeArgs) -> Result<()> {
    let config = args.dialect.to_encoder_config();
    let source = create_source(args.format, args.input_delimiter);

    let records = source.read(&args.input_file)?;
    debug!(
        "Read {} records from {}",
        records.len(),
        args.input_file.display()
    );

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    write_csv(&records, args.include_header, &config, &mut output)
}

#[tokio::main]
async fn main() {
    let args = cli::parse_args();

    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(args.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    let result = match &args.command {
        Command::Encode(encode) => run_encode(encode),
        Command::Serve(serve) => {
            server::serve(&serve.host, serve.port, serve.dialect.to_encoder_config()).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
