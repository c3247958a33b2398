//! leptjson CLI.
//!
//! Parses one document from a file or stdin and prints a one-line JSON report.

use clap::{Parser, Subcommand};
use leptjson::json::{parse_with_options, JsonValue, ParseOptions};
use leptjson::ParseError;
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "leptjson")]
#[command(about = "Strict JSON checker for null, boolean and number documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Parse a document and report its type and value
    Parse {
        /// Input file; reads stdin when absent or `-`
        file: Option<PathBuf>,

        /// Treat the letter `r` instead of carriage return as whitespace
        #[arg(long)]
        legacy_whitespace: bool,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn ok_report(value: &JsonValue) -> serde_json::Value {
    match value.as_f64() {
        Some(n) => json!({ "ok": { "type": value.get_type(), "number": n } }),
        None => json!({ "ok": { "type": value.get_type() } }),
    }
}

fn err_report(err: &ParseError) -> serde_json::Value {
    json!({ "err": { "code": err.code(), "name": err.name() } })
}

fn run_parse(file: Option<PathBuf>, legacy_whitespace: bool) -> ExitCode {
    let input = match read_input(file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: failed to read input: {}", e);
            return ExitCode::from(2);
        }
    };
    debug!(bytes = input.len(), "read input");

    let options = if legacy_whitespace {
        ParseOptions::legacy()
    } else {
        ParseOptions::standard()
    };

    match parse_with_options(&input, options) {
        Ok(value) => {
            println!("{}", ok_report(&value));
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", err_report(&err));
            ExitCode::from(1)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some(Commands::Parse {
            file,
            legacy_whitespace,
        }) => run_parse(file, legacy_whitespace),
        None => {
            println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}
