//! Aztec Code encoder CLI
//!
//! Encodes a payload into an Aztec Code symbol and renders it as ASCII art,
//! to standard output or to a file.

use std::fmt::Write as _;
use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aztec_encoder::{encode_symbol, Error};

/// Encode text or bytes into an Aztec Code symbol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Payload to encode
    payload: String,

    /// Error correction redundancy, as a percentage of total codewords (0-100)
    #[arg(long, env = "AZTEC_EC_PERCENT", default_value = "23")]
    ec_percent: u8,

    /// Canonical encoding name for an ECI prefix (e.g. "utf-8", "iso8859-1")
    #[arg(long, env = "AZTEC_ENCODING")]
    encoding: Option<String>,

    /// Write the rendered symbol to this file instead of standard output
    #[arg(long)]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    info!(payload_len = args.payload.len(), ec_percent = args.ec_percent, "encoding payload");

    let result = encode_symbol(
        args.payload.as_bytes(),
        args.ec_percent,
        args.encoding.as_deref(),
    )?;

    info!(
        compact = result.compact,
        layers = result.layers,
        side = result.side,
        "symbol ready"
    );

    let art = render_ascii(&result.matrix);
    match &args.output {
        Some(path) => fs::write(path, art)?,
        None => println!("{art}"),
    }

    Ok(())
}

fn render_ascii(matrix: &[Vec<bool>]) -> String {
    let mut out = String::new();
    for row in matrix {
        for &dark in row {
            out.push(if dark { '#' } else { ' ' });
        }
        writeln!(out).expect("writing to a String never fails");
    }
    out
}

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_ascii_uses_hash_and_space() {
        let matrix = vec![vec![true, false], vec![false, true]];
        assert_eq!(render_ascii(&matrix), "# \n #\n");
    }
}
