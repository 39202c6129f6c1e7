//! snmp-sanitize: Make SNMP string values safe to print.
//!
//! Part of the snmp-utils CLI utilities.

use clap::Parser;
use snmp_utils::cli::args::OutputArgs;
use snmp_utils::cli::output::write_values;
use snmp_utils::{DisplayValue, sanitize_for_display, to_display_text};
use std::io::Read;
use std::process::ExitCode;

/// Strip non-printable characters from values, flagging binary content.
///
/// Values are taken from the command line, or read line by line from
/// stdin when none are given.
#[derive(Debug, Parser)]
#[command(name = "snmp-sanitize", version, about)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,

    /// Values to sanitize.
    #[arg(value_name = "VALUE")]
    values: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    args.output.init_tracing();

    let lines = if args.values.is_empty() {
        match read_stdin_lines() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.values
    };

    let sanitized: Vec<String> = lines
        .iter()
        .filter_map(|line| sanitize_for_display(Some(line.as_str())))
        .collect();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_values(&mut stdout, args.output.format, &sanitized) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Read stdin as raw bytes, one value per line.
///
/// Lines need not be valid UTF-8; invalid sequences become U+FFFD and are
/// then flagged by the sanitizer.
fn read_stdin_lines() -> std::io::Result<Vec<String>> {
    let mut raw = Vec::new();
    std::io::stdin().lock().read_to_end(&mut raw)?;

    if raw.is_empty() {
        return Ok(Vec::new());
    }

    // A trailing newline does not start another value
    let body = raw.strip_suffix(b"\n").unwrap_or(&raw);

    Ok(body
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter_map(|line| to_display_text(Some(DisplayValue::Bytes(line))))
        .collect())
}
