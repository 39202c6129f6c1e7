//! snmp-target: Split SNMP target strings into host and port.
//!
//! Part of the snmp-utils CLI utilities.

use clap::Parser;
use snmp_utils::cli::args::{OutputArgs, TargetArgs};
use snmp_utils::cli::output::{TargetReport, write_error, write_targets};
use std::process::ExitCode;

/// Parse SNMP target strings (host, host:port, [ipv6]:port).
#[derive(Debug, Parser)]
#[command(name = "snmp-target", version, about)]
struct Args {
    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    args.output.init_tracing();

    let mut specs = Vec::with_capacity(args.target.targets.len());
    let mut failed = false;

    for input in &args.target.targets {
        match args.target.parse(input) {
            Ok(spec) => specs.push((input.as_str(), spec)),
            Err(e) => {
                write_error(input, &e);
                failed = true;
            }
        }
    }

    let mut reports = Vec::with_capacity(specs.len());
    for (input, spec) in &specs {
        match TargetReport::new(input, spec) {
            Ok(report) => reports.push(report),
            Err(e) => {
                write_error(input, &e);
                failed = true;
            }
        }
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_targets(&mut stdout, args.output.format, &reports) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
