//! Output formatting for the CLI tools.

use std::io::{self, Write};

use serde::Serialize;

use super::args::OutputFormat;
use crate::address::classify;
use crate::connection::HostSpec;
use crate::error::Error;

/// Parse result for one target, as written by `snmp-target`.
#[derive(Debug, Serialize)]
pub struct TargetReport<'a> {
    /// Target as given on the command line.
    pub input: &'a str,
    /// Host and port, ready to dial.
    pub target: String,
    pub host: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// `ipv4`, `ipv6` or `name`.
    pub family: &'static str,
}

impl<'a> TargetReport<'a> {
    /// Build a report, validating the port.
    pub fn new(input: &'a str, spec: &'a HostSpec) -> crate::Result<Self> {
        let kind = classify(&spec.host);
        let family = if kind.is_ipv4 {
            "ipv4"
        } else if kind.is_ipv6 {
            "ipv6"
        } else {
            "name"
        };

        Ok(Self {
            input,
            target: spec.to_string(),
            host: &spec.host,
            port: spec.port_number()?,
            family,
        })
    }
}

/// Write target reports in the requested format.
pub fn write_targets<W: Write>(
    out: &mut W,
    format: OutputFormat,
    reports: &[TargetReport<'_>],
) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            for report in reports {
                writeln!(out, "{}", report.input)?;
                writeln!(out, "  target: {}", report.target)?;
                writeln!(out, "  host:   {}", report.host)?;
                match report.port {
                    Some(port) => writeln!(out, "  port:   {}", port)?,
                    None => writeln!(out, "  port:   (default)")?,
                }
                writeln!(out, "  family: {}", report.family)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)
        }
    }
}

/// Write sanitized values, one per line or as a JSON array.
pub fn write_values<W: Write>(out: &mut W, format: OutputFormat, values: &[String]) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            for value in values {
                writeln!(out, "{}", value)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, values)?;
            writeln!(out)
        }
    }
}

/// Write an error for `input` to stderr.
pub fn write_error(input: &str, error: &Error) {
    eprintln!("Error: {}: {}", input, error);
}
