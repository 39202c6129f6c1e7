//! Command-line argument structures for the snmp-utils CLI tools.
//!
//! This module provides reusable clap argument structures for the
//! `snmp-target` and `snmp-sanitize` tools.

use clap::{Parser, ValueEnum};

use crate::connection::{HostSpec, parse_connection_string, parse_target};
use crate::error::Result;

/// Output format for CLI tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output for scripting.
    Json,
}

/// Target selection arguments.
#[derive(Debug, Parser)]
pub struct TargetArgs {
    /// Targets: host, host:port, or [ipv6]:port.
    #[arg(required = true, value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Port for targets given by name. Address literals take it inline.
    #[arg(short = 'p', long = "port")]
    pub port: Option<String>,

    /// Parse targets as IPv6.
    #[arg(short = '6', long = "ipv6", conflicts_with = "ipv4")]
    pub ipv6: bool,

    /// Parse targets as IPv4.
    #[arg(short = '4', long = "ipv4")]
    pub ipv4: bool,
}

impl TargetArgs {
    /// Forced address family: `Some(true)` for IPv6, `Some(false)` for
    /// IPv4, `None` to infer per target.
    pub fn family(&self) -> Option<bool> {
        if self.ipv6 {
            Some(true)
        } else if self.ipv4 {
            Some(false)
        } else {
            None
        }
    }

    /// Parse one target string using the selected family and port.
    pub fn parse(&self, target: &str) -> Result<HostSpec> {
        match self.family() {
            Some(ipv6) => parse_connection_string(target, self.port.as_deref(), ipv6),
            None => parse_target(target, self.port.as_deref()),
        }
    }
}

/// Output control arguments.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Output format: human or json.
    #[arg(short = 'O', long = "output", default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging (snmp_utils=debug).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Enable trace logging (snmp_utils=trace).
    #[arg(short = 'D', long = "trace")]
    pub trace: bool,
}

impl OutputArgs {
    /// Initialize tracing based on debug/trace flags.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.trace {
            "snmp_utils=trace"
        } else if self.debug {
            "snmp_utils=debug"
        } else {
            "snmp_utils=warn"
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init();
    }
}
