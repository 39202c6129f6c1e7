//! CLI support for the `snmp-target` and `snmp-sanitize` tools.
//!
//! Enabled by the `cli` feature.

pub mod args;
pub mod output;
