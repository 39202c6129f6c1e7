//! Target string parsing.
//!
//! Users hand SNMP tools a single target string that may or may not embed a
//! port: `10.0.0.1`, `10.0.0.1:161`, `[2001:db8::1]:161`, `2001:db8::1`,
//! `router.example.com`. This module splits such strings into a [`HostSpec`]
//! without resolving anything.
//!
//! Two grammars are used, selected by the caller:
//!
//! | Mode | Pattern                                   | Port digits |
//! |------|-------------------------------------------|-------------|
//! | IPv4 | dotted quad, optional `:port`             | 1-5         |
//! | IPv6 | optional `[`..`]` around host, `:port`    | 1+          |
//!
//! Strings that match neither are returned untouched so plain DNS names
//! reach the resolver as given. A separately supplied port is only accepted
//! for such pass-through strings; a matched literal takes its port inline.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::address::is_ipv6;
use crate::error::{Error, Result};

static IPV4_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})(?::([0-9]{1,5}))?$")
        .expect("IPv4 target pattern is valid")
});

static IPV6_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[?([:\w.]+)\]?(?::([0-9]+))?$").expect("IPv6 target pattern is valid")
});

// DNS name with an inline port, only consulted by `parse_target`.
static NAMED_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^:\[\]\s]+):([0-9]{1,5})$").expect("named target pattern is valid")
});

/// A host with an optional port, split out of a target string.
///
/// The port is kept as text, exactly as the user wrote it. Use
/// [`HostSpec::port_number`] to get a numeric port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostSpec {
    /// Host name or address literal, without brackets.
    pub host: String,
    /// Port, if one was given inline or separately.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub port: Option<String>,
}

impl HostSpec {
    /// Create a host spec from its parts.
    pub fn new(host: impl Into<String>, port: Option<&str>) -> Self {
        Self {
            host: host.into(),
            port: port.map(str::to_owned),
        }
    }

    /// Numeric port, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPort`] if the port is not a decimal number
    /// in `0..=65535`.
    ///
    /// ```
    /// use snmp_utils::HostSpec;
    ///
    /// assert_eq!(HostSpec::new("10.0.0.1", Some("161")).port_number().unwrap(), Some(161));
    /// assert_eq!(HostSpec::new("10.0.0.1", None).port_number().unwrap(), None);
    /// assert!(HostSpec::new("10.0.0.1", Some("99999")).port_number().is_err());
    /// ```
    pub fn port_number(&self) -> Result<Option<u16>> {
        let Some(port) = self.port.as_deref() else {
            return Ok(None);
        };

        // u16::from_str accepts a leading '+', which is not a port
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPort { port: port.into() }.boxed());
        }

        port.parse::<u16>()
            .map(Some)
            .map_err(|_| Error::InvalidPort { port: port.into() }.boxed())
    }
}

/// Formats as `host` or `host:port`.
///
/// Hosts containing a colon are bracketed when a port follows, so the
/// output can be handed back to anything that takes `host:port`.
impl fmt::Display for HostSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.port {
            Some(port) if self.host.contains(':') => write!(f, "[{}]:{}", self.host, port),
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

/// Split `hostname` into host and port.
///
/// `is_ipv6` selects the grammar (see the [module docs](self)). If
/// `hostname` matches, the host and any inline port are extracted, and a
/// separately supplied `explicit_port` is an error whether or not an inline
/// port is present. If `hostname` does not match, it is returned unchanged
/// along with `explicit_port`.
///
/// An empty `explicit_port` counts as absent.
///
/// # Errors
///
/// - [`Error::AmbiguousPort`] if `hostname` matches and `explicit_port` is
///   set.
/// - [`Error::InvalidAddress`] if, in IPv4 mode, the resulting host contains
///   a colon (for example a raw IPv6 literal).
///
/// # Examples
///
/// ```
/// use snmp_utils::{Error, HostSpec, parse_connection_string};
///
/// let spec = parse_connection_string("10.0.0.1:161", None, false).unwrap();
/// assert_eq!(spec, HostSpec::new("10.0.0.1", Some("161")));
///
/// let spec = parse_connection_string("[2001:db8::1]:161", None, true).unwrap();
/// assert_eq!(spec, HostSpec::new("2001:db8::1", Some("161")));
///
/// let err = parse_connection_string("2001:db8::1", None, false).unwrap_err();
/// assert!(matches!(*err, Error::InvalidAddress { .. }));
/// ```
pub fn parse_connection_string(
    hostname: &str,
    explicit_port: Option<&str>,
    is_ipv6: bool,
) -> Result<HostSpec> {
    let explicit_port = explicit_port.filter(|p| !p.is_empty());
    let pattern = if is_ipv6 { &*IPV6_TARGET } else { &*IPV4_TARGET };

    let Some(caps) = pattern.captures(hostname) else {
        tracing::trace!(target: "snmp_utils::connection", { snmp.hostname = hostname, snmp.ipv6 = is_ipv6 }, "hostname passed through unchanged");
        return check_family(HostSpec::new(hostname, explicit_port), is_ipv6);
    };

    // A matched literal may carry a port, so a separate one is never merged
    if let Some(port) = explicit_port {
        return Err(ambiguous_port(hostname, port));
    }

    // Group 1 always participates in a match
    let host = caps.get(1).map_or(hostname, |m| m.as_str());
    let port = caps.get(2).map(|m| m.as_str());

    check_family(HostSpec::new(host, port), is_ipv6)
}

/// Split `hostname` into host and port, inferring the address family.
///
/// IPv6 mode is used when `hostname` is bracketed or is a bare IPv6
/// literal. Otherwise IPv4 mode is used, with one addition: a DNS name
/// followed by `:port` (`router.example.com:1161`) is split as well.
///
/// # Errors
///
/// Same as [`parse_connection_string`].
///
/// ```
/// use snmp_utils::{HostSpec, parse_target};
///
/// assert_eq!(
///     parse_target("router.example.com:1161", None).unwrap(),
///     HostSpec::new("router.example.com", Some("1161"))
/// );
/// assert_eq!(
///     parse_target("router.example.com", Some("161")).unwrap(),
///     HostSpec::new("router.example.com", Some("161"))
/// );
/// assert!(parse_target("fe80::1", Some("161")).is_err());
/// ```
pub fn parse_target(hostname: &str, explicit_port: Option<&str>) -> Result<HostSpec> {
    if hostname.starts_with('[') || is_ipv6(hostname) {
        return parse_connection_string(hostname, explicit_port, true);
    }

    if !IPV4_TARGET.is_match(hostname)
        && let Some(caps) = NAMED_TARGET.captures(hostname)
    {
        if let Some(port) = explicit_port.filter(|p| !p.is_empty()) {
            return Err(ambiguous_port(hostname, port));
        }
        return Ok(HostSpec::new(&caps[1], Some(&caps[2])));
    }

    parse_connection_string(hostname, explicit_port, false)
}

fn check_family(spec: HostSpec, is_ipv6: bool) -> Result<HostSpec> {
    if !is_ipv6 && spec.host.contains(':') {
        tracing::debug!(target: "snmp_utils::connection", { snmp.host = %spec.host }, "colon in host parsed as IPv4");
        return Err(Error::InvalidAddress {
            host: spec.host.into(),
        }
        .boxed());
    }
    Ok(spec)
}

fn ambiguous_port(hostname: &str, port: &str) -> Box<Error> {
    tracing::debug!(target: "snmp_utils::connection", { snmp.hostname = hostname, snmp.port = port }, "separate port given for a target that carries its own");
    Error::AmbiguousPort {
        hostname: hostname.into(),
        port: port.into(),
    }
    .boxed()
}

/// Declarative description of an SNMP target, as found in config files.
///
/// ```
/// use snmp_utils::{HostSpec, TargetConfig};
///
/// let spec = TargetConfig::new("switch01.lab").port(1161).resolve().unwrap();
/// assert_eq!(spec, HostSpec::new("switch01.lab", Some("1161")));
///
/// // An IP literal takes its port inline
/// let spec = TargetConfig::new("10.0.0.1:1161").resolve().unwrap();
/// assert_eq!(spec, HostSpec::new("10.0.0.1", Some("1161")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetConfig {
    /// Target string, possibly with an inline port.
    pub host: String,
    /// Port given separately from `host`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub port: Option<u16>,
    /// Force IPv6 (`true`) or IPv4 (`false`) parsing. Inferred when unset.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub ipv6: Option<bool>,
}

impl TargetConfig {
    /// Create a config for `host` with port and family left unset.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Set a separate port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Force the address family used for parsing.
    pub fn ipv6(mut self, ipv6: bool) -> Self {
        self.ipv6 = Some(ipv6);
        self
    }

    /// Parse into a [`HostSpec`].
    ///
    /// Uses [`parse_connection_string`] when `ipv6` is set and
    /// [`parse_target`] otherwise.
    pub fn resolve(&self) -> Result<HostSpec> {
        let port = self.port.map(|p| p.to_string());
        match self.ipv6 {
            Some(ipv6) => parse_connection_string(&self.host, port.as_deref(), ipv6),
            None => parse_target(&self.host, port.as_deref()),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn host_spec_roundtrip() {
        let spec = HostSpec::new("2001:db8::1", Some("161"));
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"host":"2001:db8::1","port":"161"}"#);
        let back: HostSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn host_spec_omits_missing_port() {
        let spec = HostSpec::new("10.0.0.1", None);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"host":"10.0.0.1"}"#);
    }

    #[test]
    fn target_config_defaults() {
        let config: TargetConfig = serde_json::from_str(r#"{"host":"10.0.0.1:161"}"#).unwrap();
        assert_eq!(config, TargetConfig::new("10.0.0.1:161"));
        assert_eq!(
            config.resolve().unwrap(),
            HostSpec::new("10.0.0.1", Some("161"))
        );

        let config: TargetConfig =
            serde_json::from_str(r#"{"host":"snmp-lab","port":1161,"ipv6":true}"#).unwrap();
        assert_eq!(
            config.resolve().unwrap(),
            HostSpec::new("snmp-lab", Some("1161"))
        );

        let config: TargetConfig =
            serde_json::from_str(r#"{"host":"fe80::1","port":1161,"ipv6":true}"#).unwrap();
        assert!(matches!(
            *config.resolve().unwrap_err(),
            Error::AmbiguousPort { .. }
        ));

        let config: TargetConfig =
            serde_json::from_str(r#"{"host":"[fe80::1]:161","port":1161}"#).unwrap();
        assert!(matches!(
            *config.resolve().unwrap_err(),
            Error::AmbiguousPort { .. }
        ));
    }
}
