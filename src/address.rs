//! IP literal classification.
//!
//! Syntax only: a string is classified by whether it parses as an
//! [`Ipv4Addr`] or [`Ipv6Addr`]. Nothing is resolved.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Address family of a candidate host string.
///
/// At most one of the two flags is ever set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AddressKind {
    pub is_ipv4: bool,
    pub is_ipv6: bool,
}

impl AddressKind {
    /// True if the candidate is a literal of either family.
    pub fn is_ip(&self) -> bool {
        self.is_ipv4 || self.is_ipv6
    }
}

/// Classify a candidate host string.
///
/// # Examples
///
/// ```
/// use snmp_utils::address::classify;
///
/// assert!(classify("192.0.2.1").is_ipv4);
/// assert!(classify("2001:db8::1").is_ipv6);
/// assert!(!classify("router.example.com").is_ip());
/// ```
pub fn classify(candidate: &str) -> AddressKind {
    AddressKind {
        is_ipv4: is_ipv4(candidate),
        is_ipv6: is_ipv6(candidate),
    }
}

/// True if `candidate` is a dotted-quad IPv4 literal.
///
/// Octets with leading zeros are rejected (`01.2.3.4`).
pub fn is_ipv4(candidate: &str) -> bool {
    candidate.parse::<Ipv4Addr>().is_ok()
}

/// True if `candidate` is an IPv6 literal.
///
/// Accepts `::` compression, an embedded dotted-quad tail
/// (`::ffff:192.0.2.1`) and a non-empty zone suffix (`fe80::1%eth0`).
pub fn is_ipv6(candidate: &str) -> bool {
    let addr = match candidate.split_once('%') {
        Some((addr, zone)) if is_zone_id(zone) => addr,
        Some(_) => return false,
        None => candidate,
    };
    addr.parse::<Ipv6Addr>().is_ok()
}

fn is_zone_id(zone: &str) -> bool {
    !zone.is_empty() && !zone.contains(['%', '/'])
}
