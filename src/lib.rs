//! # snmp-utils
//!
//! Small, stateless helpers used around an SNMP client:
//!
//! - Splitting a user supplied target (`10.0.0.1:161`, `[2001:db8::1]:161`,
//!   `router.example.com`) into host and port
//! - Classifying strings as IPv4 or IPv6 literals
//! - Rendering retrieved values for display, flagging binary contamination
//!
//! Nothing here touches the network. Resolution and transport belong to the
//! client that consumes a [`HostSpec`].
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_utils::{HostSpec, parse_connection_string, sanitize_for_display};
//!
//! let spec = parse_connection_string("10.0.0.1:161", None, false).unwrap();
//! assert_eq!(spec, HostSpec::new("10.0.0.1", Some("161")));
//! assert_eq!(spec.to_string(), "10.0.0.1:161");
//!
//! let shown = sanitize_for_display(Some("he\x01llo"));
//! assert_eq!(shown.as_deref(), Some("hello (contains binary)"));
//! ```
//!
//! ## IPv6 Targets
//!
//! ```rust
//! use snmp_utils::{classify, parse_target};
//!
//! assert!(classify("2001:db8::1").is_ipv6);
//!
//! let spec = parse_target("[2001:db8::1]:1161", None).unwrap();
//! assert_eq!(spec.host, "2001:db8::1");
//! assert_eq!(spec.port_number().unwrap(), Some(1161));
//! ```

pub mod address;
pub mod connection;
pub mod error;
pub mod format;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use address::{AddressKind, classify, is_ipv4, is_ipv6};
pub use connection::{HostSpec, TargetConfig, parse_connection_string, parse_target};
pub use error::{Error, Result};
pub use format::sanitize::{BINARY_MARKER, strip_non_printable as sanitize_for_display};
pub use format::text::{DisplayValue, to_display_text};
