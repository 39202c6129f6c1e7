//! Formatting utilities for values retrieved from SNMP agents.
//!
//! OCTET STRING values are arbitrary bytes. Agents routinely return binary
//! data (MAC addresses, packed counters, vendor blobs) in objects that
//! tools then print as text. The helpers here make such values safe to
//! show on a terminal or in a log line.
//!
//! ## Sanitizing
//!
//! [`sanitize::strip_non_printable`] drops anything outside printable
//! ASCII and tags the result so the reader knows data was lost.
//!
//! ```
//! use snmp_utils::format::sanitize::strip_non_printable;
//!
//! assert_eq!(strip_non_printable(Some("up")).as_deref(), Some("up"));
//! assert_eq!(
//!     strip_non_printable(Some("\x00\x1a+<M^")).as_deref(),
//!     Some("+<M^ (contains binary)")
//! );
//! ```
//!
//! ## Text Conversion
//!
//! [`text::to_display_text`] turns a [`text::DisplayValue`] into a string.
//!
//! ```
//! use snmp_utils::format::text::{DisplayValue, to_display_text};
//!
//! assert_eq!(to_display_text(Some(DisplayValue::from(42i64))).as_deref(), Some("42"));
//! assert_eq!(to_display_text(Some(DisplayValue::from(&b"eth0"[..]))).as_deref(), Some("eth0"));
//! ```
//!
//! ## Hex Encoding
//!
//! The [`hex`] module provides a lazy hex formatter for logging raw bytes.

pub mod hex;
pub mod sanitize;
pub mod text;
