//! Error types for snmp-utils.
//!
//! Only target parsing can fail. Address classification and display
//! sanitizing are total and never return an [`Error`].
//!
//! # Error Handling
//!
//! Errors are boxed for efficiency: `Result<T> = Result<T, Box<Error>>`.
//!
//! ```rust
//! use snmp_utils::{Error, parse_connection_string};
//!
//! match parse_connection_string("10.0.0.1:161", Some("162"), false) {
//!     Ok(spec) => println!("dialing {}", spec),
//!     Err(e) => match &*e {
//!         Error::AmbiguousPort { hostname, port } => {
//!             println!("{} already has a port, refusing {}", hostname, port);
//!         }
//!         _ => println!("Error: {}", e),
//!     },
//! }
//! ```

/// Result type alias using the library's boxed Error type.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The main error type for all snmp-utils operations.
///
/// ```
/// use snmp_utils::Error;
///
/// fn is_caller_mistake(error: &Error) -> bool {
///     matches!(error, Error::AmbiguousPort { .. })
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A port was passed separately but the hostname already carries one.
    ///
    /// Raised whether or not the two ports agree.
    #[error("port {port} was specified but hostname {hostname} appears to define a port too")]
    AmbiguousPort { hostname: Box<str>, port: Box<str> },

    /// A host parsed in IPv4 mode still contains a colon.
    #[error("invalid IPv4 address: {host}")]
    InvalidAddress { host: Box<str> },

    /// Port string is not a number in `0..=65535`.
    #[error("invalid port: {port}")]
    InvalidPort { port: Box<str> },
}

impl Error {
    /// Box this error (convenience for constructing boxed errors).
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}
