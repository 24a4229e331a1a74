//! Error types for hosts document operations

use std::fmt;
use std::io;

/// Errors surfaced by parsing, lookup, mutation, and I/O operations.
#[derive(Debug)]
pub enum HostsError {
    /// Empty hostname/IP arguments or malformed IP syntax
    Validation(String),
    /// A lookup found no entry for the hostname
    NotFound(String),
    /// A lookup matched the hostname on more than one entry
    Ambiguous { hostname: String, ips: Vec<String> },
    /// Path resolution, read, or write failure
    Io { context: String, source: io::Error },
}

impl fmt::Display for HostsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostsError::Validation(msg) => write!(f, "{}", msg),
            HostsError::NotFound(hostname) => {
                write!(f, "hostname {} not found", hostname)
            }
            HostsError::Ambiguous { hostname, ips } => {
                write!(
                    f,
                    "hostname {} maps to multiple IPs: {}",
                    hostname,
                    ips.join(", ")
                )
            }
            HostsError::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for HostsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
