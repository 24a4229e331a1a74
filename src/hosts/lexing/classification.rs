//! Syntactic classification of word tokens
//!
//! `is_ipv4` and `is_ipv6` implement the loose shape checks used to resolve
//! IP candidates during lexing. They are deliberately weaker than real
//! address validation (`999.1.1.1` passes, as does any bracketed string):
//! the lexer only decides what a word *looks like*; the document model
//! validates addresses properly via [`is_valid_ip`] before accepting them.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

/// IPv4 shape: four dot-separated, non-empty, all-numeric octets.
/// No range check on the octets.
pub fn is_ipv4(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// IPv6 shape: anything containing `:`, `[`, or `]`.
pub fn is_ipv6(s: &str) -> bool {
    s.contains(':') || s.contains('[') || s.contains(']')
}

/// Dot-separated labels of letters, digits, hyphens, and underscores; at
/// least two labels, none empty, none starting or ending with `_`.
static DOMAIN_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9_-]*[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9_-]*[A-Za-z0-9])?$")
        .unwrap()
});

/// Whether a string looks like a fully-qualified domain name.
///
/// Not load-bearing for parsing (the grouper accepts any domain-label
/// token); used by callers that want to flag suspicious hostnames.
pub fn is_domain(s: &str) -> bool {
    !is_ipv4(s) && !is_ipv6(s) && DOMAIN_SHAPE.is_match(s)
}

/// Proper IP address validation via the standard library parser.
/// The empty string is always invalid.
pub fn is_valid_ip(ip: &str) -> bool {
    !ip.is_empty() && ip.parse::<IpAddr>().is_ok()
}

/// IPv6 flavor marker for mapping entries: `::1`, a leading `:` or `[`,
/// or `:` in second position.
pub fn ipv6_shaped(text: &str) -> bool {
    text == "::1"
        || text.starts_with(':')
        || text.starts_with('[')
        || text.as_bytes().get(1) == Some(&b':')
}
