//! The hosts document model
//!
//! A [`HostsFile`] owns the ordered entry sequence and exposes the query and
//! mutation operations over it. Order is load-bearing: it determines render
//! order, and mutations edit entries in place wherever possible so that
//! load/modify/save cycles preserve the file's layout.
//!
//! Matching rules, used consistently by every operation: hostname
//! comparisons are ASCII case-insensitive, IP comparisons are exact-string
//! (no normalization of leading zeros or IPv6 compression).

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::hosts::entry::{EntryKind, HostsEntry};
use crate::hosts::error::HostsError;
use crate::hosts::lexing::classification::{ipv6_shaped, is_valid_ip};
use crate::hosts::parsing::parse_content;

/// All hostnames sharing one exact IP string. Derived on demand, never
/// stored on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpDomainPair {
    pub ip: String,
    pub domains: Vec<String>,
}

/// An in-memory hosts document: an ordered sequence of entries plus the
/// storage path it was loaded from (if any).
#[derive(Debug, Clone, Default)]
pub struct HostsFile {
    pub entries: Vec<HostsEntry>,
    pub(crate) path: Option<PathBuf>,
}

impl HostsFile {
    /// Create an empty document with no storage path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse hosts text into a document. Pure, no I/O.
    pub fn parse(source: &str) -> Self {
        Self {
            entries: parse_content(source),
            path: None,
        }
    }

    /// The path the document was loaded from or last saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append a new mapping entry. Performs no validation and no conflict
    /// checking; that is the caller's responsibility.
    pub fn add_entry(&mut self, ip: &str, hostnames: Vec<String>, comment: Option<String>) {
        self.entries.push(HostsEntry::new(
            EntryKind::Mapping {
                ip: ip.to_string(),
                ipv6: ipv6_shaped(ip),
                hostnames,
                comment,
            },
            Default::default(),
        ));
    }

    /// Bind `hostname` to `ip`, editing the document minimally.
    ///
    /// Only the first entry containing the hostname (case-insensitively) is
    /// considered. If it already has this exact IP, nothing changes. If the
    /// hostname is alone on its entry, the IP is updated in place. If it
    /// shares the entry with other hostnames, it is detached from them and
    /// appended as a fresh single-hostname entry, so the siblings keep
    /// their old IP. An unknown hostname is appended as a new entry.
    pub fn set_host_ip(&mut self, hostname: &str, ip: &str) -> Result<(), HostsError> {
        if hostname.is_empty() {
            return Err(HostsError::Validation("hostname must not be empty".into()));
        }
        if !is_valid_ip(ip) {
            debug!("rejecting malformed IP {:?}", ip);
            return Err(HostsError::Validation(format!("invalid IP address: {ip}")));
        }

        let mut needs_append = true;
        for entry in &mut self.entries {
            let EntryKind::Mapping {
                ip: entry_ip,
                ipv6,
                hostnames,
                ..
            } = &mut entry.kind
            else {
                continue;
            };
            let Some(index) = hostnames
                .iter()
                .position(|h| h.eq_ignore_ascii_case(hostname))
            else {
                continue;
            };

            if entry_ip.as_str() == ip {
                return Ok(());
            }
            if hostnames.len() == 1 {
                *entry_ip = ip.to_string();
                *ipv6 = ipv6_shaped(ip);
                needs_append = false;
            } else {
                // Detach from the shared entry so the siblings keep their IP
                hostnames.remove(index);
            }
            break;
        }

        if needs_append {
            self.add_entry(ip, vec![hostname.to_string()], None);
        }
        Ok(())
    }

    /// Remove every mapping of `hostname`, case-insensitively.
    ///
    /// All occurrences are removed, across entries and within them; an
    /// entry left with no hostnames is deleted outright, so the hostname
    /// is guaranteed absent afterwards. Returns whether anything was
    /// removed; a hostname that never appears is not an error.
    pub fn remove_host(&mut self, hostname: &str) -> Result<bool, HostsError> {
        if hostname.is_empty() {
            return Err(HostsError::Validation("hostname must not be empty".into()));
        }

        let mut modified = false;
        let mut i = 0;
        while i < self.entries.len() {
            let mut delete_entry = false;
            if let EntryKind::Mapping { hostnames, .. } = &mut self.entries[i].kind {
                let before = hostnames.len();
                hostnames.retain(|h| !h.eq_ignore_ascii_case(hostname));
                if hostnames.len() != before {
                    modified = true;
                    delete_entry = hostnames.is_empty();
                }
            }
            if delete_entry {
                self.entries.remove(i);
            } else {
                i += 1;
            }
        }
        Ok(modified)
    }

    /// Look up the IP bound to `hostname`.
    ///
    /// Errors with `Ambiguous` when the hostname appears on more than one
    /// entry, even if all those entries carry the same IP.
    pub fn get_host_ip(&self, hostname: &str) -> Result<String, HostsError> {
        if hostname.is_empty() {
            return Err(HostsError::Validation("hostname must not be empty".into()));
        }

        let mut ips = Vec::new();
        for entry in &self.entries {
            if let EntryKind::Mapping { ip, hostnames, .. } = &entry.kind {
                if hostnames.iter().any(|h| h.eq_ignore_ascii_case(hostname)) {
                    ips.push(ip.clone());
                }
            }
        }

        match ips.len() {
            0 => {
                debug!("hostname {:?} not found", hostname);
                Err(HostsError::NotFound(hostname.to_string()))
            }
            1 => Ok(ips.pop().expect("length checked")),
            _ => Err(HostsError::Ambiguous {
                hostname: hostname.to_string(),
                ips,
            }),
        }
    }

    /// All hostnames bound to exactly this IP string, in entry order.
    pub fn get_hosts_by_ip(&self, ip: &str) -> Result<Vec<String>, HostsError> {
        if ip.is_empty() {
            return Err(HostsError::Validation("IP must not be empty".into()));
        }

        let mut result = Vec::new();
        for entry in &self.entries {
            if let EntryKind::Mapping {
                ip: entry_ip,
                hostnames,
                ..
            } = &entry.kind
            {
                if entry_ip == ip {
                    result.extend(hostnames.iter().cloned());
                }
            }
        }
        Ok(result)
    }

    /// Bind all `hostnames` to `ip` on one shared entry.
    ///
    /// Existing mappings of the given hostnames are removed first
    /// (best-effort; hostnames that are absent are simply skipped), then a
    /// single new entry is appended. Hostnames co-located with unrelated
    /// siblings lose that association; the siblings themselves are left
    /// untouched.
    pub fn set_multiple_host_ips(
        &mut self,
        hostnames: Vec<String>,
        ip: &str,
    ) -> Result<(), HostsError> {
        if hostnames.is_empty() {
            return Err(HostsError::Validation(
                "hostname list must not be empty".into(),
            ));
        }
        if !is_valid_ip(ip) {
            debug!("rejecting malformed IP {:?}", ip);
            return Err(HostsError::Validation(format!("invalid IP address: {ip}")));
        }

        for hostname in &hostnames {
            let _ = self.remove_host(hostname);
        }
        self.add_entry(ip, hostnames, None);
        Ok(())
    }

    /// Group every mapping entry's hostnames by exact IP string.
    ///
    /// Hostname order within a pair is entry-encounter order; the order of
    /// the pairs themselves is unspecified (hash-map backed). Consumers
    /// that need deterministic output sort at the boundary.
    pub fn get_all_ip_domain_pairs(&self) -> Vec<IpDomainPair> {
        let mut by_ip: HashMap<String, Vec<String>> = HashMap::new();

        for entry in &self.entries {
            if let EntryKind::Mapping { ip, hostnames, .. } = &entry.kind {
                if ip.is_empty() || hostnames.is_empty() {
                    continue;
                }
                by_ip
                    .entry(ip.clone())
                    .or_default()
                    .extend(hostnames.iter().cloned());
            }
        }

        by_ip
            .into_iter()
            .map(|(ip, domains)| IpDomainPair { ip, domains })
            .collect()
    }

    /// Filter the aggregated pairs by exact IP and/or hostname.
    ///
    /// With a domain filter, each kept pair's hostname list is narrowed to
    /// the case-insensitive matches only.
    pub fn filter_ip_domain_pairs(
        &self,
        ip: Option<&str>,
        domain: Option<&str>,
    ) -> Vec<IpDomainPair> {
        let mut results = Vec::new();
        for pair in self.get_all_ip_domain_pairs() {
            if let Some(want) = ip {
                if pair.ip != want {
                    continue;
                }
            }
            match domain {
                Some(want) => {
                    let matched: Vec<String> = pair
                        .domains
                        .iter()
                        .filter(|d| d.eq_ignore_ascii_case(want))
                        .cloned()
                        .collect();
                    if matched.is_empty() {
                        continue;
                    }
                    results.push(IpDomainPair {
                        ip: pair.ip,
                        domains: matched,
                    });
                }
                None => results.push(pair),
            }
        }
        results
    }
}

/// Render the document back to hosts text.
///
/// Mapping entries use a tab between fields regardless of the original
/// whitespace, so rendering is structurally (not byte-) faithful. The
/// output always ends with exactly one trailing newline.
impl fmt::Display for HostsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match &entry.kind {
                EntryKind::Comment { text } => lines.push(text.clone()),
                EntryKind::Blank => lines.push(String::new()),
                EntryKind::Mapping {
                    ip,
                    hostnames,
                    comment,
                    ..
                } => {
                    let mut line = ip.clone();
                    for hostname in hostnames {
                        line.push('\t');
                        line.push_str(hostname);
                    }
                    if let Some(comment) = comment {
                        line.push('\t');
                        line.push_str(comment);
                    }
                    lines.push(line);
                }
            }
        }
        writeln!(f, "{}", lines.join("\n"))
    }
}
