//! Entry types for the hosts document
//!
//! One entry per physical source line. The three line shapes are mutually
//! exclusive, which the [`EntryKind`] sum type enforces structurally: an
//! entry cannot be simultaneously a mapping and a comment line.

use serde::Serialize;

use crate::hosts::location::Position;

/// The shape of one hosts line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EntryKind {
    /// `<ip> <host1> [<host2> ...] [# comment]`
    ///
    /// Hostname order is declaration order; duplicates are permitted.
    /// Degenerate lines are preserved for round-tripping: a domain-only
    /// line has an empty `ip`, an IP-only line has no hostnames. The
    /// trailing comment, when present, includes its `#` marker.
    Mapping {
        ip: String,
        ipv6: bool,
        hostnames: Vec<String>,
        comment: Option<String>,
    },
    /// A full comment line, stored verbatim including the leading `#`.
    Comment { text: String },
    /// A line with no content at all.
    Blank,
}

/// One logical line of a hosts document.
///
/// The position records where the line began in the source; it is
/// diagnostic only and entries created by mutations carry the default
/// `0:0` position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostsEntry {
    pub kind: EntryKind,
    pub position: Position,
}

impl HostsEntry {
    pub fn new(kind: EntryKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.kind, EntryKind::Mapping { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, EntryKind::Comment { .. })
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, EntryKind::Blank)
    }
}
