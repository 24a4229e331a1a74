//! Line grouper for the hosts format
//!
//! Consumes the token stream and produces one [`HostsEntry`] per physical
//! source line, in source order. The grouper keeps a draft of the line in
//! progress and flushes it whenever a token arrives from a different line.
//! A draft is emitted only if it carries content (an IP, at least one
//! hostname, a comment line, or an explicit blank); a draft that somehow
//! gathered nothing is dropped rather than emitted as a stray blank.
//!
//! Whitespace and unrecognized tokens are ignored, so a line containing
//! only junk characters rounds-trips as a blank line.
//!
//! Policy: if a line carries more than one IP token, the last one wins and
//! a warning is logged. Lines with hostnames but no IP (and vice versa)
//! are preserved as degenerate mapping entries; lookups and aggregation
//! decide for themselves whether to skip those.

use log::warn;

use crate::hosts::entry::{EntryKind, HostsEntry};
use crate::hosts::lexing::classification::ipv6_shaped;
use crate::hosts::lexing::lex;
use crate::hosts::lexing::tokens::{Token, TokenKind};
use crate::hosts::location::Position;

/// The line in progress, before its shape is known.
#[derive(Default)]
struct EntryDraft {
    position: Position,
    ip: Option<String>,
    ipv6: bool,
    hostnames: Vec<String>,
    comment: Option<String>,
    comment_line: bool,
    blank: bool,
}

impl EntryDraft {
    fn start(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Resolve the draft into an entry, or nothing if it has no content.
    fn finish(self) -> Option<HostsEntry> {
        let kind = if self.blank {
            EntryKind::Blank
        } else if self.comment_line {
            EntryKind::Comment {
                text: self.comment.unwrap_or_default(),
            }
        } else if self.ip.is_some() || !self.hostnames.is_empty() {
            EntryKind::Mapping {
                ip: self.ip.unwrap_or_default(),
                ipv6: self.ipv6,
                hostnames: self.hostnames,
                comment: self.comment,
            }
        } else {
            return None;
        };
        Some(HostsEntry::new(kind, self.position))
    }
}

/// Group a token stream into entries, one per physical source line.
pub fn parse_tokens(tokens: Vec<Token>) -> Vec<HostsEntry> {
    let mut entries = Vec::new();
    let mut draft: Option<EntryDraft> = None;
    let mut current_line = 0;

    for token in tokens {
        if token.position.line != current_line {
            if let Some(finished) = draft.take() {
                entries.extend(finished.finish());
            }
            current_line = token.position.line;
        }

        match token.kind {
            TokenKind::Comment => {
                // Line-leading comment makes the whole line a comment entry;
                // on a line that already has content it is a trailing comment.
                let leads_the_line = draft.is_none();
                let in_progress = draft.get_or_insert_with(|| EntryDraft::start(token.position));
                if leads_the_line {
                    in_progress.comment_line = true;
                }
                in_progress.comment = Some(token.text);
            }
            TokenKind::Ip => {
                let in_progress = draft.get_or_insert_with(|| EntryDraft::start(token.position));
                if in_progress.ip.is_some() {
                    warn!(
                        "line {}: multiple IP tokens, keeping {:?}",
                        token.position.line, token.text
                    );
                }
                in_progress.ipv6 = ipv6_shaped(&token.text);
                in_progress.ip = Some(token.text);
            }
            TokenKind::Domain => {
                draft
                    .get_or_insert_with(|| EntryDraft::start(token.position))
                    .hostnames
                    .push(token.text);
            }
            TokenKind::Newline => {
                // An otherwise empty line becomes an explicit blank entry
                if draft.is_none() {
                    let mut started = EntryDraft::start(token.position);
                    started.blank = true;
                    draft = Some(started);
                }
            }
            TokenKind::Eof => {
                if let Some(finished) = draft.take() {
                    entries.extend(finished.finish());
                }
            }
            TokenKind::Whitespace | TokenKind::Unrecognized => {}
        }
    }

    entries
}

/// Parse hosts text into entries. Pure, no I/O.
pub fn parse_content(source: &str) -> Vec<HostsEntry> {
    parse_tokens(lex(source))
}
