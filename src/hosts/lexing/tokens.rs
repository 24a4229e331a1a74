//! Token definitions for the hosts format
//!
//! Two layers, in the usual split:
//!
//! Raw tokens:
//!     Produced directly by the logos lexer. Purely lexical classes; a run of
//!     digits/colons is only an *IP candidate* at this layer, because deciding
//!     whether `1.2.3` is an address or a (numeric-looking) hostname requires
//!     inspecting the whole accumulated text.
//!
//! Tokens:
//!     The classified form consumed by the grouper. Carries the final
//!     [`TokenKind`], the exact matched text, and a 1-based source position.
//!     The sequence always ends with exactly one `Eof` token.

use logos::Logos;
use serde::Serialize;

use crate::hosts::location::Position;

/// Raw lexical classes produced by the logos pass.
///
/// Classification is longest-match: `#` swallows the rest of the line, runs
/// of spaces and tabs merge into one token, and the two word classes are
/// distinguished by their first character (digit/colon vs. letter). Anything
/// else falls through to a single-character `Unrecognized` token, so raw
/// tokenization never fails.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    /// `#` up to (but excluding) the next line break, marker included
    #[regex(r"#[^\n]*")]
    Comment,

    /// A run of spaces and tabs, merged
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    /// Digit/colon start, greedy over digits `.` `:` `[` `]` `/`.
    /// Resolved to `Ip` or `Domain` by the classification pass.
    #[regex(r"[0-9:][0-9.:\[\]/]*")]
    IpCandidate,

    /// Letter start, greedy over letters, digits, `.`, `-`
    #[regex(r"[A-Za-z][A-Za-z0-9.-]*")]
    DomainLabel,

    /// Any other single character
    #[regex(r".", priority = 1)]
    Unrecognized,
}

/// Final token classification consumed by the grouper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Ip,
    Domain,
    Comment,
    Whitespace,
    Newline,
    Unrecognized,
    Eof,
}

/// A classified token with its matched text and source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: &str) -> Vec<RawToken> {
        RawToken::lexer(source)
            .map(|r| r.unwrap_or(RawToken::Unrecognized))
            .collect()
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            raw("# a comment\n"),
            vec![RawToken::Comment, RawToken::Newline]
        );
    }

    #[test]
    fn test_whitespace_merges() {
        assert_eq!(raw(" \t  \t"), vec![RawToken::Whitespace]);
    }

    #[test]
    fn test_ip_candidate_is_greedy() {
        assert_eq!(raw("127.0.0.1"), vec![RawToken::IpCandidate]);
        assert_eq!(raw("::1"), vec![RawToken::IpCandidate]);
        assert_eq!(raw("10.0.0.0/8"), vec![RawToken::IpCandidate]);
    }

    #[test]
    fn test_domain_label() {
        assert_eq!(raw("example.com"), vec![RawToken::DomainLabel]);
        assert_eq!(raw("my-host"), vec![RawToken::DomainLabel]);
    }

    #[test]
    fn test_digit_start_stops_at_letters() {
        // A digit-led word only consumes IP characters; the letter tail is a
        // separate domain label.
        assert_eq!(
            raw("1abc"),
            vec![RawToken::IpCandidate, RawToken::DomainLabel]
        );
    }

    #[test]
    fn test_unrecognized_single_characters() {
        assert_eq!(
            raw("a_b"),
            vec![
                RawToken::DomainLabel,
                RawToken::Unrecognized,
                RawToken::DomainLabel
            ]
        );
        assert_eq!(raw("@"), vec![RawToken::Unrecognized]);
    }

    #[test]
    fn test_mapping_line_shape() {
        assert_eq!(
            raw("127.0.0.1\tlocalhost # home\n"),
            vec![
                RawToken::IpCandidate,
                RawToken::Whitespace,
                RawToken::DomainLabel,
                RawToken::Whitespace,
                RawToken::Comment,
                RawToken::Newline,
            ]
        );
    }
}
