//! Token finalization pass
//!
//! Turns the raw logos output into the classified token stream the grouper
//! consumes:
//! 1. IP candidates are resolved to `Ip` or `Domain` by shape. A candidate
//!    that is neither IPv4 nor IPv6 shaped (say `1.2.3`) falls back to a
//!    domain token, so numeric-looking hostnames survive.
//! 2. Byte spans become 1-based line/column positions.
//! 3. A single `Eof` token is appended, positioned just past the last
//!    character.

use std::ops::Range;

use crate::hosts::lexing::classification::{is_ipv4, is_ipv6};
use crate::hosts::lexing::tokens::{RawToken, Token, TokenKind};
use crate::hosts::location::SourceLocation;

/// Classify raw tokens, attach positions, and append the end-of-input token.
pub fn finalize_tokens(source: &str, raw: Vec<(RawToken, Range<usize>)>) -> Vec<Token> {
    let locations = SourceLocation::new(source);
    let mut tokens = Vec::with_capacity(raw.len() + 1);

    for (raw_kind, span) in raw {
        let text = &source[span.clone()];
        let kind = match raw_kind {
            RawToken::Comment => TokenKind::Comment,
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Newline => TokenKind::Newline,
            RawToken::DomainLabel => TokenKind::Domain,
            RawToken::Unrecognized => TokenKind::Unrecognized,
            RawToken::IpCandidate => {
                if is_ipv4(text) || is_ipv6(text) {
                    TokenKind::Ip
                } else {
                    TokenKind::Domain
                }
            }
        };
        tokens.push(Token::new(kind, text, locations.position_at(span.start)));
    }

    tokens.push(Token::new(
        TokenKind::Eof,
        "",
        locations.position_at(source.len()),
    ));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::lexing::base_tokenization::tokenize;
    use crate::hosts::location::Position;

    fn finalize(source: &str) -> Vec<Token> {
        finalize_tokens(source, tokenize(source))
    }

    #[test]
    fn test_ip_candidate_resolution() {
        let tokens = finalize("127.0.0.1 ::1 1.2.3 999.1.1.1");
        let kinds: Vec<TokenKind> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ip,     // 127.0.0.1
                TokenKind::Ip,     // ::1
                TokenKind::Domain, // 1.2.3 is not IPv4 shaped
                TokenKind::Ip,     // 999.1.1.1 passes the shape check
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens = finalize("1.2.3.4\thost.example\n# c\n");
        assert_eq!(tokens[0].position, Position::new(1, 1)); // ip
        assert_eq!(tokens[1].position, Position::new(1, 8)); // tab
        assert_eq!(tokens[2].position, Position::new(1, 9)); // hostname
        assert_eq!(tokens[3].position, Position::new(1, 21)); // newline
        assert_eq!(tokens[4].position, Position::new(2, 1)); // comment
    }

    #[test]
    fn test_eof_is_always_last() {
        let tokens = finalize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(TokenKind::Eof, "", Position::new(1, 1)));

        let tokens = finalize("a.com\n");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.position, Position::new(2, 1));
    }

    #[test]
    fn test_token_text_is_exact_source_slice() {
        let tokens = finalize("# trailing  spaces   ");
        assert_eq!(tokens[0].text, "# trailing  spaces   ");
    }
}
