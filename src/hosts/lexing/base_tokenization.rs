//! Raw tokenization for the hosts lexer
//!
//! The raw pass is handled entirely by logos. Classification of IP
//! candidates and position bookkeeping are applied afterwards by the
//! transformation pass in the transformations module.

use logos::Logos;

use crate::hosts::lexing::tokens::RawToken;

/// Tokenize source text into raw tokens paired with their byte spans.
///
/// Never fails: input that no pattern matches becomes a single-character
/// `Unrecognized` token.
pub fn tokenize(source: &str) -> Vec<(RawToken, std::ops::Range<usize>)> {
    RawToken::lexer(source)
        .spanned()
        .map(|(result, span)| (result.unwrap_or(RawToken::Unrecognized), span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_cover_the_source() {
        let source = "10.0.0.1 a.com\n";
        let tokens = tokenize(source);
        assert_eq!(
            tokens,
            vec![
                (RawToken::IpCandidate, 0..8),
                (RawToken::Whitespace, 8..9),
                (RawToken::DomainLabel, 9..14),
                (RawToken::Newline, 14..15),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_unmatched_bytes_become_unrecognized() {
        let tokens = tokenize("a!b");
        assert_eq!(
            tokens,
            vec![
                (RawToken::DomainLabel, 0..1),
                (RawToken::Unrecognized, 1..2),
                (RawToken::DomainLabel, 2..3),
            ]
        );
    }
}
