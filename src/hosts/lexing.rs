//! Lexer for the hosts format
//!
//! This module orchestrates the tokenization pipeline:
//! 1. Raw tokenization using the logos lexer (base_tokenization)
//! 2. Finalization pass (transformations):
//!    - IP-candidate resolution (IpCandidate -> Ip or Domain)
//!    - byte span -> line/column position conversion
//!    - Eof token appended
//!
//! Keeping the logos grammar vanilla and resolving IP candidates in a
//! separate pass means the derive macro never needs custom callbacks; the
//! shape checks live in plain code (classification) where they can be
//! tested directly.
//!
//! Scanning never fails. Input that matches no token class comes through as
//! single-character `Unrecognized` tokens, which the grouper ignores.

pub mod base_tokenization;
pub mod classification;
pub mod tokens;
pub mod transformations;

pub use classification::{is_domain, is_valid_ip};
pub use tokens::{Token, TokenKind};

/// Tokenize source text into the classified token stream.
///
/// The result is ordered, single-pass, and always ends with exactly one
/// `Eof` token.
pub fn lex(source: &str) -> Vec<Token> {
    transformations::finalize_tokens(source, base_tokenization::tokenize(source))
}
