//! # hosts
//!
//! A parser and editor for the hosts file format that preserves the
//! original layout: comments, blank lines, and trailing comments survive
//! load/modify/save cycles.
//!
//! ## Testing
//!
//! Parser behavior is pinned by unit tests next to each stage and by the
//! integration suite under `tests/`, including property tests that feed
//! the lexer arbitrary input and round-trip generated documents.

pub mod hosts;
