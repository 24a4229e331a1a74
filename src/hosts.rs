//! Hosts format parsing and editing
//!
//! The pipeline is strictly one-directional for reads and rebuilt in
//! reverse for writes:
//!
//! ```text
//! text --lexing--> tokens --parsing--> entries --document--> queries/mutations
//!                                                   |
//!                                  render (Display) +--> text
//! ```
//!
//! No stage calls back into an earlier one. Everything through the document
//! model is pure and I/O-free; the file collaborators live in [`io`].

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod io;
pub mod lexing;
pub mod location;
pub mod parsing;

pub use document::{HostsFile, IpDomainPair};
pub use entry::{EntryKind, HostsEntry};
pub use error::HostsError;
pub use io::{load_hosts_file, system_hosts_path};
pub use lexing::{lex, Token, TokenKind};
pub use location::Position;
pub use parsing::{parse_content, parse_tokens};
