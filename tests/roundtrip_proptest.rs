//! Property-based tests for the hosts parser
//!
//! Two families of properties:
//! - Robustness: the lexer accepts arbitrary input without panicking, never
//!   loses text, and always terminates the stream with a single Eof token.
//! - Round-tripping: for generated hosts documents, render-then-reparse
//!   reproduces the same entry sequence, and the mutation operations keep
//!   their documented invariants.

use proptest::prelude::*;

use hosts::hosts::{lex, parse_content, HostsError, HostsFile, TokenKind};

/// One lowercase label of the kind hosts files actually contain.
fn hostname_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,6}(\\.[a-z][a-z0-9]{0,6}){0,2}")
        .expect("valid regex")
}

fn ipv4_strategy() -> impl Strategy<Value = String> {
    (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255)
        .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d))
}

fn comment_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("#[ a-z0-9.]{0,20}").expect("valid regex")
}

/// A separator as found in the wild: runs of spaces and tabs.
fn separator_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \t]{1,3}").expect("valid regex")
}

/// One line of a plausible hosts document.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Mapping line with 1-3 hostnames and an optional trailing comment
        (
            ipv4_strategy(),
            proptest::collection::vec(hostname_strategy(), 1..3),
            proptest::option::of(comment_strategy()),
            separator_strategy(),
        )
            .prop_map(|(ip, hostnames, comment, sep)| {
                let mut line = ip;
                for hostname in hostnames {
                    line.push_str(&sep);
                    line.push_str(&hostname);
                }
                if let Some(comment) = comment {
                    line.push_str(&sep);
                    line.push_str(&comment);
                }
                line
            }),
        comment_strategy(),
        Just(String::new()), // blank line
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(line_strategy(), 1..12)
        .prop_map(|lines| format!("{}\n", lines.join("\n")))
}

proptest! {
    #[test]
    fn test_lex_never_panics(input in ".{0,200}") {
        let _tokens = lex(&input);
    }

    #[test]
    fn test_lex_ends_with_single_eof(input in ".{0,200}") {
        let tokens = lex(&input);
        let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eof_count, 1);
        prop_assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_lex_loses_no_text(input in "[ -~\n\t]{0,200}") {
        let rebuilt: String = lex(&input).iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_parse_never_panics(input in ".{0,200}") {
        let _entries = parse_content(&input);
    }

    #[test]
    fn test_render_reparse_is_structurally_idempotent(source in document_strategy()) {
        let file = HostsFile::parse(&source);
        let reparsed = HostsFile::parse(&file.to_string());
        prop_assert_eq!(
            reparsed.entries.iter().map(|e| &e.kind).collect::<Vec<_>>(),
            file.entries.iter().map(|e| &e.kind).collect::<Vec<_>>()
        );
    }

    // Documents built from distinct hostnames: set_host_ip acts on the
    // first occurrence only, so its idempotence guarantee assumes a
    // hostname is not declared on several lines at once.
    #[test]
    fn test_set_host_ip_twice_is_idempotent(
        hostnames in proptest::collection::btree_set(hostname_strategy(), 1..8),
        ips in proptest::collection::vec(ipv4_strategy(), 8),
        target in hostname_strategy(),
        ip in ipv4_strategy(),
    ) {
        let mut file = HostsFile::new();
        let unique: Vec<String> = hostnames.into_iter().collect();
        for (i, chunk) in unique.chunks(2).enumerate() {
            file.add_entry(&ips[i % ips.len()], chunk.to_vec(), None);
        }

        file.set_host_ip(&target, &ip).unwrap();
        let after_first = file.entries.clone();
        file.set_host_ip(&target, &ip).unwrap();
        prop_assert_eq!(file.entries, after_first);
    }

    #[test]
    fn test_removed_hostname_is_never_found(
        source in document_strategy(),
        hostname in hostname_strategy(),
    ) {
        let mut file = HostsFile::parse(&source);
        file.remove_host(&hostname).unwrap();
        prop_assert!(matches!(
            file.get_host_ip(&hostname),
            Err(HostsError::NotFound(_))
        ));
    }
}
