#![allow(dead_code)]

use oxide_cql_core::BuildableQuery;

/// Asserts the single-line rendering of `query`.
pub fn assert_compact(query: &impl BuildableQuery, expected: &str) {
    assert_eq!(query.build(false).query(), expected);
}

/// Asserts the pretty rendering of `query`, given line by line.
pub fn assert_pretty(query: &impl BuildableQuery, expected_lines: &[&str]) {
    assert_eq!(query.build(true).query(), expected_lines.join("\n"));
}

/// Verifies that both renderings carry the same tokens in the same order:
/// with all whitespace removed, they are identical.
pub fn assert_same_tokens(query: &impl BuildableQuery) {
    let compact = strip_whitespace(query.build(false).query());
    let pretty = strip_whitespace(query.build(true).query());
    assert_eq!(
        compact, pretty,
        "Renderings differ beyond whitespace.\n  Compact: {compact}\n  Pretty:  {pretty}"
    );
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
