//! Pretty rendering: one clause per line, one indented line per selector.

mod common;
use common::*;

use oxide_cql_core::{
    bind_marker_named, select_from, select_from_qualified, BuildableQuery, CqlIdentifier,
    Selector,
};

#[test]
fn pretty_star() {
    assert_pretty(&select_from("foo").all(), &["SELECT", "    *", "FROM foo"]);
}

#[test]
fn pretty_multiple_selectors() {
    let select = select_from("foo")
        .column("bar")
        .count_all()
        .alias("total")
        .unwrap();
    assert_pretty(
        &select,
        &["SELECT", "    bar,", "    count(*) AS total", "FROM foo"],
    );
}

#[test]
fn pretty_all_clauses() {
    let select = select_from_qualified("ks", "foo")
        .json()
        .distinct()
        .column("bar")
        .limit_marker(bind_marker_named("max"))
        .allow_filtering();
    assert_pretty(
        &select,
        &[
            "SELECT JSON DISTINCT",
            "    bar",
            "FROM ks.foo",
            "LIMIT :max",
            "ALLOW FILTERING",
        ],
    );
}

#[test]
fn pretty_keeps_quotes_the_identifier_needs() {
    let select = select_from(CqlIdentifier::from_internal("Foo"))
        .column("\"Bar\"")
        .column("select");
    assert_pretty(
        &select,
        &["SELECT", "    \"Bar\",", "    \"select\"", "FROM \"Foo\""],
    );
}

#[test]
fn pretty_empty_projection() {
    let select = select_from("t").selectors(Vec::<Selector>::new()).unwrap();
    assert_pretty(&select, &["SELECT", "FROM t"]);
}

#[test]
fn compact_and_pretty_share_tokens() {
    let quoted = CqlIdentifier::from_internal;
    let queries = [
        select_from(quoted("T")).all(),
        select_from(quoted("T")).selectors(Vec::<Selector>::new()).unwrap(),
        select_from_qualified(quoted("Ks"), quoted("T"))
            .json()
            .column(quoted("A"))
            .alias(quoted("B"))
            .unwrap()
            .raw("writetime(c), ttl(c)")
            .count_all()
            .limit(12)
            .unwrap()
            .allow_filtering(),
        select_from(quoted("T"))
            .distinct()
            .selectors([Selector::column(quoted("P")), Selector::count_all()])
            .unwrap()
            .limit_marker(bind_marker_named(quoted("Lim"))),
    ];
    for query in &queries {
        assert_same_tokens(query);
    }
}

#[test]
fn pretty_and_compact_differ_only_in_layout() {
    let select = select_from("foo").column("a").column("b").limit(3).unwrap();
    assert_eq!(
        select.build(false).query(),
        "SELECT \"a\", \"b\" FROM \"foo\" LIMIT 3"
    );
    assert_eq!(
        select.build(true).query(),
        "SELECT\n    a,\n    b\nFROM foo\nLIMIT 3"
    );
}
