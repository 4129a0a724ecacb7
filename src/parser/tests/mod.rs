//! Parser test suite.
//!
//! Every helper asserts the lossless invariant: concatenating the leaves of
//! the produced tree reproduces the input byte-for-byte, diagnostics or not.

mod grammar;

use crate::Diagnostics;
use crate::parser::{FragmentKind, Parse, parse, parse_fragment};

pub(crate) fn parse_ok(source: &str) -> Parse {
    let (parse, diagnostics) = parse(source).expect("within fuel limits");
    assert!(
        !diagnostics.has_errors(),
        "unexpected diagnostics:\n{}",
        diagnostics.render(source)
    );
    assert_lossless(&parse, source);
    parse
}

pub(crate) fn parse_err(source: &str) -> (Parse, Diagnostics) {
    let (parse, diagnostics) = parse(source).expect("within fuel limits");
    assert!(diagnostics.has_errors(), "expected diagnostics");
    assert_lossless(&parse, source);
    (parse, diagnostics)
}

pub(crate) fn fragment_ok(source: &str, kind: FragmentKind) -> Parse {
    let (parse, diagnostics) = parse_fragment(source, kind).expect("within fuel limits");
    assert!(
        !diagnostics.has_errors(),
        "unexpected diagnostics:\n{}",
        diagnostics.render(source)
    );
    assert_lossless(&parse, source);
    parse
}

pub(crate) fn assert_lossless(parse: &Parse, source: &str) {
    assert_eq!(
        parse.syntax().text().to_string(),
        source,
        "leaf concatenation must reproduce the input"
    );
}

/// Tree dump of a full compilation unit, trivia filtered.
pub(crate) fn cst(source: &str) -> String {
    parse_ok(source).dump_cst()
}

/// Tree dump of a full compilation unit, trivia included.
pub(crate) fn cst_full(source: &str) -> String {
    parse_ok(source).dump_cst_full()
}

/// Tree dump of an expression fragment.
pub(crate) fn expr(source: &str) -> String {
    fragment_ok(source, FragmentKind::Expression).dump_cst()
}

/// Tree dump of a statement fragment.
pub(crate) fn stmt(source: &str) -> String {
    fragment_ok(source, FragmentKind::Statement).dump_cst()
}
