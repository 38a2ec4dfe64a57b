//! Tests for pattern construction and AST dumps.

use insta::assert_snapshot;

use super::{C, Cg, P, R, S, any};

#[test]
fn literal_dump() {
    assert_snapshot!(P("hello").dump(), @r#"P("hello")"#);
    assert_snapshot!(P('x').dump(), @r#"P("x")"#);
}

#[test]
fn count_patterns() {
    assert_snapshot!(P(3).dump(), @"P(3)");
    assert_snapshot!(P(0usize).dump(), @r#"P("")"#);
    assert_snapshot!(any().dump(), @"any()");
}

#[test]
fn set_dump() {
    assert_snapshot!(S("abc").dump(), @r#"S("abc")"#);
}

#[test]
fn sequence_and_choice_dump() {
    let p = (P("abc") | P("ABC")) >> P("def");
    assert_snapshot!(p.dump(), @r#"((P("abc") | P("ABC")) >> P("def"))"#);
}

#[test]
fn repetition_dump() {
    assert_snapshot!(R("09").star().dump(), @"R('0'..='9').star()");
    assert_snapshot!(R("az").plus().dump(), @"R('a'..='z').plus()");
    assert_snapshot!((-P("hello")).dump(), @r#"P("hello").opt()"#);
}

#[test]
fn lookahead_dump() {
    assert_snapshot!((!P("a")).dump(), @r#"!P("a")"#);
    assert_snapshot!(P("a").look().dump(), @r#"P("a").look()"#);
}

#[test]
fn difference_desugars_to_lookahead_then_sequence() {
    assert_snapshot!((R("09") - P("6")).dump(), @r#"(!P("6") >> R('0'..='9'))"#);
}

#[test]
fn capture_dump() {
    assert_snapshot!(C(R("az").plus()).dump(), @"C(R('a'..='z').plus())");
    assert_snapshot!(Cg(C(any())).dump(), @"Cg(C(any()))");
}

#[test]
fn operators_accept_literals_on_the_right() {
    assert_eq!(P("п") >> "р" >> 'и' >> "вет", P("п") >> P("р") >> P('и') >> P("вет"));
    assert_eq!(P("a") | 'b', P("a") | P("b"));
}

#[test]
fn borrowed_operands_are_cloned() {
    let digit = R("09");
    let twice = &digit >> &digit;
    assert_eq!(twice, R("09") >> R("09"));
    // The borrowed operand is still usable.
    assert_eq!(&digit | P("x"), R("09") | P("x"));
    assert_eq!(-&digit, R("09").opt());
    assert_eq!(!&digit, !R("09"));
    assert_eq!(&digit - P("5"), R("09") - P("5"));
}

#[test]
fn clone_is_a_deep_copy() {
    let p = C(S("ab") >> R("09").plus()) | P("fallback");
    assert_eq!(p.clone(), p);
}

#[test]
#[should_panic(expected = "exactly two runes")]
fn range_requires_two_runes() {
    R("a");
}

#[test]
#[should_panic(expected = "exactly two runes")]
fn range_rejects_three_runes() {
    R("abc");
}

#[test]
#[should_panic(expected = "ordered range")]
fn range_requires_order() {
    R("za");
}
