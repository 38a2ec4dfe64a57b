//! Tests for the AST-to-bytecode translation.
//!
//! Each case checks the emitted listing against the LPeg translation scheme,
//! offsets included, so forward-patching regressions show up directly.

use indoc::indoc;

use crate::Colors;
use crate::ast::{Ast, C, Cg, Node, P, R, S, any};

use super::{CompileError, compile};

fn dump(pattern: &Ast) -> String {
    compile(pattern).expect("pattern compiles").dump(Colors::OFF)
}

#[test]
fn literal_then_range() {
    assert_eq!(
        dump(&(P("ab") >> R("09"))),
        indoc! {r#"
             0: str "ab"
             4: range '0'..='9'
            12: end
        "#}
    );
}

#[test]
fn choice_saves_and_commits() {
    assert_eq!(
        dump(&(P("a") | P("b"))),
        indoc! {r#"
             0: choice -> 20
             8: str "a"
            12: commit -> 24
            20: str "b"
            24: end
        "#}
    );
}

#[test]
fn star_rearms_its_frame() {
    assert_eq!(
        dump(&(R("09").star() >> P(";"))),
        indoc! {r#"
             0: choice -> 24
             8: range '0'..='9'
            16: partial_commit -> 8
            24: str ";"
            28: end
        "#}
    );
}

#[test]
fn plus_is_body_then_star() {
    assert_eq!(
        dump(&R("09").plus()),
        indoc! {r#"
             0: range '0'..='9'
             8: choice -> 32
            16: range '0'..='9'
            24: partial_commit -> 16
            32: end
        "#}
    );
}

#[test]
fn optional_commits_to_the_join() {
    assert_eq!(
        dump(&-P("hello")),
        indoc! {r#"
             0: choice -> 24
             8: str "hello"
            16: commit -> 24
            24: end
        "#}
    );
}

#[test]
fn negative_lookahead_fails_twice() {
    assert_eq!(
        dump(&!P("a")),
        indoc! {r#"
             0: choice -> 16
             8: str "a"
            12: fail_twice
            16: end
        "#}
    );
}

#[test]
fn positive_lookahead_rewinds() {
    assert_eq!(
        dump(&P("a").look()),
        indoc! {r#"
             0: choice -> 20
             8: str "a"
            12: rewind_commit -> 24
            20: fail
            24: end
        "#}
    );
}

#[test]
fn captures_bracket_their_body() {
    assert_eq!(
        dump(&C(R("az"))),
        indoc! {r#"
             0: open_capture simple
             4: range 'a'..='z'
            12: close_capture
            16: end
        "#}
    );
    assert_eq!(
        dump(&Cg(C(any()))),
        indoc! {"
             0: open_capture group
             4: open_capture simple
             8: any
            12: close_capture
            16: close_capture
            20: end
        "}
    );
}

#[test]
fn any_count_unrolls() {
    assert_eq!(
        dump(&P(2)),
        indoc! {"
            0: any
            4: any
            8: end
        "}
    );
}

#[test]
fn set_splits_ascii_and_runes() {
    assert_eq!(
        dump(&S("baя")),
        indoc! {r#"
             0: set "abя"
            24: end
        "#}
    );
}

#[test]
fn empty_literal_emits_nothing() {
    assert_eq!(
        dump(&P(0)),
        indoc! {"
            0: end
        "}
    );
}

#[test]
fn compile_is_deterministic() {
    let pattern = (C(R("az").plus()) >> P("=") >> C(R("az").plus()) >> P(";")) | S("абв");
    let a = compile(&pattern).expect("compiles");
    let b = compile(&pattern.clone()).expect("compiles");
    assert_eq!(a.code(), b.code());
}

#[test]
fn call_is_rejected() {
    let pattern = Ast::new(Node::Call);
    assert_eq!(
        compile(&pattern).unwrap_err(),
        CompileError::Unsupported("call")
    );
}

#[test]
fn every_instruction_starts_aligned() {
    let pattern = (P("abc") | S("xyи")) >> C(R("09")).star() >> !any();
    let program = compile(&pattern).expect("compiles");
    assert!(program.code().len().is_multiple_of(4));
    // The dump walks the buffer instruction by instruction; it only
    // terminates cleanly if every size rule is consistent.
    assert!(program.dump(Colors::OFF).ends_with("end\n"));
}
