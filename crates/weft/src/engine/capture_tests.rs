//! Tests for capture projection and the provided capturers.

use crate::ast::{Ast, C, Cg, P, R};
use crate::bytecode::Program;
use crate::compile::compile;

use super::capturer::{CaptureValue, Capturer, SequentialCapturer, TreeCapturer};

fn program(pattern: &Ast) -> Program {
    compile(pattern).expect("pattern compiles")
}

fn text(s: &str) -> CaptureValue<'_> {
    CaptureValue::Text(s)
}

#[test]
fn group_nests_captures() {
    let item = C(R("az").plus());
    let p = program(&Cg(&item >> (P(",") >> &item).star()));

    assert_eq!(
        p.capture_tree("ab,cd,ef").unwrap(),
        [CaptureValue::Group(vec![text("ab"), text("cd"), text("ef")])]
    );
}

#[test]
fn groups_nest_recursively() {
    let word = C(R("az").plus());
    let inner = Cg(P("[") >> &word >> P("]"));
    let p = program(&Cg(&word >> &inner));

    assert_eq!(
        p.capture_tree("ab[cd]").unwrap(),
        [CaptureValue::Group(vec![
            text("ab"),
            CaptureValue::Group(vec![text("cd")]),
        ])]
    );
}

#[test]
fn sequential_capturer_flattens_groups() {
    let item = C(R("az").plus());
    let p = program(&Cg(&item >> (P(",") >> &item).star()));

    assert_eq!(p.capture("ab,cd").unwrap(), ["ab", "cd"]);
}

#[test]
fn backtracking_discards_group_captures() {
    // The first alternative captures before failing; nothing of it may
    // survive into the second alternative's output.
    let p = program(&(Cg(C(P("a")) >> P("x")) | C(P("a"))));

    assert_eq!(p.capture_tree("ab").unwrap(), [text("a")]);
    assert_eq!(p.capture("ab").unwrap(), ["a"]);
}

#[test]
fn failed_match_leaves_capturer_untouched() {
    let p = program(&C(P("a")));
    let mut capturer = SequentialCapturer::new();
    assert!(!p.capture_with("b", &mut capturer));
    assert!(capturer.into_result().is_empty());
}

#[test]
fn custom_capturer_sees_group_brackets() {
    #[derive(Default)]
    struct Events(Vec<String>);

    impl<'i> Capturer<'i> for Events {
        fn open_group(&mut self) {
            self.0.push("open".to_string());
        }

        fn close_group(&mut self) {
            self.0.push("close".to_string());
        }

        fn capture(&mut self, text: &'i str) {
            self.0.push(format!("capture {text:?}"));
        }
    }

    let p = program(&Cg(C(P("a")) >> C(P("b"))));
    let mut events = Events::default();
    assert!(p.capture_with("ab", &mut events));
    assert_eq!(
        events.0,
        ["open", "capture \"a\"", "capture \"b\"", "close"]
    );
}

#[test]
fn tree_capturer_tolerates_stray_close() {
    // A close without an open is ignored rather than popping the root
    // level.
    let mut capturer = TreeCapturer::new();
    capturer.close_group();
    capturer.capture("x");
    assert_eq!(capturer.into_result(), [text("x")]);
}

#[test]
fn capture_values_serialize_as_json() {
    let item = C(R("az").plus());
    let p = program(&Cg(&item >> (P(",") >> &item).star()));

    let tree = p.capture_tree("ab,cd").unwrap();
    assert_eq!(
        serde_json::to_string(&tree).unwrap(),
        r#"[["ab","cd"]]"#
    );
}
