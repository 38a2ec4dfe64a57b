//! Combinator-syntax dump of a pattern tree.

use super::{Ast, CaptureKind, Node, Repeat};

impl Ast {
    /// Render the pattern back into combinator syntax.
    ///
    /// A debugging aid; the exact format is not stable.
    pub fn dump(&self) -> String {
        render(&self.root)
    }
}

fn render(node: &Node) -> String {
    match node {
        Node::Literal(bytes) => format!("P({:?})", String::from_utf8_lossy(bytes)),
        Node::Set(members) => format!("S({members:?})"),
        Node::Range { from, to } => format!("R({from:?}..={to:?})"),
        Node::Any(1) => "any()".to_string(),
        Node::Any(n) => format!("P({n})"),
        Node::Repeat(kind, inner) => {
            let method = match kind {
                Repeat::ZeroOrMore => "star",
                Repeat::OneOrMore => "plus",
                Repeat::ZeroOrOne => "opt",
            };
            format!("{}.{method}()", render(inner))
        }
        Node::Seq(lhs, rhs) => format!("({} >> {})", render(lhs), render(rhs)),
        Node::Choice(lhs, rhs) => format!("({} | {})", render(lhs), render(rhs)),
        Node::Not(inner) => format!("!{}", render(inner)),
        Node::And(inner) => format!("{}.look()", render(inner)),
        Node::Capture(CaptureKind::Simple, inner) => format!("C({})", render(inner)),
        Node::Capture(CaptureKind::Group, inner) => format!("Cg({})", render(inner)),
        Node::Call => "call()".to_string(),
    }
}
