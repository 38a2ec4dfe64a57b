//! Operator overloads for composing patterns.
//!
//! The overload set mirrors the PEG reading of each operator:
//!
//! - `p >> q` - sequence
//! - `p | q` - ordered choice
//! - `p - q` - difference, sugar for `!q >> p`
//! - `-p` - optional
//! - `!p` - negative lookahead
//!
//! Each binary operator accepts anything convertible into an [`Ast`] on the
//! right (`&Ast` clones, string and char literals become literal patterns)
//! and is implemented for both owned and borrowed left operands. Owned
//! operands are moved into the result; borrowed operands are deep-cloned.

use std::ops::{BitOr, Neg, Not, Shr, Sub};

use super::{Ast, Node};

fn seq(lhs: Ast, rhs: Ast) -> Ast {
    Ast::new(Node::Seq(Box::new(lhs.root), Box::new(rhs.root)))
}

fn choice(lhs: Ast, rhs: Ast) -> Ast {
    Ast::new(Node::Choice(Box::new(lhs.root), Box::new(rhs.root)))
}

impl<T: Into<Ast>> Shr<T> for Ast {
    type Output = Ast;

    fn shr(self, rhs: T) -> Ast {
        seq(self, rhs.into())
    }
}

impl<T: Into<Ast>> Shr<T> for &Ast {
    type Output = Ast;

    fn shr(self, rhs: T) -> Ast {
        seq(self.clone(), rhs.into())
    }
}

impl<T: Into<Ast>> BitOr<T> for Ast {
    type Output = Ast;

    fn bitor(self, rhs: T) -> Ast {
        choice(self, rhs.into())
    }
}

impl<T: Into<Ast>> BitOr<T> for &Ast {
    type Output = Ast;

    fn bitor(self, rhs: T) -> Ast {
        choice(self.clone(), rhs.into())
    }
}

impl<T: Into<Ast>> Sub<T> for Ast {
    type Output = Ast;

    fn sub(self, rhs: T) -> Ast {
        !rhs.into() >> self
    }
}

impl<T: Into<Ast>> Sub<T> for &Ast {
    type Output = Ast;

    fn sub(self, rhs: T) -> Ast {
        !rhs.into() >> self.clone()
    }
}

impl Neg for Ast {
    type Output = Ast;

    fn neg(self) -> Ast {
        self.opt()
    }
}

impl Neg for &Ast {
    type Output = Ast;

    fn neg(self) -> Ast {
        self.clone().opt()
    }
}

impl Not for Ast {
    type Output = Ast;

    fn not(self) -> Ast {
        Ast::new(Node::Not(Box::new(self.root)))
    }
}

impl Not for &Ast {
    type Output = Ast;

    fn not(self) -> Ast {
        !self.clone()
    }
}
