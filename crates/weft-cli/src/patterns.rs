//! Built-in demo patterns.
//!
//! The library's surface is programmatic, so the playground ships a handful
//! of patterns written in the DSL instead of inventing a textual grammar
//! syntax.

use weft::{Ast, C, Cg, P, R, S, any};

pub struct Builtin {
    pub name: &'static str,
    pub about: &'static str,
    pub pattern: Ast,
}

/// All built-in patterns, in listing order.
pub fn all() -> Vec<Builtin> {
    let word = C(R("az").plus());
    let ident = (R("az") | R("AZ") | R("09") | P("_")).plus();
    let optspace = P(" ").star();

    let ident_symbol = R("az") | R("AZ") | R("09") | S("_.");
    let special = (P("x") | "-" | "^") >> !&ident_symbol;
    let captoken = C(&special | ident_symbol.plus());
    let space = S(" \t");
    let opt_space_nl = S(" \t\n").star();
    let line = &opt_space_nl >> &captoken >> (space.plus() >> &captoken).star();

    vec![
        Builtin {
            name: "decimal",
            about: "a run of ASCII digits, nothing else",
            pattern: R("09").plus() >> !any(),
        },
        Builtin {
            name: "assign",
            about: "key = value; with both identifiers captured",
            pattern: C(ident.clone()) >> &optspace >> P("=") >> &optspace >> C(ident) >> P(";"),
        },
        Builtin {
            name: "csv",
            about: "comma-separated lowercase words, captured as one group",
            pattern: Cg(&word >> (P(",") >> &word).star()) >> !any(),
        },
        Builtin {
            name: "layout",
            about: "whitespace-aligned token grid, tokens and line breaks captured",
            pattern: &line >> (C(P("\n")) >> &line).star() >> &opt_space_nl >> !any(),
        },
    ]
}

/// Look up a built-in pattern by name.
pub fn find(name: &str) -> Option<Builtin> {
    all().into_iter().find(|b| b.name == name)
}
