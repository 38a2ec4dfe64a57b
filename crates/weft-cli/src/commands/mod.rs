//! Command implementations.

pub mod captures;
pub mod dump;
pub mod matches;
pub mod patterns;

use crate::patterns::{Builtin, find};

/// Look up a built-in pattern, or exit with a hint.
fn find_pattern(name: &str) -> Builtin {
    match find(name) {
        Some(builtin) => builtin,
        None => {
            eprintln!("error: unknown pattern '{name}'");
            eprintln!();
            eprintln!("Run 'weft patterns' for the full list.");
            std::process::exit(1);
        }
    }
}

/// Compile a built-in pattern, or exit.
fn compile_pattern(builtin: &Builtin) -> weft::Program {
    match weft::compile(&builtin.pattern) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
