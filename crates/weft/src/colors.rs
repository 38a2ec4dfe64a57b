//! ANSI color codes for dump output.
//!
//! Three semantic colors with a reset:
//! - Cyan: opcode and combinator names
//! - Green: literal text and runes
//! - Dim: offsets and structure

/// ANSI palette for program and AST dumps.
///
/// Only standard 16-color codes, so output stays readable in both light and
/// dark terminals. The default is [`Colors::OFF`]: library dumps are plain
/// text unless a caller opts in.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub op: &'static str,
    pub lit: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        op: "\x1b[36m",
        lit: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        op: "",
        lit: "",
        dim: "",
        reset: "",
    };

    /// Pick a palette based on an enabled flag.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
