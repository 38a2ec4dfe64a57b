//! Command-line interface definition.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "weft", about = "Playground for the weft pattern engine", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in demo patterns
    Patterns,

    /// Dump a pattern's bytecode, or its combinator tree with --ast
    Dump {
        /// Built-in pattern name
        name: String,

        /// Dump the combinator tree instead of bytecode
        #[arg(long)]
        ast: bool,

        /// Colorize output
        #[arg(long, value_enum, value_name = "WHEN", default_value = "auto")]
        color: ColorChoice,
    },

    /// Match input text against a pattern
    Match {
        /// Built-in pattern name
        name: String,

        /// Input text
        input: String,
    },

    /// Match input text and print the captured values
    Captures {
        /// Built-in pattern name
        name: String,

        /// Input text
        input: String,

        /// Print the capture tree as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Color output control (--color).
#[derive(Clone, Copy, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}
