//! Weft: Parsing Expression Grammar matching over UTF-8 text.
//!
//! Patterns are built with an embedded combinator DSL, compiled to a flat
//! bytecode program and executed by a backtracking stack machine with
//! capture support.
//!
//! # Example
//!
//! ```
//! use weft::{C, P, R, compile};
//!
//! let ident = (R("az") | R("AZ")).plus();
//! let pattern = C(&ident) >> P("=") >> C(&ident) >> P(";");
//! let program = compile(&pattern).unwrap();
//!
//! assert!(program.matches("name=nsf;"));
//! assert_eq!(program.capture("name=nsf;").unwrap(), ["name", "nsf"]);
//! assert!(program.capture("name=nsf").is_none());
//! ```

pub mod ast;
pub mod bytecode;
mod colors;
pub mod compile;
pub mod engine;
mod utf8;

pub use ast::{Ast, C, Cg, P, R, S, any};
pub use bytecode::Program;
pub use colors::Colors;
pub use compile::{CompileError, compile};
pub use engine::{CaptureValue, Capturer, MapCapturer, SequentialCapturer, TreeCapturer};
