//! Compile-time errors.

/// Errors produced while lowering a pattern tree to bytecode.
///
/// The current node set lowers without any recoverable error; the type
/// exists so the compiler can grow (grammar recursion via `call`) without
/// changing signatures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The pattern contains a node the compiler does not support.
    #[error("unsupported pattern node: {0}")]
    Unsupported(&'static str),
}
