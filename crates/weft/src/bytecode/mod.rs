//! Compiled pattern bytecode.
//!
//! A program is a flat byte buffer of variable-width instructions, each
//! starting on a 4-byte boundary. Jump operands are absolute byte offsets
//! into the same buffer, so the buffer may be grown (and reallocated) while
//! unresolved forward jumps are outstanding.

mod dump;
mod opcode;
mod program;

pub(crate) use opcode::{ALIGN, OFFSET_FIELD};
pub use opcode::Opcode;
pub use program::Program;

#[cfg(test)]
mod dump_tests;
