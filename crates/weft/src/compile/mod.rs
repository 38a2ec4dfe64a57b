//! Lowering pattern trees to bytecode.
//!
//! A single recursive pass over the AST appends instructions to a growing
//! buffer, following the LPeg translation scheme: ordered choice saves an
//! alternative with `Choice` and discards it with `Commit`; loops re-arm the
//! saved frame with `PartialCommit`; lookahead unwinds with `RewindCommit`
//! or `FailTwice`. Forward jumps are emitted with a zero operand and patched
//! once the skipped body has been generated; patch sites are byte offsets,
//! so buffer reallocation never invalidates them.

mod error;

pub use error::CompileError;

#[cfg(test)]
mod compile_tests;

use crate::ast::{Ast, CaptureKind, Node, Repeat};
use crate::bytecode::{ALIGN, OFFSET_FIELD, Opcode, Program};

/// Compile a pattern into an executable program.
///
/// Deterministic: structurally equal patterns produce identical bytecode.
pub fn compile(pattern: &Ast) -> Result<Program, CompileError> {
    let mut c = Compiler { code: Vec::new() };
    c.codegen(&pattern.root)?;
    c.emit_simple(Opcode::End);
    log::debug!("compiled pattern to {} bytes", c.code.len());
    Ok(Program { code: c.code })
}

struct Compiler {
    code: Vec<u8>,
}

impl Compiler {
    fn here(&self) -> usize {
        self.code.len()
    }

    fn emit_simple(&mut self, op: Opcode) {
        self.code.push(op as u8);
        self.code.extend_from_slice(&[0; 3]);
    }

    fn emit_open_capture(&mut self, kind: CaptureKind) {
        self.code.push(Opcode::OpenCapture as u8);
        self.code.push(kind.as_byte());
        self.code.extend_from_slice(&[0; 2]);
    }

    /// Emit a jump instruction with operand `target`, returning the
    /// instruction offset for later patching.
    fn emit_jump(&mut self, op: Opcode, target: usize) -> usize {
        let at = self.here();
        self.code.push(op as u8);
        self.code.extend_from_slice(&[0; 3]);
        self.code.extend_from_slice(&(target as i32).to_le_bytes());
        at
    }

    /// Point the jump emitted at `at` to the current end of the buffer.
    fn patch_here(&mut self, at: usize) {
        let target = (self.here() as i32).to_le_bytes();
        self.code[at + OFFSET_FIELD..at + OFFSET_FIELD + 4].copy_from_slice(&target);
    }

    fn emit_str(&mut self, bytes: &[u8]) {
        debug_assert!(bytes.len() <= u8::MAX as usize);
        self.code.push(Opcode::Str as u8);
        self.code.push(bytes.len() as u8);
        self.code.extend_from_slice(bytes);
        while !self.code.len().is_multiple_of(ALIGN) {
            self.code.push(0);
        }
    }

    /// Members below U+0080 go into a 128-bit bitmap, the rest are attached
    /// as decoded runes.
    fn emit_set(&mut self, members: &str) {
        let mut bitmap = [0u8; 16];
        let mut runes: Vec<u32> = Vec::new();
        for c in members.chars() {
            let cp = c as u32;
            if cp < 0x80 {
                bitmap[(cp / 8) as usize] |= 1 << (cp % 8);
            } else {
                runes.push(cp);
            }
        }
        self.code.push(Opcode::Set as u8);
        self.code.push(0);
        self.code.extend_from_slice(&(runes.len() as u16).to_le_bytes());
        self.code.extend_from_slice(&bitmap);
        for cp in runes {
            self.code.extend_from_slice(&cp.to_le_bytes());
        }
    }

    fn emit_range(&mut self, from: char, to: char) {
        self.code.push(Opcode::Range as u8);
        self.code.extend_from_slice(&(from as u32).to_le_bytes()[..3]);
        self.code.extend_from_slice(&(to as u32).to_le_bytes());
    }

    fn codegen(&mut self, node: &Node) -> Result<(), CompileError> {
        match node {
            Node::Literal(bytes) => {
                // Str length is a u8; longer literals become a chunk
                // sequence. An empty literal emits nothing and trivially
                // succeeds.
                for chunk in bytes.chunks(u8::MAX as usize) {
                    self.emit_str(chunk);
                }
            }
            Node::Set(members) => self.emit_set(members),
            Node::Range { from, to } => self.emit_range(*from, *to),
            Node::Any(n) => {
                for _ in 0..*n {
                    self.emit_simple(Opcode::Any);
                }
            }
            Node::Seq(lhs, rhs) => {
                self.codegen(lhs)?;
                self.codegen(rhs)?;
            }
            Node::Choice(lhs, rhs) => {
                let choice = self.emit_jump(Opcode::Choice, 0);
                self.codegen(lhs)?;
                let commit = self.emit_jump(Opcode::Commit, 0);
                self.patch_here(choice);
                self.codegen(rhs)?;
                self.patch_here(commit);
            }
            Node::Repeat(Repeat::ZeroOrOne, inner) => {
                let choice = self.emit_jump(Opcode::Choice, 0);
                self.codegen(inner)?;
                let commit = self.emit_jump(Opcode::Commit, 0);
                self.patch_here(choice);
                self.patch_here(commit);
            }
            Node::Repeat(kind, inner) => {
                if *kind == Repeat::OneOrMore {
                    self.codegen(inner)?;
                }
                let choice = self.emit_jump(Opcode::Choice, 0);
                let body = self.here();
                self.codegen(inner)?;
                self.emit_jump(Opcode::PartialCommit, body);
                self.patch_here(choice);
            }
            Node::Not(inner) => {
                let choice = self.emit_jump(Opcode::Choice, 0);
                self.codegen(inner)?;
                self.emit_simple(Opcode::FailTwice);
                self.patch_here(choice);
            }
            Node::And(inner) => {
                let choice = self.emit_jump(Opcode::Choice, 0);
                self.codegen(inner)?;
                let rewind = self.emit_jump(Opcode::RewindCommit, 0);
                self.patch_here(choice);
                self.emit_simple(Opcode::Fail);
                self.patch_here(rewind);
            }
            Node::Capture(kind, inner) => {
                self.emit_open_capture(*kind);
                self.codegen(inner)?;
                self.emit_simple(Opcode::CloseCapture);
            }
            Node::Call => return Err(CompileError::Unsupported("call")),
        }
        Ok(())
    }
}
