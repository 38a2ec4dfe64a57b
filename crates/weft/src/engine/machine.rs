//! The backtracking stack machine.
//!
//! The machine walks the instruction buffer with `ip`, the input with `pos`,
//! and keeps a stack of backtrack frames plus the capture log. Consuming
//! instructions either advance `pos` or enter the fail path, which restores
//! the most recent frame; an empty stack rejects the input.

use crate::bytecode::{Opcode, Program};
use crate::utf8;

use super::capture::{CaptureEvent, EventKind};
use super::frame::Frame;

/// Per-match VM state.
///
/// Built fresh for every match, so the borrowed program stays immutable
/// and shareable.
pub(crate) struct Machine<'p, 'i> {
    program: &'p Program,
    input: &'i [u8],
    ip: usize,
    pos: usize,
    stack: Vec<Frame>,
    captures: Vec<CaptureEvent>,
}

enum Step {
    Continue,
    Accept,
    Reject,
}

impl<'p, 'i> Machine<'p, 'i> {
    pub fn new(program: &'p Program, input: &'i str) -> Self {
        Self {
            program,
            input: input.as_bytes(),
            ip: 0,
            pos: 0,
            stack: Vec::with_capacity(8),
            captures: Vec::new(),
        }
    }

    /// Run to completion, returning success plus the capture log.
    pub fn run(mut self) -> (bool, Vec<CaptureEvent>) {
        loop {
            match self.step() {
                Step::Continue => {}
                Step::Accept => return (true, self.captures),
                Step::Reject => return (false, Vec::new()),
            }
        }
    }

    fn step(&mut self) -> Step {
        // Unknown opcodes are unreachable in compiler-produced programs;
        // route them to the fail path rather than crashing.
        let Some(op) = self.program.opcode_at(self.ip) else {
            return self.fail();
        };
        log::trace!("ip={} pos={} {}", self.ip, self.pos, op.name());

        match op {
            Opcode::Any => {
                let Some((_, width)) = self.decode() else {
                    return self.fail();
                };
                self.pos += width;
                self.advance(op);
            }
            Opcode::Str => {
                let lit = self.program.str_at(self.ip);
                if !self.input[self.pos..].starts_with(lit) {
                    return self.fail();
                }
                self.pos += lit.len();
                self.advance(op);
            }
            Opcode::Set => {
                let Some((r, width)) = self.decode() else {
                    return self.fail();
                };
                if !self.program.set_contains(self.ip, r) {
                    return self.fail();
                }
                self.pos += width;
                self.advance(op);
            }
            Opcode::Range => {
                let Some((r, width)) = self.decode() else {
                    return self.fail();
                };
                let (from, to) = self.program.range_at(self.ip);
                let cp = r as u32;
                if cp < from || to < cp {
                    return self.fail();
                }
                self.pos += width;
                self.advance(op);
            }
            Opcode::Choice => {
                self.stack.push(Frame {
                    saved_pos: self.pos,
                    resume_ip: self.program.target_at(self.ip),
                    captures_len: self.captures.len(),
                });
                self.advance(op);
            }
            Opcode::Commit => {
                self.pop_frame();
                self.ip = self.program.target_at(self.ip);
            }
            Opcode::PartialCommit => {
                let (pos, len) = (self.pos, self.captures.len());
                let top = self.stack.last_mut().expect("partial_commit without a frame");
                top.saved_pos = pos;
                top.captures_len = len;
                self.ip = self.program.target_at(self.ip);
            }
            Opcode::RewindCommit => {
                let top = self.pop_frame();
                self.pos = top.saved_pos;
                self.captures.truncate(top.captures_len);
                self.ip = self.program.target_at(self.ip);
            }
            Opcode::Fail => return self.fail(),
            Opcode::FailTwice => {
                // Discard the lookahead's own frame, then fail the
                // surrounding alternative.
                self.pop_frame();
                return self.fail();
            }
            Opcode::OpenCapture => {
                let kind = match self.program.code[self.ip + 1] {
                    0 => EventKind::Group,
                    _ => EventKind::Simple,
                };
                self.captures.push(CaptureEvent {
                    kind,
                    offset: self.pos,
                });
                self.advance(op);
            }
            Opcode::CloseCapture => {
                self.captures.push(CaptureEvent {
                    kind: EventKind::Close,
                    offset: self.pos,
                });
                self.advance(op);
            }
            Opcode::End => return Step::Accept,
        }
        Step::Continue
    }

    /// Decode the rune at the current position, or `None` at end of input.
    fn decode(&self) -> Option<(char, usize)> {
        if self.pos >= self.input.len() {
            return None;
        }
        Some(utf8::decode(&self.input[self.pos..]))
    }

    fn advance(&mut self, op: Opcode) {
        self.ip += self.program.inst_len(self.ip, op);
    }

    fn pop_frame(&mut self) -> Frame {
        self.stack.pop().expect("commit requires a frame")
    }

    /// Restore the most recent alternative, or reject if none is left.
    fn fail(&mut self) -> Step {
        match self.stack.pop() {
            Some(frame) => {
                self.pos = frame.saved_pos;
                self.captures.truncate(frame.captures_len);
                self.ip = frame.resume_ip;
                Step::Continue
            }
            None => Step::Reject,
        }
    }
}
