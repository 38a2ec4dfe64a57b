//! Offset-annotated listing of a compiled program.

use std::fmt::Write as _;

use crate::colors::Colors;

use super::opcode::{Opcode, SET_HEADER};
use super::program::Program;

impl Program {
    /// Render a one-instruction-per-line listing of the program.
    ///
    /// A debugging aid; the exact format is not stable.
    pub fn dump(&self, colors: Colors) -> String {
        let c = &colors;
        let mut out = String::new();
        // Offsets are padded to the width of the last instruction's offset
        // (the trailing `end` for compiler-produced programs).
        let last = self.code.len().saturating_sub(4);
        let width = last.to_string().len();

        let mut ip = 0;
        while ip < self.code.len() {
            let Some(op) = self.opcode_at(ip) else {
                let _ = writeln!(out, "{ip:>width$}: ?? 0x{:02x}", self.code[ip]);
                break;
            };

            let _ = write!(
                out,
                "{}{ip:>width$}{}: {}{}{}",
                c.dim,
                c.reset,
                c.op,
                op.name(),
                c.reset
            );
            match op {
                Opcode::Str => {
                    let text = String::from_utf8_lossy(self.str_at(ip));
                    let _ = write!(out, " {}{:?}{}", c.lit, text, c.reset);
                }
                Opcode::Set => {
                    let _ = write!(out, " {}{:?}{}", c.lit, self.set_members(ip), c.reset);
                }
                Opcode::Range => {
                    let (from, to) = self.range_at(ip);
                    let from = char::from_u32(from).unwrap_or(char::REPLACEMENT_CHARACTER);
                    let to = char::from_u32(to).unwrap_or(char::REPLACEMENT_CHARACTER);
                    let _ = write!(out, " {}{from:?}..={to:?}{}", c.lit, c.reset);
                }
                _ if op.has_offset() => {
                    let _ = write!(out, " -> {}", self.target_at(ip));
                }
                Opcode::OpenCapture => {
                    let kind = match self.code[ip + 1] {
                        0 => "group".to_string(),
                        1 => "simple".to_string(),
                        b => format!("kind({b})"),
                    };
                    let _ = write!(out, " {kind}");
                }
                _ => {}
            }
            out.push('\n');

            ip += self.inst_len(ip, op);
        }
        out
    }

    /// Reconstruct the member string of the `Set` instruction at `ip`:
    /// ASCII members in code-point order, then the attached runes.
    fn set_members(&self, ip: usize) -> String {
        let mut members = String::new();
        let bitmap = &self.code[ip + 4..ip + SET_HEADER];
        for cp in 0..128u32 {
            if bitmap[(cp / 8) as usize] & (1 << (cp % 8)) != 0 {
                members.push(cp as u8 as char);
            }
        }
        for i in 0..self.set_rune_count(ip) {
            let cp = self.read_u32(ip + SET_HEADER + 4 * i);
            members.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
        members
    }
}
