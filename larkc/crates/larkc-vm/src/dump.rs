//! Bytecode disassembler.
//!
//! Renders a compiled [`ObjFn`] as one instruction per line:
//!
//! ```text
//! 0000 CONSTANT 0            ; 1
//! 0002 STORE_GLOBAL 0
//! 0004 END
//! ```
//!
//! Offsets are byte offsets into the code buffer. `CONSTANT` and `METHOD`
//! lines append a preview of the referenced pool entry. A byte that is not
//! a valid opcode renders as `??` and decoding resumes at the next byte,
//! so a truncated or corrupt buffer still produces a readable listing.

use std::fmt::Write as _;

use crate::func::ObjFn;
use crate::opcode::Op;

/// Disassembles `func` into a listing, one instruction per line.
pub fn dump(func: &ObjFn) -> String {
    let mut out = String::new();
    let mut offset = 0;

    while offset < func.code.len() {
        offset = dump_instruction(func, offset, &mut out);
    }

    out
}

fn dump_instruction(func: &ObjFn, offset: usize, out: &mut String) -> usize {
    let byte = func.code[offset];
    let op = match Op::try_from(byte) {
        Ok(op) => op,
        Err(_) => {
            let _ = writeln!(out, "{:04} ?? {:#04x}", offset, byte);
            return offset + 1;
        }
    };

    let _ = write!(out, "{:04} {}", offset, op);

    let operands = &func.code[offset + 1..];
    for i in 0..op.num_operands().min(operands.len()) {
        let _ = write!(out, " {}", operands[i]);
    }

    match op {
        Op::Constant => {
            if let Some(value) = operands.first().and_then(|&i| func.constants.get(i as usize)) {
                let _ = write!(out, "            ; {}", value);
            }
        }
        Op::Method => {
            if let Some(value) = operands.get(1).and_then(|&i| func.constants.get(i as usize)) {
                let _ = write!(out, "            ; {}", value);
            }
        }
        _ => {}
    }

    let _ = writeln!(out);
    offset + 1 + op.num_operands().min(operands.len())
}
