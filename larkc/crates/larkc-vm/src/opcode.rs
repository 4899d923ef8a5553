//! The Lark instruction set.
//!
//! Instructions are a single opcode byte followed by zero, one, or two
//! operand bytes. The compiler's contract with the VM is this byte layout;
//! the VM defines the execution semantics.
//!
//! Call instructions encode their arity in the opcode itself: `Call0`
//! through `Call9` are contiguous, so arity-`n` dispatch is
//! `Call0 as u8 + n`. Together with name mangling (one trailing space per
//! argument in the method name) this gives arity-based overloading without
//! any operand beyond the method symbol.

use std::fmt;

use thiserror::Error;

/// Highest arity a call instruction can encode.
pub const MAX_CALL_ARGS: usize = 9;

/// One opcode. The discriminant is the byte emitted into bytecode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Op {
    /// Push `constants[idx]`. Operand: constant index.
    Constant = 0,
    /// Push the null singleton.
    Null,
    /// Push false.
    False,
    /// Push true.
    True,
    /// Push `locals[slot]`. Operand: slot.
    LoadLocal,
    /// `locals[slot] <- top` without popping. Operand: slot.
    StoreLocal,
    /// Push `globals[sym]`. Operand: global symbol.
    LoadGlobal,
    /// `globals[sym] <- top` without popping. Operand: global symbol.
    StoreGlobal,
    /// Duplicate the top of the stack.
    Dup,
    /// Discard the top of the stack.
    Pop,
    /// Call a zero-argument method on the receiver at the top of the
    /// stack. Operand: method symbol. `Call1..Call9` take the receiver
    /// plus that many arguments.
    Call0,
    Call1,
    Call2,
    Call3,
    Call4,
    Call5,
    Call6,
    Call7,
    Call8,
    Call9,
    /// Unconditional forward jump. Operand: byte-relative displacement
    /// from the instruction after the operand.
    Jump,
    /// Pop the condition; jump forward if it is false. Operand as `Jump`.
    JumpIf,
    /// Pop rhs and lhs; push the type-test result.
    Is,
    /// Push a new empty class.
    Class,
    /// Pop the superclass; push a new subclass of it.
    Subclass,
    /// Replace nothing; push the metaclass of the class on top.
    Metaclass,
    /// Install a method on the class at the top of the stack.
    /// Operands: method symbol, then constant index of the body.
    Method,
    /// Terminate the function.
    End,
}

/// Error for a byte that is not a valid opcode.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown opcode byte {0:#04x}")]
pub struct UnknownOpcode(pub u8);

impl Op {
    /// The call opcode for `num_args` arguments, or `None` above
    /// [`MAX_CALL_ARGS`].
    pub fn call(num_args: usize) -> Option<Op> {
        if num_args > MAX_CALL_ARGS {
            return None;
        }
        Op::try_from(Op::Call0 as u8 + num_args as u8).ok()
    }

    /// Number of operand bytes following the opcode.
    pub fn num_operands(self) -> usize {
        match self {
            Op::Constant
            | Op::LoadLocal
            | Op::StoreLocal
            | Op::LoadGlobal
            | Op::StoreGlobal
            | Op::Call0
            | Op::Call1
            | Op::Call2
            | Op::Call3
            | Op::Call4
            | Op::Call5
            | Op::Call6
            | Op::Call7
            | Op::Call8
            | Op::Call9
            | Op::Jump
            | Op::JumpIf => 1,
            Op::Method => 2,
            Op::Null
            | Op::False
            | Op::True
            | Op::Dup
            | Op::Pop
            | Op::Is
            | Op::Class
            | Op::Subclass
            | Op::Metaclass
            | Op::End => 0,
        }
    }
}

impl From<Op> for u8 {
    fn from(op: Op) -> u8 {
        op as u8
    }
}

impl TryFrom<u8> for Op {
    type Error = UnknownOpcode;

    fn try_from(byte: u8) -> Result<Op, UnknownOpcode> {
        use Op::*;
        const TABLE: &[Op] = &[
            Constant,
            Null,
            False,
            True,
            LoadLocal,
            StoreLocal,
            LoadGlobal,
            StoreGlobal,
            Dup,
            Pop,
            Call0,
            Call1,
            Call2,
            Call3,
            Call4,
            Call5,
            Call6,
            Call7,
            Call8,
            Call9,
            Jump,
            JumpIf,
            Is,
            Class,
            Subclass,
            Metaclass,
            Method,
            End,
        ];
        TABLE
            .get(byte as usize)
            .copied()
            .ok_or(UnknownOpcode(byte))
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Constant => "CONSTANT",
            Op::Null => "NULL",
            Op::False => "FALSE",
            Op::True => "TRUE",
            Op::LoadLocal => "LOAD_LOCAL",
            Op::StoreLocal => "STORE_LOCAL",
            Op::LoadGlobal => "LOAD_GLOBAL",
            Op::StoreGlobal => "STORE_GLOBAL",
            Op::Dup => "DUP",
            Op::Pop => "POP",
            Op::Call0 => "CALL_0",
            Op::Call1 => "CALL_1",
            Op::Call2 => "CALL_2",
            Op::Call3 => "CALL_3",
            Op::Call4 => "CALL_4",
            Op::Call5 => "CALL_5",
            Op::Call6 => "CALL_6",
            Op::Call7 => "CALL_7",
            Op::Call8 => "CALL_8",
            Op::Call9 => "CALL_9",
            Op::Jump => "JUMP",
            Op::JumpIf => "JUMP_IF",
            Op::Is => "IS",
            Op::Class => "CLASS",
            Op::Subclass => "SUBCLASS",
            Op::Metaclass => "METACLASS",
            Op::Method => "METHOD",
            Op::End => "END",
        };
        f.write_str(name)
    }
}
