//! Function objects.
//!
//! An [`ObjFn`] is what one compile produces: a linear bytecode buffer and
//! the constant pool its `CONSTANT`/`METHOD` instructions index into. Both
//! buffers grow as the compiler emits, but constant indices travel in a
//! single operand byte, so the pool is capped at [`MAX_CONSTANTS`] entries
//! and the compiler reports an error rather than emitting a ninth bit.

use crate::value::Value;

/// Most constants one function can hold; pool indices are operand bytes.
pub const MAX_CONSTANTS: usize = 256;

/// A compiled function: bytecode plus constant pool.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjFn {
    /// Opcodes and inline operand bytes, in emission order.
    pub code: Vec<u8>,
    /// Values referenced by index from the bytecode.
    pub constants: Vec<Value>,
}

impl ObjFn {
    /// Creates an empty function object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `constant` to the pool and returns its index, or `None` if
    /// the pool is full.
    pub fn add_constant(&mut self, constant: Value) -> Option<usize> {
        if self.constants.len() >= MAX_CONSTANTS {
            return None;
        }
        self.constants.push(constant);
        Some(self.constants.len() - 1)
    }
}
