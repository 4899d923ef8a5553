//! larkc-compile - The single-pass Lark compiler.
//!
//! One pass over the token stream does everything: lexing, parsing, name
//! resolution, signature construction, and bytecode emission. There is no
//! AST; every grammar production emits instructions into the function
//! object under construction the moment it finishes parsing.
//!
//! The pass is organized as a recursive descent driver for statements and
//! definitions (`stmt`) around a Pratt expression parser steered by a
//! token-indexed rule table (`grammar`). Nested functions and methods
//! each get a `Frame` on an owned stack; a frame collects the bytecode
//! and local slots for one function body and, when it closes, its finished
//! function object moves into the parent frame's constant pool.
//!
//! The entry point is [`compile`]:
//!
//! ```
//! use larkc_compile::compile;
//! use larkc_vm::Vm;
//!
//! let mut vm = Vm::new();
//! let func = compile(&mut vm, "var x = 1").unwrap();
//! assert!(!func.code.is_empty());
//! assert_eq!(vm.globals.find("x"), Some(0));
//! ```
//!
//! Errors never abort the pass. Each one is recorded in a
//! [`larkc_util::Handler`] and parsing continues, so a single compile can
//! report several problems; the finished function object is only handed
//! back when the handler stayed clean.

mod grammar;
mod stmt;

mod edge_cases;

use larkc_lex::{Lexer, Token, TokenKind};
use larkc_util::{Diagnostic, Handler, SymbolTable};
use larkc_vm::{ObjFn, Op, Value, Vm, MAX_SYMBOLS};
use thiserror::Error;

/// Placeholder name for local slot 0 of a function or method frame. The
/// receiver lives there at run time; reserving the slot keeps parameter
/// indices correct, and the parenthesized spelling can never collide with
/// a real identifier.
const RECEIVER_NAME: &str = "(this)";

/// Compilation failed; `diagnostics` holds every error reported, in
/// source order.
#[derive(Debug, Error)]
#[error("{}", render(.diagnostics))]
pub struct CompileError {
    pub diagnostics: Vec<Diagnostic>,
}

fn render(diagnostics: &[Diagnostic]) -> String {
    let lines: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    lines.join("\n")
}

/// Compiles `source` to a top-level function for execution by `vm`.
///
/// The VM's global symbol tables are filled in as a side effect: top-level
/// variable names land in `vm.globals` and mangled method signatures in
/// `vm.methods`. On error the constructed function is discarded and every
/// collected diagnostic is returned.
pub fn compile(vm: &mut Vm, source: &str) -> Result<ObjFn, CompileError> {
    let mut compiler = Compiler::new(vm, source);

    compiler.body(TokenKind::Eof, "Expect end of file.");
    compiler.emit_op(Op::End);

    let (func, handler) = compiler.finish();
    if handler.has_errors() {
        return Err(CompileError {
            diagnostics: handler.into_diagnostics(),
        });
    }
    Ok(func)
}

/// One function body under construction.
struct Frame {
    /// The function being compiled into.
    func: ObjFn,
    /// Declared local names; the index is the runtime slot.
    locals: SymbolTable,
    /// Set when this frame compiles a method body; `this` resolves by
    /// finding any method frame on the stack.
    is_method: bool,
}

impl Frame {
    fn new(is_method: bool) -> Self {
        Self {
            func: ObjFn::new(),
            locals: SymbolTable::new(),
            is_method,
        }
    }
}

/// The whole single-pass compiler state: token stream, lookahead pair,
/// the borrowed VM handle, the frame stack, and collected diagnostics.
pub(crate) struct Compiler<'src, 'vm> {
    lexer: Lexer<'src>,

    /// The lookahead token.
    current: Token,

    /// The most recently consumed token. Diagnostics cite it.
    previous: Token,

    /// The VM whose symbol tables this compile registers names in.
    vm: &'vm mut Vm,

    handler: Handler,

    /// Active frames, innermost last. Never empty while parsing; index 0
    /// is the top level, which holds no receiver slot.
    frames: Vec<Frame>,
}

impl<'src, 'vm> Compiler<'src, 'vm> {
    fn new(vm: &'vm mut Vm, source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            previous: Token::zero(),
            vm,
            handler: Handler::new(),
            frames: vec![Frame::new(false)],
        }
    }

    /// Tears the compiler down, yielding the top-level function and the
    /// diagnostics collected along the way.
    fn finish(mut self) -> (ObjFn, Handler) {
        let func = self.frames.pop().map(|frame| frame.func).unwrap_or_default();
        (func, self.handler)
    }

    // Tokens -----------------------------------------------------------------

    pub(crate) fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// The kind of the lookahead token.
    pub(crate) fn peek(&self) -> TokenKind {
        self.current.kind
    }

    /// Moves the lookahead forward one token.
    pub(crate) fn advance(&mut self) {
        self.previous = self.current;
        self.current = self.lexer.next_token();
    }

    /// Consumes the lookahead if it has the expected kind.
    pub(crate) fn match_token(&mut self, expected: TokenKind) -> bool {
        if self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes the lookahead unconditionally, reporting `message` if its
    /// kind is not `expected`.
    pub(crate) fn consume(&mut self, expected: TokenKind, message: &str) {
        self.advance();
        if self.previous.kind != expected {
            self.error(message);
        }
    }

    /// Reports a compile error on the most recently consumed token.
    pub(crate) fn error(&self, message: &str) {
        let lexeme = self.previous.lexeme(self.source());
        self.handler.error(self.previous.span.line, lexeme, message);
    }

    // Emission ---------------------------------------------------------------

    /// The innermost frame.
    fn frame(&mut self) -> &mut Frame {
        // The frame stack is never empty while parsing.
        let index = self.frames.len() - 1;
        &mut self.frames[index]
    }

    /// Appends one bytecode byte to the current function and returns its
    /// offset, for later patching.
    pub(crate) fn emit(&mut self, byte: u8) -> usize {
        let code = &mut self.frame().func.code;
        code.push(byte);
        code.len() - 1
    }

    /// Appends one opcode.
    pub(crate) fn emit_op(&mut self, op: Op) -> usize {
        self.emit(op.into())
    }

    /// Rewrites the jump operand at `offset` to land on the next
    /// instruction to be emitted. The displacement is relative to the byte
    /// after the operand and must fit in one byte.
    pub(crate) fn patch_jump(&mut self, offset: usize) {
        let target = self.frame().func.code.len();
        let displacement = target - offset - 1;
        if displacement > u8::MAX as usize {
            self.error("Too much code to jump over.");
        }
        let index = self.frames.len() - 1;
        self.frames[index].func.code[offset] = displacement as u8;
    }

    /// Adds `constant` to the current function's pool and returns its
    /// index as an operand byte.
    pub(crate) fn make_constant(&mut self, constant: Value) -> u8 {
        match self.frame().func.add_constant(constant) {
            Some(index) => index as u8,
            None => {
                self.error("Too many constants.");
                0
            }
        }
    }

    // Frames -----------------------------------------------------------------

    /// Opens a frame for a nested function or method body and reserves
    /// local slot 0 for the receiver.
    pub(crate) fn begin_frame(&mut self, is_method: bool) {
        let mut frame = Frame::new(is_method);
        frame.locals.add(RECEIVER_NAME);
        self.frames.push(frame);
    }

    /// Closes the innermost frame, moves its finished function into the
    /// parent's constant pool, and returns the pool index.
    pub(crate) fn end_frame(&mut self) -> u8 {
        let func = match self.frames.pop() {
            Some(frame) => frame.func,
            None => ObjFn::new(),
        };
        self.make_constant(Value::func(func))
    }

    /// True when compiling inside a nested function or method, where
    /// declarations are locals rather than globals.
    fn in_nested_frame(&self) -> bool {
        self.frames.len() > 1
    }

    /// True when any enclosing frame compiles a method body; decides
    /// whether `this` is legal.
    pub(crate) fn inside_method(&self) -> bool {
        self.frames.iter().rev().any(|frame| frame.is_method)
    }

    // Name lookup ------------------------------------------------------------

    /// Resolves `name` to a local slot in the current frame. Locals in
    /// outer function frames are deliberately not consulted.
    pub(crate) fn find_local(&self, name: &str) -> Option<usize> {
        let index = self.frames.len() - 1;
        self.frames[index].locals.find(name)
    }

    /// Resolves `name` to a global symbol.
    pub(crate) fn find_global(&self, name: &str) -> Option<usize> {
        self.vm.globals.find(name)
    }

    // Variables --------------------------------------------------------------

    /// Parses a name token and declares a variable with that name: a local
    /// slot in a nested frame, a global symbol at the top level. Returns
    /// the symbol; a redeclaration is reported and resolves to the
    /// existing one so parsing can continue.
    pub(crate) fn declare_variable(&mut self) -> usize {
        self.consume(TokenKind::Name, "Expected variable name.");
        let name = self.previous.lexeme(self.source()).to_string();

        let added = if self.in_nested_frame() {
            self.frame().locals.add(&name)
        } else {
            self.vm.globals.add(&name)
        };

        match added {
            Some(symbol) => {
                if symbol >= MAX_SYMBOLS {
                    if self.in_nested_frame() {
                        self.error("Too many local variables.");
                    } else {
                        self.error("Too many global variables.");
                    }
                }
                symbol
            }
            None => {
                self.error("Variable is already defined.");
                let existing = if self.in_nested_frame() {
                    self.frame().locals.find(&name)
                } else {
                    self.vm.globals.find(&name)
                };
                existing.unwrap_or(0)
            }
        }
    }

    /// Finalizes a binding whose initializer is on the stack. A global is
    /// stored explicitly. A local already sits in its slot; it is
    /// duplicated so the statement separator's POP discards the copy and
    /// the slot keeps the value.
    pub(crate) fn define_variable(&mut self, symbol: usize) {
        if self.in_nested_frame() {
            self.emit_op(Op::Dup);
        } else {
            self.emit_op(Op::StoreGlobal);
            self.emit(symbol as u8);
        }
    }

    /// Registers a mangled method name in the VM's method table and
    /// returns its symbol as an operand byte.
    pub(crate) fn method_symbol(&mut self, name: &str) -> u8 {
        let symbol = self.vm.methods.ensure(name);
        if symbol >= MAX_SYMBOLS {
            self.error("Too many method signatures.");
            return 0;
        }
        symbol as u8
    }
}
