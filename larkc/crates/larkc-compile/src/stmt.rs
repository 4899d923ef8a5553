//! Statement and definition parsing.
//!
//! `definition` handles the name-binding forms (`class`, `var`) that may
//! only appear at the top level of a body; `statement` handles `if`,
//! brace blocks, and plain expressions. Bodies everywhere - the top level,
//! function and method bodies, and `{ }` blocks - share one sequencing
//! rule: definitions separated by newlines, with a POP discarding each
//! result but the last.

use larkc_lex::TokenKind;
use larkc_vm::Op;

use crate::grammar::{rule, Precedence, SignatureFn};
use crate::Compiler;

impl<'src, 'vm> Compiler<'src, 'vm> {
    /// Compiles a sequence of definitions up to the closing `end` token.
    /// Between definitions a newline is required (unless the closer sits
    /// on the same line) and the previous result is discarded.
    ///
    /// Note: `{ }` does not open a variable scope; locals declared inside
    /// a block belong to the enclosing function frame.
    pub(crate) fn body(&mut self, end: TokenKind, message: &'static str) {
        if self.match_token(end) {
            return;
        }

        loop {
            self.definition();

            // Without a newline the body must close on this line.
            if !self.match_token(TokenKind::Line) {
                self.consume(end, message);
                break;
            }

            if self.match_token(end) {
                break;
            }

            self.emit_op(Op::Pop);
        }
    }

    /// A statement: `if`, a brace block, or an expression that may be an
    /// assignment.
    pub(crate) fn statement(&mut self) {
        if self.match_token(TokenKind::If) {
            self.if_statement();
            return;
        }

        if self.match_token(TokenKind::LeftBrace) {
            self.body(TokenKind::RightBrace, "Expect '}' after block body.");
            return;
        }

        self.expression(true);
    }

    /// `if ( cond ) then [ else other ]`, lowered to a conditional jump
    /// over the then branch and an unconditional jump over the else
    /// branch. A missing else produces null.
    fn if_statement(&mut self) {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.");
        self.expression(true);
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.");

        self.emit_op(Op::JumpIf);
        let if_jump = self.emit(u8::MAX);

        self.statement();

        self.emit_op(Op::Jump);
        let else_jump = self.emit(u8::MAX);

        self.patch_jump(if_jump);

        if self.match_token(TokenKind::Else) {
            self.statement();
        } else {
            self.emit_op(Op::Null);
        }

        self.patch_jump(else_jump);
    }

    /// A definition: `class`, `var`, or any statement.
    pub(crate) fn definition(&mut self) {
        if self.match_token(TokenKind::Class) {
            self.class_definition();
            return;
        }

        if self.match_token(TokenKind::Var) {
            let symbol = self.declare_variable();
            self.consume(TokenKind::Eq, "Expect '=' after variable name.");

            // The initializer.
            self.statement();

            self.define_variable(symbol);
            return;
        }

        self.statement();
    }

    /// `class Name [ is Super ] { methods }`. The class value stays on the
    /// stack while METHOD instructions attach its methods; the sequencing
    /// POP discards it afterwards.
    fn class_definition(&mut self) {
        let symbol = self.declare_variable();

        if self.match_token(TokenKind::Is) {
            self.parse_precedence(false, Precedence::Call);
            self.emit_op(Op::Subclass);
        } else {
            self.emit_op(Op::Class);
        }

        self.define_variable(symbol);

        self.consume(TokenKind::LeftBrace, "Expect '}' after class body.");

        loop {
            if self.match_token(TokenKind::RightBrace) {
                break;
            }

            let is_static = self.match_token(TokenKind::Static);

            // The name token's rule knows how to parse the rest of the
            // signature: operators by their fixity, plain names by an
            // optional parameter list.
            let signature = rule(self.peek()).signature;
            self.advance();

            let Some(signature) = signature else {
                self.error("Expect method definition.");
                break;
            };

            self.method(is_static, signature);

            // Definitions are newline separated, but the closing brace
            // may sit on the same line.
            if self.peek() != TokenKind::RightBrace {
                self.consume(TokenKind::Line, "Expect newline after definition in class.");
            }
        }
    }

    /// One method inside a class body. The body compiles like a function,
    /// but the frame is marked as a method so `this` resolves, and the
    /// mangled signature is registered with the VM before the body runs
    /// through the shared sequencing.
    fn method(&mut self, is_static: bool, signature: SignatureFn) {
        // The name token was just consumed; start the signature from its
        // text.
        let mut name = self.previous.lexeme(self.source()).to_string();

        self.begin_frame(true);
        signature(self, &mut name);
        let symbol = self.method_symbol(&name);

        self.consume(TokenKind::LeftBrace, "Expect '{' to begin method body.");
        self.body(TokenKind::RightBrace, "Expect '}' after method body.");
        self.emit_op(Op::End);

        let constant = self.end_frame();

        if is_static {
            self.emit_op(Op::Metaclass);
        }

        self.emit_op(Op::Method);
        self.emit(symbol);
        self.emit(constant);

        // The metaclass pushed for a static method is done with.
        if is_static {
            self.emit_op(Op::Pop);
        }
    }
}
