//! Expression parsing: the Pratt rule table and everything it dispatches.
//!
//! Each token kind owns one [`GrammarRule`] slot holding up to three
//! callbacks: a prefix compiler (the token starts an expression), an infix
//! compiler (the token continues one), and a signature compiler (the token
//! names a method inside a class body). Binary operators also carry their
//! canonical method name - `"+ "`, `"== "` - with a trailing space
//! reserving room for the one-argument arity marker, since operators are
//! sugar for method calls.
//!
//! [`Compiler::parse_precedence`] is the driver: consume one token, run
//! its prefix rule, then fold in infix rules while the lookahead binds at
//! least as tightly as the caller demands. The same table steers method
//! signature parsing in class bodies, which is what lets `+` be both an
//! expression operator and a definable method with one shared description.

use larkc_lex::TokenKind;
use larkc_vm::{Op, Value};

use crate::Compiler;

/// Binding strength, weakest first. `parse_precedence` keeps folding while
/// the lookahead's rule binds at `min` or tighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    None,
    Lowest,
    Assignment, // =
    Is,         // is
    Equality,   // == !=
    Comparison, // < > <= >=
    Bitwise,    // | &
    Term,       // + - %
    Factor,     // * /
    Unary,      // unary - !
    Call,       // . ()
}

impl Precedence {
    /// The next tighter level; used for left-associative operands.
    fn one_higher(self) -> Precedence {
        match self {
            Precedence::None => Precedence::Lowest,
            Precedence::Lowest => Precedence::Assignment,
            Precedence::Assignment => Precedence::Is,
            Precedence::Is => Precedence::Equality,
            Precedence::Equality => Precedence::Comparison,
            Precedence::Comparison => Precedence::Bitwise,
            Precedence::Bitwise => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary => Precedence::Call,
            Precedence::Call => Precedence::Call,
        }
    }
}

/// A prefix or infix expression compiler.
pub(crate) type GrammarFn = fn(&mut Compiler<'_, '_>, bool);

/// A method-signature compiler; appends to the mangled name and declares
/// the parameters the form takes.
pub(crate) type SignatureFn = fn(&mut Compiler<'_, '_>, &mut String);

/// One row of the rule table.
pub(crate) struct GrammarRule {
    pub prefix: Option<GrammarFn>,
    pub infix: Option<GrammarFn>,
    pub signature: Option<SignatureFn>,
    pub precedence: Precedence,
    /// Canonical method name for operator tokens.
    pub name: Option<&'static str>,
}

const fn unused() -> GrammarRule {
    GrammarRule {
        prefix: None,
        infix: None,
        signature: None,
        precedence: Precedence::None,
        name: None,
    }
}

const fn prefix(func: GrammarFn) -> GrammarRule {
    GrammarRule {
        prefix: Some(func),
        infix: None,
        signature: None,
        precedence: Precedence::None,
        name: None,
    }
}

const fn infix(precedence: Precedence, func: GrammarFn) -> GrammarRule {
    GrammarRule {
        prefix: None,
        infix: Some(func),
        signature: None,
        precedence,
        name: None,
    }
}

const fn infix_operator(precedence: Precedence, name: &'static str) -> GrammarRule {
    GrammarRule {
        prefix: None,
        infix: Some(infix_op),
        signature: Some(infix_signature),
        precedence,
        name: Some(name),
    }
}

const fn operator(precedence: Precedence, name: &'static str) -> GrammarRule {
    GrammarRule {
        prefix: Some(unary_op),
        infix: Some(infix_op),
        signature: Some(mixed_signature),
        precedence,
        name: Some(name),
    }
}

const fn prefix_operator(name: &'static str) -> GrammarRule {
    GrammarRule {
        prefix: Some(unary_op),
        infix: None,
        signature: Some(unary_signature),
        precedence: Precedence::None,
        name: Some(name),
    }
}

/// The rule table, indexed by `TokenKind as usize`. Order must match the
/// `TokenKind` declaration exactly.
static RULES: [GrammarRule; TokenKind::COUNT] = [
    /* LeftParen    */ prefix(grouping),
    /* RightParen   */ unused(),
    /* LeftBracket  */ unused(),
    /* RightBracket */ unused(),
    /* LeftBrace    */ unused(),
    /* RightBrace   */ unused(),
    /* Colon        */ unused(),
    /* Dot          */ infix(Precedence::Call, call),
    /* Comma        */ unused(),
    /* Star         */ infix_operator(Precedence::Factor, "* "),
    /* Slash        */ infix_operator(Precedence::Factor, "/ "),
    /* Percent      */ infix_operator(Precedence::Term, "% "),
    /* Plus         */ infix_operator(Precedence::Term, "+ "),
    /* Minus        */ operator(Precedence::Term, "- "),
    /* Pipe         */ unused(),
    /* Amp          */ unused(),
    /* Bang         */ prefix_operator("!"),
    /* Eq           */ unused(),
    /* Lt           */ infix_operator(Precedence::Comparison, "< "),
    /* Gt           */ infix_operator(Precedence::Comparison, "> "),
    /* LtEq         */ infix_operator(Precedence::Comparison, "<= "),
    /* GtEq         */ infix_operator(Precedence::Comparison, ">= "),
    /* EqEq         */ infix_operator(Precedence::Equality, "== "),
    /* BangEq       */ infix_operator(Precedence::Equality, "!= "),
    /* Class        */ unused(),
    /* Else         */ unused(),
    /* False        */ prefix(boolean),
    /* Fn           */ prefix(function),
    /* If           */ unused(),
    /* Is           */ infix(Precedence::Is, is_op),
    /* Null         */ prefix(null),
    /* Static       */ unused(),
    /* This         */ prefix(this),
    /* True         */ prefix(boolean),
    /* Var          */ unused(),
    /* Name         */
    GrammarRule {
        prefix: Some(name),
        infix: None,
        signature: Some(parameter_list),
        precedence: Precedence::None,
        name: None,
    },
    /* Number       */ prefix(number),
    /* Str          */ prefix(string),
    /* Line         */ unused(),
    /* Error        */ unused(),
    /* Eof          */ unused(),
];

/// The rule for a token kind. O(1); the table is fixed at compile time.
pub(crate) fn rule(kind: TokenKind) -> &'static GrammarRule {
    &RULES[kind as usize]
}

impl<'src, 'vm> Compiler<'src, 'vm> {
    /// The Pratt driver. Consumes at least one token and compiles an
    /// expression whose operators all bind at `min_precedence` or tighter.
    /// `allow_assignment` reaches the prefix rules so only an outermost
    /// bare name can be an assignment target.
    pub(crate) fn parse_precedence(&mut self, allow_assignment: bool, min_precedence: Precedence) {
        self.advance();
        let Some(prefix) = rule(self.previous.kind).prefix else {
            self.error("No prefix parser.");
            return;
        };
        prefix(self, allow_assignment);

        while min_precedence <= rule(self.peek()).precedence {
            self.advance();
            if let Some(infix) = rule(self.previous.kind).infix {
                infix(self, allow_assignment);
            }
        }
    }

    /// Compiles one expression. This excludes statement-position forms
    /// such as `var`; those live in the statement grammar.
    pub(crate) fn expression(&mut self, allow_assignment: bool) {
        self.parse_precedence(allow_assignment, Precedence::Lowest);
    }
}

// Prefix and infix compilers --------------------------------------------------
//
// These are free functions so the rule table can hold plain fn pointers
// over any compiler lifetime.

/// `( expr )`
fn grouping(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    c.expression(false);
    c.consume(TokenKind::RightParen, "Expect ')' after expression.");
}

/// A unary operator such as `!x` or `-x`: compile the operand, then call
/// the zero-argument operator method on it. Zero arguments means no arity
/// spaces, so only the operator character itself is the name.
fn unary_op(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    let Some(name) = rule(c.previous.kind).name else {
        return;
    };

    // The operand binds tighter than any unary operator.
    c.parse_precedence(false, Precedence::Unary.one_higher());

    let symbol = c.method_symbol(&name[..1]);
    c.emit_op(Op::Call0);
    c.emit(symbol);
}

/// A binary operator: compile the right operand, then call the
/// one-argument operator method on the left. Left associativity comes from
/// parsing the right side one level tighter.
fn infix_op(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    let rule = rule(c.previous.kind);
    let Some(name) = rule.name else {
        return;
    };

    c.parse_precedence(false, rule.precedence.one_higher());

    let symbol = c.method_symbol(name);
    c.emit_op(Op::Call1);
    c.emit(symbol);
}

/// `expr is Type` - a dedicated type-test instruction, not a method call.
fn is_op(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    c.parse_precedence(false, Precedence::Call);
    c.emit_op(Op::Is);
}

/// `.name` or `.name(args)`: build the mangled signature - the bare name
/// plus one space per argument - and call through the method table, with
/// the arity encoded in the opcode.
fn call(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    c.consume(TokenKind::Name, "Expect method name after '.'.");
    let mut name = c.previous.lexeme(c.source()).to_string();
    let mut num_args = 0;

    if c.match_token(TokenKind::LeftParen) {
        if c.peek() != TokenKind::RightParen {
            loop {
                c.statement();
                num_args += 1;
                name.push(' ');
                if !c.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        c.consume(TokenKind::RightParen, "Expect ')' after arguments.");
    }

    let symbol = c.method_symbol(&name);
    match Op::call(num_args) {
        Some(op) => c.emit_op(op),
        None => {
            c.error("Too many arguments.");
            c.emit_op(Op::Call9)
        }
    };
    c.emit(symbol);
}

fn boolean(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    if c.previous.kind == TokenKind::False {
        c.emit_op(Op::False);
    } else {
        c.emit_op(Op::True);
    }
}

fn null(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    c.emit_op(Op::Null);
}

/// A number literal, lexed as one token even when negative.
fn number(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    let lexeme = c.previous.lexeme(c.source());
    let value: f64 = match lexeme.parse() {
        Ok(value) => value,
        Err(_) => {
            c.error("Invalid number literal.");
            0.0
        }
    };

    let constant = c.make_constant(Value::num(value));
    c.emit_op(Op::Constant);
    c.emit(constant);
}

/// A string literal. The surrounding quotes are dropped; there is no
/// escape processing.
fn string(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    let lexeme = c.previous.lexeme(c.source());
    let text = lexeme
        .strip_prefix('"')
        .unwrap_or(lexeme)
        .strip_suffix('"')
        .unwrap_or_default();

    let constant = c.make_constant(Value::string(text));
    c.emit_op(Op::Constant);
    c.emit(constant);
}

/// `this` loads the receiver from local slot 0. Legal only when some
/// enclosing frame is a method body.
fn this(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    if !c.inside_method() {
        c.error("Cannot use 'this' outside of a method.");
        return;
    }

    c.emit_op(Op::LoadLocal);
    c.emit(0);
}

/// A bare name: resolve as a local in the current frame, then as a global.
/// With `=` following in an assignment position, compile a store;
/// otherwise a load. Locals in outer function frames are not visible.
fn name(c: &mut Compiler<'_, '_>, allow_assignment: bool) {
    let name = c.previous.lexeme(c.source()).to_string();

    let local = c.find_local(&name);
    let global = if local.is_none() {
        c.find_global(&name)
    } else {
        None
    };

    if local.is_none() && global.is_none() {
        c.error("Undefined variable.");
    }

    if c.match_token(TokenKind::Eq) {
        if !allow_assignment {
            c.error("Invalid assignment.");
        }

        // The right-hand side is a full statement, so `x = if (cond) a
        // else b` works.
        c.statement();

        if let Some(slot) = local {
            c.emit_op(Op::StoreLocal);
            c.emit(slot as u8);
        } else {
            c.emit_op(Op::StoreGlobal);
            c.emit(global.unwrap_or(0) as u8);
        }
        return;
    }

    if let Some(slot) = local {
        c.emit_op(Op::LoadLocal);
        c.emit(slot as u8);
    } else {
        c.emit_op(Op::LoadGlobal);
        c.emit(global.unwrap_or(0) as u8);
    }
}

/// `fn` - an anonymous function literal. The body compiles into a fresh
/// frame; the finished function lands in the parent's constant pool and a
/// CONSTANT instruction loads it.
fn function(c: &mut Compiler<'_, '_>, _allow_assignment: bool) {
    c.begin_frame(false);

    // A function literal has no signature name to build.
    let mut scratch = String::new();
    parameter_list(c, &mut scratch);

    if c.match_token(TokenKind::LeftBrace) {
        c.body(TokenKind::RightBrace, "Expect '}' after function body.");
    } else {
        // Single expression body.
        c.expression(false);
    }
    c.emit_op(Op::End);

    let constant = c.end_frame();
    c.emit_op(Op::Constant);
    c.emit(constant);
}

// Signature compilers ---------------------------------------------------------

/// An optional parenthesized parameter list. Each parameter becomes a
/// local in the frame being compiled and appends one arity space to the
/// signature.
pub(crate) fn parameter_list(c: &mut Compiler<'_, '_>, name: &mut String) {
    if !c.match_token(TokenKind::LeftParen) {
        return;
    }
    if c.peek() != TokenKind::RightParen {
        loop {
            c.declare_variable();
            name.push(' ');
            if !c.match_token(TokenKind::Comma) {
                break;
            }
        }
    }
    c.consume(TokenKind::RightParen, "Expect ')' after parameters.");
}

/// An infix operator method: exactly one right-hand parameter.
fn infix_signature(c: &mut Compiler<'_, '_>, name: &mut String) {
    name.push(' ');
    c.declare_variable();
}

/// A unary operator method: the name is already complete.
fn unary_signature(_c: &mut Compiler<'_, '_>, _name: &mut String) {}

/// An operator that can be defined either way (`-`): a parameter name
/// makes it infix, otherwise it is unary.
fn mixed_signature(c: &mut Compiler<'_, '_>, name: &mut String) {
    if c.peek() == TokenKind::Name {
        name.push(' ');
        c.declare_variable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;
    use larkc_vm::{ObjFn, Vm};

    fn compile_ok(source: &str) -> (ObjFn, Vm) {
        let mut vm = Vm::new();
        let func = compile(&mut vm, source).expect("expected source to compile");
        (func, vm)
    }

    fn op(o: Op) -> u8 {
        o.into()
    }

    #[test]
    fn test_number_literal() {
        let (func, _) = compile_ok("42");
        assert_eq!(func.code, vec![op(Op::Constant), 0, op(Op::End)]);
        assert_eq!(func.constants, vec![Value::num(42.0)]);
    }

    #[test]
    fn test_negative_number_literal() {
        let (func, _) = compile_ok("-42");
        assert_eq!(func.code, vec![op(Op::Constant), 0, op(Op::End)]);
        assert_eq!(func.constants, vec![Value::num(-42.0)]);
    }

    #[test]
    fn test_fractional_number() {
        let (func, _) = compile_ok("1.5");
        assert_eq!(func.constants, vec![Value::num(1.5)]);
    }

    #[test]
    fn test_string_literal_drops_quotes() {
        let (func, _) = compile_ok("\"hello\"");
        assert_eq!(func.constants, vec![Value::string("hello")]);
    }

    #[test]
    fn test_singletons() {
        let (func, _) = compile_ok("true");
        assert_eq!(func.code, vec![op(Op::True), op(Op::End)]);
        let (func, _) = compile_ok("false");
        assert_eq!(func.code, vec![op(Op::False), op(Op::End)]);
        let (func, _) = compile_ok("null");
        assert_eq!(func.code, vec![op(Op::Null), op(Op::End)]);
    }

    #[test]
    fn test_binary_operator_is_method_call() {
        let (func, vm) = compile_ok("1 + 2");
        assert_eq!(
            func.code,
            vec![
                op(Op::Constant),
                0,
                op(Op::Constant),
                1,
                op(Op::Call1),
                0,
                op(Op::End)
            ]
        );
        assert_eq!(vm.methods.find("+ "), Some(0));
    }

    #[test]
    fn test_precedence_factor_binds_tighter() {
        let (func, vm) = compile_ok("1 + 2 * 3");
        assert_eq!(
            func.code,
            vec![
                op(Op::Constant),
                0,
                op(Op::Constant),
                1,
                op(Op::Constant),
                2,
                op(Op::Call1),
                vm.methods.find("* ").unwrap() as u8,
                op(Op::Call1),
                vm.methods.find("+ ").unwrap() as u8,
                op(Op::End)
            ]
        );
        assert_eq!(
            func.constants,
            vec![Value::num(1.0), Value::num(2.0), Value::num(3.0)]
        );
    }

    #[test]
    fn test_left_associativity() {
        // 10 - 2 - 3 compiles as (10 - 2) - 3: the first call runs on the
        // first two constants.
        let (func, vm) = compile_ok("10 - 2 - 3");
        let minus = vm.methods.find("- ").unwrap() as u8;
        assert_eq!(
            func.code,
            vec![
                op(Op::Constant),
                0,
                op(Op::Constant),
                1,
                op(Op::Call1),
                minus,
                op(Op::Constant),
                2,
                op(Op::Call1),
                minus,
                op(Op::End)
            ]
        );
    }

    #[test]
    fn test_grouping_overrides_precedence() {
        let (func, vm) = compile_ok("(1 + 2) * 3");
        let plus = vm.methods.find("+ ").unwrap() as u8;
        let star = vm.methods.find("* ").unwrap() as u8;
        assert_eq!(
            func.code,
            vec![
                op(Op::Constant),
                0,
                op(Op::Constant),
                1,
                op(Op::Call1),
                plus,
                op(Op::Constant),
                2,
                op(Op::Call1),
                star,
                op(Op::End)
            ]
        );
    }

    #[test]
    fn test_unary_bang() {
        let (func, vm) = compile_ok("!true");
        assert_eq!(func.code, vec![op(Op::True), op(Op::Call0), 0, op(Op::End)]);
        // Zero arguments, so no arity space.
        assert_eq!(vm.methods.find("!"), Some(0));
    }

    #[test]
    fn test_unary_minus_mangles_without_space() {
        let (func, vm) = compile_ok("var a = 1\n-a");
        assert_eq!(vm.methods.find("-"), Some(0));
        assert_eq!(vm.methods.find("- "), None);
        assert_eq!(func.code.last(), Some(&op(Op::End)));
    }

    #[test]
    fn test_is_emits_type_test() {
        let (func, _) = compile_ok("1 is 2");
        assert_eq!(
            func.code,
            vec![
                op(Op::Constant),
                0,
                op(Op::Constant),
                1,
                op(Op::Is),
                op(Op::End)
            ]
        );
    }

    #[test]
    fn test_method_call_with_args() {
        let (func, vm) = compile_ok("var a = 1\na.between(2, 3)");
        // Signature carries one trailing space per argument.
        let symbol = vm.methods.find("between  ").unwrap() as u8;
        let tail = &func.code[func.code.len() - 3..];
        assert_eq!(tail, [op(Op::Call2), symbol, op(Op::End)]);
    }

    #[test]
    fn test_zero_arg_call_has_bare_name() {
        let (_, vm) = compile_ok("var a = 1\na.size");
        assert_eq!(vm.methods.find("size"), Some(0));
        assert_eq!(vm.methods.find("size "), None);
    }

    #[test]
    fn test_arity_overloads_get_distinct_symbols() {
        let (_, vm) = compile_ok("var a = 1\na.go()\na.go(1)\na.go(1, 2)");
        let zero = vm.methods.find("go").unwrap();
        let one = vm.methods.find("go ").unwrap();
        let two = vm.methods.find("go  ").unwrap();
        assert!(zero != one && one != two && zero != two);
    }

    #[test]
    fn test_call_site_and_definition_share_symbol() {
        let source = "class A {\n  go(x) { x }\n}\nA.go(1)";
        let (_, vm) = compile_ok(source);
        // One symbol serves both the METHOD definition and the CALL_1.
        assert_eq!(vm.methods.len(), 1);
        assert_eq!(vm.methods.find("go "), Some(0));
    }

    #[test]
    fn test_nested_function_literal() {
        let (func, vm) = compile_ok("fn(x, y) x + y");
        assert_eq!(func.code, vec![op(Op::Constant), 0, op(Op::End)]);

        let inner = func.constants[0].as_fn().expect("constant 0 is the fn");
        let plus = vm.methods.find("+ ").unwrap() as u8;
        // Slot 0 is the reserved receiver; parameters start at 1.
        assert_eq!(
            inner.code,
            vec![
                op(Op::LoadLocal),
                1,
                op(Op::LoadLocal),
                2,
                op(Op::Call1),
                plus,
                op(Op::End)
            ]
        );
    }

    #[test]
    fn test_function_block_body() {
        let (func, _) = compile_ok("fn { 1\n2 }");
        let inner = func.constants[0].as_fn().unwrap();
        assert_eq!(
            inner.code,
            vec![
                op(Op::Constant),
                0,
                op(Op::Pop),
                op(Op::Constant),
                1,
                op(Op::End)
            ]
        );
    }

    #[test]
    fn test_global_load_and_store() {
        let (func, _) = compile_ok("var x = 1\nx = 2\nx");
        assert_eq!(
            func.code,
            vec![
                op(Op::Constant),
                0,
                op(Op::StoreGlobal),
                0,
                op(Op::Pop),
                op(Op::Constant),
                1,
                op(Op::StoreGlobal),
                0,
                op(Op::Pop),
                op(Op::LoadGlobal),
                0,
                op(Op::End)
            ]
        );
        assert_eq!(func.constants, vec![Value::num(1.0), Value::num(2.0)]);
    }

    #[test]
    fn test_undefined_variable() {
        let mut vm = Vm::new();
        let err = compile(&mut vm, "ghost").unwrap_err();
        assert_eq!(err.diagnostics[0].message, "Undefined variable.");
        assert_eq!(err.diagnostics[0].lexeme, "ghost");
    }

    #[test]
    fn test_assignment_only_at_statement_level() {
        let mut vm = Vm::new();
        let err = compile(&mut vm, "var x = 1\nvar y = 2\n1 + x = y").unwrap_err();
        assert_eq!(err.diagnostics[0].message, "Invalid assignment.");
    }

    #[test]
    fn test_this_outside_method() {
        let mut vm = Vm::new();
        let err = compile(&mut vm, "this").unwrap_err();
        assert_eq!(
            err.diagnostics[0].message,
            "Cannot use 'this' outside of a method."
        );
    }

    #[test]
    fn test_this_inside_method_loads_slot_zero() {
        let (func, _) = compile_ok("class A {\n  me { this }\n}");
        let method = func.constants[0].as_fn().unwrap();
        assert_eq!(method.code, vec![op(Op::LoadLocal), 0, op(Op::End)]);
    }

    #[test]
    fn test_this_inside_fn_inside_method_is_allowed() {
        // The frame walk looks through non-method frames for an enclosing
        // method.
        let (func, _) = compile_ok("class A {\n  me { fn this }\n}");
        let method = func.constants[0].as_fn().unwrap();
        let inner = method.constants[0].as_fn().unwrap();
        assert_eq!(inner.code, vec![op(Op::LoadLocal), 0, op(Op::End)]);
    }

    #[test]
    fn test_missing_prefix_rule() {
        let mut vm = Vm::new();
        let err = compile(&mut vm, "*").unwrap_err();
        assert_eq!(err.diagnostics[0].message, "No prefix parser.");
        assert_eq!(err.diagnostics[0].lexeme, "*");
    }

    #[test]
    fn test_unclosed_grouping() {
        let mut vm = Vm::new();
        let err = compile(&mut vm, "(1").unwrap_err();
        assert_eq!(err.diagnostics[0].message, "Expect ')' after expression.");
    }

    #[test]
    fn test_line_continuation_after_operator() {
        let (func, _) = compile_ok("1 +\n2");
        assert_eq!(
            func.code,
            vec![
                op(Op::Constant),
                0,
                op(Op::Constant),
                1,
                op(Op::Call1),
                0,
                op(Op::End)
            ]
        );
    }
}
