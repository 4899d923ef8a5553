//! The lexer: raw token production and the newline filter.
//!
//! [`Lexer::read_raw_token`] turns source characters into tokens one at a
//! time. [`Lexer::next_token`] wraps it and decides which newlines the
//! parser gets to see: consecutive newlines collapse into a single
//! [`TokenKind::Line`], and a newline after a token that cannot terminate
//! an expression is dropped altogether. The `skip_newlines` latch starts
//! set, so leading blank lines never reach the parser.

use larkc_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Returns true if `c` can start an identifier.
fn is_name(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` is a decimal digit.
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// An on-demand tokenizer over one source buffer.
///
/// # Example
///
/// ```
/// use larkc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x = 1");
/// assert_eq!(lexer.next_token().kind, TokenKind::Var);
/// assert_eq!(lexer.next_token().kind, TokenKind::Name);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eq);
/// assert_eq!(lexer.next_token().kind, TokenKind::Number);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// The source being lexed; token spans index into it.
    source: &'a str,

    /// Position state.
    cursor: Cursor<'a>,

    /// Start byte of the token being lexed.
    token_start: usize,

    /// Line the token being lexed starts on.
    token_start_line: u32,

    /// When set, newline tokens are discarded instead of emitted.
    skip_newlines: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of `source`. Leading newlines are
    /// skipped.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            skip_newlines: true,
        }
    }

    /// The source buffer this lexer reads from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the next token with newline filtering applied. This is the
    /// stream the parser consumes.
    pub fn next_token(&mut self) -> Token {
        loop {
            let token = self.read_raw_token();
            match token.kind {
                TokenKind::Line => {
                    if self.skip_newlines {
                        continue;
                    }
                    // Emit this newline and collapse the ones after it.
                    self.skip_newlines = true;
                    return token;
                }
                kind if kind.suppresses_newline() => {
                    self.skip_newlines = true;
                    return token;
                }
                _ => {
                    self.skip_newlines = false;
                    return token;
                }
            }
        }
    }

    /// Produces the next raw token, newlines included.
    pub fn read_raw_token(&mut self) -> Token {
        while !self.cursor.is_at_end() {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            let c = self.cursor.advance();
            match c {
                '(' => return self.make_token(TokenKind::LeftParen),
                ')' => return self.make_token(TokenKind::RightParen),
                '[' => return self.make_token(TokenKind::LeftBracket),
                ']' => return self.make_token(TokenKind::RightBracket),
                '{' => return self.make_token(TokenKind::LeftBrace),
                '}' => return self.make_token(TokenKind::RightBrace),
                ':' => return self.make_token(TokenKind::Colon),
                '.' => return self.make_token(TokenKind::Dot),
                ',' => return self.make_token(TokenKind::Comma),
                '*' => return self.make_token(TokenKind::Star),
                '/' => {
                    if self.cursor.peek() == '/' {
                        self.skip_line_comment();
                        continue;
                    }
                    if self.cursor.peek() == '*' {
                        self.skip_block_comment();
                        continue;
                    }
                    return self.make_token(TokenKind::Slash);
                }
                '%' => return self.make_token(TokenKind::Percent),
                '+' => return self.make_token(TokenKind::Plus),
                '-' => {
                    // A '-' directly followed by a digit is a negative
                    // number literal, not a unary minus.
                    if is_digit(self.cursor.peek()) {
                        return self.read_number();
                    }
                    return self.make_token(TokenKind::Minus);
                }
                '|' => return self.make_token(TokenKind::Pipe),
                '&' => return self.make_token(TokenKind::Amp),
                '=' => return self.two_char_token('=', TokenKind::EqEq, TokenKind::Eq),
                '<' => return self.two_char_token('=', TokenKind::LtEq, TokenKind::Lt),
                '>' => return self.two_char_token('=', TokenKind::GtEq, TokenKind::Gt),
                '!' => return self.two_char_token('=', TokenKind::BangEq, TokenKind::Bang),
                '\n' => return self.make_token(TokenKind::Line),
                ' ' => {
                    while self.cursor.peek() == ' ' {
                        self.cursor.advance();
                    }
                }
                '"' => return self.read_string(),
                _ => {
                    if is_name(c) {
                        return self.read_name();
                    }
                    if is_digit(c) {
                        return self.read_number();
                    }
                    return self.make_token(TokenKind::Error);
                }
            }
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.make_token(TokenKind::Eof)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            Span::new(self.token_start, self.cursor.position(), self.token_start_line),
        )
    }

    /// Consumes `expected` and makes `two`, or makes `one` without
    /// consuming anything.
    fn two_char_token(&mut self, expected: char, two: TokenKind, one: TokenKind) -> Token {
        if self.cursor.matches(expected) {
            self.make_token(two)
        } else {
            self.make_token(one)
        }
    }

    /// Skips the rest of the current line. The trailing newline is left
    /// for the next token attempt.
    fn skip_line_comment(&mut self) {
        while self.cursor.peek() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    /// Skips a block comment, honoring nesting. Hitting EOF inside the
    /// comment terminates silently.
    fn skip_block_comment(&mut self) {
        self.cursor.advance(); // The opening '*'.

        let mut nesting = 1;
        while nesting > 0 {
            if self.cursor.is_at_end() {
                return;
            }

            if self.cursor.peek() == '/' && self.cursor.peek_next() == '*' {
                self.cursor.advance();
                self.cursor.advance();
                nesting += 1;
                continue;
            }

            if self.cursor.peek() == '*' && self.cursor.peek_next() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                nesting -= 1;
                continue;
            }

            // Regular comment character.
            self.cursor.advance();
        }
    }

    /// Finishes a number literal; the first digit (or leading '-') is
    /// already consumed.
    fn read_number(&mut self) -> Token {
        while is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }

        // Only take a '.' as a decimal point when a digit follows, so a
        // method call on a number literal stays a call.
        if self.cursor.peek() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            while is_digit(self.cursor.peek()) {
                self.cursor.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Finishes an identifier and rewrites it to a keyword if it is one.
    fn read_name(&mut self) -> Token {
        while is_name(self.cursor.peek()) || is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }

        let text = &self.source[self.token_start..self.cursor.position()];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Name);
        self.make_token(kind)
    }

    /// Finishes a string literal. No escape processing; an unterminated
    /// string ends at EOF.
    fn read_string(&mut self) -> Token {
        while !self.cursor.is_at_end() {
            if self.cursor.advance() == '"' {
                break;
            }
        }
        self.make_token(TokenKind::Str)
    }
}
