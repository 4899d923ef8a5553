//! The token model.
//!
//! [`TokenKind`] is a closed tag set; the grammar's rule table is indexed
//! by `kind as usize`, so the discriminants are stable and
//! [`TokenKind::COUNT`] bounds the table. A [`Token`] carries no owned
//! text - just its kind and a [`Span`] back into the source buffer.

use larkc_util::Span;

/// Every kind of token the lexer can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    // Punctuation.
    LeftParen = 0,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Colon,
    Dot,
    Comma,

    // Operators.
    Star,
    Slash,
    Percent,
    Plus,
    Minus,
    Pipe,
    Amp,
    Bang,
    Eq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    BangEq,

    // Keywords.
    Class,
    Else,
    False,
    Fn,
    If,
    Is,
    Null,
    Static,
    This,
    True,
    Var,

    // Literals.
    Name,
    Number,
    Str,

    // A significant newline.
    Line,

    Error,
    Eof,
}

impl TokenKind {
    /// Number of token kinds; the size of any table indexed by kind.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Rewrites an identifier to its keyword kind, if it is one.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "fn" => TokenKind::Fn,
            "if" => TokenKind::If,
            "is" => TokenKind::Is,
            "null" => TokenKind::Null,
            "static" => TokenKind::Static,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true if a newline directly after this token should be
    /// discarded because the token cannot end an expression: operators,
    /// opening brackets, `.` and `,`, and the keywords that must be
    /// followed by more input.
    pub fn suppresses_newline(self) -> bool {
        matches!(
            self,
            TokenKind::LeftParen
                | TokenKind::LeftBracket
                | TokenKind::LeftBrace
                | TokenKind::Dot
                | TokenKind::Comma
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Pipe
                | TokenKind::Amp
                | TokenKind::Bang
                | TokenKind::Eq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtEq
                | TokenKind::GtEq
                | TokenKind::EqEq
                | TokenKind::BangEq
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::If
                | TokenKind::Is
                | TokenKind::Static
                | TokenKind::Var
        )
    }
}

/// One token: its kind and where its text lives in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Creates a token of `kind` covering `span`.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// A zero-width EOF token on line 0, used to seed the parser's
    /// lookahead before the first real token is read.
    pub fn zero() -> Self {
        Self::new(TokenKind::Eof, Span::ZERO)
    }

    /// The token's text.
    pub fn lexeme<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }
}
