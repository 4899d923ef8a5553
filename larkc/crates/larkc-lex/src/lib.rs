//! larkc-lex - Lexical analysis for Lark source.
//!
//! Tokenization happens in two layers:
//!
//! 1. [`Lexer::read_raw_token`] produces one token per call from a
//!    [`cursor::Cursor`] over the source bytes. Comments and intra-line
//!    whitespace are consumed here; every newline comes out as a
//!    [`TokenKind::Line`] token.
//! 2. [`Lexer::next_token`] filters the raw stream: runs of newlines
//!    collapse to one, and a newline is discarded entirely when the token
//!    before it cannot end an expression (an operator, an opening bracket,
//!    `.`, `,`, or a keyword that needs more input). This is what makes
//!    newlines statement separators while still allowing a line break
//!    after any operator.
//!
//! The lexer is on-demand: the parser pulls one token at a time and no
//! token buffer is built.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
