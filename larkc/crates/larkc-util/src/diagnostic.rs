//! Error reporting infrastructure.
//!
//! The compiler reports problems into a [`Handler`] and keeps going, so a
//! single compile can surface several errors. The handler latches an error
//! flag on the first report; the caller inspects it once parsing finishes
//! and decides whether the compiled artifact is usable.
//!
//! Rendering is fixed: every diagnostic displays as
//!
//! ```text
//! [Line N] Error on '<lexeme>': <message>
//! ```
//!
//! # Example
//!
//! ```
//! use larkc_util::Handler;
//!
//! let handler = Handler::new();
//! handler.error(3, "whil", "No prefix parser.");
//!
//! assert!(handler.has_errors());
//! let rendered = handler.diagnostics()[0].to_string();
//! assert_eq!(rendered, "[Line 3] Error on 'whil': No prefix parser.");
//! ```

use std::cell::RefCell;
use std::fmt;

/// A single compile error: the offending token's line and lexeme, and the
/// message reported at the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line of the token the error was reported on (1-based).
    pub line: u32,
    /// Text of the token the error was reported on.
    pub lexeme: String,
    /// What went wrong.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic for the token `lexeme` on `line`.
    pub fn new(line: u32, lexeme: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            line,
            lexeme: lexeme.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Line {}] Error on '{}': {}",
            self.line, self.lexeme, self.message
        )
    }
}

/// Collects diagnostics during one compilation.
///
/// Reporting never aborts parsing; the handler records the diagnostic and
/// the compiler carries on so later errors are surfaced too. `has_errors`
/// answers whether the final artifact must be discarded.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports an error on the token `lexeme` at `line`.
    pub fn error(&self, line: u32, lexeme: impl Into<String>, message: impl Into<String>) {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::new(line, lexeme, message));
    }

    /// Returns true once any error has been reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns a copy of the collected diagnostics, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consumes the handler, yielding the collected diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let diag = Diagnostic::new(7, "+", "No prefix parser.");
        assert_eq!(diag.to_string(), "[Line 7] Error on '+': No prefix parser.");
    }

    #[test]
    fn test_handler_starts_clean() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_latches() {
        let handler = Handler::new();
        handler.error(1, "x", "Undefined variable.");
        assert!(handler.has_errors());
        handler.error(2, "y", "Undefined variable.");
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_diagnostics_keep_report_order() {
        let handler = Handler::new();
        handler.error(5, "a", "first");
        handler.error(2, "b", "second");

        let diags = handler.diagnostics();
        assert_eq!(diags[0].message, "first");
        assert_eq!(diags[1].message, "second");
    }

    #[test]
    fn test_into_diagnostics() {
        let handler = Handler::new();
        handler.error(1, "class", "Expected variable name.");
        let diags = handler.into_diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 1);
        assert_eq!(diags[0].lexeme, "class");
    }
}
