//! larkc-util - Shared compiler infrastructure.
//!
//! This crate holds the pieces every other larkc crate leans on:
//!
//! - [`Span`] - a byte range in the source plus the line it starts on.
//! - [`Diagnostic`] and [`Handler`] - error records and the collector the
//!   compiler reports into. The compiler never prints; it hands its
//!   diagnostics to whoever called it.
//! - [`SymbolTable`] - a dense, insertion-ordered name-to-index map. The
//!   same type backs per-function local slots, the VM's global variable
//!   indices, and the VM's method signature table.

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler};
pub use span::Span;
pub use symbol::SymbolTable;
