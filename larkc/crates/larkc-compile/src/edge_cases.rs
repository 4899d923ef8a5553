//! Edge case tests for larkc-compile.
