//! Dense symbol tables.
//!
//! A [`SymbolTable`] maps names to small integer indices assigned in
//! insertion order. Three instances exist during a compile: one per
//! function frame for local slots, and two owned by the VM - global
//! variable names and method signatures. Bytecode refers to all three by
//! index, so the mapping must be dense and stable.
//!
//! # Example
//!
//! ```
//! use larkc_util::SymbolTable;
//!
//! let mut table = SymbolTable::new();
//! assert_eq!(table.add("x"), Some(0));
//! assert_eq!(table.add("y"), Some(1));
//! assert_eq!(table.add("x"), None); // already present
//! assert_eq!(table.find("y"), Some(1));
//! assert_eq!(table.ensure("y"), 1);
//! assert_eq!(table.ensure("z"), 2);
//! ```

use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use rustc_hash::FxHasher;

/// An insertion-ordered set of names, each addressed by its dense index.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    names: IndexSet<String, BuildHasherDefault<FxHasher>>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name`, returning its new index, or `None` if the name is
    /// already present. Used for declarations, where a duplicate is an
    /// error the caller reports.
    pub fn add(&mut self, name: &str) -> Option<usize> {
        if self.names.contains(name) {
            return None;
        }
        let (index, _) = self.names.insert_full(name.to_string());
        Some(index)
    }

    /// Looks up `name`, returning its index if present.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    /// Returns the index of `name`, inserting it first if absent. Used for
    /// references that are allowed to create the symbol, such as method
    /// call sites.
    pub fn ensure(&mut self, name: &str) -> usize {
        self.names.insert_full(name.to_string()).0
    }

    /// Returns the name stored at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get_index(index).map(String::as_str)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no symbols have been added.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
