//! Deduplicating identifier registry.
//!
//! Names map to stable indices assigned in first-seen order. Lookup is
//! hash-indexed; the entry vector preserves insertion order so indices
//! never move.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::to_u32;

/// One identifier in the symbol table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    pub name: String,
    pub index: u32,
}

impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.name)
    }
}

/// Identifier names, deduplicated, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    by_name: FxHashMap<String, u32>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `name`, inserting it if unseen.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(&index) = self.by_name.get(name) {
            return index;
        }
        let index = to_u32(self.entries.len());
        self.by_name.insert(name.to_owned(), index);
        self.entries.push(SymbolEntry {
            name: name.to_owned(),
            index,
        });
        index
    }

    /// Index of an already-registered name.
    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, index: u32) -> Option<&SymbolEntry> {
        self.entries.get(index as usize)
    }

    /// All entries in index order.
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests;
