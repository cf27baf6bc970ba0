//! Deduplicating literal-constant registry.
//!
//! Constants are keyed by `(kind, value)`: an integer `1` and a float `1.0`
//! are two entries even though they compare equal numerically. Floats are
//! keyed by their bit pattern so the key is `Eq + Hash`.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::to_u32;

/// Literal class of a constant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstKind {
    Int,
    Float,
    String,
}

impl ConstKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstKind::Int => "int",
            ConstKind::Float => "float",
            ConstKind::String => "string",
        }
    }
}

impl fmt::Display for ConstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value stored in the constant table.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl ConstValue {
    pub fn kind(&self) -> ConstKind {
        match self {
            ConstValue::Int(_) => ConstKind::Int,
            ConstValue::Float(_) => ConstKind::Float,
            ConstValue::Str(_) => ConstKind::String,
        }
    }

    /// Dedup key combining kind and value.
    pub fn key(&self) -> ConstKey {
        match self {
            ConstValue::Int(v) => ConstKey::Int(*v),
            ConstValue::Float(v) => ConstKey::Float(v.to_bits()),
            ConstValue::Str(s) => ConstKey::Str(s.clone()),
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Int(v) => write!(f, "{v}"),
            // Debug keeps the fractional part (`1.0`) and switches to
            // exponent form for very small/large magnitudes.
            ConstValue::Float(v) => write!(f, "{v:?}"),
            ConstValue::Str(s) => write!(f, "\"{}\"", s.escape_debug()),
        }
    }
}

/// Hashable `(kind, value)` key. The variant is the kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstKey {
    Int(i64),
    /// `f64::to_bits` of the value.
    Float(u64),
    Str(String),
}

/// One literal in the constant table.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantEntry {
    pub value: ConstValue,
    pub kind: ConstKind,
    pub index: u32,
}

impl fmt::Display for ConstantEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.value, self.kind)
    }
}

/// Literal constants, deduplicated by `(kind, value)`, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ConstantTable {
    entries: Vec<ConstantEntry>,
    dedup: FxHashMap<ConstKey, u32>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `value`, inserting it if its `(kind, value)`
    /// pair is unseen.
    pub fn intern(&mut self, value: ConstValue) -> u32 {
        let key = value.key();
        if let Some(&index) = self.dedup.get(&key) {
            return index;
        }
        let index = to_u32(self.entries.len());
        self.dedup.insert(key, index);
        self.entries.push(ConstantEntry {
            kind: value.kind(),
            value,
            index,
        });
        index
    }

    /// Index of an already-registered constant.
    pub fn lookup(&self, value: &ConstValue) -> Option<u32> {
        self.dedup.get(&value.key()).copied()
    }

    pub fn get(&self, index: u32) -> Option<&ConstantEntry> {
        self.entries.get(index as usize)
    }

    /// All entries in index order.
    pub fn entries(&self) -> &[ConstantEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConstantEntry> {
        self.entries.iter()
    }
}

impl PartialEq for ConstantTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a ConstantTable {
    type Item = &'a ConstantEntry;
    type IntoIter = std::slice::Iter<'a, ConstantEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
