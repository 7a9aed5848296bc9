use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::types::Pos;

/// Irregular inflection: a surface form and the root it reduces to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionalWord {
    /// Inflected surface form, e.g. `went`.
    pub surface: String,
    /// Root form, e.g. `go`.
    pub root: String,
    /// Part of speech of the root.
    pub pos: Pos,
}

/// Surface form to irregular roots. One surface form may map to several
/// roots (`left` is both `leave` and `left`).
#[derive(Clone, Debug, Default)]
pub struct ExceptionTable {
    entries: FxHashMap<String, Vec<ExceptionalWord>>,
}

impl ExceptionTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry; exact duplicates are ignored.
    pub fn insert(&mut self, word: ExceptionalWord) {
        let words = self.entries.entry(word.surface.clone()).or_default();
        if !words.contains(&word) {
            words.push(word);
        }
    }

    /// Entries for `surface`, in insertion order.
    pub fn lookup(&self, surface: &str) -> &[ExceptionalWord] {
        self.entries.get(surface).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct surface forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ExceptionalWord> for ExceptionTable {
    fn from_iter<I: IntoIterator<Item = ExceptionalWord>>(iter: I) -> Self {
        let mut table = ExceptionTable::new();
        for word in iter {
            table.insert(word);
        }
        table
    }
}
