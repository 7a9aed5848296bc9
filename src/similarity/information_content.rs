use rustc_hash::FxHashMap;

use crate::types::{LexError, Result};

/// Corpus-derived information content per synset id.
///
/// Loaded from a two-column resource by
/// [`codec::read_information_content`](crate::codec::read_information_content).
#[derive(Clone, Debug, Default)]
pub struct InformationContent {
    values: FxHashMap<String, f64>,
}

impl InformationContent {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `id`, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<String>, value: f64) {
        self.values.insert(id.into(), value);
    }

    /// Value for `id`, if present.
    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Value for `id`, or [`LexError::MissingInformationContent`].
    pub fn require(&self, id: &str) -> Result<f64> {
        self.get(id)
            .ok_or_else(|| LexError::MissingInformationContent(id.to_string()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for InformationContent {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = InformationContent::new();
        for (id, value) in iter {
            table.insert(id, value);
        }
        table
    }
}
