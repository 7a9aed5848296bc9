use crate::hierarchy::find_path_length;
use crate::lexicon::SynSet;
use crate::store::WordNet;
use crate::types::{LexError, Result};

use super::{no_common_subsumer, root_paths, Similarity};

/// Leacock-Chodorow: `-ln(path_length / (2 * max(len(path_a), len(path_b))))`.
///
/// Undefined for non-positive path lengths, which covers a synset compared
/// with itself or with its direct parent.
#[derive(Clone, Copy, Debug)]
pub struct Lch<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Lch<'a> {
    /// Metric over `wordnet`.
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }
}

impl Similarity for Lch<'_> {
    fn compute_similarity(&self, first: &SynSet, second: &SynSet) -> Result<f64> {
        let (path_a, path_b) = root_paths(self.wordnet, first, second);
        let length =
            find_path_length(&path_a, &path_b).ok_or_else(|| no_common_subsumer(first, second))?;
        if length <= 0 {
            return Err(LexError::Undefined(
                "Leacock-Chodorow needs a positive path length",
            ));
        }
        let max_depth = path_a.len().max(path_b.len()) as f64;
        Ok(-(length as f64 / (2.0 * max_depth)).ln())
    }
}
