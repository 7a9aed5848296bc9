use crate::hierarchy::find_path_length;
use crate::lexicon::SynSet;
use crate::store::WordNet;
use crate::types::Result;

use super::{no_common_subsumer, root_paths, Similarity};

/// Path length between two synsets through their first meeting point.
/// Larger means more distant; the value is not normalized.
#[derive(Clone, Copy, Debug)]
pub struct SimilarityPath<'a> {
    wordnet: &'a WordNet,
}

impl<'a> SimilarityPath<'a> {
    /// Metric over `wordnet`.
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }
}

impl Similarity for SimilarityPath<'_> {
    fn compute_similarity(&self, first: &SynSet, second: &SynSet) -> Result<f64> {
        let (path_a, path_b) = root_paths(self.wordnet, first, second);
        find_path_length(&path_a, &path_b)
            .map(|length| length as f64)
            .ok_or_else(|| no_common_subsumer(first, second))
    }
}
