use crate::hierarchy::find_lcs_depth;
use crate::lexicon::SynSet;
use crate::store::WordNet;
use crate::types::Result;

use super::{root_paths, Similarity};

/// `2 * depth(lcs) / (len(path_a) + len(path_b))`, in `[0, 1]`.
///
/// A pair without a common ancestor scores `0`.
#[derive(Clone, Copy, Debug)]
pub struct WuPalmer<'a> {
    wordnet: &'a WordNet,
}

impl<'a> WuPalmer<'a> {
    /// Metric over `wordnet`.
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }
}

impl Similarity for WuPalmer<'_> {
    fn compute_similarity(&self, first: &SynSet, second: &SynSet) -> Result<f64> {
        let (path_a, path_b) = root_paths(self.wordnet, first, second);
        let depth = find_lcs_depth(&path_a, &path_b).unwrap_or(0);
        Ok(2.0 * depth as f64 / (path_a.len() + path_b.len()) as f64)
    }
}
