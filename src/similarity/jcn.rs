use crate::hierarchy::find_lcs_id;
use crate::lexicon::SynSet;
use crate::store::WordNet;
use crate::types::{LexError, Result};

use super::{no_common_subsumer, root_paths, InformationContent, Similarity};

/// Jiang-Conrath: `1 / (ic(a) + ic(b) - 2 * ic(lcs))`.
///
/// A zero denominator, which includes every synset compared with itself, is
/// reported as [`LexError::Undefined`].
#[derive(Clone, Copy, Debug)]
pub struct Jcn<'a> {
    wordnet: &'a WordNet,
    information_content: &'a InformationContent,
}

impl<'a> Jcn<'a> {
    /// Metric over `wordnet` scored with `information_content`.
    pub fn new(wordnet: &'a WordNet, information_content: &'a InformationContent) -> Self {
        Self {
            wordnet,
            information_content,
        }
    }
}

impl Similarity for Jcn<'_> {
    fn compute_similarity(&self, first: &SynSet, second: &SynSet) -> Result<f64> {
        let ic_a = self.information_content.require(first.id())?;
        let ic_b = self.information_content.require(second.id())?;
        let (path_a, path_b) = root_paths(self.wordnet, first, second);
        let lcs = find_lcs_id(&path_a, &path_b).ok_or_else(|| no_common_subsumer(first, second))?;
        let ic_lcs = self.information_content.require(lcs)?;
        let denominator = ic_a + ic_b - 2.0 * ic_lcs;
        if denominator == 0.0 {
            return Err(LexError::Undefined(
                "Jiang-Conrath denominator is zero",
            ));
        }
        Ok(1.0 / denominator)
    }
}
