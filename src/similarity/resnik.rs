use crate::hierarchy::find_lcs_id;
use crate::lexicon::SynSet;
use crate::store::WordNet;
use crate::types::Result;

use super::{no_common_subsumer, root_paths, InformationContent, Similarity};

/// Resnik: the information content of the lowest common subsumer.
///
/// Both inputs and the subsumer must have an entry in the table.
#[derive(Clone, Copy, Debug)]
pub struct Resnik<'a> {
    wordnet: &'a WordNet,
    information_content: &'a InformationContent,
}

impl<'a> Resnik<'a> {
    /// Metric over `wordnet` scored with `information_content`.
    pub fn new(wordnet: &'a WordNet, information_content: &'a InformationContent) -> Self {
        Self {
            wordnet,
            information_content,
        }
    }
}

impl Similarity for Resnik<'_> {
    fn compute_similarity(&self, first: &SynSet, second: &SynSet) -> Result<f64> {
        self.information_content.require(first.id())?;
        self.information_content.require(second.id())?;
        let (path_a, path_b) = root_paths(self.wordnet, first, second);
        let lcs = find_lcs_id(&path_a, &path_b).ok_or_else(|| no_common_subsumer(first, second))?;
        self.information_content.require(lcs)
    }
}
