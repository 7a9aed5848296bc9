use tracing::warn;

use crate::lexicon::SynSet;
use crate::relation::SemanticRelationType;

use super::WordNet;

impl WordNet {
    /// Parent of `synset`: the target of its first HYPERNYM or
    /// INSTANCE_HYPERNYM relation in stored order.
    ///
    /// `None` for roots and for a first hypernym that does not resolve.
    pub fn percolate_up(&self, synset: &SynSet) -> Option<&SynSet> {
        let parent = synset.relations().iter().find(|relation| {
            matches!(
                relation.semantic_type(),
                Some(SemanticRelationType::Hypernym | SemanticRelationType::InstanceHypernym)
            )
        })?;
        self.synset_with_id(parent.name())
    }

    /// Ids from `synset` up to its root, closest first.
    ///
    /// Stops before revisiting an id, so the result never repeats and the
    /// walk terminates on cyclic data.
    pub fn find_path_to_root(&self, synset: &SynSet) -> Vec<String> {
        let mut path: Vec<String> = Vec::new();
        let mut current = Some(synset);
        while let Some(node) = current {
            if path.iter().any(|id| id == node.id()) {
                warn!(start = synset.id(), repeated = node.id(), "hierarchy.cycle_detected");
                break;
            }
            path.push(node.id().to_string());
            current = self.percolate_up(node);
        }
        path
    }
}
