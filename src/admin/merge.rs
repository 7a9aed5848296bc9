use serde::Serialize;
use tracing::{debug, info};

use crate::codec::IdMapping;
use crate::relation::Relation;
use crate::store::WordNet;
use crate::types::Result;

/// Outcome of [`merge_with_mapping`].
#[derive(Clone, Debug, Default, Serialize)]
pub struct MergeReport {
    /// Sources folded into an existing target and removed.
    pub merged: u64,
    /// Sources whose target did not exist, renamed in place.
    pub renamed: u64,
    /// Mapped ids with no synset in the store.
    pub missing: u64,
    /// Relation targets rewritten to a mapped id.
    pub relations_retargeted: u64,
    /// Relations dropped because the rewrite made them point at their owner.
    pub self_references_removed: u64,
    /// Literal-index handles dropped after the merge.
    pub index_entries_pruned: u64,
}

/// Applies an id mapping to the store.
///
/// Every mapped synset is folded into the final target of its chain and
/// removed, or renamed to that target when no synset holds it yet. Semantic
/// relations at synset and literal level that named a mapped id are then
/// retargeted, and any that end up pointing at their own synset are dropped.
/// Interlingual anchors are left alone.
pub fn merge_with_mapping(wordnet: &mut WordNet, mapping: &IdMapping) -> Result<MergeReport> {
    let mut report = MergeReport::default();

    for from in mapping.keys() {
        let Some(to) = mapping.map(from) else {
            continue;
        };
        if from == to {
            continue;
        }
        if !wordnet.contains(from) {
            debug!(from, to, "admin.merge.missing_source");
            report.missing += 1;
            continue;
        }
        if wordnet.contains(to) {
            wordnet.merge_synset(to, from)?;
            wordnet.remove_synset(from)?;
            report.merged += 1;
        } else {
            wordnet.change_synset_id(from, to)?;
            report.renamed += 1;
        }
    }

    let ids: Vec<String> = wordnet.ids().map(str::to_string).collect();
    for id in &ids {
        let Some(synset) = wordnet.synset_mut(id) else {
            continue;
        };
        report.relations_retargeted += retarget(synset.relations_mut(), mapping);
        for position in 0..synset.synonym().literal_size() {
            if let Some(literal) = synset.literal_mut(position) {
                report.relations_retargeted += retarget(literal.relations_mut(), mapping);
            }
        }

        let own: Vec<usize> = self_references(synset.relations(), id);
        for index in own.into_iter().rev() {
            synset.remove_relation_at(index);
            report.self_references_removed += 1;
        }
        for position in 0..synset.synonym().literal_size() {
            if let Some(literal) = synset.literal_mut(position) {
                let own = self_references(literal.relations(), id);
                for index in own.into_iter().rev() {
                    literal.remove_relation_at(index);
                    report.self_references_removed += 1;
                }
            }
        }
    }

    report.index_entries_pruned = wordnet.prune_literal_index() as u64;
    info!(
        merged = report.merged,
        renamed = report.renamed,
        missing = report.missing,
        retargeted = report.relations_retargeted,
        "admin.merge.complete"
    );
    Ok(report)
}

fn retarget(relations: &mut [Relation], mapping: &IdMapping) -> u64 {
    let mut changed = 0;
    for relation in relations.iter_mut() {
        if relation.as_semantic().is_none() {
            continue;
        }
        if let Some(to) = mapping.map(relation.name()) {
            if to != relation.name() {
                relation.set_name(to);
                changed += 1;
            }
        }
    }
    changed
}

fn self_references(relations: &[Relation], id: &str) -> Vec<usize> {
    relations
        .iter()
        .enumerate()
        .filter(|(_, relation)| relation.as_semantic().is_some() && relation.name() == id)
        .map(|(index, _)| index)
        .collect()
}
