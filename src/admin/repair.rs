use serde::Serialize;
use tracing::{info, warn};

use crate::relation::Relation;
use crate::store::WordNet;

use super::options::RepairOptions;
use super::verify::{duplicate_relation_indexes, FindingKind};

/// One relation removed by a repair pass.
#[derive(Clone, Debug, Serialize)]
pub struct RepairChange {
    /// Why it was removed.
    pub kind: FindingKind,
    /// Synset that held the relation.
    pub synset_id: String,
    /// Literal that held the relation, for sense-level relations.
    pub literal: Option<String>,
    /// The removed relation, rendered as `TYPE->target`.
    pub relation: String,
}

/// Outcome of [`repair`].
#[derive(Clone, Debug, Default, Serialize)]
pub struct RepairReport {
    /// Relations removed because their target repeated an earlier one.
    pub duplicates_removed: u64,
    /// Relations removed because their target does not exist.
    pub dangling_removed: u64,
    /// Inverse relations added by equalization.
    pub reverse_relations_added: u64,
    /// Literal-index handles dropped.
    pub index_entries_pruned: u64,
    /// Every removed relation, in removal order.
    pub changes: Vec<RepairChange>,
}

/// Fixes what [`super::verify`] reports as duplicate or dangling relations,
/// then optionally equalizes inverses and prunes the literal index.
///
/// Later duplicates are removed and the first occurrence is kept.
pub fn repair(wordnet: &mut WordNet, opts: &RepairOptions) -> RepairReport {
    let mut report = RepairReport::default();
    let ids: Vec<String> = wordnet.ids().map(str::to_string).collect();

    if opts.remove_duplicates {
        for id in &ids {
            let Some(synset) = wordnet.synset_mut(id) else {
                continue;
            };
            let duplicates = duplicate_relation_indexes(synset.relations());
            for index in duplicates.into_iter().rev() {
                let removed = synset.remove_relation_at(index);
                info!(synset = %id, relation = %removed, "admin.repair.duplicate_relation");
                report.duplicates_removed += 1;
                report.changes.push(RepairChange {
                    kind: FindingKind::DuplicateRelation,
                    synset_id: id.clone(),
                    literal: None,
                    relation: removed.to_string(),
                });
            }
        }
    }

    if opts.remove_dangling {
        for id in &ids {
            remove_dangling(wordnet, id, &mut report);
        }
    }

    if opts.equalize {
        report.reverse_relations_added = wordnet.equalize_semantic_relations() as u64;
    }

    if opts.prune_index {
        report.index_entries_pruned = wordnet.prune_literal_index() as u64;
    }

    info!(
        duplicates = report.duplicates_removed,
        dangling = report.dangling_removed,
        reverse_added = report.reverse_relations_added,
        pruned = report.index_entries_pruned,
        "admin.repair.complete"
    );
    report
}

fn is_dangling(wordnet: &WordNet, relation: &Relation) -> bool {
    relation.as_semantic().is_some() && !wordnet.contains(relation.name())
}

fn remove_dangling(wordnet: &mut WordNet, id: &str, report: &mut RepairReport) {
    let Some(synset) = wordnet.synset_with_id(id) else {
        return;
    };
    let synset_level: Vec<usize> = synset
        .relations()
        .iter()
        .enumerate()
        .filter(|(_, relation)| is_dangling(wordnet, relation))
        .map(|(index, _)| index)
        .collect();
    let literal_level: Vec<(usize, Vec<usize>)> = synset
        .synonym()
        .iter()
        .enumerate()
        .map(|(position, literal)| {
            let dangling = literal
                .relations()
                .iter()
                .enumerate()
                .filter(|(_, relation)| is_dangling(wordnet, relation))
                .map(|(index, _)| index)
                .collect::<Vec<_>>();
            (position, dangling)
        })
        .filter(|(_, dangling)| !dangling.is_empty())
        .collect();
    if synset_level.is_empty() && literal_level.is_empty() {
        return;
    }

    let Some(synset) = wordnet.synset_mut(id) else {
        return;
    };
    for index in synset_level.into_iter().rev() {
        let removed = synset.remove_relation_at(index);
        warn!(synset = %id, relation = %removed, "admin.repair.dangling_relation");
        report.dangling_removed += 1;
        report.changes.push(RepairChange {
            kind: FindingKind::DanglingRelation,
            synset_id: id.to_string(),
            literal: None,
            relation: removed.to_string(),
        });
    }
    for (position, indexes) in literal_level {
        let Some(literal) = synset.literal_mut(position) else {
            continue;
        };
        for index in indexes.into_iter().rev() {
            let removed = literal.remove_relation_at(index);
            warn!(
                synset = %id,
                literal = %literal,
                relation = %removed,
                "admin.repair.dangling_relation"
            );
            report.dangling_removed += 1;
            report.changes.push(RepairChange {
                kind: FindingKind::DanglingRelation,
                synset_id: id.to_string(),
                literal: Some(literal.to_string()),
                relation: removed.to_string(),
            });
        }
    }
}
