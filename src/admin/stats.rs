use std::collections::BTreeMap;

use serde::Serialize;

use crate::relation::{Relation, SemanticRelationType};
use crate::store::WordNet;

/// Size and shape of a lexical graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsReport {
    /// Synsets stored.
    pub synsets: u64,
    /// Literals owned by all synsets.
    pub literals: u64,
    /// Distinct indexed surface forms.
    pub distinct_literals: u64,
    /// Synsets without any definition.
    pub synsets_without_definition: u64,
    /// Synsets with neither a HYPERNYM nor an INSTANCE_HYPERNYM relation.
    pub roots: u64,
    /// Distinct interlingual anchors.
    pub interlingual_anchors: u64,
    /// Synset counts per part of speech; untagged synsets count as `none`.
    pub pos: BTreeMap<String, u64>,
    /// Relation counts by kind.
    pub relations: RelationStatsSection,
}

/// Relation totals broken down by variant and semantic type.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationStatsSection {
    /// Synset-level semantic relations.
    pub semantic: u64,
    /// Interlingual relations.
    pub interlingual: u64,
    /// Untyped relations.
    pub plain: u64,
    /// Semantic relations held by literals.
    pub literal_level: u64,
    /// Semantic relations whose tag did not resolve.
    pub unresolved: u64,
    /// Synset-level semantic relations per type tag.
    pub by_type: BTreeMap<String, u64>,
}

/// Collects [`StatsReport`] in a single pass over the store.
pub fn stats(wordnet: &WordNet) -> StatsReport {
    let mut report = StatsReport {
        synsets: wordnet.size() as u64,
        distinct_literals: wordnet.literal_list().len() as u64,
        interlingual_anchors: wordnet.interlingual_anchor_count() as u64,
        ..StatsReport::default()
    };
    for synset in wordnet.synsets() {
        let pos = synset
            .pos()
            .map(|pos| pos.to_string().to_lowercase())
            .unwrap_or_else(|| "none".to_string());
        *report.pos.entry(pos).or_default() += 1;
        if synset.number_of_definitions() == 0 {
            report.synsets_without_definition += 1;
        }
        if !synset
            .relations()
            .iter()
            .any(|r| r.semantic_type().is_some_and(SemanticRelationType::is_hypernymy))
        {
            report.roots += 1;
        }
        for relation in synset.relations() {
            match relation {
                Relation::Plain { .. } => report.relations.plain += 1,
                Relation::Interlingual(_) => report.relations.interlingual += 1,
                Relation::Semantic(rel) => {
                    report.relations.semantic += 1;
                    match rel.type_as_str() {
                        Some(tag) => *report.relations.by_type.entry(tag.to_string()).or_default() += 1,
                        None => report.relations.unresolved += 1,
                    }
                }
            }
        }
        for literal in synset.synonym() {
            report.literals += 1;
            report.relations.literal_level += literal
                .relations()
                .iter()
                .filter(|r| r.as_semantic().is_some())
                .count() as u64;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Literal, SynSet};
    use crate::relation::{InterlingualDependencyType, InterlingualRelation, SemanticRelation};
    use crate::types::Pos;

    #[test]
    fn counts_shape() {
        let mut a = SynSet::new("A");
        a.set_pos(Some(Pos::Noun));
        a.set_definition("tanım");
        a.add_literal(Literal::new("ev", 1, "A"));
        a.add_literal(Literal::new("konut", 1, "A"));
        a.add_relation(SemanticRelation::new("B", SemanticRelationType::Hypernym));
        a.add_relation(SemanticRelation::from_tag("B", "NOT_A_TAG", 0));
        a.add_relation(InterlingualRelation::new("ENG-1", InterlingualDependencyType::Synonym));
        let mut b = SynSet::new("B");
        b.add_literal(Literal::new("ev", 2, "B"));
        let store: WordNet = [a, b].into_iter().collect();

        let report = stats(&store);
        assert_eq!(report.synsets, 2);
        assert_eq!(report.literals, 3);
        assert_eq!(report.distinct_literals, 2);
        assert_eq!(report.synsets_without_definition, 1);
        assert_eq!(report.roots, 1);
        assert_eq!(report.interlingual_anchors, 1);
        assert_eq!(report.pos.get("noun"), Some(&1));
        assert_eq!(report.pos.get("none"), Some(&1));
        assert_eq!(report.relations.semantic, 2);
        assert_eq!(report.relations.unresolved, 1);
        assert_eq!(report.relations.by_type.get("HYPERNYM"), Some(&1));
    }
}
