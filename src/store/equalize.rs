//! Reverse-relation maintenance.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::relation::{Relation, SemanticRelation};

use super::WordNet;

impl WordNet {
    /// The inverse of `relation` as seen from its target, when the type has
    /// an inverse.
    fn reverse_of(source_id: &str, relation: &SemanticRelation) -> Option<Relation> {
        let reverse = relation.relation_type()?.reverse()?;
        Some(SemanticRelation::new(source_id, reverse).into())
    }

    /// Adds the inverse of `relation` (held by `source_id`) to its target.
    ///
    /// Returns `true` when a relation was added. Targets that do not resolve
    /// and types without an inverse are skipped.
    pub fn add_reverse_relation(&mut self, source_id: &str, relation: &SemanticRelation) -> bool {
        let Some(reverse) = Self::reverse_of(source_id, relation) else {
            return false;
        };
        match self.synset_mut(relation.name()) {
            Some(target) if !target.contains_relation(&reverse) => {
                target.add_relation(reverse);
                true
            }
            _ => false,
        }
    }

    /// Removes the inverse of `relation` (held by `source_id`) from its
    /// target. Returns `true` when a relation was removed.
    pub fn remove_reverse_relation(
        &mut self,
        source_id: &str,
        relation: &SemanticRelation,
    ) -> bool {
        let Some(reverse) = Self::reverse_of(source_id, relation) else {
            return false;
        };
        self.synset_mut(relation.name())
            .map(|target| target.remove_relation(&reverse))
            .unwrap_or(false)
    }

    /// Adds every missing inverse semantic relation across the store and
    /// returns how many were added.
    ///
    /// Runs collect/apply rounds until a round adds nothing, so a second call
    /// always returns `0`.
    pub fn equalize_semantic_relations(&mut self) -> usize {
        let mut total = 0;
        let mut round = 0;
        loop {
            round += 1;
            let mut seen: FxHashSet<(String, Relation)> = FxHashSet::default();
            let mut pending: Vec<(String, Relation)> = Vec::new();
            for synset in self.synsets() {
                for relation in synset.relations().iter().filter_map(Relation::as_semantic) {
                    let Some(reverse) = Self::reverse_of(synset.id(), relation) else {
                        continue;
                    };
                    let Some(target) = self.synset_with_id(relation.name()) else {
                        continue;
                    };
                    if target.contains_relation(&reverse) {
                        continue;
                    }
                    let key = (target.id().to_string(), reverse);
                    if seen.insert(key.clone()) {
                        pending.push(key);
                    }
                }
            }

            let added = pending.len();
            for (target_id, reverse) in pending {
                if let Some(target) = self.synset_mut(&target_id) {
                    target.add_relation(reverse);
                }
            }
            debug!(round, added, "store.equalize.round");
            total += added;
            if added == 0 {
                break;
            }
        }
        info!(added = total, rounds = round, "store.equalize.complete");
        total
    }
}
