//! In-memory lexical graph store.
//!
//! [`WordNet`] owns every [`SynSet`] and keeps two secondary indexes over
//! them: surface form to literal occurrences, and interlingual anchor to
//! synsets. Both hold `(id, ...)` handles rather than copies, so edits made
//! through a synset are visible through the indexes without a resync.
//!
//! The store is single-writer. Every mutation takes `&mut self`; callers that
//! need concurrent readers wrap it in their own lock or snapshot scheme.

mod construct;
mod equalize;
mod exception;
mod index;
mod lookup;
mod traversal;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::lexicon::{Literal, SynSet};
use crate::relation::Relation;
use crate::types::{LexError, Result};

/// Morphological analysis capability used by the construction helpers.
pub use construct::{MorphologicalAnalyzer, MorphologicalParse};

/// Irregular-inflection table consulted by the modified-literal back-off.
pub use exception::{ExceptionTable, ExceptionalWord};

use index::{InterlingualIndex, LiteralIndex};

/// Tombstones tolerated before the slot vector is compacted.
const COMPACT_MIN_DEAD_SLOTS: usize = 1024;

/// Graph store of synsets with literal and interlingual indexes.
///
/// Iteration follows insertion order. Renaming a synset through
/// [`WordNet::change_synset_id`] moves it to the end.
#[derive(Debug, Default)]
pub struct WordNet {
    slots: Vec<Option<SynSet>>,
    by_id: FxHashMap<String, usize>,
    dead_slots: usize,
    literal_index: LiteralIndex,
    interlingual_index: InterlingualIndex,
    exceptions: ExceptionTable,
}

impl WordNet {
    /// Empty store without an exception table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store that consults `exceptions` for irregular inflections.
    pub fn with_exceptions(exceptions: ExceptionTable) -> Self {
        Self {
            exceptions,
            ..Self::default()
        }
    }

    /// Replaces the exception table.
    pub fn set_exceptions(&mut self, exceptions: ExceptionTable) {
        self.exceptions = exceptions;
    }

    /// Irregular-inflection table.
    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    /// Number of synsets.
    pub fn size(&self) -> usize {
        self.by_id.len()
    }

    /// True when the store holds no synsets.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Synsets in insertion order.
    pub fn synsets(&self) -> impl Iterator<Item = &SynSet> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Synset ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.synsets().map(SynSet::id)
    }

    /// True when a synset with `id` is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Synset with the given id.
    pub fn synset_with_id(&self, id: &str) -> Option<&SynSet> {
        let slot = *self.by_id.get(id)?;
        self.slots.get(slot)?.as_ref()
    }

    /// Mutable access to a synset.
    ///
    /// Use [`WordNet::change_synset_id`] to rename and
    /// [`WordNet::add_literal`] to add literals; edits made here bypass the
    /// indexes and are reported by [`crate::admin::verify`].
    pub fn synset_mut(&mut self, id: &str) -> Option<&mut SynSet> {
        let slot = *self.by_id.get(id)?;
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Inserts `synset`, replacing any synset with the same id in place.
    ///
    /// Its literals and interlingual anchors are indexed immediately.
    pub fn add_synset(&mut self, synset: SynSet) {
        let id = synset.id().to_string();
        match self.by_id.get(&id).copied() {
            Some(slot) => {
                if let Some(previous) = self.slots[slot].take() {
                    self.unindex(&previous);
                }
                self.index(&synset);
                self.slots[slot] = Some(synset);
            }
            None => {
                self.index(&synset);
                self.by_id.insert(id, self.slots.len());
                self.slots.push(Some(synset));
            }
        }
    }

    /// Removes and returns the synset with `id`.
    ///
    /// Its interlingual anchors are unindexed. The literal index and
    /// relations held by other synsets are left untouched; literal handles
    /// pointing at the removed synset are skipped on lookup and relations
    /// naming it are cleaned up by [`crate::admin::repair`].
    pub fn remove_synset(&mut self, id: &str) -> Result<SynSet> {
        let slot = self
            .by_id
            .remove(id)
            .ok_or_else(|| LexError::not_found(format!("synset {id}")))?;
        let synset = self.slots[slot]
            .take()
            .ok_or_else(|| LexError::not_found(format!("synset {id}")))?;
        self.dead_slots += 1;
        for relation in synset.relations() {
            if let Some(rel) = relation.as_interlingual() {
                self.interlingual_index.remove(rel.name(), id);
            }
        }
        self.maybe_compact();
        debug!(id, "store.remove_synset");
        Ok(synset)
    }

    /// Renames a synset, cascading the new id into its literals and re-keying
    /// the primary map and both indexes.
    ///
    /// Index handles are re-keyed in place, so lookups keep their order. A
    /// synset already stored under `new_id` is replaced.
    pub fn change_synset_id(&mut self, id: &str, new_id: &str) -> Result<()> {
        if id == new_id {
            return if self.contains(id) {
                Ok(())
            } else {
                Err(LexError::not_found(format!("synset {id}")))
            };
        }
        let slot = self
            .by_id
            .remove(id)
            .ok_or_else(|| LexError::not_found(format!("synset {id}")))?;
        let mut synset = self.slots[slot]
            .take()
            .ok_or_else(|| LexError::not_found(format!("synset {id}")))?;
        self.dead_slots += 1;
        if let Some(occupied) = self.by_id.remove(new_id) {
            if let Some(previous) = self.slots[occupied].take() {
                self.unindex(&previous);
            }
            self.dead_slots += 1;
        }
        self.rekey(&synset, new_id);
        synset.set_id(new_id);
        self.add_synset(synset);
        self.maybe_compact();
        debug!(from = id, to = new_id, "store.change_synset_id");
        Ok(())
    }

    /// Adds `literal` to the synset with `id` and indexes it.
    pub fn add_literal(&mut self, id: &str, literal: Literal) -> Result<()> {
        let name = literal.name().to_string();
        let sense = literal.sense();
        let synset = self
            .synset_mut(id)
            .ok_or_else(|| LexError::not_found(format!("synset {id}")))?;
        synset.add_literal(literal);
        self.literal_index.insert(&name, id, sense);
        Ok(())
    }

    /// Adds `relation` to the synset with `id`, indexing interlingual anchors.
    pub fn add_relation(&mut self, id: &str, relation: impl Into<Relation>) -> Result<()> {
        let relation = relation.into();
        if !self.contains(id) {
            return Err(LexError::not_found(format!("synset {id}")));
        }
        if let Relation::Interlingual(rel) = &relation {
            self.interlingual_index.insert(rel.name(), id);
        }
        if let Some(synset) = self.synset_mut(id) {
            synset.add_relation(relation);
        }
        Ok(())
    }

    /// Folds the synset `from` into `into` (see [`SynSet::merge_synset`]) and
    /// indexes whatever `into` gained. `from` stays in the store.
    pub fn merge_synset(&mut self, into: &str, from: &str) -> Result<()> {
        let source = self
            .synset_with_id(from)
            .cloned()
            .ok_or_else(|| LexError::not_found(format!("synset {from}")))?;
        let target = self
            .synset_mut(into)
            .ok_or_else(|| LexError::not_found(format!("synset {into}")))?;
        target.merge_synset(&source);
        let merged = target.clone();
        self.index(&merged);
        debug!(into, from, "store.merge_synset");
        Ok(())
    }

    /// Sorts every synset's definitions longest first.
    pub fn sort_definitions(&mut self) {
        for synset in self.slots.iter_mut().flatten() {
            synset.sort_definitions();
        }
    }

    /// Number of distinct interlingual anchors.
    pub fn interlingual_anchor_count(&self) -> usize {
        self.interlingual_index.len()
    }

    /// Drops literal-index handles that no longer resolve to a literal of
    /// a stored synset, such as those left behind by
    /// [`WordNet::remove_synset`]. Returns how many were dropped.
    pub fn prune_literal_index(&mut self) -> usize {
        let mut stale: Vec<(String, String, u32)> = Vec::new();
        for (name, refs) in self.literal_index.iter() {
            for handle in refs {
                if !self.resolves(name, handle) {
                    stale.push((name.to_string(), handle.synset_id.clone(), handle.sense));
                }
            }
        }
        let mut pruned = 0;
        for (name, synset_id, sense) in &stale {
            if self.literal_index.remove_handle(name, synset_id, *sense) {
                pruned += 1;
            }
        }
        if pruned > 0 {
            debug!(pruned, "store.prune_literal_index");
        }
        pruned
    }

    pub(crate) fn literal_index(&self) -> &LiteralIndex {
        &self.literal_index
    }

    fn index(&mut self, synset: &SynSet) {
        for literal in synset.synonym() {
            self.literal_index
                .insert(literal.name(), synset.id(), literal.sense());
        }
        for relation in synset.relations() {
            if let Some(rel) = relation.as_interlingual() {
                self.interlingual_index.insert(rel.name(), synset.id());
            }
        }
    }

    fn rekey(&mut self, synset: &SynSet, new_id: &str) {
        for literal in synset.synonym() {
            self.literal_index.rekey(literal.name(), synset.id(), new_id);
        }
        for relation in synset.relations() {
            if let Some(rel) = relation.as_interlingual() {
                self.interlingual_index.rekey(rel.name(), synset.id(), new_id);
            }
        }
    }

    fn unindex(&mut self, synset: &SynSet) {
        for literal in synset.synonym() {
            self.literal_index.remove(literal.name(), synset.id());
        }
        for relation in synset.relations() {
            if let Some(rel) = relation.as_interlingual() {
                self.interlingual_index.remove(rel.name(), synset.id());
            }
        }
    }

    fn maybe_compact(&mut self) {
        if self.dead_slots <= COMPACT_MIN_DEAD_SLOTS || self.dead_slots <= self.by_id.len() {
            return;
        }
        let reclaimed = self.dead_slots;
        self.slots.retain(Option::is_some);
        self.by_id.clear();
        for (slot, synset) in self.slots.iter().enumerate() {
            if let Some(synset) = synset {
                self.by_id.insert(synset.id().to_string(), slot);
            }
        }
        self.dead_slots = 0;
        debug!(reclaimed, "store.compact");
    }
}

impl FromIterator<SynSet> for WordNet {
    fn from_iter<I: IntoIterator<Item = SynSet>>(iter: I) -> Self {
        let mut store = WordNet::new();
        store.extend(iter);
        store
    }
}

impl Extend<SynSet> for WordNet {
    fn extend<I: IntoIterator<Item = SynSet>>(&mut self, iter: I) {
        for synset in iter {
            self.add_synset(synset);
        }
    }
}
