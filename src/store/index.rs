//! Secondary indexes over the synsets owned by [`super::WordNet`].
//!
//! Neither index owns data. Entries are `(synset id, sense)` handles that are
//! re-resolved against the primary map on every read, so a handle left behind
//! by `remove_synset` is skipped rather than served.

use rustc_hash::FxHashMap;

/// Handle to one literal occurrence: the owning synset and the sense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LiteralRef {
    pub(crate) synset_id: String,
    pub(crate) sense: u32,
}

/// Surface form to literal occurrences, with surface forms kept in first
/// insertion order.
#[derive(Debug, Default)]
pub(crate) struct LiteralIndex {
    order: Vec<String>,
    entries: FxHashMap<String, Vec<LiteralRef>>,
}

impl LiteralIndex {
    pub(crate) fn insert(&mut self, name: &str, synset_id: &str, sense: u32) {
        if !self.entries.contains_key(name) {
            self.order.push(name.to_string());
        }
        let refs = self.entries.entry(name.to_string()).or_default();
        if !refs
            .iter()
            .any(|r| r.synset_id == synset_id && r.sense == sense)
        {
            refs.push(LiteralRef {
                synset_id: synset_id.to_string(),
                sense,
            });
        }
    }

    /// Drops every handle under `name` that points at `synset_id`.
    pub(crate) fn remove(&mut self, name: &str, synset_id: &str) {
        if let Some(refs) = self.entries.get_mut(name) {
            refs.retain(|r| r.synset_id != synset_id);
        }
    }

    /// Drops the single handle `(synset_id, sense)` under `name`.
    pub(crate) fn remove_handle(&mut self, name: &str, synset_id: &str, sense: u32) -> bool {
        match self.entries.get_mut(name) {
            Some(refs) => {
                let before = refs.len();
                refs.retain(|r| !(r.synset_id == synset_id && r.sense == sense));
                refs.len() != before
            }
            None => false,
        }
    }

    /// Points every handle under `name` for `old_id` at `new_id` in place.
    /// A handle that would repeat an earlier one is dropped.
    pub(crate) fn rekey(&mut self, name: &str, old_id: &str, new_id: &str) {
        if let Some(refs) = self.entries.get_mut(name) {
            for handle in refs.iter_mut().filter(|r| r.synset_id == old_id) {
                handle.synset_id = new_id.to_string();
            }
            let mut seen: Vec<LiteralRef> = Vec::with_capacity(refs.len());
            refs.retain(|r| {
                if seen.contains(r) {
                    false
                } else {
                    seen.push(r.clone());
                    true
                }
            });
        }
    }

    pub(crate) fn get(&self, name: &str) -> &[LiteralRef] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn contains_key(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Surface forms that still hold at least one handle.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .map(String::as_str)
            .filter(move |name| self.contains_key(name))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[LiteralRef])> {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.get(name)))
            .filter(|(_, refs)| !refs.is_empty())
    }
}

/// Interlingual anchor id to the ids of synsets carrying that anchor.
#[derive(Debug, Default)]
pub(crate) struct InterlingualIndex {
    entries: FxHashMap<String, Vec<String>>,
}

impl InterlingualIndex {
    pub(crate) fn insert(&mut self, anchor: &str, synset_id: &str) {
        let ids = self.entries.entry(anchor.to_string()).or_default();
        if !ids.iter().any(|id| id == synset_id) {
            ids.push(synset_id.to_string());
        }
    }

    pub(crate) fn remove(&mut self, anchor: &str, synset_id: &str) {
        if let Some(ids) = self.entries.get_mut(anchor) {
            ids.retain(|id| id != synset_id);
            if ids.is_empty() {
                self.entries.remove(anchor);
            }
        }
    }

    /// Replaces `old_id` with `new_id` under `anchor`, keeping its position.
    pub(crate) fn rekey(&mut self, anchor: &str, old_id: &str, new_id: &str) {
        if let Some(ids) = self.entries.get_mut(anchor) {
            if ids.iter().any(|id| id == new_id) {
                ids.retain(|id| id != old_id);
            } else if let Some(id) = ids.iter_mut().find(|id| *id == old_id) {
                *id = new_id.to_string();
            }
        }
    }

    pub(crate) fn get(&self, anchor: &str) -> &[String] {
        self.entries.get(anchor).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
