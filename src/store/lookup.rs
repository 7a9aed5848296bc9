//! Read-only lookups by literal, part of speech and interlingual anchor.
//!
//! Absence is never an error here: every lookup yields `None` or an empty
//! vector.

use crate::lexicon::{Literal, SynSet};
use crate::types::Pos;

use super::index::LiteralRef;
use super::WordNet;

impl WordNet {
    fn resolve(&self, name: &str, handle: &LiteralRef) -> Option<(&SynSet, &Literal)> {
        let synset = self.synset_with_id(&handle.synset_id)?;
        let literal = synset
            .synonym()
            .literal_with_name_and_sense(name, handle.sense)?;
        Some((synset, literal))
    }

    pub(crate) fn resolves(&self, name: &str, handle: &LiteralRef) -> bool {
        self.resolve(name, handle).is_some()
    }

    /// Synset holding the literal `name` with the given sense.
    pub fn synset_with_literal(&self, name: &str, sense: u32) -> Option<&SynSet> {
        self.literal_index
            .get(name)
            .iter()
            .filter(|handle| handle.sense == sense)
            .find_map(|handle| self.resolve(name, handle))
            .map(|(synset, _)| synset)
    }

    /// Every synset with a literal named `name`, in index order.
    pub fn synsets_with_literal(&self, name: &str) -> Vec<&SynSet> {
        self.literal_index
            .get(name)
            .iter()
            .filter_map(|handle| self.resolve(name, handle))
            .map(|(synset, _)| synset)
            .collect()
    }

    /// Number of live literal occurrences of `name`.
    pub fn number_of_synsets_with_literal(&self, name: &str) -> usize {
        self.synsets_with_literal(name).len()
    }

    /// Synsets tagged with `pos`, in insertion order.
    pub fn synsets_with_part_of_speech(&self, pos: Pos) -> Vec<&SynSet> {
        self.synsets().filter(|s| s.pos() == Some(pos)).collect()
    }

    /// Every literal named `name`, resolved through its owning synset.
    pub fn literals_with_name(&self, name: &str) -> Vec<&Literal> {
        self.literal_index
            .get(name)
            .iter()
            .filter_map(|handle| self.resolve(name, handle))
            .map(|(_, literal)| literal)
            .collect()
    }

    /// Distinct indexed surface forms in first-indexed order.
    pub fn literal_list(&self) -> Vec<&str> {
        self.literal_index.keys().collect()
    }

    /// Synsets sharing the interlingual anchor `anchor`.
    pub fn interlingual(&self, anchor: &str) -> Vec<&SynSet> {
        self.interlingual_index
            .get(anchor)
            .iter()
            .filter_map(|id| self.synset_with_id(id))
            .collect()
    }

    /// Inflectional back-off for literal resolution.
    ///
    /// Returns `surface` itself followed by every candidate root that is an
    /// indexed surface form: irregular roots from the exception table first,
    /// then the suffix heuristics in this order:
    ///
    /// 1. drop `s`
    /// 2. drop `es`, `ed` or `er`
    /// 3. undo a doubled consonant before `ed` (`stopped` to `stop`)
    /// 4. `ed`/`er` to `e` (`baked` to `bake`)
    /// 5. drop `ing` or `est`
    /// 6. undo a doubled consonant before `ing` (`running` to `run`)
    /// 7. `ing`/`est` to `e` (`baking` to `bake`)
    /// 8. `ies` to `y`
    ///
    /// Candidates are deduplicated; suffixes are matched on characters, not
    /// bytes.
    pub fn literals_with_possible_modified_literal(&self, surface: &str) -> Vec<String> {
        let mut result = vec![surface.to_string()];
        let push = |candidate: String, result: &mut Vec<String>| {
            if !candidate.is_empty()
                && self.literal_index.contains_key(&candidate)
                && !result.contains(&candidate)
            {
                result.push(candidate);
            }
        };

        for word in self.exceptions.lookup(surface) {
            push(word.root.clone(), &mut result);
        }

        let chars: Vec<char> = surface.chars().collect();
        let len = chars.len();
        let stem = |cut: usize| -> String { chars[..len.saturating_sub(cut)].iter().collect() };
        let doubled_before = |suffix: usize| {
            len >= suffix + 2 && chars[len - suffix - 1] == chars[len - suffix - 2]
        };
        let ends = |suffix: &str| surface.ends_with(suffix);

        if ends("s") {
            push(stem(1), &mut result);
        }
        if ends("es") || ends("ed") || ends("er") {
            push(stem(2), &mut result);
        }
        if ends("ed") && doubled_before(2) {
            push(stem(3), &mut result);
        }
        if ends("ed") || ends("er") {
            push(stem(2) + "e", &mut result);
        }
        if ends("ing") || ends("est") {
            push(stem(3), &mut result);
        }
        if ends("ing") && doubled_before(3) {
            push(stem(4), &mut result);
        }
        if ends("ing") || ends("est") {
            push(stem(3) + "e", &mut result);
        }
        if ends("ies") {
            push(stem(3) + "y", &mut result);
        }
        result
    }

    /// Synsets of part of speech `pos` reachable from `surface` through
    /// [`WordNet::literals_with_possible_modified_literal`].
    pub fn synsets_with_possibly_modified_literal(&self, surface: &str, pos: Pos) -> Vec<&SynSet> {
        let mut result: Vec<&SynSet> = Vec::new();
        for candidate in self.literals_with_possible_modified_literal(surface) {
            for synset in self.synsets_with_literal(&candidate) {
                if synset.pos() == Some(pos) && !result.iter().any(|s| s.id() == synset.id()) {
                    result.push(synset);
                }
            }
        }
        result
    }
}
