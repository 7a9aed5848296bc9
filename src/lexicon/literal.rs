use std::fmt;

use crate::relation::{Relation, SemanticRelationType};

/// A surface form paired with a sense index, owned by exactly one synset.
///
/// `synset_id` is a non-owning back-reference kept in step with the owning
/// synset's id; it is only rewritten by the synset itself. Equality is by
/// `(name, sense)`.
#[derive(Clone, Debug)]
pub struct Literal {
    name: String,
    sense: u32,
    synset_id: String,
    origin: Option<String>,
    group_no: Option<u32>,
    relations: Vec<Relation>,
}

impl Literal {
    /// Creates a literal belonging to `synset_id`.
    pub fn new(name: impl Into<String>, sense: u32, synset_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sense,
            synset_id: synset_id.into(),
            origin: None,
            group_no: None,
            relations: Vec::new(),
        }
    }

    /// Builder-style origin setter.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Builder-style group setter.
    pub fn with_group(mut self, group_no: u32) -> Self {
        self.group_no = Some(group_no);
        self
    }

    /// Surface form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the surface form. A literal already indexed by a store keeps
    /// its old index key until it is re-added.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sense index (1-based in the resource).
    pub fn sense(&self) -> u32 {
        self.sense
    }

    /// Replaces the sense index.
    pub fn set_sense(&mut self, sense: u32) {
        self.sense = sense;
    }

    /// Id of the owning synset.
    pub fn synset_id(&self) -> &str {
        &self.synset_id
    }

    pub(crate) fn set_synset_id(&mut self, synset_id: &str) {
        if self.synset_id != synset_id {
            self.synset_id = synset_id.to_string();
        }
    }

    /// Language or etymological origin, if recorded.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Sets the origin.
    pub fn set_origin(&mut self, origin: Option<String>) {
        self.origin = origin;
    }

    /// Group id tying literals that are spelling variants of each other.
    pub fn group_no(&self) -> Option<u32> {
        self.group_no
    }

    /// Sets the group id.
    pub fn set_group_no(&mut self, group_no: Option<u32>) {
        self.group_no = group_no;
    }

    /// Appends a sense-level relation.
    pub fn add_relation(&mut self, relation: impl Into<Relation>) {
        self.relations.push(relation.into());
    }

    /// Removes the first relation equal to `relation`; returns whether one
    /// was found.
    pub fn remove_relation(&mut self, relation: &Relation) -> bool {
        match self.relations.iter().position(|r| r == relation) {
            Some(idx) => {
                self.relations.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_relation_at(&mut self, index: usize) -> Relation {
        self.relations.remove(index)
    }

    pub(crate) fn relations_mut(&mut self) -> &mut [Relation] {
        &mut self.relations
    }

    /// True when an equal relation is present.
    pub fn contains_relation(&self, relation: &Relation) -> bool {
        self.relations.contains(relation)
    }

    /// True when any semantic relation of the given type is present.
    pub fn contains_relation_type(&self, relation_type: SemanticRelationType) -> bool {
        self.relations
            .iter()
            .any(|r| r.semantic_type() == Some(relation_type))
    }

    /// Relation at `index`, if in range.
    pub fn relation(&self, index: usize) -> Option<&Relation> {
        self.relations.get(index)
    }

    /// All sense-level relations in stored order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Number of sense-level relations.
    pub fn relation_size(&self) -> usize {
        self.relations.len()
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.sense == other.sense
    }
}

impl Eq for Literal {}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.sense)
    }
}
