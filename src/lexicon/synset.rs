use std::fmt;
use std::hash::{Hash, Hasher};

use crate::relation::{InterlingualDependencyType, Relation, SemanticRelationType};
use crate::types::Pos;

use super::{Literal, Synonym};

/// One word sense: the node type of the lexical graph.
///
/// Equality and hashing are by `id` alone. Every owned literal carries the
/// synset id as a back-reference; [`SynSet::set_id`] and
/// [`SynSet::add_literal`] keep the two in step.
#[derive(Clone, Debug)]
pub struct SynSet {
    id: String,
    pos: Option<Pos>,
    definitions: Vec<String>,
    example: Option<String>,
    note: Option<String>,
    wiki_page: Option<String>,
    bcs: Option<u8>,
    synonym: Synonym,
    relations: Vec<Relation>,
}

impl SynSet {
    /// Empty synset with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pos: None,
            definitions: Vec::new(),
            example: None,
            note: None,
            wiki_page: None,
            bcs: None,
            synonym: Synonym::new(),
            relations: Vec::new(),
        }
    }

    /// Primary key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Renames the synset and every owned literal's back-reference.
    ///
    /// A synset held by a [`crate::store::WordNet`] must be renamed through
    /// `WordNet::change_synset_id` so the store re-keys it.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
        let id = self.id.as_str();
        for literal in self.synonym.iter_mut() {
            literal.set_synset_id(id);
        }
    }

    /// Part of speech.
    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }

    /// Sets the part of speech.
    pub fn set_pos(&mut self, pos: Option<Pos>) {
        self.pos = pos;
    }

    /// Replaces all definitions by splitting `definition` on `|`.
    pub fn set_definition(&mut self, definition: &str) {
        self.definitions = definition.split('|').map(str::to_string).collect();
    }

    /// Appends one definition segment.
    pub fn add_definition(&mut self, definition: impl Into<String>) {
        self.definitions.push(definition.into());
    }

    /// Removes every segment equal to `definition`.
    pub fn remove_definition(&mut self, definition: &str) {
        self.definitions.retain(|d| d != definition);
    }

    /// Definition segment at `index`.
    pub fn definition(&self, index: usize) -> Option<&str> {
        self.definitions.get(index).map(String::as_str)
    }

    /// All definition segments.
    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    /// Definition segments joined by `|`, or `None` when there are none.
    pub fn long_definition(&self) -> Option<String> {
        if self.definitions.is_empty() {
            None
        } else {
            Some(self.definitions.join("|"))
        }
    }

    /// Orders definitions longest first. Ties keep their relative order.
    pub fn sort_definitions(&mut self) {
        self.definitions
            .sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    }

    /// Number of definition segments.
    pub fn number_of_definitions(&self) -> usize {
        self.definitions.len()
    }

    /// Usage example.
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// Sets the usage example.
    pub fn set_example(&mut self, example: Option<String>) {
        self.example = example;
    }

    /// Free-form curator note.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Sets the note.
    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    /// Wiki page title linked to this sense.
    pub fn wiki_page(&self) -> Option<&str> {
        self.wiki_page.as_deref()
    }

    /// Sets the wiki page.
    pub fn set_wiki_page(&mut self, wiki_page: Option<String>) {
        self.wiki_page = wiki_page;
    }

    /// Base concept set level (1 to 3).
    pub fn bcs(&self) -> Option<u8> {
        self.bcs
    }

    /// Sets the base concept level. Values outside `1..=3` are ignored.
    pub fn set_bcs(&mut self, bcs: u8) {
        if (1..=3).contains(&bcs) {
            self.bcs = Some(bcs);
        }
    }

    /// Owned literals.
    pub fn synonym(&self) -> &Synonym {
        &self.synonym
    }

    /// Adds a literal, rewriting its back-reference to this synset.
    pub fn add_literal(&mut self, mut literal: Literal) {
        literal.set_synset_id(&self.id);
        self.synonym.add_literal(literal);
    }

    /// Removes an equal `(name, sense)` literal.
    pub fn remove_literal(&mut self, literal: &Literal) -> Option<Literal> {
        self.synonym.remove_literal(literal)
    }

    /// Mutable access to the literal at `index`.
    pub fn literal_mut(&mut self, index: usize) -> Option<&mut Literal> {
        self.synonym.iter_mut().nth(index)
    }

    /// Promotes an equal literal to representative.
    pub fn move_first(&mut self, literal: &Literal) {
        self.synonym.move_first(literal);
    }

    /// Name of the first literal.
    pub fn representative(&self) -> Option<&str> {
        self.synonym.literal(0).map(Literal::name)
    }

    /// True when the two synsets share at least one literal surface form.
    pub fn contains_same_literal(&self, other: &SynSet) -> bool {
        self.synonym
            .iter()
            .any(|literal| other.synonym.contains_literal(literal.name()))
    }

    /// Appends a relation.
    pub fn add_relation(&mut self, relation: impl Into<Relation>) {
        self.relations.push(relation.into());
    }

    /// Removes the first equal relation; returns whether one was found.
    pub fn remove_relation(&mut self, relation: &Relation) -> bool {
        match self.relations.iter().position(|r| r == relation) {
            Some(idx) => {
                self.relations.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes the first relation whose target name is `name`.
    pub fn remove_relation_with_name(&mut self, name: &str) -> Option<Relation> {
        let idx = self.relations.iter().position(|r| r.name() == name)?;
        Some(self.relations.remove(idx))
    }

    pub(crate) fn remove_relation_at(&mut self, index: usize) -> Relation {
        self.relations.remove(index)
    }

    pub(crate) fn relations_mut(&mut self) -> &mut [Relation] {
        &mut self.relations
    }

    /// Relation at `index`.
    pub fn relation(&self, index: usize) -> Option<&Relation> {
        self.relations.get(index)
    }

    /// All relations in stored order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Number of relations.
    pub fn relation_size(&self) -> usize {
        self.relations.len()
    }

    /// True when an equal relation is held.
    pub fn contains_relation(&self, relation: &Relation) -> bool {
        self.relations.contains(relation)
    }

    /// True when a semantic relation of `relation_type` is held.
    pub fn contains_relation_type(&self, relation_type: SemanticRelationType) -> bool {
        self.relations
            .iter()
            .any(|r| r.semantic_type() == Some(relation_type))
    }

    /// Anchor ids of SYNONYM-typed interlingual relations.
    pub fn interlingual(&self) -> Vec<&str> {
        self.relations
            .iter()
            .filter_map(Relation::as_interlingual)
            .filter(|r| r.dependency_type() == Some(InterlingualDependencyType::Synonym))
            .map(|r| r.name())
            .collect()
    }

    /// Folds `other` into this synset.
    ///
    /// Literals not already present are added (and re-pointed at this
    /// synset), distinct definitions are appended, relations not already
    /// held are added unless they would point back at this synset, and an
    /// absent POS or example is taken from `other`.
    pub fn merge_synset(&mut self, other: &SynSet) {
        for literal in other.synonym.iter() {
            if !self.synonym.contains(literal) {
                self.add_literal(literal.clone());
            }
        }
        for definition in &other.definitions {
            if !self.definitions.contains(definition) {
                self.definitions.push(definition.clone());
            }
        }
        for relation in &other.relations {
            if relation.name() != self.id && !self.relations.contains(relation) {
                self.relations.push(relation.clone());
            }
        }
        if self.pos.is_none() {
            self.pos = other.pos;
        }
        if self.example.is_none() {
            self.example = other.example.clone();
        }
    }
}

impl PartialEq for SynSet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SynSet {}

impl Hash for SynSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for SynSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.definitions.first(), self.representative()) {
            (Some(definition), _) => f.write_str(definition),
            (None, Some(representative)) => f.write_str(representative),
            (None, None) => f.write_str(&self.id),
        }
    }
}
