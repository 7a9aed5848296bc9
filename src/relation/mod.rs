//! Relation model: plain, semantic and interlingual relations.
//!
//! Relations are a closed tagged variant. Tag strings resolve through static
//! tables; an unknown tag yields an unresolved (`None`) type instead of an
//! error so that a single bad record never aborts a load.

mod interlingual;
mod semantic;

use std::fmt;

pub use interlingual::{InterlingualDependencyType, InterlingualRelation};
pub use semantic::{SemanticRelation, SemanticRelationType};

/// A relation held by a synset or literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Untyped relation; `name` is an opaque label.
    Plain {
        /// Label or target name.
        name: String,
    },
    /// Typed semantic relation to another synset.
    Semantic(SemanticRelation),
    /// Cross-lingual anchor link.
    Interlingual(InterlingualRelation),
}

impl Relation {
    /// Plain relation with the given label.
    pub fn plain(name: impl Into<String>) -> Self {
        Relation::Plain { name: name.into() }
    }

    /// Target id, anchor id or label, depending on the variant.
    pub fn name(&self) -> &str {
        match self {
            Relation::Plain { name } => name,
            Relation::Semantic(rel) => rel.name(),
            Relation::Interlingual(rel) => rel.name(),
        }
    }

    /// Renames the target.
    pub fn set_name(&mut self, new_name: impl Into<String>) {
        match self {
            Relation::Plain { name } => *name = new_name.into(),
            Relation::Semantic(rel) => rel.set_name(new_name),
            Relation::Interlingual(rel) => rel.set_name(new_name),
        }
    }

    /// The semantic payload, if this is a semantic relation.
    pub fn as_semantic(&self) -> Option<&SemanticRelation> {
        match self {
            Relation::Semantic(rel) => Some(rel),
            _ => None,
        }
    }

    /// The interlingual payload, if this is an interlingual relation.
    pub fn as_interlingual(&self) -> Option<&InterlingualRelation> {
        match self {
            Relation::Interlingual(rel) => Some(rel),
            _ => None,
        }
    }

    /// Semantic type, `None` for other variants or unresolved tags.
    pub fn semantic_type(&self) -> Option<SemanticRelationType> {
        self.as_semantic().and_then(SemanticRelation::relation_type)
    }
}

impl From<SemanticRelation> for Relation {
    fn from(rel: SemanticRelation) -> Self {
        Relation::Semantic(rel)
    }
}

impl From<InterlingualRelation> for Relation {
    fn from(rel: InterlingualRelation) -> Self {
        Relation::Interlingual(rel)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Plain { name } => f.write_str(name),
            Relation::Semantic(rel) => fmt::Display::fmt(rel, f),
            Relation::Interlingual(rel) => fmt::Display::fmt(rel, f),
        }
    }
}
