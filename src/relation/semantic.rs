use std::fmt;

use serde::{Deserialize, Serialize};

/// Typed semantic relation between synsets (or literal senses).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemanticRelationType {
    /// Opposite meaning.
    Antonym,
    /// Broader concept (is-a parent).
    Hypernym,
    /// Class an instance belongs to.
    InstanceHypernym,
    /// Narrower concept.
    Hyponym,
    /// Instance of a class.
    InstanceHyponym,
    /// Group the synset is a member of.
    MemberHolonym,
    /// Whole the synset is a substance of.
    SubstanceHolonym,
    /// Whole the synset is a part of.
    PartHolonym,
    /// Member of the group.
    MemberMeronym,
    /// Substance of the whole.
    SubstanceMeronym,
    /// Part of the whole.
    PartMeronym,
    /// Attribute link between a noun and an adjective.
    Attribute,
    /// Morphologically derived form.
    DerivationRelated,
    /// Topic domain of the synset.
    DomainTopic,
    /// Member of a topic domain.
    MemberTopic,
    /// Regional domain of the synset.
    DomainRegion,
    /// Member of a regional domain.
    MemberRegion,
    /// Usage domain of the synset.
    DomainUsage,
    /// Member of a usage domain.
    MemberUsage,
    /// Verb entailment.
    Entailment,
    /// Verb causation.
    Cause,
    /// Loosely related synset.
    AlsoSee,
    /// Verb sense grouping.
    VerbGroup,
    /// Adjective similarity.
    SimilarTo,
    /// Participle of a verb.
    ParticipleOfVerb,
}

/// Resource tags in their canonical order. Lookup is exact and
/// case-sensitive.
static SEMANTIC_TAGS: [(&str, SemanticRelationType); 25] = [
    ("ANTONYM", SemanticRelationType::Antonym),
    ("HYPERNYM", SemanticRelationType::Hypernym),
    ("INSTANCE_HYPERNYM", SemanticRelationType::InstanceHypernym),
    ("HYPONYM", SemanticRelationType::Hyponym),
    ("INSTANCE_HYPONYM", SemanticRelationType::InstanceHyponym),
    ("MEMBER_HOLONYM", SemanticRelationType::MemberHolonym),
    ("SUBSTANCE_HOLONYM", SemanticRelationType::SubstanceHolonym),
    ("PART_HOLONYM", SemanticRelationType::PartHolonym),
    ("MEMBER_MERONYM", SemanticRelationType::MemberMeronym),
    ("SUBSTANCE_MERONYM", SemanticRelationType::SubstanceMeronym),
    ("PART_MERONYM", SemanticRelationType::PartMeronym),
    ("ATTRIBUTE", SemanticRelationType::Attribute),
    ("DERIVATION_RELATED", SemanticRelationType::DerivationRelated),
    ("DOMAIN_TOPIC", SemanticRelationType::DomainTopic),
    ("MEMBER_TOPIC", SemanticRelationType::MemberTopic),
    ("DOMAIN_REGION", SemanticRelationType::DomainRegion),
    ("MEMBER_REGION", SemanticRelationType::MemberRegion),
    ("DOMAIN_USAGE", SemanticRelationType::DomainUsage),
    ("MEMBER_USAGE", SemanticRelationType::MemberUsage),
    ("ENTAILMENT", SemanticRelationType::Entailment),
    ("CAUSE", SemanticRelationType::Cause),
    ("ALSO_SEE", SemanticRelationType::AlsoSee),
    ("VERB_GROUP", SemanticRelationType::VerbGroup),
    ("SIMILAR_TO", SemanticRelationType::SimilarTo),
    ("PARTICIPLE_OF_VERB", SemanticRelationType::ParticipleOfVerb),
];

impl SemanticRelationType {
    /// Every relation type in tag-table order.
    pub fn all() -> impl Iterator<Item = SemanticRelationType> {
        SEMANTIC_TAGS.iter().map(|(_, ty)| *ty)
    }

    /// Resolves a resource tag. Unknown tags resolve to `None` and should be
    /// treated as absent data rather than a parse failure.
    pub fn from_tag(tag: &str) -> Option<Self> {
        SEMANTIC_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, ty)| *ty)
    }

    /// Resource tag for this type.
    pub fn as_tag(self) -> &'static str {
        SEMANTIC_TAGS
            .iter()
            .find(|(_, ty)| *ty == self)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }

    /// Algebraic inverse of the relation type, if it has one.
    ///
    /// Hypernymy, instance hypernymy, the three holonym/meronym pairs and the
    /// three domain/member pairs invert into each other; antonymy and
    /// derivation are self-inverse. Every other type has no inverse.
    pub fn reverse(self) -> Option<Self> {
        use SemanticRelationType::*;
        match self {
            Hypernym => Some(Hyponym),
            Hyponym => Some(Hypernym),
            InstanceHypernym => Some(InstanceHyponym),
            InstanceHyponym => Some(InstanceHypernym),
            MemberHolonym => Some(MemberMeronym),
            MemberMeronym => Some(MemberHolonym),
            PartHolonym => Some(PartMeronym),
            PartMeronym => Some(PartHolonym),
            SubstanceHolonym => Some(SubstanceMeronym),
            SubstanceMeronym => Some(SubstanceHolonym),
            DomainTopic => Some(MemberTopic),
            MemberTopic => Some(DomainTopic),
            DomainRegion => Some(MemberRegion),
            MemberRegion => Some(DomainRegion),
            DomainUsage => Some(MemberUsage),
            MemberUsage => Some(DomainUsage),
            Antonym => Some(Antonym),
            DerivationRelated => Some(DerivationRelated),
            Attribute | Entailment | Cause | AlsoSee | VerbGroup | SimilarTo
            | ParticipleOfVerb => None,
        }
    }

    /// True for the two types followed when climbing to the hierarchy root.
    pub fn is_hypernymy(self) -> bool {
        matches!(
            self,
            SemanticRelationType::Hypernym | SemanticRelationType::InstanceHypernym
        )
    }
}

impl fmt::Display for SemanticRelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Semantic relation pointing at a synset id (or, for sense-level links, at
/// a synset whose `to_index`-th literal sense is meant).
///
/// Equality requires name, type and `to_index` to match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SemanticRelation {
    name: String,
    relation_type: Option<SemanticRelationType>,
    to_index: u32,
}

impl SemanticRelation {
    /// Relation to the whole target synset (`to_index == 0`).
    pub fn new(name: impl Into<String>, relation_type: SemanticRelationType) -> Self {
        Self {
            name: name.into(),
            relation_type: Some(relation_type),
            to_index: 0,
        }
    }

    /// Relation to a specific literal sense of the target synset.
    pub fn with_index(
        name: impl Into<String>,
        relation_type: SemanticRelationType,
        to_index: u32,
    ) -> Self {
        Self {
            name: name.into(),
            relation_type: Some(relation_type),
            to_index,
        }
    }

    /// Builds a relation from a resource tag; an unknown tag leaves the
    /// type unresolved.
    pub fn from_tag(name: impl Into<String>, tag: &str, to_index: u32) -> Self {
        Self {
            name: name.into(),
            relation_type: SemanticRelationType::from_tag(tag),
            to_index,
        }
    }

    /// Target synset id.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the target.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Relation type, `None` when the resource tag was not recognised.
    pub fn relation_type(&self) -> Option<SemanticRelationType> {
        self.relation_type
    }

    /// Replaces the relation type.
    pub fn set_relation_type(&mut self, relation_type: SemanticRelationType) {
        self.relation_type = Some(relation_type);
    }

    /// Literal-sense index of the target, `0` for the whole synset.
    pub fn to_index(&self) -> u32 {
        self.to_index
    }

    /// Resource tag of the type, if resolved.
    pub fn type_as_str(&self) -> Option<&'static str> {
        self.relation_type.map(SemanticRelationType::as_tag)
    }
}

impl fmt::Display for SemanticRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}",
            self.type_as_str().unwrap_or("UNKNOWN"),
            self.name
        )
    }
}
