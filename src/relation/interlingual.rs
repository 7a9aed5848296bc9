use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Dependency carried by an interlingual (cross-language) relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterlingualDependencyType {
    /// Broader concept in the other language.
    Hypernym,
    /// Near opposite.
    NearAntonym,
    /// Member-of-group holonym.
    HoloMember,
    /// Part-of holonym.
    HoloPart,
    /// Portion-of holonym.
    HoloPortion,
    /// Usage domain.
    UsageDomain,
    /// Category domain.
    CategoryDomain,
    /// State the concept is in.
    BeInState,
    /// Sub-event.
    Subevent,
    /// Verb grouping.
    VerbGroup,
    /// Adjective similarity.
    SimilarTo,
    /// Loosely related.
    AlsoSee,
    /// Causation.
    Causes,
    /// Same meaning across languages.
    Synonym,
}

static INTERLINGUAL_TAGS: [(&str, InterlingualDependencyType); 14] = [
    ("Hypernym", InterlingualDependencyType::Hypernym),
    ("Near_antonym", InterlingualDependencyType::NearAntonym),
    ("Holo_member", InterlingualDependencyType::HoloMember),
    ("Holo_part", InterlingualDependencyType::HoloPart),
    ("Holo_portion", InterlingualDependencyType::HoloPortion),
    ("Usage_domain", InterlingualDependencyType::UsageDomain),
    ("Category_domain", InterlingualDependencyType::CategoryDomain),
    ("Be_in_state", InterlingualDependencyType::BeInState),
    ("Subevent", InterlingualDependencyType::Subevent),
    ("Verb_group", InterlingualDependencyType::VerbGroup),
    ("Similar_to", InterlingualDependencyType::SimilarTo),
    ("Also_see", InterlingualDependencyType::AlsoSee),
    ("Causes", InterlingualDependencyType::Causes),
    ("SYNONYM", InterlingualDependencyType::Synonym),
];

impl InterlingualDependencyType {
    /// Every dependency type in tag-table order.
    pub fn all() -> impl Iterator<Item = InterlingualDependencyType> {
        INTERLINGUAL_TAGS.iter().map(|(_, ty)| *ty)
    }

    /// Exact, case-sensitive tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        INTERLINGUAL_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, ty)| *ty)
    }

    /// Resource tag, as accepted by [`Self::from_tag`].
    pub fn as_tag(self) -> &'static str {
        INTERLINGUAL_TAGS
            .iter()
            .find(|(_, ty)| *ty == self)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }
}

impl fmt::Display for InterlingualDependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Link from a synset to a cross-lingual anchor id shared by lexical
/// resources of different languages.
///
/// Equality is by anchor id alone.
#[derive(Clone, Debug)]
pub struct InterlingualRelation {
    name: String,
    dependency_type: Option<InterlingualDependencyType>,
}

impl InterlingualRelation {
    /// Relation to `anchor` with a resolved dependency type.
    pub fn new(anchor: impl Into<String>, dependency_type: InterlingualDependencyType) -> Self {
        Self {
            name: anchor.into(),
            dependency_type: Some(dependency_type),
        }
    }

    /// Builds the relation from a resource tag; unknown tags leave the type
    /// unresolved.
    pub fn from_tag(anchor: impl Into<String>, tag: &str) -> Self {
        Self {
            name: anchor.into(),
            dependency_type: InterlingualDependencyType::from_tag(tag),
        }
    }

    /// Interlingual anchor id.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the anchor.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Dependency type, if the tag was recognised.
    pub fn dependency_type(&self) -> Option<InterlingualDependencyType> {
        self.dependency_type
    }

    /// Resource tag of the dependency type, if resolved.
    pub fn type_as_str(&self) -> Option<&'static str> {
        self.dependency_type.map(InterlingualDependencyType::as_tag)
    }
}

impl PartialEq for InterlingualRelation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for InterlingualRelation {}

impl Hash for InterlingualRelation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for InterlingualRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}",
            self.type_as_str().unwrap_or("UNKNOWN"),
            self.name
        )
    }
}
