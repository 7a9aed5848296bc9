//! Serde view of the lexical resource.
//!
//! ```json
//! {"synsets": [{
//!   "id": "TUR10-0000010", "pos": "n", "bcs": 1,
//!   "relations": [{"target": "TUR10-0000020", "type": "HYPERNYM"}],
//!   "interlingual": [{"anchor": "ENG31-00001740-n", "type": "SYNONYM"}],
//!   "synonym": [{"name": "varlık", "sense": 1}],
//!   "definition": "gloss one|gloss two", "example": "..."
//! }]}
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::lexicon::{Literal, SynSet};
use crate::relation::{InterlingualRelation, Relation, SemanticRelation};
use crate::types::Pos;

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ResourceDocument {
    #[serde(default)]
    pub(crate) synsets: Vec<SynSetRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SynSetRecord {
    id: String,
    #[serde(
        default,
        deserialize_with = "lenient_pos",
        skip_serializing_if = "Option::is_none"
    )]
    pos: Option<Pos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bcs: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    relations: Vec<SemanticRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    interlingual: Vec<InterlingualRecord>,
    #[serde(default)]
    synonym: Vec<LiteralRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wiki_page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SemanticRecord {
    target: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    to_index: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct InterlingualRecord {
    anchor: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LiteralRecord {
    name: String,
    sense: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    relations: Vec<SemanticRecord>,
}

/// Unknown part-of-speech codes load as an untagged synset instead of
/// failing the whole document; `verify` reports them as missing.
fn lenient_pos<'de, D>(deserializer: D) -> Result<Option<Pos>, D::Error>
where
    D: Deserializer<'de>,
{
    let code: Option<String> = Option::deserialize(deserializer)?;
    Ok(code.and_then(|code| {
        let pos = Pos::from_code(&code);
        if pos.is_none() {
            warn!(code = %code, "codec.load.unknown_pos");
        }
        pos
    }))
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl SemanticRecord {
    fn into_relation(self) -> SemanticRelation {
        SemanticRelation::from_tag(self.target, self.tag.as_deref().unwrap_or_default(), self.to_index)
    }

    fn from_relation(relation: &SemanticRelation) -> Self {
        Self {
            target: relation.name().to_string(),
            tag: relation.type_as_str().map(str::to_string),
            to_index: relation.to_index(),
        }
    }
}

impl From<SynSetRecord> for SynSet {
    fn from(record: SynSetRecord) -> Self {
        let mut synset = SynSet::new(record.id);
        synset.set_pos(record.pos);
        if let Some(bcs) = record.bcs {
            synset.set_bcs(bcs);
        }
        for relation in record.relations {
            synset.add_relation(relation.into_relation());
        }
        for relation in record.interlingual {
            synset.add_relation(InterlingualRelation::from_tag(
                relation.anchor,
                relation.tag.as_deref().unwrap_or_default(),
            ));
        }
        for record in record.synonym {
            let mut literal = Literal::new(record.name, record.sense, synset.id());
            literal.set_origin(record.origin);
            literal.set_group_no(record.group);
            for relation in record.relations {
                literal.add_relation(relation.into_relation());
            }
            synset.add_literal(literal);
        }
        if let Some(definition) = record.definition.filter(|d| !d.is_empty()) {
            synset.set_definition(&definition);
        }
        synset.set_example(record.example);
        synset.set_note(record.note);
        synset.set_wiki_page(record.wiki_page);
        synset
    }
}

impl From<&SynSet> for SynSetRecord {
    fn from(synset: &SynSet) -> Self {
        let mut relations = Vec::new();
        let mut interlingual = Vec::new();
        for relation in synset.relations() {
            match relation {
                Relation::Semantic(rel) => relations.push(SemanticRecord::from_relation(rel)),
                Relation::Interlingual(rel) => interlingual.push(InterlingualRecord {
                    anchor: rel.name().to_string(),
                    tag: rel.type_as_str().map(str::to_string),
                }),
                Relation::Plain { .. } => {}
            }
        }
        let synonym = synset
            .synonym()
            .iter()
            .map(|literal| LiteralRecord {
                name: literal.name().to_string(),
                sense: literal.sense(),
                origin: literal.origin().map(str::to_string),
                group: literal.group_no(),
                relations: literal
                    .relations()
                    .iter()
                    .filter_map(Relation::as_semantic)
                    .map(SemanticRecord::from_relation)
                    .collect(),
            })
            .collect();
        Self {
            id: synset.id().to_string(),
            pos: synset.pos(),
            bcs: synset.bcs(),
            relations,
            interlingual,
            synonym,
            definition: synset.long_definition(),
            example: synset.example().map(str::to_string),
            note: synset.note().map(str::to_string),
            wiki_page: synset.wiki_page().map(str::to_string),
        }
    }
}
