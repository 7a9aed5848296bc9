//! Lexigraph: an in-memory lexical knowledge base.
//!
//! Synsets group synonymous literals and link to each other through typed
//! semantic relations and cross-language interlingual anchors. The
//! [`store::WordNet`] graph owns them and answers literal, part-of-speech and
//! anchor lookups; [`hierarchy`] and [`similarity`] walk the hypernym tree;
//! [`admin`] verifies and repairs whole resources; [`codec`] moves them to
//! and from disk.

#![warn(missing_docs)]

pub mod admin;
pub mod codec;
pub mod hierarchy;
pub mod lexicon;
pub mod relation;
pub mod similarity;
pub mod store;
pub mod types;

pub use lexicon::{Literal, SynSet, Synonym};
pub use relation::{
    InterlingualDependencyType, InterlingualRelation, Relation, SemanticRelation,
    SemanticRelationType,
};
pub use store::WordNet;
pub use types::{LexError, Pos, Result};
