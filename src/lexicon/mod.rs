//! Lexicon data model: literals, synonym sets and synsets.

mod literal;
mod synonym;
mod synset;

pub use literal::Literal;
pub use synonym::Synonym;
pub use synset::SynSet;
