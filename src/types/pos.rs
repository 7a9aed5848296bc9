use std::fmt;

use serde::{Deserialize, Serialize};

/// Part of speech attached to a synset.
///
/// Serialized with the single-character codes used by the lexical resource
/// (`n`, `v`, `a`, `b`, `c`, `r`, `i`, `p`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pos {
    /// Noun (`n`).
    #[serde(rename = "n")]
    Noun,
    /// Verb (`v`).
    #[serde(rename = "v")]
    Verb,
    /// Adjective (`a`).
    #[serde(rename = "a")]
    Adjective,
    /// Adverb (`b`).
    #[serde(rename = "b")]
    Adverb,
    /// Conjunction (`c`).
    #[serde(rename = "c")]
    Conjunction,
    /// Pronoun (`r`).
    #[serde(rename = "r")]
    Pronoun,
    /// Interjection (`i`).
    #[serde(rename = "i")]
    Interjection,
    /// Preposition (`p`).
    #[serde(rename = "p")]
    Preposition,
}

impl Pos {
    /// Every part of speech, in resource order.
    pub const ALL: [Pos; 8] = [
        Pos::Noun,
        Pos::Verb,
        Pos::Adjective,
        Pos::Adverb,
        Pos::Conjunction,
        Pos::Pronoun,
        Pos::Interjection,
        Pos::Preposition,
    ];

    /// Resolves a resource code; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(Pos::Noun),
            "v" => Some(Pos::Verb),
            "a" => Some(Pos::Adjective),
            "b" => Some(Pos::Adverb),
            "c" => Some(Pos::Conjunction),
            "r" => Some(Pos::Pronoun),
            "i" => Some(Pos::Interjection),
            "p" => Some(Pos::Preposition),
            _ => None,
        }
    }

    /// Single-character resource code.
    pub fn code(self) -> &'static str {
        match self {
            Pos::Noun => "n",
            Pos::Verb => "v",
            Pos::Adjective => "a",
            Pos::Adverb => "b",
            Pos::Conjunction => "c",
            Pos::Pronoun => "r",
            Pos::Interjection => "i",
            Pos::Preposition => "p",
        }
    }

    /// Maps the tags used by exception resources (`Adj`, `Adv`, `Noun`,
    /// `Verb`). Anything else is treated as a noun.
    pub fn from_exception_tag(tag: &str) -> Self {
        match tag {
            "Adj" => Pos::Adjective,
            "Adv" => Pos::Adverb,
            "Verb" => Pos::Verb,
            _ => Pos::Noun,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pos::Noun => "NOUN",
            Pos::Verb => "VERB",
            Pos::Adjective => "ADJECTIVE",
            Pos::Adverb => "ADVERB",
            Pos::Conjunction => "CONJUNCTION",
            Pos::Pronoun => "PRONOUN",
            Pos::Interjection => "INTERJECTION",
            Pos::Preposition => "PREPOSITION",
        };
        f.write_str(name)
    }
}
