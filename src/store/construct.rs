//! Literal and synset resolution driven by a morphological analyzer.
//!
//! The analyzer itself lives outside this crate; it is consumed through
//! [`MorphologicalAnalyzer`] and [`MorphologicalParse`].

use crate::lexicon::{Literal, SynSet};
use crate::types::Pos;

use super::WordNet;

/// Read-only view of one morphological parse of a word.
pub trait MorphologicalParse {
    /// True when the parse carries no inflectional groups.
    fn is_empty(&self) -> bool;
    /// Punctuation token.
    fn is_punctuation(&self) -> bool;
    /// Integer number token.
    fn is_cardinal(&self) -> bool;
    /// Real number token.
    fn is_real(&self) -> bool;
    /// Part of speech of the whole word.
    fn pos(&self) -> Option<Pos>;
    /// Part of speech of the root.
    fn root_pos(&self) -> Option<Pos>;
}

/// Capability that enumerates the surface forms a parse may correspond to.
pub trait MorphologicalAnalyzer {
    /// Morphological parse type.
    type Parse: MorphologicalParse;
    /// Metamorphic (morpheme-level) parse type.
    type MetamorphicParse;

    /// Candidate dictionary forms for the parse pair, most specific first.
    fn possible_surface_forms(
        &self,
        parse: &Self::Parse,
        metamorphic_parse: &Self::MetamorphicParse,
    ) -> Vec<String>;

    /// Literal standing for "any integer" in the resource, if it has one.
    fn cardinal_literal(&self) -> Option<&str> {
        None
    }
}

fn is_content_word<P: MorphologicalParse>(parse: &P) -> bool {
    !parse.is_punctuation() && !parse.is_cardinal() && !parse.is_real()
}

fn pos_agrees<P: MorphologicalParse>(parse: &P, synset: &SynSet) -> bool {
    let open_class = |pos: Option<Pos>| {
        matches!(
            pos,
            Some(Pos::Noun | Pos::Adverb | Pos::Verb | Pos::Adjective | Pos::Conjunction)
        )
    };
    match synset.pos() {
        Some(pos) if open_class(parse.pos()) && open_class(Some(pos)) => {
            parse.pos() == Some(pos) || parse.root_pos() == Some(pos)
        }
        _ => true,
    }
}

fn joined_candidates<A: MorphologicalAnalyzer>(
    analyzer: &A,
    words: &[(&A::Parse, &A::MetamorphicParse)],
) -> Vec<String> {
    let mut phrases = vec![String::new()];
    for (parse, metamorphic_parse) in words {
        let forms = analyzer.possible_surface_forms(parse, metamorphic_parse);
        phrases = phrases
            .iter()
            .flat_map(|prefix| {
                forms.iter().map(move |form| {
                    if prefix.is_empty() {
                        form.clone()
                    } else {
                        format!("{prefix} {form}")
                    }
                })
            })
            .collect();
    }
    if words.is_empty() {
        Vec::new()
    } else {
        phrases
    }
}

impl WordNet {
    /// Literals matching `word`, or the analyzer's surface forms for it when
    /// the parse describes a content word.
    pub fn construct_literals<A: MorphologicalAnalyzer>(
        &self,
        word: &str,
        parse: &A::Parse,
        metamorphic_parse: &A::MetamorphicParse,
        analyzer: &A,
    ) -> Vec<&Literal> {
        if parse.is_empty() || !is_content_word(parse) {
            return self.literals_with_name(word);
        }
        analyzer
            .possible_surface_forms(parse, metamorphic_parse)
            .iter()
            .flat_map(|form| self.literals_with_name(form))
            .collect()
    }

    /// Synsets for `word` whose part of speech agrees with the parse.
    ///
    /// When no synset agrees, every synset of every surface form is
    /// returned instead. Cardinal numbers with no literal of their own fall
    /// back to the analyzer's cardinal literal.
    pub fn construct_synsets<A: MorphologicalAnalyzer>(
        &self,
        word: &str,
        parse: &A::Parse,
        metamorphic_parse: &A::MetamorphicParse,
        analyzer: &A,
    ) -> Vec<&SynSet> {
        if parse.is_empty() {
            return self.synsets_with_literal(word);
        }
        let mut result: Vec<&SynSet> = Vec::new();
        if is_content_word(parse) {
            let forms = analyzer.possible_surface_forms(parse, metamorphic_parse);
            for form in &forms {
                result.extend(
                    self.synsets_with_literal(form)
                        .into_iter()
                        .filter(|synset| pos_agrees(parse, synset)),
                );
            }
            if result.is_empty() {
                for form in &forms {
                    result.extend(self.synsets_with_literal(form));
                }
            }
        } else {
            result.extend(self.synsets_with_literal(word));
        }
        if parse.is_cardinal() && result.is_empty() {
            if let Some(synset) = analyzer
                .cardinal_literal()
                .and_then(|literal| self.synset_with_literal(literal, 1))
            {
                result.push(synset);
            }
        }
        result
    }

    /// Literals of multi-word expressions: every combination of the words'
    /// surface forms joined by a space.
    pub fn construct_idiom_literals<A: MorphologicalAnalyzer>(
        &self,
        analyzer: &A,
        words: &[(&A::Parse, &A::MetamorphicParse)],
    ) -> Vec<&Literal> {
        joined_candidates(analyzer, words)
            .iter()
            .flat_map(|phrase| self.literals_with_name(phrase))
            .collect()
    }

    /// Synsets of multi-word expressions; see
    /// [`WordNet::construct_idiom_literals`].
    pub fn construct_idiom_synsets<A: MorphologicalAnalyzer>(
        &self,
        analyzer: &A,
        words: &[(&A::Parse, &A::MetamorphicParse)],
    ) -> Vec<&SynSet> {
        joined_candidates(analyzer, words)
            .iter()
            .flat_map(|phrase| self.synsets_with_literal(phrase))
            .collect()
    }
}
