#![allow(missing_docs)]

use lexigraph::codec::read_exceptions_from_reader;
use lexigraph::{Literal, Pos, SynSet, WordNet};

fn synset(id: &str, pos: Pos, literals: &[&str]) -> SynSet {
    let mut synset = SynSet::new(id);
    synset.set_pos(Some(pos));
    for name in literals {
        synset.add_literal(Literal::new(*name, 1, id));
    }
    synset
}

fn english() -> WordNet {
    let exceptions = read_exceptions_from_reader(
        "surface,root,pos\nwent,go,Verb\nmice,mouse,Noun\nbetter,good,Adj\n".as_bytes(),
    )
    .expect("exceptions");
    let mut store = WordNet::with_exceptions(exceptions);
    store.extend([
        synset("go-v", Pos::Verb, &["go"]),
        synset("mouse-n", Pos::Noun, &["mouse"]),
        synset("good-a", Pos::Adjective, &["good"]),
        synset("stop-v", Pos::Verb, &["stop"]),
        synset("stop-n", Pos::Noun, &["stop"]),
        synset("bake-v", Pos::Verb, &["bake"]),
        synset("city-n", Pos::Noun, &["city"]),
        synset("run-v", Pos::Verb, &["run"]),
        synset("box-n", Pos::Noun, &["box"]),
    ]);
    store
}

fn ids<'a>(synsets: Vec<&'a SynSet>) -> Vec<&'a str> {
    synsets.into_iter().map(SynSet::id).collect()
}

#[test]
fn irregular_forms_resolve_through_exceptions() {
    let store = english();
    assert_eq!(
        store.literals_with_possible_modified_literal("went"),
        vec!["went", "go"]
    );
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("mice", Pos::Noun)),
        vec!["mouse-n"]
    );
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("better", Pos::Adjective)),
        vec!["good-a"]
    );
}

#[test]
fn suffix_heuristics_find_roots() {
    let store = english();
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("stopped", Pos::Verb)),
        vec!["stop-v"]
    );
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("stops", Pos::Noun)),
        vec!["stop-n"]
    );
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("baking", Pos::Verb)),
        vec!["bake-v"]
    );
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("baked", Pos::Verb)),
        vec!["bake-v"]
    );
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("cities", Pos::Noun)),
        vec!["city-n"]
    );
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("running", Pos::Verb)),
        vec!["run-v"]
    );
    assert_eq!(
        ids(store.synsets_with_possibly_modified_literal("boxes", Pos::Noun)),
        vec!["box-n"]
    );
}

#[test]
fn pos_filter_and_unknown_words() {
    let store = english();
    assert!(store
        .synsets_with_possibly_modified_literal("stopped", Pos::Adjective)
        .is_empty());
    assert_eq!(
        store.literals_with_possible_modified_literal("xyzzy"),
        vec!["xyzzy"]
    );
    assert_eq!(
        store.literals_with_possible_modified_literal("ğş"),
        vec!["ğş"]
    );
}

#[test]
fn literal_views() {
    let store = english();
    assert_eq!(store.literals_with_name("stop").len(), 2);
    assert_eq!(ids(store.synsets_with_literal("stop")), vec!["stop-v", "stop-n"]);
    assert_eq!(store.literal_list().first().copied(), Some("go"));
    assert_eq!(store.literal_list().len(), 8);
}

#[test]
fn grouped_literals() {
    let mut synset = SynSet::new("S");
    synset.add_literal(Literal::new("a", 1, "S").with_group(1));
    synset.add_literal(Literal::new("b", 1, "S"));
    synset.add_literal(Literal::new("c", 1, "S").with_group(1));
    let groups = synset.synonym().unique_literals();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].literal_size(), 2);
    assert!(groups[1].contains_literal("b"));
}
