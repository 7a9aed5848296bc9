#![allow(missing_docs)]

use lexigraph::{
    InterlingualDependencyType, InterlingualRelation, LexError, Literal, Pos, SemanticRelation,
    SemanticRelationType, SynSet, WordNet,
};

fn synset(id: &str, pos: Pos, literals: &[(&str, u32)]) -> SynSet {
    let mut synset = SynSet::new(id);
    synset.set_pos(Some(pos));
    for (name, sense) in literals {
        synset.add_literal(Literal::new(*name, *sense, id));
    }
    synset
}

#[test]
fn rename_cascades_into_literals_and_indexes() {
    let mut dog = synset("TUR10-0001", Pos::Noun, &[("köpek", 1), ("it", 2)]);
    dog.add_relation(InterlingualRelation::new(
        "ENG31-02084071-n",
        InterlingualDependencyType::Synonym,
    ));
    let mut store: WordNet = [dog, synset("TUR10-0002", Pos::Noun, &[("kedi", 1)])]
        .into_iter()
        .collect();

    store
        .change_synset_id("TUR10-0001", "TUR10-0099")
        .expect("rename");

    assert!(!store.contains("TUR10-0001"));
    let renamed = store.synset_with_id("TUR10-0099").expect("renamed synset");
    assert!(renamed.synonym().iter().all(|l| l.synset_id() == "TUR10-0099"));
    assert_eq!(
        store.synset_with_literal("köpek", 1).map(SynSet::id),
        Some("TUR10-0099")
    );
    let anchored: Vec<&str> = store
        .interlingual("ENG31-02084071-n")
        .into_iter()
        .map(SynSet::id)
        .collect();
    assert_eq!(anchored, vec!["TUR10-0099"]);
    assert_eq!(store.ids().collect::<Vec<_>>(), vec!["TUR10-0002", "TUR10-0099"]);
}

#[test]
fn mutations_on_missing_synsets_fail() {
    let mut store = WordNet::new();
    assert!(matches!(store.remove_synset("nope"), Err(LexError::NotFound(_))));
    assert!(matches!(
        store.change_synset_id("nope", "other"),
        Err(LexError::NotFound(_))
    ));
    assert!(matches!(
        store.add_literal("nope", Literal::new("x", 1, "nope")),
        Err(LexError::NotFound(_))
    ));
    assert!(store.synset_with_id("nope").is_none());
    assert!(store.synsets_with_literal("x").is_empty());
}

#[test]
fn removed_synsets_disappear_from_lookups() {
    let mut store: WordNet = [
        synset("S1", Pos::Verb, &[("koşmak", 1)]),
        synset("S2", Pos::Verb, &[("koşmak", 2)]),
    ]
    .into_iter()
    .collect();

    let removed = store.remove_synset("S1").expect("remove");
    assert_eq!(removed.id(), "S1");
    assert_eq!(store.size(), 1);
    assert_eq!(store.number_of_synsets_with_literal("koşmak"), 1);
    assert!(store.synset_with_literal("koşmak", 1).is_none());
    assert_eq!(store.prune_literal_index(), 1);
    assert_eq!(store.literal_list(), vec!["koşmak"]);
}

#[test]
fn heavy_removal_keeps_order_and_lookups() {
    let mut store: WordNet = (0..3000)
        .map(|i| synset(&format!("S{i}"), Pos::Noun, &[("ortak", i)]))
        .collect();
    for i in (0..3000).filter(|i| i % 3 != 0) {
        store.remove_synset(&format!("S{i}")).expect("remove");
    }
    assert_eq!(store.size(), 1000);
    let ids: Vec<&str> = store.ids().take(3).collect();
    assert_eq!(ids, vec!["S0", "S3", "S6"]);
    assert_eq!(
        store.synset_with_literal("ortak", 2997).map(SynSet::id),
        Some("S2997")
    );
    assert_eq!(store.number_of_synsets_with_literal("ortak"), 1000);
}

#[test]
fn relations_and_literals_added_through_the_store() {
    let mut store: WordNet = [synset("A", Pos::Noun, &[]), synset("B", Pos::Noun, &[])]
        .into_iter()
        .collect();
    store
        .add_relation("A", SemanticRelation::new("B", SemanticRelationType::Hypernym))
        .expect("relation");
    store
        .add_relation(
            "A",
            InterlingualRelation::new("ENG-1", InterlingualDependencyType::Synonym),
        )
        .expect("anchor");
    store
        .add_literal("A", Literal::new("yavru", 1, "elsewhere"))
        .expect("literal");

    let a = store.synset_with_id("A").expect("A");
    assert!(a.contains_relation_type(SemanticRelationType::Hypernym));
    assert_eq!(a.synonym().literal(0).map(Literal::synset_id), Some("A"));
    assert_eq!(store.synset_with_literal("yavru", 1).map(SynSet::id), Some("A"));
    assert_eq!(store.interlingual_anchor_count(), 1);
    assert_eq!(store.synsets_with_part_of_speech(Pos::Noun).len(), 2);
    assert!(store.synsets_with_part_of_speech(Pos::Verb).is_empty());
}

#[test]
fn merge_synset_unions_content() {
    let mut a = synset("A", Pos::Noun, &[("ev", 1)]);
    a.add_definition("a building");
    let mut b = synset("B", Pos::Noun, &[("konut", 1)]);
    b.add_definition("a dwelling");
    b.add_relation(SemanticRelation::new("A", SemanticRelationType::AlsoSee));
    let mut store: WordNet = [a, b].into_iter().collect();

    store.merge_synset("A", "B").expect("merge");

    let merged = store.synset_with_id("A").expect("A");
    assert_eq!(merged.synonym().literal_size(), 2);
    assert_eq!(merged.number_of_definitions(), 2);
    assert_eq!(merged.relation_size(), 0);
    assert_eq!(store.synset_with_literal("konut", 1).map(SynSet::id), Some("A"));
    assert!(store.contains("B"));
}
