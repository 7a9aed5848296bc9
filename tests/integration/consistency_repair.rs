#![allow(missing_docs)]

use lexigraph::admin::{
    merge_with_mapping, repair, verify, FindingKind, RepairOptions, VerifyLevel, VerifyOptions,
};
use lexigraph::codec::IdMapping;
use lexigraph::{Literal, Pos, Relation, SemanticRelation, SemanticRelationType, SynSet, WordNet};

fn node(id: &str, parent: Option<&str>) -> SynSet {
    let mut synset = SynSet::new(id);
    synset.set_pos(Some(Pos::Noun));
    synset.add_definition(format!("gloss of {id}"));
    synset.add_literal(Literal::new(id.to_lowercase(), 1, id));
    if let Some(parent) = parent {
        synset.add_relation(SemanticRelation::new(parent, SemanticRelationType::Hypernym));
    }
    synset
}

fn chain() -> WordNet {
    [node("A", Some("B")), node("B", Some("ROOT")), node("ROOT", None)]
        .into_iter()
        .collect()
}

fn hyponym(to: &str) -> Relation {
    SemanticRelation::new(to, SemanticRelationType::Hyponym).into()
}

fn relation_set(store: &WordNet) -> Vec<(String, Vec<String>)> {
    store
        .synsets()
        .map(|s| {
            let mut rels: Vec<String> = s.relations().iter().map(ToString::to_string).collect();
            rels.sort();
            (s.id().to_string(), rels)
        })
        .collect()
}

#[test]
fn equalize_adds_hyponyms_along_the_chain() {
    let mut store = chain();
    assert_eq!(store.equalize_semantic_relations(), 2);
    assert!(store.synset_with_id("B").unwrap().contains_relation(&hyponym("A")));
    assert!(store.synset_with_id("ROOT").unwrap().contains_relation(&hyponym("B")));

    let once = relation_set(&store);
    assert_eq!(store.equalize_semantic_relations(), 0);
    assert_eq!(relation_set(&store), once);
}

#[test]
fn equalize_handles_indexed_relations_and_missing_targets() {
    let mut a = node("A", None);
    a.add_relation(SemanticRelation::with_index(
        "B",
        SemanticRelationType::MemberHolonym,
        2,
    ));
    a.add_relation(SemanticRelation::new("MISSING", SemanticRelationType::Hypernym));
    let mut store: WordNet = [a, node("B", None)].into_iter().collect();

    // The meronym added to B carries no sense index, so its own inverse is
    // a new relation on A rather than the indexed holonym A started with.
    assert_eq!(store.equalize_semantic_relations(), 2);
    let b = store.synset_with_id("B").unwrap();
    assert_eq!(
        b.relation(0).and_then(Relation::semantic_type),
        Some(SemanticRelationType::MemberMeronym)
    );
    let a = store.synset_with_id("A").unwrap();
    assert!(a.contains_relation(
        &SemanticRelation::new("B", SemanticRelationType::MemberHolonym).into()
    ));
    assert_eq!(a.relation_size(), 3);
    assert_eq!(store.equalize_semantic_relations(), 0);
}

#[test]
fn removal_then_repair_reports_each_dangling_relation() {
    let mut store = chain();
    let mut x = node("X", Some("B"));
    x.add_relation(SemanticRelation::new("B", SemanticRelationType::AlsoSee));
    store.add_synset(x);
    store.remove_synset("B").expect("remove B");

    let before = verify(&store, &VerifyOptions::default());
    assert!(!before.success);
    assert_eq!(before.count(FindingKind::DanglingRelation), 3);
    assert_eq!(before.count(FindingKind::DuplicateRelation), 1);
    assert_eq!(before.count(FindingKind::StaleLiteralIndex), 1);

    let report = repair(&mut store, &RepairOptions::default());
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.dangling_removed, 2);
    assert_eq!(report.index_entries_pruned, 1);
    let dangling: Vec<&str> = report
        .changes
        .iter()
        .filter(|c| c.kind == FindingKind::DanglingRelation)
        .map(|c| c.synset_id.as_str())
        .collect();
    assert_eq!(dangling, vec!["A", "X"]);
    assert!(store
        .synsets()
        .all(|s| s.relations().iter().all(|r| r.name() != "B")));

    let after = verify(&store, &VerifyOptions::default());
    assert!(after.success);
    assert!(after.findings.is_empty());
}

#[test]
fn cycles_are_errors_and_traversal_still_terminates() {
    let store: WordNet = [node("A", Some("B")), node("B", Some("C")), node("C", Some("A"))]
        .into_iter()
        .collect();
    let a = store.synset_with_id("A").unwrap();
    assert_eq!(store.find_path_to_root(a), vec!["A", "B", "C"]);

    let report = verify(&store, &VerifyOptions::default());
    assert!(!report.success);
    assert_eq!(report.count(FindingKind::CycleDetected), 1);

    let fast = verify(
        &store,
        &VerifyOptions {
            level: VerifyLevel::Fast,
            ..VerifyOptions::default()
        },
    );
    assert!(fast.success);
}

#[test]
fn findings_beyond_the_limit_are_counted() {
    let store: WordNet = (0..10).map(|i| SynSet::new(format!("S{i}"))).collect();
    let report = verify(
        &store,
        &VerifyOptions {
            level: VerifyLevel::Full,
            max_findings: 5,
        },
    );
    assert_eq!(report.findings.len(), 5);
    assert_eq!(report.count(FindingKind::MissingPos), 10);
    assert_eq!(report.count(FindingKind::MissingDefinition), 10);
    assert_eq!(report.counts.dropped, 15);
    assert!(report.success);
}

#[test]
fn mapping_merge_retargets_inbound_relations() {
    let mut store = chain();
    store.add_synset(node("B2", Some("ROOT")));
    store.add_synset(node("C", Some("B2")));
    let mapping: IdMapping = [("B2", "B")].into_iter().collect();

    let report = merge_with_mapping(&mut store, &mapping).expect("merge");
    assert_eq!(report.merged, 1);
    assert_eq!(report.relations_retargeted, 1);
    assert!(!store.contains("B2"));

    let c = store.synset_with_id("C").unwrap();
    assert_eq!(store.find_path_to_root(c), vec!["C", "B", "ROOT"]);
    assert_eq!(store.synset_with_literal("b2", 1).map(SynSet::id), Some("B"));
    assert!(verify(&store, &VerifyOptions::default()).success);
}
