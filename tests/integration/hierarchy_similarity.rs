#![allow(missing_docs)]

use lexigraph::codec::read_information_content_from_reader;
use lexigraph::hierarchy::{find_lcs, find_lcs_depth, find_lcs_id, find_path_length, Lcs};
use lexigraph::similarity::{Jcn, Lch, Metric, Resnik, Similarity, SimilarityPath, WuPalmer};
use lexigraph::{LexError, Pos, SemanticRelation, SemanticRelationType, SynSet, WordNet};

/// ```text
/// entity <- animal <- dog <- puppy
///                  <- cat
/// entity <- plant
/// run (verb, separate root)
/// ```
fn taxonomy() -> WordNet {
    let edges = [
        ("entity", None, Pos::Noun),
        ("animal", Some("entity"), Pos::Noun),
        ("dog", Some("animal"), Pos::Noun),
        ("puppy", Some("dog"), Pos::Noun),
        ("cat", Some("animal"), Pos::Noun),
        ("plant", Some("entity"), Pos::Noun),
        ("run", None, Pos::Verb),
    ];
    edges
        .into_iter()
        .map(|(id, parent, pos)| {
            let mut synset = SynSet::new(id);
            synset.set_pos(Some(pos));
            if let Some(parent) = parent {
                synset.add_relation(SemanticRelation::new(parent, SemanticRelationType::Hypernym));
            }
            synset
        })
        .collect()
}

fn path(store: &WordNet, id: &str) -> Vec<String> {
    store.find_path_to_root(store.synset_with_id(id).expect("synset"))
}

#[test]
fn chain_scenario() {
    let store: WordNet = [
        ("A", Some("B")),
        ("B", Some("ROOT")),
        ("ROOT", None),
    ]
    .into_iter()
    .map(|(id, parent)| {
        let mut synset = SynSet::new(id);
        if let Some(parent) = parent {
            synset.add_relation(SemanticRelation::new(parent, SemanticRelationType::Hypernym));
        }
        synset
    })
    .collect();
    let a = store.synset_with_id("A").unwrap();
    assert_eq!(store.find_path_to_root(a), vec!["A", "B", "ROOT"]);
    assert_eq!(store.percolate_up(a).map(SynSet::id), Some("B"));
    assert!(store.percolate_up(store.synset_with_id("ROOT").unwrap()).is_none());
}

#[test]
fn sibling_scenario() {
    let store = taxonomy();
    let dog = path(&store, "dog");
    let cat = path(&store, "cat");
    assert_eq!(find_lcs_id(&dog, &cat), Some("animal"));
    assert_eq!(find_lcs_depth(&dog, &cat), Some(2));
    assert_eq!(find_path_length(&dog, &cat), Some(1));

    let animal = path(&store, "animal");
    let plant = path(&store, "plant");
    assert_eq!(
        find_lcs(&animal, &plant),
        Some(Lcs {
            id: "entity",
            depth: 1
        })
    );
    let wu_palmer = WuPalmer::new(&store);
    let score = wu_palmer
        .compute_similarity(
            store.synset_with_id("animal").unwrap(),
            store.synset_with_id("plant").unwrap(),
        )
        .unwrap();
    assert_eq!(score, 0.5);
}

#[test]
fn disconnected_pairs() {
    let store = taxonomy();
    let dog = path(&store, "dog");
    let run = path(&store, "run");
    assert_eq!(find_path_length(&dog, &run), None);
    assert!(find_lcs(&dog, &run).is_none());

    let get = |id| store.synset_with_id(id).unwrap();
    assert_eq!(WuPalmer::new(&store).compute_similarity(get("dog"), get("run")).unwrap(), 0.0);
    assert!(matches!(
        SimilarityPath::new(&store).compute_similarity(get("dog"), get("run")),
        Err(LexError::NoCommonSubsumer { .. })
    ));
    assert!(matches!(
        Lch::new(&store).compute_similarity(get("dog"), get("run")),
        Err(LexError::NoCommonSubsumer { .. })
    ));
}

#[test]
fn every_metric_on_a_loaded_information_content_table() {
    let store = taxonomy();
    let table = read_information_content_from_reader(
        "entity\t0\nanimal\t1.5\ndog\t4\npuppy\t6\ncat\t3.5\nplant\t2\n".as_bytes(),
    )
    .expect("ic table");
    let get = |id| store.synset_with_id(id).unwrap();

    let puppy_cat = |metric: &dyn Similarity| metric.compute_similarity(get("puppy"), get("cat"));

    assert_eq!(puppy_cat(&SimilarityPath::new(&store)).unwrap(), 2.0);
    let wu_palmer = puppy_cat(&WuPalmer::new(&store)).unwrap();
    assert!((wu_palmer - 4.0 / 7.0).abs() < 1e-12);
    let lch = puppy_cat(&Lch::new(&store)).unwrap();
    assert!((lch - (8.0f64 / 2.0).ln()).abs() < 1e-12);
    assert_eq!(puppy_cat(&Resnik::new(&store, &table)).unwrap(), 1.5);
    let jcn = puppy_cat(&Jcn::new(&store, &table)).unwrap();
    assert!((jcn - 1.0 / 6.5).abs() < 1e-12);

    assert!(matches!(
        Jcn::new(&store, &table).compute_similarity(get("dog"), get("dog")),
        Err(LexError::Undefined(_))
    ));
    assert!(matches!(
        Resnik::new(&store, &table).compute_similarity(get("dog"), get("run")),
        Err(LexError::MissingInformationContent(id)) if id == "run"
    ));
}

#[test]
fn metric_selector_matches_direct_construction() {
    let store = taxonomy();
    let get = |id| store.synset_with_id(id).unwrap();
    for metric in [Metric::Path, Metric::WuPalmer, Metric::Lch] {
        let built = metric.build(&store, None).expect("build");
        assert!(built.compute_similarity(get("dog"), get("cat")).is_ok(), "{metric}");
    }
    assert!(matches!(
        Metric::Jcn.build(&store, None),
        Err(LexError::InvalidArgument(_))
    ));
}

#[test]
fn wu_palmer_is_one_on_identity() {
    let store = taxonomy();
    let metric = WuPalmer::new(&store);
    for synset in store.synsets() {
        assert_eq!(metric.compute_similarity(synset, synset).unwrap(), 1.0);
    }
}
