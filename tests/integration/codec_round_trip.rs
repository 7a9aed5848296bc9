#![allow(missing_docs)]

use std::fs;

use lexigraph::codec::{self, read_exceptions, read_information_content, IdMapping};
use lexigraph::{
    InterlingualDependencyType, InterlingualRelation, LexError, Literal, Pos, SemanticRelation,
    SemanticRelationType, SynSet, WordNet,
};
use tempfile::TempDir;

fn sample() -> WordNet {
    let mut animal = SynSet::new("TUR10-0000001");
    animal.set_pos(Some(Pos::Noun));
    animal.set_bcs(1);
    animal.set_definition("canlı varlık|hayvan");
    animal.add_literal(Literal::new("hayvan", 1, "TUR10-0000001"));

    let mut dog = SynSet::new("TUR10-0000002");
    dog.set_pos(Some(Pos::Noun));
    dog.set_example(Some("köpek havladı".to_string()));
    dog.set_wiki_page(Some("Köpek".to_string()));
    dog.add_relation(SemanticRelation::new(
        "TUR10-0000001",
        SemanticRelationType::Hypernym,
    ));
    dog.add_relation(SemanticRelation::from_tag("TUR10-0000009", "MYSTERY", 0));
    dog.add_relation(InterlingualRelation::new(
        "ENG31-02084071-n",
        InterlingualDependencyType::Synonym,
    ));
    dog.add_relation(InterlingualRelation::new(
        "ENG31-01317541-n",
        InterlingualDependencyType::Hypernym,
    ));
    let mut kopek = Literal::new("köpek", 1, "TUR10-0000002")
        .with_origin("Türkçe")
        .with_group(1);
    kopek.add_relation(SemanticRelation::with_index(
        "TUR10-0000001",
        SemanticRelationType::DerivationRelated,
        1,
    ));
    dog.add_literal(kopek);
    dog.add_literal(Literal::new("it", 3, "TUR10-0000002").with_group(1));

    let mut run = SynSet::new("TUR10-0000003");
    run.set_pos(Some(Pos::Verb));
    run.set_note(Some("needs review".to_string()));
    run.add_literal(Literal::new("koşmak", 1, "TUR10-0000003"));

    [animal, dog, run].into_iter().collect()
}

fn relation_multiset(synset: &SynSet) -> Vec<String> {
    let mut relations: Vec<String> = synset.relations().iter().map(|r| format!("{r:?}")).collect();
    for literal in synset.synonym() {
        relations.extend(literal.relations().iter().map(|r| format!("{literal}:{r:?}")));
    }
    relations.sort();
    relations
}

#[test]
fn save_then_load_preserves_the_graph() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("wordnet.json");
    let original = sample();

    codec::save(&original, &path).expect("save");
    let reloaded = codec::load(&path).expect("load");

    assert_eq!(reloaded.size(), original.size());
    assert_eq!(
        reloaded.ids().collect::<Vec<_>>(),
        original.ids().collect::<Vec<_>>()
    );
    for synset in original.synsets() {
        let other = reloaded.synset_with_id(synset.id()).expect("synset survives");
        assert_eq!(relation_multiset(synset), relation_multiset(other));
        assert_eq!(synset.pos(), other.pos());
        assert_eq!(synset.bcs(), other.bcs());
        assert_eq!(synset.definitions(), other.definitions());
        assert_eq!(synset.example(), other.example());
        assert_eq!(synset.note(), other.note());
        assert_eq!(synset.wiki_page(), other.wiki_page());
        let names = |s: &SynSet| {
            s.synonym()
                .iter()
                .map(|l| (l.to_string(), l.origin().map(str::to_string), l.group_no()))
                .collect::<Vec<_>>()
        };
        assert_eq!(names(synset), names(other));
    }

    assert_eq!(reloaded.interlingual("ENG31-02084071-n").len(), 1);
    assert_eq!(
        reloaded.synset_with_id("TUR10-0000002").unwrap().interlingual(),
        vec!["ENG31-02084071-n"]
    );

    let again = dir.path().join("again.json");
    codec::save(&reloaded, &again).expect("second save");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        fs::read_to_string(&again).unwrap()
    );
}

#[test]
fn missing_and_malformed_files_are_errors() {
    let dir = TempDir::new().expect("tempdir");
    assert!(matches!(
        codec::load(dir.path().join("absent.json")),
        Err(LexError::Io(_))
    ));
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{\"synsets\": [{\"synonym\": []}]}").unwrap();
    assert!(matches!(codec::load(&broken), Err(LexError::Serialization(_))));
}

#[test]
fn side_tables_load_from_disk() {
    let dir = TempDir::new().expect("tempdir");
    let exceptions = dir.path().join("exceptions.csv");
    fs::write(&exceptions, "surface,root,pos\ngeese,goose,Noun\n").unwrap();
    let table = read_exceptions(&exceptions).expect("exceptions");
    assert_eq!(table.lookup("geese")[0].root, "goose");

    let ic = dir.path().join("ic.tsv");
    fs::write(&ic, "TUR10-0000001\t2.25\n").unwrap();
    let values = read_information_content(&ic).expect("ic");
    assert_eq!(values.get("TUR10-0000001"), Some(2.25));

    let mapping_path = dir.path().join("mapping.txt");
    let mapping: IdMapping = [("OLD-1", "NEW-1"), ("OLD-2", "OLD-1")].into_iter().collect();
    mapping.save(&mapping_path).expect("save mapping");
    let reloaded = IdMapping::load(&mapping_path).expect("load mapping");
    assert_eq!(reloaded.keys().collect::<Vec<_>>(), vec!["OLD-1", "OLD-2"]);
    assert_eq!(reloaded.map("OLD-2"), Some("NEW-1"));
}
