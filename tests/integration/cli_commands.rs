#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

const RESOURCE: &str = r#"{"synsets": [
  {"id": "entity", "pos": "n", "definition": "anything that exists",
   "synonym": [{"name": "entity", "sense": 1}]},
  {"id": "animal", "pos": "n", "definition": "a living organism",
   "relations": [{"target": "entity", "type": "HYPERNYM"}],
   "synonym": [{"name": "animal", "sense": 1}]},
  {"id": "dog", "pos": "n", "definition": "a domesticated canid",
   "relations": [{"target": "animal", "type": "HYPERNYM"}],
   "synonym": [{"name": "dog", "sense": 1}, {"name": "hound", "sense": 1}]},
  {"id": "cat", "pos": "n", "definition": "a small feline",
   "relations": [{"target": "animal", "type": "HYPERNYM"}],
   "synonym": [{"name": "cat", "sense": 1}]}
]}"#;

struct Fixture {
    dir: TempDir,
    resource: PathBuf,
}

impl Fixture {
    fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let resource = dir.path().join("wordnet.json");
        fs::write(&resource, contents).expect("write resource");
        Self { dir, resource }
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config").join("cli.toml")
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("cli");
        cmd.env("LEXIGRAPH_CONFIG", self.config())
            .env_remove("LEXIGRAPH_RESOURCE")
            .env_remove("LEXIGRAPH_LOG");
        cmd
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self
            .cmd()
            .args(["--format", "json", "--resource"])
            .arg(&self.resource)
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&output).expect("valid json")
    }
}

fn with_dangling_relation(path: &Path) {
    let broken = RESOURCE.replace(
        r#"{"target": "animal", "type": "HYPERNYM"}],
   "synonym": [{"name": "cat""#,
        r#"{"target": "animal", "type": "HYPERNYM"}, {"target": "ghost", "type": "ALSO_SEE"}],
   "synonym": [{"name": "cat""#,
    );
    assert_ne!(broken, RESOURCE);
    fs::write(path, broken).expect("write broken resource");
}

#[test]
fn stats_emits_json() {
    let fixture = Fixture::new(RESOURCE);
    let json = fixture.json(&["stats"]);
    assert_eq!(json["synsets"], 4);
    assert_eq!(json["literals"], 5);
    assert_eq!(json["roots"], 1);
    assert_eq!(json["relations"]["semantic"], 3);
    assert_eq!(json["relations"]["by_type"]["HYPERNYM"], 3);
}

#[test]
fn verify_clean_resource_succeeds() {
    let fixture = Fixture::new(RESOURCE);
    let json = fixture.json(&["verify", "--level", "full"]);
    assert_eq!(json["success"], true);
    assert_eq!(json["level"], "full");
    assert_eq!(json["counts"]["synsets"], 4);
}

#[test]
fn verify_exits_two_on_dangling_relations() {
    let fixture = Fixture::new(RESOURCE);
    with_dangling_relation(&fixture.resource);
    let output = fixture
        .cmd()
        .args(["--format", "json", "--resource"])
        .arg(&fixture.resource)
        .arg("verify")
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["success"], false);
    assert_eq!(json["counts"]["by_kind"]["dangling_relation"], 1);
}

#[test]
fn repair_writes_a_clean_copy() {
    let fixture = Fixture::new(RESOURCE);
    with_dangling_relation(&fixture.resource);
    let repaired = fixture.dir.path().join("repaired.json");
    let report = fixture.json(&["repair", "--output", repaired.to_str().unwrap()]);
    assert_eq!(report["dangling_removed"], 1);
    assert_eq!(report["changes"][0]["synset_id"], "cat");

    fixture
        .cmd()
        .arg("--resource")
        .arg(&repaired)
        .arg("verify")
        .assert()
        .success();
}

#[test]
fn lookup_backs_off_to_root_forms() {
    let fixture = Fixture::new(RESOURCE);
    let direct = fixture.json(&["lookup", "hound"]);
    assert_eq!(direct["backed_off"], false);
    assert_eq!(direct["synsets"][0]["id"], "dog");

    let inflected = fixture.json(&["lookup", "dogs", "--pos", "noun"]);
    assert_eq!(inflected["backed_off"], true);
    assert_eq!(inflected["synsets"][0]["id"], "dog");
    assert_eq!(inflected["synsets"][0]["literals"][1], "hound 1");

    let missing = fixture.json(&["lookup", "xyzzy"]);
    assert_eq!(missing["synsets"].as_array().map(Vec::len), Some(0));
}

#[test]
fn path_and_similarity() {
    let fixture = Fixture::new(RESOURCE);
    let path = fixture.json(&["path", "dog"]);
    assert_eq!(path["path"], serde_json::json!(["dog", "animal", "entity"]));

    let score = fixture.json(&["similarity", "dog", "cat", "--metric", "wu-palmer"]);
    assert_eq!(score["metric"], "wu-palmer");
    let value = score["score"].as_f64().expect("score");
    assert!((value - 2.0 / 3.0).abs() < 1e-12);

    let ic = fixture.dir.path().join("ic.tsv");
    fs::write(&ic, "entity\t0\nanimal\t1\ndog\t3\ncat\t2\n").expect("write ic");
    let resnik = fixture.json(&[
        "similarity",
        "dog",
        "cat",
        "--metric",
        "resnik",
        "--information-content",
        ic.to_str().unwrap(),
    ]);
    assert_eq!(resnik["score"], 1.0);
}

#[test]
fn unknown_synset_fails() {
    let fixture = Fixture::new(RESOURCE);
    fixture
        .cmd()
        .arg("--resource")
        .arg(&fixture.resource)
        .args(["path", "nope"])
        .assert()
        .code(1);
}

#[test]
fn config_default_resource_is_used() {
    let fixture = Fixture::new(RESOURCE);
    fixture
        .cmd()
        .args(["config", "set-default"])
        .arg(&fixture.resource)
        .assert()
        .success();
    assert!(fixture.config().exists());

    let output = fixture
        .cmd()
        .args(["--format", "json", "stats"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["synsets"], 4);

    let shown = fixture
        .cmd()
        .args(["--format", "json", "config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&shown).expect("valid json");
    assert_eq!(
        json["config"]["resource"]["default"],
        fixture.resource.to_str().unwrap()
    );
}

#[test]
fn merge_applies_a_mapping_file() {
    let fixture = Fixture::new(RESOURCE);
    let mapping = fixture.dir.path().join("mapping.txt");
    fs::write(&mapping, "cat->dog\n").expect("write mapping");
    let merged = fixture.dir.path().join("merged.json");
    let report = fixture.json(&[
        "merge",
        "--mapping",
        mapping.to_str().unwrap(),
        "--output",
        merged.to_str().unwrap(),
    ]);
    assert_eq!(report["merged"], 1);

    let output = fixture
        .cmd()
        .args(["--format", "json", "--resource"])
        .arg(&merged)
        .args(["lookup", "cat"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["synsets"][0]["id"], "dog");
}
