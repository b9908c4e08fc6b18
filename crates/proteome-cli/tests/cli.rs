use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_snapshot(dir: &Path) {
    std::fs::write(
        dir.join("protein_nodes.jsonl"),
        [
            r#"{"id": "P1", "external_id": "E1", "name": "Kinase A", "organism": 3702}"#,
            r#"{"id": "P2", "external_id": "E2", "name": "P1-like"}"#,
            r#"{"id": "P3", "external_id": "E3"}"#,
        ]
        .join("\n"),
    )
    .unwrap();
    std::fs::write(
        dir.join("go_term_nodes.jsonl"),
        r#"{"id": "G1", "external_id": "GO:0005524", "name": "ATP binding"}"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("edges.jsonl"),
        [
            r#"{"source": "P1", "target": "G1", "relationship": "Protein-GOFunctionalAnnotation", "ML_prediction_score": 0.8}"#,
            r#"{"source": "P1", "target": "P2", "relationship": "Protein-Protein-ProteinProteinInteraction", "string_combined_score": 0.6}"#,
        ]
        .join("\n"),
    )
    .unwrap();
    std::fs::write(
        dir.join("protein_id_records.jsonl"),
        [
            r#"{"uuid": "u-1", "external_id": "E1", "secondary_ids": ["S1"]}"#,
            r#"{"uuid": "u-2", "external_id": "E2", "ambiguous_secondary_ids": ["A1"]}"#,
            r#"{"uuid": "u-3", "external_id": "E3", "ambiguous_secondary_ids": ["A1"]}"#,
        ]
        .join("\n"),
    )
    .unwrap();
}

struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        write_snapshot(temp.path());
        Self { temp }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("proteome").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.temp.path())
            .arg("--config")
            .arg(self.temp.path().join("config.toml"));
        cmd
    }
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_search_ranks_exact_primary_first() {
    let fixture = Fixture::new();

    let results = json_stdout(fixture.cmd().args(["search", "p1", "--limit", "1", "-f", "json"]));
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "P1");
}

#[test]
fn test_get_by_secondary_id() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["get", "S1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P1").and(predicate::str::contains("u-1")));
}

#[test]
fn test_get_unknown_protein_fails() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["get", "nonexistent-id"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Protein not found"));
}

#[test]
fn test_get_all_candidates() {
    let fixture = Fixture::new();

    let results = json_stdout(fixture.cmd().args(["get", "A1", "--all-candidates", "-f", "json"]));
    let ids: Vec<_> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["P2", "P3"]);
}

#[test]
fn test_all_candidates_only_on_get() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["annotations", "A1", "--all-candidates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--all-candidates"));
}

#[test]
fn test_annotations_by_external_id() {
    let fixture = Fixture::new();

    let annotations = json_stdout(fixture.cmd().args(["annotations", "E1", "-f", "json"]));
    let annotations = annotations.as_array().unwrap();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0]["go_term_id"], "G1");
    assert_eq!(annotations[0]["go_term_name"], "ATP binding");
    assert_eq!(annotations[0]["ML_prediction_score"], 0.8);
}

#[test]
fn test_unknown_protein_has_no_annotations() {
    let fixture = Fixture::new();

    let annotations =
        json_stdout(fixture.cmd().args(["annotations", "nonexistent-id", "-f", "json"]));
    assert_eq!(annotations, serde_json::json!([]));
}

#[test]
fn test_interactions_include_partner_name() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["interactions", "P1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P2").and(predicate::str::contains("P1-like")));
}

#[test]
fn test_go_term_min_score() {
    let fixture = Fixture::new();

    let hits = json_stdout(fixture.cmd().args([
        "go-term",
        "GO:0005524",
        "--min-score",
        "0.5",
        "-f",
        "json",
    ]));
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["protein"]["id"], "P1");

    fixture
        .cmd()
        .args(["go-term", "G1", "--min-score", "0.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No proteins annotated"));
}

#[test]
fn test_stats() {
    let fixture = Fixture::new();

    let stats = json_stdout(fixture.cmd().args(["stats", "-f", "json"]));
    assert_eq!(stats["proteins"], 3);
    assert_eq!(stats["ambiguous_ids"], 1);
    assert_eq!(stats["annotations"], 1);
}

#[test]
fn test_missing_batch_aborts() {
    let fixture = Fixture::new();
    std::fs::remove_file(fixture.temp.path().join("edges.jsonl")).unwrap();

    fixture
        .cmd()
        .args(["search", "P1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing edge batch"));
}

#[test]
fn test_config_roundtrip() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["config", "set", "search_limit", "2"])
        .assert()
        .success();
    fixture
        .cmd()
        .args(["config", "get", "search_limit"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));

    let results = json_stdout(fixture.cmd().args(["search", "", "-f", "json"]));
    assert_eq!(results.as_array().unwrap().len(), 2);
}
