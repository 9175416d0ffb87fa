//! Integration tests for `bisearch path`

mod support;

use predicates::prelude::*;
use support::{bisearch, write_graph, SAMPLE_TOML};
use tempfile::tempdir;

#[test]
fn test_path_direct() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SAMPLE_TOML);

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B"))
        .stdout(predicate::str::contains("Path length: 1 hop"));
}

#[test]
fn test_path_multi_hop() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SAMPLE_TOML);

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["A", "F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C -> F"))
        .stdout(predicate::str::contains("Path length: 2 hops"));
}

#[test]
fn test_path_identity() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SAMPLE_TOML);

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["Q", "Q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 0 hops"));
}

#[test]
fn test_path_no_path_exits_zero() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "g.json",
        r#"{"undirected": true, "edges": [{"from": "A", "to": "B"}, {"from": "C", "to": "D"}]}"#,
    );

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from A to D"));
}

#[test]
fn test_path_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SAMPLE_TOML);

    let output = bisearch()
        .current_dir(dir.path())
        .args(["--format", "json", "path"])
        .arg(&graph)
        .args(["A", "F", "--trace"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["found"], true);
    assert_eq!(value["path"], serde_json::json!(["A", "C", "F"]));
    assert_eq!(value["hops"], 2);
    assert_eq!(value["trace"]["meeting"], "C");
    assert_eq!(value["trace"]["expansions"], 2);
}

#[test]
fn test_path_weighted_yaml() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "g.yaml",
        "undirected: true\nedges:\n  - {from: S, to: X, weight: 1}\n  - {from: X, to: T, weight: 1}\n  - {from: S, to: T, weight: 5}\n",
    );

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["S", "T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S -> T\n"));

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["S", "T", "--strategy", "weighted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S -> X -> T"))
        .stdout(predicate::str::contains("Total weight: 2"));
}

#[test]
fn test_path_strict_unknown_node() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SAMPLE_TOML);

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["A", "Z", "--strict"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found in graph: Z"));
}

#[test]
fn test_path_lenient_unknown_node() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SAMPLE_TOML);

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["A", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from A to Z"));
}

#[test]
fn test_path_negative_weight_json_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "g.json",
        r#"{"edges": [{"from": "A", "to": "B", "weight": -2}]}"#,
    );

    let output = bisearch()
        .current_dir(dir.path())
        .args(["--format", "json", "path"])
        .arg(&graph)
        .args(["A", "B", "--strategy", "weighted"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stderr).trim()).unwrap();
    assert_eq!(value["error"]["type"], "negative_weight");
    assert_eq!(value["error"]["code"], 3);
}

#[test]
fn test_path_budget_truncates() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SAMPLE_TOML);

    bisearch()
        .current_dir(dir.path())
        .args(["--format", "records", "path"])
        .arg(&graph)
        .args(["A", "F", "--max-expansions", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found=false truncated=true"));
}

#[test]
fn test_path_records_quote_ids_with_spaces() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "g.json",
        r#"{"undirected": true, "edges": [{"from": "New York", "to": "Boston"}]}"#,
    );

    bisearch()
        .current_dir(dir.path())
        .args(["--format", "records", "path"])
        .arg(&graph)
        .args(["New York", "Boston"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"from="New York" to=Boston"#))
        .stdout(predicate::str::contains("N \"New York\"\n"))
        .stdout(predicate::str::contains(r#"E "New York" Boston 1"#));
}

#[test]
fn test_path_missing_graph() {
    let dir = tempdir().unwrap();

    bisearch()
        .current_dir(dir.path())
        .args(["path", "missing.json", "A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph not found"));
}

#[test]
fn test_path_invalid_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", "{ not json");

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph"));
}

#[test]
fn test_path_unsupported_extension() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.csv", "A,B\n");

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["A", "B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph file extension"));
}

#[test]
fn test_path_empty_node_id() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.toml", SAMPLE_TOML);

    bisearch()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["", "B"])
        .assert()
        .code(2);
}
