use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for bisearch
pub fn bisearch() -> Command {
    cargo_bin_cmd!("bisearch")
}

/// The A..F sample graph as a TOML graph document
pub const SAMPLE_TOML: &str = r#"
[adjacency]
A = [["B", 1], ["C", 4]]
B = [["A", 1], ["D", 2], ["E", 6]]
C = [["A", 4], ["F", 3]]
D = [["B", 2]]
E = [["B", 6], ["F", 2]]
F = [["C", 3], ["E", 2]]
"#;

/// Write `content` to `name` inside `dir` and return the full path
#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write graph fixture");
    path
}
