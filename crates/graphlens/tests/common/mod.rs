//! Common test utilities shared across CLI integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Snapshot used by most CLI tests:
///
/// ```text
/// A(x) --2-- B(x) --3-- C(y)        D(x)
/// ```
pub const REFERENCE_SNAPSHOT: &str = r#"{
  "nodes": [
    {"id": "A", "label": "Alpha", "type": "x"},
    {"id": "B", "label": "Beta", "type": "x"},
    {"id": "C", "label": "Gamma", "type": "y"},
    {"id": "D", "label": "Delta", "type": "x"}
  ],
  "links": [
    {"source": "A", "target": "B", "type": "rel", "weight": 2},
    {"source": {"id": "B"}, "target": {"id": "C"}, "type": "rel", "weight": 3}
  ]
}"#;

/// Write `contents` as `snapshot.json` under `dir`.
pub fn write_snapshot(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("snapshot.json");
    std::fs::write(&path, contents).expect("Failed to write snapshot");
    path
}

/// Run the graphlens binary in the specified directory with colors disabled.
pub fn run_graphlens_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graphlens"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute graphlens binary")
}
