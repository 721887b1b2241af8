//! Shared utilities for route file integration tests.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

/// A router module written to a fresh temporary directory.
pub struct RouteFile {
    // Kept alive so the directory outlives the test.
    _dir: TempDir,
    pub path: PathBuf,
}

impl RouteFile {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("router.js");
        fs::write(&path, contents).unwrap();
        Self { _dir: dir, path }
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }
}

/// `(path, authorized, key)` of every node, depth first.
#[allow(dead_code)]
pub fn route_triples(routes: &Value) -> Vec<(Value, Value, Value)> {
    let mut triples = Vec::new();
    for node in routes.as_array().unwrap() {
        triples.push((
            node.get("path").cloned().unwrap_or(Value::Null),
            node.get("authorized").cloned().unwrap_or(Value::Null),
            node.get("key").cloned().unwrap_or(Value::Null),
        ));
        if let Some(children) = node.get("components").filter(|c| c.is_array()) {
            triples.extend(route_triples(children));
        }
    }
    triples
}
