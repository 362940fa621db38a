//! Common test utilities shared across integration tests.
//!
//! These helpers build content roots on disk and pool/decree JSON without
//! depending on the crate's internal test utilities.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// A content root laid out as `<root>/<namespace>/bounties/<kind>/<file>`.
pub struct ContentRoot {
    pub dir: TempDir,
}

impl ContentRoot {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp content root"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn pool(&self, namespace: &str, file_name: &str, body: &str) -> PathBuf {
        self.write(namespace, "bounties/pools", file_name, body)
    }

    pub fn decree(&self, namespace: &str, file_name: &str, body: &str) -> PathBuf {
        self.write(namespace, "bounties/decrees", file_name, body)
    }

    pub fn write(&self, namespace: &str, dir: &str, file_name: &str, body: &str) -> PathBuf {
        let path = self.path().join(namespace).join(dir).join(file_name);
        std::fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
        std::fs::write(&path, body).expect("write layer");
        path
    }

    pub fn config(&self, body: &str) -> PathBuf {
        let path = self.path().join("bountiful.toml");
        std::fs::write(&path, body).expect("write config");
        path
    }
}

/// Pool JSON with `(item id, weight)` entries.
pub fn pool_json(id: &str, entries: &[(&str, u32)]) -> String {
    let content: Vec<_> = entries
        .iter()
        .map(|(item, weight)| json!({"type": "item", "content": item, "weight": weight}))
        .collect();
    json!({"id": id, "content": content}).to_string()
}

/// Like [`pool_json`] but with `load_eligible` set explicitly.
pub fn pool_json_eligible(id: &str, entries: &[(&str, u32)], eligible: bool) -> String {
    let mut value: serde_json::Value =
        serde_json::from_str(&pool_json(id, entries)).expect("valid pool json");
    value["load_eligible"] = json!(eligible);
    value.to_string()
}
