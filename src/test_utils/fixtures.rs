use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::ResourceCategory;

/// A temporary content root with one directory per namespace.
pub struct ContentFixture {
    pub temp_dir: TempDir,
}

impl Default for ContentFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write one namespace's layer of `file_name` for `category`.
    pub fn layer(
        &self,
        namespace: &str,
        category: &ResourceCategory,
        file_name: &str,
        content: &str,
    ) -> PathBuf {
        let full_path = self
            .root()
            .join(namespace)
            .join(&category.path)
            .join(file_name);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}
