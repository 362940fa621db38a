//! Content sources: where the raw layers of a pass come from.
//!
//! A source knows the namespaces it serves, in priority order, and can list
//! every raw contribution for a category. It is re-queried on every pass.

pub mod directory;

use crate::core::ResourceCategory;
use crate::error::Result;

pub use directory::DirectorySource;

/// One namespace's raw bytes for one file of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContribution {
    pub namespace: String,
    /// Base name with any directory path stripped
    pub file_name: String,
    pub content: Vec<u8>,
}

impl RawContribution {
    pub fn new(
        namespace: impl Into<String>,
        file_name: impl AsRef<str>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            file_name: base_name(file_name.as_ref()).to_string(),
            content: content.into(),
        }
    }
}

/// The part of a path after its last `/`.
#[must_use]
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Enumerates raw contributions for a category.
pub trait ContentSource: Send + Sync {
    /// Every namespace this source knows about, highest priority first.
    fn namespaces(&self) -> Vec<String>;

    /// All contributions for `category`, across namespaces, in any order.
    fn contributions(&self, category: &ResourceCategory) -> Result<Vec<RawContribution>>;
}

/// Contributions held in memory, keyed by category name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    namespaces: Vec<String>,
    layers: Vec<(String, RawContribution)>,
}

impl MemorySource {
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
            layers: Vec::new(),
        }
    }

    /// Add one layer. `path` may include directories; only its base name is kept.
    pub fn insert(
        &mut self,
        category: &str,
        namespace: impl Into<String>,
        path: impl AsRef<str>,
        content: impl Into<Vec<u8>>,
    ) {
        self.layers.push((
            category.to_string(),
            RawContribution::new(namespace, path, content),
        ));
    }

    #[must_use]
    pub fn with(
        mut self,
        category: &str,
        namespace: impl Into<String>,
        path: impl AsRef<str>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert(category, namespace, path, content);
        self
    }

    /// Drop every layer contributed by `namespace` to `category`'s file.
    pub fn remove(&mut self, category: &str, namespace: &str, file_name: &str) {
        self.layers.retain(|(cat, raw)| {
            !(cat == category && raw.namespace == namespace && raw.file_name == file_name)
        });
    }
}

impl ContentSource for MemorySource {
    fn namespaces(&self) -> Vec<String> {
        self.namespaces.clone()
    }

    fn contributions(&self, category: &ResourceCategory) -> Result<Vec<RawContribution>> {
        Ok(self
            .layers
            .iter()
            .filter(|(cat, raw)| *cat == category.name && category.matches_file(&raw.file_name))
            .map(|(_, raw)| raw.clone())
            .collect())
    }
}
