//! Filesystem-backed content source.
//!
//! Layout: `<root>/<namespace>/<category path>/**/<file>.<ext>`.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::core::ResourceCategory;
use crate::error::{BountifulError, Result};

use super::{ContentSource, RawContribution};

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    priority: Vec<String>,
}

impl DirectorySource {
    /// Serve every namespace directory under `root`, in sorted order.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            priority: Vec::new(),
        }
    }

    /// Serve namespaces in the given priority order instead of discovering them.
    #[must_use]
    pub fn with_priority<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = namespaces.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn discover_namespaces(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            return Vec::new();
        };
        let mut namespaces: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_dir()))
            .filter_map(|entry| entry.file_name().to_str().map(ToString::to_string))
            .filter(|name| !name.starts_with('.'))
            .collect();
        namespaces.sort();
        namespaces
    }

    fn read_namespace(
        &self,
        namespace: &str,
        category: &ResourceCategory,
        out: &mut Vec<RawContribution>,
    ) -> Result<()> {
        let dir = self.root.join(namespace).join(&category.path);
        if !dir.is_dir() {
            trace!(namespace, dir = %dir.display(), "no category directory");
            return Ok(());
        }

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !category.matches_file(file_name) {
                continue;
            }

            let content = std::fs::read(entry.path()).map_err(|err| {
                BountifulError::Source(format!("read {}: {err}", entry.path().display()))
            })?;
            out.push(RawContribution::new(namespace, file_name, content));
        }
        Ok(())
    }
}

impl ContentSource for DirectorySource {
    fn namespaces(&self) -> Vec<String> {
        if self.priority.is_empty() {
            self.discover_namespaces()
        } else {
            self.priority.clone()
        }
    }

    fn contributions(&self, category: &ResourceCategory) -> Result<Vec<RawContribution>> {
        if !self.root.is_dir() {
            return Err(BountifulError::Source(format!(
                "content root {} is not a directory",
                self.root.display()
            )));
        }

        let mut out = Vec::new();
        for namespace in self.namespaces() {
            self.read_namespace(&namespace, category, &mut out)?;
        }
        debug!(
            category = %category.name,
            root = %self.root.display(),
            count = out.len(),
            "enumerated contributions"
        );
        Ok(out)
    }
}
