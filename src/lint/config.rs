//! Validation configuration.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::EntryKind;
use crate::error::{BountifulError, Result};

/// Configuration for validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Rules to disable by ID
    #[serde(default)]
    pub disabled_rules: HashSet<String>,

    /// TOML file listing resolvable targets
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl ValidationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn disable_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.disabled_rules.insert(rule_id.into());
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }

    #[must_use]
    pub fn is_rule_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.contains(rule_id)
    }
}

/// Known target ids, per entry kind.
///
/// A kind whose set is empty is unrestricted: any target of that kind resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCatalog {
    #[serde(default)]
    pub items: BTreeSet<String>,
    #[serde(default)]
    pub entities: BTreeSet<String>,
    #[serde(default)]
    pub commands: BTreeSet<String>,
}

impl TargetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entities.extend(entities.into_iter().map(Into::into));
        self
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            BountifulError::Config(format!("read catalog {}: {err}", path.display()))
        })?;
        toml::from_str(&raw).map_err(|err| {
            BountifulError::Config(format!("parse catalog {}: {err}", path.display()))
        })
    }

    fn targets(&self, kind: EntryKind) -> &BTreeSet<String> {
        match kind {
            EntryKind::Item => &self.items,
            EntryKind::Entity => &self.entities,
            EntryKind::Command => &self.commands,
        }
    }

    #[must_use]
    pub fn resolves(&self, kind: EntryKind, target: &str) -> bool {
        let targets = self.targets(kind);
        targets.is_empty() || targets.contains(target)
    }
}

/// Context provided to entry rules
pub struct ValidationContext<'a> {
    /// Id of the pool the entry belongs to
    pub pool_id: &'a str,

    pub config: &'a ValidationConfig,

    /// Resolvable targets; reference rules pass when absent
    pub catalog: Option<&'a TargetCatalog>,
}

impl<'a> ValidationContext<'a> {
    #[must_use]
    pub const fn new(pool_id: &'a str, config: &'a ValidationConfig) -> Self {
        Self {
            pool_id,
            config,
            catalog: None,
        }
    }

    #[must_use]
    pub const fn with_catalog(mut self, catalog: &'a TargetCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
}
