use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::ResourceCategory;
use crate::error::{BountifulError, Result};
use crate::lint::ValidationConfig;

pub const PROJECT_CONFIG_FILE: &str = "bountiful.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolution: ResolutionConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default = "ResourceCategory::builtins")]
    pub categories: Vec<ResourceCategory>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: ResolutionConfig::default(),
            validation: ValidationConfig::default(),
            categories: ResourceCategory::builtins(),
        }
    }
}

impl Config {
    /// Defaults, then the global and project files (or one explicit file), then
    /// `BOUNTIFUL_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("BOUNTIFUL_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Parse one config file's contents on top of the defaults, without
    /// touching the environment.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch = toml::from_str(raw)
            .map_err(|err| BountifulError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        Ok(config)
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&ResourceCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| {
                BountifulError::MissingConfig("config directory not found".to_string())
            })?
            .join("bountiful/config.toml");
        Self::load_patch(&path)
    }

    fn load_project(root: &Path) -> Result<Option<ConfigPatch>> {
        let path = root.join(PROJECT_CONFIG_FILE);
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            BountifulError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            BountifulError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.resolution {
            self.resolution.merge(patch);
        }
        if let Some(patch) = patch.validation {
            merge_validation(&mut self.validation, patch);
        }
        if let Some(categories) = patch.categories {
            for category in categories {
                match self.categories.iter_mut().find(|c| c.name == category.name) {
                    Some(existing) => *existing = category,
                    None => self.categories.push(category),
                }
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(values) = env_list("BOUNTIFUL_NAMESPACE_PRIORITY") {
            self.resolution.namespace_priority = values;
        }
        if let Some(values) = env_list("BOUNTIFUL_EXCLUDED_NAMESPACES") {
            self.resolution.excluded_namespaces =
                merge_unique(values, &self.resolution.excluded_namespaces);
        }
        if let Some(value) = env_bool("BOUNTIFUL_PARALLEL")? {
            self.resolution.parallel = value;
        }

        if let Some(values) = env_list("BOUNTIFUL_DISABLED_RULES") {
            self.validation.disabled_rules.extend(values);
        }
        if let Some(value) = env_string("BOUNTIFUL_CATALOG") {
            self.validation.catalog = Some(PathBuf::from(value));
        }

        Ok(())
    }
}

/// Which namespaces take part in a pass, and in what order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Highest priority first. Empty means "whatever the source reports".
    #[serde(default)]
    pub namespace_priority: Vec<String>,
    #[serde(default)]
    pub excluded_namespaces: Vec<String>,
    /// Fold file groups on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

const fn default_parallel() -> bool {
    true
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            namespace_priority: Vec::new(),
            excluded_namespaces: Vec::new(),
            parallel: true,
        }
    }
}

impl ResolutionConfig {
    fn merge(&mut self, patch: ResolutionPatch) {
        if let Some(values) = patch.namespace_priority {
            self.namespace_priority = values;
        }
        if let Some(values) = patch.excluded_namespaces {
            self.excluded_namespaces = merge_unique(values, &self.excluded_namespaces);
        }
        if let Some(value) = patch.parallel {
            self.parallel = value;
        }
    }

    #[must_use]
    pub fn is_excluded(&self, namespace: &str) -> bool {
        self.excluded_namespaces.iter().any(|ns| ns == namespace)
    }

    /// The namespaces a pass walks: the configured priority list, or the
    /// source's own order when none is configured, minus the excluded ones.
    /// A namespace listed twice keeps its first position.
    #[must_use]
    pub fn active_namespaces(&self, source_order: &[String]) -> Vec<String> {
        let ordered: &[String] = if self.namespace_priority.is_empty() {
            source_order
        } else {
            &self.namespace_priority
        };
        let active = ordered
            .iter()
            .filter(|ns| !self.is_excluded(ns))
            .cloned()
            .collect();
        merge_unique(active, &[])
    }
}

fn merge_validation(config: &mut ValidationConfig, patch: ValidationPatch) {
    if let Some(values) = patch.disabled_rules {
        config.disabled_rules.extend(values);
    }
    if let Some(value) = patch.catalog {
        config.catalog = Some(value);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub resolution: Option<ResolutionPatch>,
    pub validation: Option<ValidationPatch>,
    pub categories: Option<Vec<ResourceCategory>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ResolutionPatch {
    pub namespace_priority: Option<Vec<String>>,
    pub excluded_namespaces: Option<Vec<String>>,
    pub parallel: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ValidationPatch {
    pub disabled_rules: Option<Vec<String>>,
    pub catalog: Option<PathBuf>,
}

fn merge_unique(values: Vec<String>, existing: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values.into_iter().chain(existing.iter().cloned()) {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(value) => match value.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(BountifulError::Config(format!(
                "invalid {key} value {value}: expected a boolean"
            ))),
        },
        Err(_) => Ok(None),
    }
}

fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}
