//! Resource categories
//!
//! A category names one class of layered data: where it lives inside each
//! namespace, which file extension it uses and which value shape it decodes to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value shape a category decodes to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Composite value holding weighted entries
    Pool,
    /// Scalar record describing a bounty board decree
    Decree,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool => write!(f, "pool"),
            Self::Decree => write!(f, "decree"),
        }
    }
}

/// One class of resolvable data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCategory {
    /// Registry key, e.g. `pools`
    pub name: String,
    /// Directory inside each namespace, e.g. `bounties/pools`
    pub path: String,
    /// File extension without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
    pub kind: ValueKind,
}

fn default_extension() -> String {
    "json".to_string()
}

impl ResourceCategory {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        extension: impl Into<String>,
        kind: ValueKind,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            extension: extension.into(),
            kind,
        }
    }

    /// Entry pools, `bounties/pools/*.json`.
    #[must_use]
    pub fn pools() -> Self {
        Self::new("pools", "bounties/pools", "json", ValueKind::Pool)
    }

    /// Decrees, `bounties/decrees/*.json`.
    #[must_use]
    pub fn decrees() -> Self {
        Self::new("decrees", "bounties/decrees", "json", ValueKind::Decree)
    }

    /// The categories every installation knows about.
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        vec![Self::pools(), Self::decrees()]
    }

    /// Whether `file_name` carries this category's extension.
    #[must_use]
    pub fn matches_file(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(&self.extension))
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/*.{})", self.name, self.path, self.extension)
    }
}
