//! Entry pools
//!
//! A pool is the composite value shape: an id plus an ordered list of weighted
//! entries. Several namespaces may each contribute a layer of the same pool; the
//! layers fold together through [`Merge`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::merge_unique;
use super::value::Merge;

/// What an entry points at.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Item,
    Entity,
    Command,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Entity => write!(f, "entity"),
            Self::Command => write!(f, "command"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
}

/// Inclusive amount range rolled when an entry is picked.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: u32,
    pub max: u32,
}

impl AmountRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn exactly(amount: u32) -> Self {
        Self::new(amount, amount)
    }
}

impl Default for AmountRange {
    fn default() -> Self {
        Self::exactly(1)
    }
}

impl fmt::Display for AmountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}..{}", self.min, self.max)
        }
    }
}

const fn default_weight() -> u32 {
    100
}

/// A single weighted record inside a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Target id, e.g. `minecraft:diamond`
    pub content: String,
    #[serde(default)]
    pub amount: AmountRange,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub unit_worth: i64,
    #[serde(default)]
    pub rarity: Rarity,
}

impl Entry {
    pub fn new(kind: EntryKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            amount: AmountRange::default(),
            weight: default_weight(),
            unit_worth: 0,
            rarity: Rarity::default(),
        }
    }

    #[must_use]
    pub fn item(content: impl Into<String>) -> Self {
        Self::new(EntryKind::Item, content)
    }

    #[must_use]
    pub fn entity(content: impl Into<String>) -> Self {
        Self::new(EntryKind::Entity, content)
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub const fn with_amount(mut self, min: u32, max: u32) -> Self {
        self.amount = AmountRange::new(min, max);
        self
    }

    #[must_use]
    pub const fn with_worth(mut self, unit_worth: i64) -> Self {
        self.unit_worth = unit_worth;
        self
    }

    /// Two entries with the same identity describe the same target; the later
    /// layer's copy replaces the earlier one on merge.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.kind == other.kind && self.content == other.content
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} x{} (weight {}, worth {})",
            self.kind, self.content, self.amount, self.weight, self.unit_worth
        )
    }
}

const fn default_true() -> bool {
    true
}

/// Composite value: an identified, ordered list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    /// Authors may mark a layer inert; only affects layers after the first
    #[serde(default = "default_true")]
    pub load_eligible: bool,
    /// Namespaces that must be active for this layer to merge
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub content: Vec<Entry>,
}

impl Pool {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            load_eligible: true,
            requires: Vec::new(),
            content: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.content.push(entry);
        self
    }

    #[must_use]
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.content.extend(entries);
        self
    }

    #[must_use]
    pub const fn ineligible(mut self) -> Self {
        self.load_eligible = false;
        self
    }

    #[must_use]
    pub fn requiring(mut self, namespace: impl Into<String>) -> Self {
        self.requires.push(namespace.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Merge for Pool {
    fn merge(mut self, other: Self) -> Self {
        merge_unique(&mut self.requires, other.requires);
        for entry in other.content {
            let Some(first) = self.content.iter().position(|e| e.same_identity(&entry)) else {
                self.content.push(entry);
                continue;
            };
            // The later copy takes the first slot; any other copies go
            let mut index = 0;
            self.content.retain(|e| {
                let keep = index <= first || !e.same_identity(&entry);
                index += 1;
                keep
            });
            self.content[first] = entry;
        }
        self
    }

    fn is_load_eligible(&self, active: &[String]) -> bool {
        self.load_eligible && self.requires.iter().all(|ns| active.contains(ns))
    }
}
