//! Decrees
//!
//! A decree is a flat record: which objective and reward pools a bounty board
//! draws from. Field-level merge policy:
//!
//! - `id`: first layer wins
//! - `title`, `spawns_in_board`: later layer wins when it sets a value
//! - `objective_pools`, `reward_pools`, `requires`: concatenated, duplicates dropped

use serde::{Deserialize, Serialize};

use super::merge_unique;
use super::value::Merge;

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decree {
    pub id: String,
    #[serde(default = "default_true")]
    pub load_eligible: bool,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub spawns_in_board: Option<bool>,
    #[serde(default)]
    pub objective_pools: Vec<String>,
    #[serde(default)]
    pub reward_pools: Vec<String>,
}

impl Decree {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            load_eligible: true,
            requires: Vec::new(),
            title: None,
            spawns_in_board: None,
            objective_pools: Vec::new(),
            reward_pools: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_objectives<I, S>(mut self, pools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objective_pools.extend(pools.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_rewards<I, S>(mut self, pools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reward_pools.extend(pools.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn ineligible(mut self) -> Self {
        self.load_eligible = false;
        self
    }
}

impl Merge for Decree {
    fn merge(mut self, other: Self) -> Self {
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.spawns_in_board.is_some() {
            self.spawns_in_board = other.spawns_in_board;
        }
        merge_unique(&mut self.requires, other.requires);
        merge_unique(&mut self.objective_pools, other.objective_pools);
        merge_unique(&mut self.reward_pools, other.reward_pools);
        self
    }

    fn is_load_eligible(&self, active: &[String]) -> bool {
        self.load_eligible && self.requires.iter().all(|ns| active.contains(ns))
    }
}
