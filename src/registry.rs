//! Registries of resolved values.
//!
//! A `Registry` holds the accepted values of one category. Readers take a
//! snapshot (`Arc<Vec<_>>`) and keep a consistent view no matter what a
//! concurrent pass publishes afterwards.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::core::ResolvedValue;

#[derive(Debug, Default)]
pub struct Registry {
    values: RwLock<Arc<Vec<ResolvedValue>>>,
    generation: AtomicU64,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every held value.
    pub fn clear(&self) {
        self.publish(Vec::new());
    }

    /// Append one value. Snapshots taken earlier are not affected.
    pub fn add(&self, value: ResolvedValue) {
        let mut guard = self.values.write();
        Arc::make_mut(&mut guard).push(value);
        self.generation.fetch_add(1, Ordering::Release);
    }

    /// Swap in a complete pass's values in one step.
    pub fn replace(&self, values: Vec<ResolvedValue>) {
        self.publish(values);
    }

    fn publish(&self, values: Vec<ResolvedValue>) {
        *self.values.write() = Arc::new(values);
        self.generation.fetch_add(1, Ordering::Release);
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<ResolvedValue>> {
        Arc::clone(&self.values.read())
    }

    /// Find a value by id. Duplicate ids are tolerated; the first wins.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<ResolvedValue> {
        self.values.read().iter().find(|v| v.id() == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Number of writes so far; changes whenever the contents are published.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// One registry per category name, owned by whoever triggers passes.
#[derive(Debug, Default)]
pub struct Registries {
    by_category: BTreeMap<String, Registry>,
}

impl Registries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry for `category`, created empty on first use.
    pub fn entry(&mut self, category: &str) -> &Registry {
        self.by_category.entry(category.to_string()).or_default()
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&Registry> {
        self.by_category.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Registry)> {
        self.by_category.iter().map(|(name, reg)| (name.as_str(), reg))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_category.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}
