//! Core value shapes and the layered merge contract

pub mod category;
pub mod decree;
pub mod pool;
pub mod value;

pub use category::{ResourceCategory, ValueKind};
pub use decree::Decree;
pub use pool::{AmountRange, Entry, EntryKind, Pool, Rarity};
pub use value::{Merge, ResolvedValue};

/// Append `incoming` to `existing`, skipping values already present.
///
/// Earlier values keep their position.
pub(crate) fn merge_unique(existing: &mut Vec<String>, incoming: Vec<String>) {
    for value in incoming {
        if !existing.contains(&value) {
            existing.push(value);
        }
    }
}
