//! Pool entry validation.
//!
//! A merged pool is checked entry by entry before it reaches the registry:
//!
//! - `EntryRule` trait for implementing a single check
//! - `Validator` for running the enabled rules over a pool
//! - `ValidationConfig` / `TargetCatalog` for configuring which rules run and
//!   which targets count as resolvable
//!
//! An entry that fails a rule is dropped and reported; the rest of the pool is
//! kept, so a pool whose every entry fails still registers (empty).
//!
//! # Example
//!
//! ```
//! use bountiful::core::{Entry, Pool};
//! use bountiful::lint::{ValidationConfig, Validator};
//!
//! let validator = Validator::builtin(ValidationConfig::default());
//! let pool = Pool::new("daily")
//!     .with_entry(Entry::item("minecraft:bread"))
//!     .with_entry(Entry::item("minecraft:cake").with_weight(0));
//!
//! let kept = validator.filter_entries(&pool, None);
//! assert_eq!(kept.len(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod rule;
pub mod rules;

pub use config::{TargetCatalog, ValidationConfig, ValidationContext};
pub use engine::{PoolValidation, Rejection, RuleInfo, Validator};
pub use rule::{BoxedRule, EntryRule, RuleCategory};

pub use rules::{all_rules, reference_rules, structural_rules};
