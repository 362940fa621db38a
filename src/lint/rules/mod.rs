//! Built-in entry rules.
//!
//! - **Structural rules** (`structural`): the entry is self-consistent
//! - **Reference rules** (`reference`): the entry's target exists
//!
//! # Usage
//!
//! ```
//! use bountiful::lint::rules::all_rules;
//! use bountiful::lint::{ValidationConfig, Validator};
//!
//! let mut validator = Validator::new(ValidationConfig::default());
//! for rule in all_rules() {
//!     validator.register(rule);
//! }
//! assert_eq!(validator.rules().len(), 4);
//! ```

pub mod reference;
pub mod structural;

use crate::lint::rule::BoxedRule;

pub use reference::TargetResolvableRule;
pub use structural::{AmountRangeRule, ContentRequiredRule, PositiveWeightRule};

pub fn structural_rules() -> Vec<BoxedRule> {
    structural::structural_rules()
}

pub fn reference_rules() -> Vec<BoxedRule> {
    reference::reference_rules()
}

/// Every built-in rule, structural first.
pub fn all_rules() -> Vec<BoxedRule> {
    let mut rules = structural_rules();
    rules.extend(reference_rules());
    rules
}
