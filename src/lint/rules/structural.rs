//! Structural entry rules.
//!
//! These reject entries that are configured in a self-contradictory way.

use crate::impl_rule;
use crate::lint::rule::{BoxedRule, RuleCategory};

impl_rule!(
    ContentRequiredRule,
    id: "entry-content-required",
    name: "Content Required",
    description: "Entries must name the target they refer to",
    category: RuleCategory::Structure,
    check: |entry, _ctx| {
        if entry.content.trim().is_empty() {
            Err(format!("{} entry has no content id", entry.kind))
        } else {
            Ok(())
        }
    }
);

impl_rule!(
    PositiveWeightRule,
    id: "entry-weight-positive",
    name: "Positive Weight",
    description: "Entries with zero weight can never be picked",
    category: RuleCategory::Structure,
    check: |entry, _ctx| {
        if entry.weight == 0 {
            Err(format!("entry '{}' has weight 0 and can never be picked", entry.content))
        } else {
            Ok(())
        }
    }
);

impl_rule!(
    AmountRangeRule,
    id: "entry-amount-range",
    name: "Amount Range",
    description: "Amount ranges must be non-empty and start at 1 or more",
    category: RuleCategory::Structure,
    check: |entry, _ctx| {
        let amount = entry.amount;
        if amount.min == 0 {
            Err(format!("entry '{}' has a minimum amount of 0", entry.content))
        } else if amount.min > amount.max {
            Err(format!(
                "entry '{}' has min amount {} greater than max amount {}",
                entry.content, amount.min, amount.max
            ))
        } else {
            Ok(())
        }
    }
);

pub fn structural_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(ContentRequiredRule),
        Box::new(PositiveWeightRule),
        Box::new(AmountRangeRule),
    ]
}
