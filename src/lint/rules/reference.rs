//! Reference entry rules.
//!
//! These check that an entry points at something that exists.

use crate::core::Entry;
use crate::lint::config::ValidationContext;
use crate::lint::rule::{BoxedRule, EntryRule, RuleCategory};

/// Rule that checks an entry's target is in the catalog.
pub struct TargetResolvableRule;

impl EntryRule for TargetResolvableRule {
    fn id(&self) -> &str {
        "entry-target-resolvable"
    }

    fn name(&self) -> &str {
        "Target Resolvable"
    }

    fn description(&self) -> &str {
        "The entry's content id must be a known target of its kind"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Reference
    }

    fn check(&self, entry: &Entry, ctx: &ValidationContext<'_>) -> Result<(), String> {
        // Nothing to resolve against
        let Some(catalog) = ctx.catalog else {
            return Ok(());
        };

        if catalog.resolves(entry.kind, &entry.content) {
            Ok(())
        } else {
            Err(format!(
                "{} '{}' in pool '{}' is not a valid {}",
                entry.kind, entry.content, ctx.pool_id, entry.kind
            ))
        }
    }
}

pub fn reference_rules() -> Vec<BoxedRule> {
    vec![Box::new(TargetResolvableRule)]
}
