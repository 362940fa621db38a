//! Validation engine for running entry rules against resolved pools.

use serde::Serialize;
use tracing::debug;

use crate::core::{Entry, Pool};
use crate::diagnostic::{Diagnostic, DiagnosticSink};

use super::config::{TargetCatalog, ValidationConfig, ValidationContext};
use super::rule::{BoxedRule, RuleCategory};
use super::rules::all_rules;

/// An entry dropped from a pool, with the first rule that rejected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the entry in the unfiltered pool
    pub index: usize,
    pub entry: Entry,
    pub rule_id: String,
    pub reason: String,
}

impl Rejection {
    #[must_use]
    pub fn to_diagnostic(&self, pool_id: &str) -> Diagnostic {
        Diagnostic::rejected_entry(pool_id, &self.rule_id, &self.reason)
    }
}

/// Outcome of validating every entry of one pool.
#[derive(Debug, Clone, Default)]
pub struct PoolValidation {
    /// Surviving entries, in their original relative order
    pub accepted: Vec<Entry>,
    pub rejected: Vec<Rejection>,
}

impl PoolValidation {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.rejected.is_empty()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Runs registered rules over pool entries and drops the ones that fail.
pub struct Validator {
    rules: Vec<BoxedRule>,
    config: ValidationConfig,
    catalog: Option<TargetCatalog>,
}

impl Validator {
    /// Create a validator with no rules registered
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
            catalog: None,
        }
    }

    /// Create a validator with every built-in rule registered
    #[must_use]
    pub fn builtin(config: ValidationConfig) -> Self {
        let mut validator = Self::new(config);
        for rule in all_rules() {
            validator.register(rule);
        }
        validator
    }

    pub fn register(&mut self, rule: BoxedRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn with_rule(mut self, rule: BoxedRule) -> Self {
        self.register(rule);
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: TargetCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> Option<&TargetCatalog> {
        self.catalog.as_ref()
    }

    /// Check one entry. Returns the id and reason of the first enabled rule
    /// that rejects it.
    #[must_use]
    pub fn check_entry(&self, entry: &Entry, pool_id: &str) -> Option<(String, String)> {
        let mut ctx = ValidationContext::new(pool_id, &self.config);
        if let Some(catalog) = &self.catalog {
            ctx = ctx.with_catalog(catalog);
        }
        self.first_failure(entry, &ctx)
    }

    fn first_failure(&self, entry: &Entry, ctx: &ValidationContext<'_>) -> Option<(String, String)> {
        self.rules
            .iter()
            .filter(|rule| !self.config.is_rule_disabled(rule.id()))
            .find_map(|rule| {
                rule.check(entry, ctx)
                    .err()
                    .map(|reason| (rule.id().to_string(), reason))
            })
    }

    /// Partition a pool's entries into accepted and rejected.
    #[must_use]
    pub fn validate_pool(&self, pool: &Pool) -> PoolValidation {
        let mut ctx = ValidationContext::new(&pool.id, &self.config);
        if let Some(catalog) = &self.catalog {
            ctx = ctx.with_catalog(catalog);
        }

        let mut result = PoolValidation::default();
        for (index, entry) in pool.content.iter().enumerate() {
            match self.first_failure(entry, &ctx) {
                None => result.accepted.push(entry.clone()),
                Some((rule_id, reason)) => {
                    debug!(pool = %pool.id, rule = %rule_id, entry = %entry, "entry rejected");
                    result.rejected.push(Rejection {
                        index,
                        entry: entry.clone(),
                        rule_id,
                        reason,
                    });
                }
            }
        }
        result
    }

    /// Return the entries of `pool` that pass every enabled rule, reporting
    /// each dropped entry to `sink` exactly once.
    ///
    /// A pool whose entries are all rejected yields an empty list; the pool
    /// itself is still kept by the caller.
    pub fn filter_entries(&self, pool: &Pool, sink: Option<&dyn DiagnosticSink>) -> Vec<Entry> {
        let validation = self.validate_pool(pool);
        if let Some(sink) = sink {
            for rejection in &validation.rejected {
                sink.report(&rejection.to_diagnostic(&pool.id));
            }
        }
        validation.accepted
    }

    /// List all registered rules
    #[must_use]
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id().to_string(),
                name: r.name().to_string(),
                description: r.description().to_string(),
                category: r.category(),
                disabled: self.config.is_rule_disabled(r.id()),
            })
            .collect()
    }
}

/// Information about a registered rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: RuleCategory,
    /// Whether the rule is disabled
    pub disabled: bool,
}
