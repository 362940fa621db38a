//! The resolution pass.
//!
//! For one category: enumerate raw layers, group them by file name, fold each
//! group across the active namespaces, filter pool entries, then publish the
//! results into the category's registry in one step.
//!
//! ```
//! use bountiful::config::ResolutionConfig;
//! use bountiful::core::ResourceCategory;
//! use bountiful::engine::MergeEngine;
//! use bountiful::registry::Registry;
//! use bountiful::source::MemorySource;
//!
//! let source = MemorySource::new(["core", "expansion"])
//!     .with("pools", "core", "daily.json", r#"{"id": "daily", "content": [{"type": "item", "content": "a"}]}"#)
//!     .with("pools", "expansion", "daily.json", r#"{"id": "daily", "content": [{"type": "item", "content": "b"}]}"#);
//!
//! let engine = MergeEngine::new(ResolutionConfig::default());
//! let registry = Registry::new();
//! let report = engine
//!     .resolve(&ResourceCategory::pools(), &source, &registry, None)
//!     .unwrap();
//!
//! assert_eq!(report.resolved, 1);
//! assert_eq!(registry.snapshot()[0].as_pool().unwrap().len(), 2);
//! ```

pub mod group;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::config::ResolutionConfig;
use crate::core::{ResolvedValue, ResourceCategory};
use crate::decode::{Decoder, SerdeDecoder};
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::lint::{ValidationConfig, Validator};
use crate::registry::Registries;
use crate::registry::Registry;
use crate::source::ContentSource;

pub use group::{FileGroup, GroupOutcome, fold_group, group_by_file};

/// Summary of one category's pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolutionReport {
    pub category: String,
    /// Values published to the registry
    pub resolved: usize,
    pub skipped_layers: usize,
    pub ineligible_layers: usize,
    pub rejected_entries: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct MergeEngine {
    config: ResolutionConfig,
    decoder: Box<dyn Decoder>,
    validator: Validator,
}

impl MergeEngine {
    /// Engine with the serde decoder and every built-in entry rule.
    #[must_use]
    pub fn new(config: ResolutionConfig) -> Self {
        Self {
            config,
            decoder: Box::new(SerdeDecoder),
            validator: Validator::builtin(ValidationConfig::default()),
        }
    }

    #[must_use]
    pub fn with_decoder(mut self, decoder: Box<dyn Decoder>) -> Self {
        self.decoder = decoder;
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    #[must_use]
    pub const fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Run one pass for `category` and publish the result into `registry`.
    ///
    /// Only a failure to enumerate the source is an error. Malformed layers
    /// and invalid entries end up in the report and in `sink`.
    pub fn resolve(
        &self,
        category: &ResourceCategory,
        source: &dyn ContentSource,
        registry: &Registry,
        sink: Option<&dyn DiagnosticSink>,
    ) -> Result<ResolutionReport> {
        let span = info_span!("resolve", category = %category.name);
        let _enter = span.enter();

        let active = self.config.active_namespaces(&source.namespaces());
        let groups = group_by_file(source.contributions(category)?);
        debug!(
            namespaces = ?active,
            files = groups.len(),
            parallel = self.config.parallel,
            "folding file groups"
        );

        let fold = |group: &FileGroup| fold_group(group, category, &active, self.decoder.as_ref());
        let outcomes: Vec<GroupOutcome> = if self.config.parallel {
            groups.par_iter().map(fold).collect()
        } else {
            groups.iter().map(fold).collect()
        };

        let mut report = ResolutionReport {
            category: category.name.clone(),
            ..ResolutionReport::default()
        };
        let mut values = Vec::with_capacity(outcomes.len());

        for outcome in outcomes {
            report.skipped_layers += outcome.skipped;
            report.ineligible_layers += outcome.ineligible;
            report.diagnostics.extend(outcome.diagnostics);

            let Some(value) = outcome.value else {
                debug!(file = %outcome.file_name, "no layer decoded");
                continue;
            };
            values.push(self.validate(value, category, &mut report));
        }

        for diagnostic in &report.diagnostics {
            warn!(
                category = %category.name,
                namespace = diagnostic.namespace.as_deref().unwrap_or("-"),
                file = diagnostic.file_name.as_deref().unwrap_or("-"),
                "{diagnostic}"
            );
            if let Some(sink) = sink {
                sink.report(diagnostic);
            }
        }

        report.resolved = values.len();
        registry.replace(values);

        info!(
            resolved = report.resolved,
            skipped = report.skipped_layers,
            rejected = report.rejected_entries,
            "category resolved"
        );
        Ok(report)
    }

    fn validate(
        &self,
        value: ResolvedValue,
        category: &ResourceCategory,
        report: &mut ResolutionReport,
    ) -> ResolvedValue {
        match value {
            ResolvedValue::Pool(mut pool) => {
                let validation = self.validator.validate_pool(&pool);
                report.rejected_entries += validation.rejected_count();
                report.diagnostics.extend(
                    validation
                        .rejected
                        .iter()
                        .map(|r| r.to_diagnostic(&pool.id).with_category(&category.name)),
                );
                pool.content = validation.accepted;
                ResolvedValue::Pool(pool)
            }
            other => other,
        }
    }

    /// Resolve every category in turn, one report each.
    pub fn reload(
        &self,
        categories: &[ResourceCategory],
        source: &dyn ContentSource,
        registries: &mut Registries,
        sink: Option<&dyn DiagnosticSink>,
    ) -> Result<Vec<ResolutionReport>> {
        categories
            .iter()
            .map(|category| {
                let registry = registries.entry(&category.name);
                self.resolve(category, source, registry, sink)
            })
            .collect()
    }
}
