//! bountiful resolve - Run a resolution pass and print the registries

use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{
    HumanLayout, OutputMode, emit_human, emit_json, robot_ok, robot_partial,
};
use crate::core::{ResolvedValue, ResourceCategory};
use crate::diagnostic::CollectingSink;
use crate::engine::{MergeEngine, ResolutionReport};
use crate::error::{BountifulError, Result};
use crate::lint::Validator;
use crate::registry::Registries;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Only resolve these categories (repeatable)
    #[arg(long, value_name = "NAME")]
    pub category: Vec<String>,

    /// Namespace priority, highest first (repeatable; replaces the configured order)
    #[arg(long, value_name = "NS")]
    pub namespace: Vec<String>,

    /// Leave a namespace out of the pass (repeatable)
    #[arg(long, value_name = "NS")]
    pub exclude: Vec<String>,

    /// TOML file listing resolvable item, entity and command ids
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Fail if any layer was skipped or any entry was dropped
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct CategoryOutput<'a> {
    #[serde(flatten)]
    report: &'a ResolutionReport,
    values: Vec<ResolvedValue>,
}

pub fn run(ctx: &AppContext, args: &ResolveArgs) -> Result<()> {
    let categories = select_categories(ctx, &args.category)?;

    let mut resolution = ctx.config.resolution.clone();
    if !args.namespace.is_empty() {
        resolution.namespace_priority.clone_from(&args.namespace);
    }
    for namespace in &args.exclude {
        if !resolution.is_excluded(namespace) {
            resolution.excluded_namespaces.push(namespace.clone());
        }
    }

    let mut validator = Validator::builtin(ctx.config.validation.clone());
    if let Some(catalog) = ctx.load_catalog(args.catalog.as_deref())? {
        validator = validator.with_catalog(catalog);
    }

    let engine = MergeEngine::new(resolution).with_validator(validator);
    let source = ctx.source();
    let mut registries = Registries::new();
    let sink = CollectingSink::new();

    let reports = engine.reload(&categories, &source, &mut registries, Some(&sink))?;

    let outputs: Vec<CategoryOutput<'_>> = reports
        .iter()
        .map(|report| CategoryOutput {
            report,
            values: registries
                .get(&report.category)
                .map(|registry| registry.snapshot().to_vec())
                .unwrap_or_default(),
        })
        .collect();

    let diagnostics = sink.take();
    match ctx.output_mode {
        OutputMode::Robot => {
            let resolved = reports.iter().map(|r| r.resolved).sum();
            if diagnostics.is_empty() {
                emit_json(&robot_ok(&outputs))?;
            } else {
                // Resolved values against skipped layers plus dropped entries
                let failed = reports
                    .iter()
                    .map(|r| r.skipped_layers + r.rejected_entries)
                    .sum();
                let warnings = diagnostics.iter().map(ToString::to_string).collect();
                emit_json(&robot_partial(&outputs, resolved, failed, warnings))?;
            }
        }
        OutputMode::Human => emit_human(human_layout(&outputs, ctx.verbosity)),
    }

    if args.strict && !diagnostics.is_empty() {
        return Err(BountifulError::StrictFailure(diagnostics.len()));
    }
    Ok(())
}

fn select_categories(ctx: &AppContext, names: &[String]) -> Result<Vec<ResourceCategory>> {
    if names.is_empty() {
        return Ok(ctx.config.categories.clone());
    }
    names
        .iter()
        .map(|name| {
            ctx.config
                .category(name)
                .cloned()
                .ok_or_else(|| BountifulError::NotFound(format!("unknown category '{name}'")))
        })
        .collect()
}

fn human_layout(outputs: &[CategoryOutput<'_>], verbosity: u8) -> HumanLayout {
    let mut layout = HumanLayout::new();
    for output in outputs {
        let report = output.report;
        layout.section(&report.category);
        layout.kv("resolved", &report.resolved.to_string());
        if report.skipped_layers > 0 {
            layout.kv("skipped layers", &report.skipped_layers.to_string());
        }
        if report.ineligible_layers > 0 {
            layout.kv("ineligible layers", &report.ineligible_layers.to_string());
        }
        if report.rejected_entries > 0 {
            layout.kv("rejected entries", &report.rejected_entries.to_string());
        }

        for value in &output.values {
            match value {
                ResolvedValue::Pool(pool) => {
                    layout.bullet(&format!(
                        "{} {}",
                        style(&pool.id).cyan(),
                        style(format!("({} entries)", pool.len())).dim()
                    ));
                    if verbosity > 0 {
                        for entry in &pool.content {
                            layout.bullet(&format!("  {entry}"));
                        }
                    }
                }
                ResolvedValue::Decree(decree) => {
                    let title = decree.title.as_deref().unwrap_or("untitled");
                    layout.bullet(&format!(
                        "{} {} {}",
                        style(&decree.id).cyan(),
                        title,
                        style(format!(
                            "(objectives: {}, rewards: {})",
                            decree.objective_pools.join(", "),
                            decree.reward_pools.join(", ")
                        ))
                        .dim()
                    ));
                }
            }
        }

        for diagnostic in &report.diagnostics {
            layout.warning(&diagnostic.to_string());
        }
        layout.blank();
    }
    layout
}
