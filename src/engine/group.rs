//! Folding the layers of one file name into a single value.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::core::{ResolvedValue, ResourceCategory};
use crate::decode::Decoder;
use crate::diagnostic::{Diagnostic, DiagnosticKind, Severity};
use crate::error::KindMismatch;
use crate::source::RawContribution;

/// All layers contributed for one file name.
#[derive(Debug, Clone)]
pub struct FileGroup {
    pub file_name: String,
    layers: Vec<RawContribution>,
}

impl FileGroup {
    /// This namespace's layer. If a namespace contributed the same base name
    /// twice, the first one enumerated is used.
    #[must_use]
    pub fn layer(&self, namespace: &str) -> Option<&RawContribution> {
        self.layers.iter().find(|raw| raw.namespace == namespace)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Partition contributions by file name, in file-name order.
#[must_use]
pub fn group_by_file(contributions: Vec<RawContribution>) -> Vec<FileGroup> {
    let mut groups: BTreeMap<String, Vec<RawContribution>> = BTreeMap::new();
    for raw in contributions {
        groups.entry(raw.file_name.clone()).or_default().push(raw);
    }
    groups
        .into_iter()
        .map(|(file_name, layers)| FileGroup { file_name, layers })
        .collect()
}

/// What folding one group produced.
#[derive(Debug, Clone, Default)]
pub struct GroupOutcome {
    pub file_name: String,
    /// `None` when no layer decoded
    pub value: Option<ResolvedValue>,
    /// Layers that failed to decode or had the wrong shape
    pub skipped: usize,
    /// Layers that decoded but were not allowed to merge
    pub ineligible: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Walk `active` in order and fold this group's layers.
///
/// The first layer that decodes seeds the value whatever its eligibility;
/// later layers merge only when eligible for the active namespace set.
pub fn fold_group(
    group: &FileGroup,
    category: &ResourceCategory,
    active: &[String],
    decoder: &dyn Decoder,
) -> GroupOutcome {
    let mut outcome = GroupOutcome {
        file_name: group.file_name.clone(),
        ..GroupOutcome::default()
    };

    for namespace in active {
        let Some(raw) = group.layer(namespace) else {
            continue;
        };

        let candidate = match decoder.decode(&raw.content, category) {
            Ok(candidate) => candidate,
            Err(err) => {
                outcome.skipped += 1;
                outcome.diagnostics.push(
                    Diagnostic::skipped_layer(namespace, &group.file_name, err)
                        .with_category(&category.name),
                );
                continue;
            }
        };

        let Some(accumulated) = outcome.value.take() else {
            trace!(namespace = %namespace, file = %group.file_name, "seeding value");
            outcome.value = Some(candidate);
            continue;
        };

        if !candidate.is_load_eligible(active) {
            debug!(namespace = %namespace, file = %group.file_name, "layer not eligible, skipping");
            outcome.ineligible += 1;
            outcome.value = Some(accumulated);
            continue;
        }

        if accumulated.kind() != candidate.kind() {
            let mismatch = KindMismatch {
                accumulated: accumulated.kind(),
                incoming: candidate.kind(),
            };
            outcome.skipped += 1;
            outcome.diagnostics.push(
                Diagnostic::new(DiagnosticKind::Merge, Severity::Warning, mismatch.to_string())
                    .with_category(&category.name)
                    .with_namespace(namespace)
                    .with_file(&group.file_name),
            );
            outcome.value = Some(accumulated);
            continue;
        }

        trace!(namespace = %namespace, file = %group.file_name, "merging layer");
        // Kinds agree, so this cannot fail
        outcome.value = accumulated.merge(candidate).ok();
    }

    outcome
}
