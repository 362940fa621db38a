//! E2E Scenario: layered reward pools
//!
//! A "rewards" category with namespaces [core, expansion, local], where local
//! is excluded by configuration:
//! - both layers merge into one pool
//! - a malformed layer is skipped with one diagnostic
//! - first-layer seeding ignores eligibility
//! - priority order decides merge order
//! - one bad file does not affect the others

use bountiful::config::ResolutionConfig;
use bountiful::core::{ResolvedValue, ResourceCategory, ValueKind};
use bountiful::diagnostic::{CollectingSink, DiagnosticKind};
use bountiful::engine::MergeEngine;
use bountiful::registry::Registry;
use bountiful::source::DirectorySource;

use super::common::{ContentRoot, pool_json, pool_json_eligible};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn rewards() -> ResourceCategory {
    ResourceCategory::new("rewards", "bounties/pools", "json", ValueKind::Pool)
}

fn engine(priority: &[&str]) -> MergeEngine {
    MergeEngine::new(ResolutionConfig {
        namespace_priority: priority.iter().map(ToString::to_string).collect(),
        excluded_namespaces: vec!["local".to_string()],
        parallel: true,
    })
}

fn entry_ids(value: &ResolvedValue) -> Vec<String> {
    value
        .as_pool()
        .expect("pool value")
        .content
        .iter()
        .map(|e| e.content.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn layers_merge_into_one_pool() {
    let root = ContentRoot::new();
    root.pool("core", "daily.json", &pool_json("daily", &[("A", 1)]));
    root.pool("expansion", "daily.json", &pool_json("daily", &[("B", 2)]));
    root.pool("local", "daily.json", &pool_json("daily", &[("L", 3)]));

    let registry = Registry::new();
    let sink = CollectingSink::new();
    let report = engine(&["core", "expansion", "local"])
        .resolve(&rewards(), &DirectorySource::new(root.path()), &registry, Some(&sink))
        .unwrap();

    assert!(sink.is_empty(), "unexpected diagnostics: {:?}", sink.diagnostics());
    assert_eq!(report.resolved, 1);

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id(), "daily");
    assert_eq!(entry_ids(&snapshot[0]), vec!["A", "B"]);
}

#[test]
fn malformed_layer_is_skipped() {
    let root = ContentRoot::new();
    root.pool("core", "daily.json", &pool_json("daily", &[("A", 1)]));
    root.pool("expansion", "daily.json", "{ \"id\": \"daily\", ");

    let registry = Registry::new();
    let sink = CollectingSink::new();
    let report = engine(&["core", "expansion", "local"])
        .resolve(&rewards(), &DirectorySource::new(root.path()), &registry, Some(&sink))
        .unwrap();

    assert_eq!(report.skipped_layers, 1);
    assert_eq!(entry_ids(&registry.snapshot()[0]), vec!["A"]);

    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::Decode);
    assert_eq!(diagnostics[0].namespace.as_deref(), Some("expansion"));
    assert_eq!(diagnostics[0].file_name.as_deref(), Some("daily.json"));
    assert!(diagnostics[0].to_string().contains("expansion:daily.json"));
}

#[test]
fn sole_ineligible_layer_still_seeds() {
    let root = ContentRoot::new();
    let body = pool_json_eligible("weekly", &[("A", 1)], false);
    root.pool("expansion", "weekly.json", &body);

    let registry = Registry::new();
    engine(&["core", "expansion"])
        .resolve(&rewards(), &DirectorySource::new(root.path()), &registry, None)
        .unwrap();

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.len(), 1);
    let pool = snapshot[0].as_pool().unwrap();
    assert!(!pool.load_eligible);
    assert_eq!(entry_ids(&snapshot[0]), vec!["A"]);
}

#[test]
fn swapping_priority_swaps_merge_order() {
    let root = ContentRoot::new();
    root.pool("core", "daily.json", &pool_json("daily", &[("A", 1)]));
    root.pool("expansion", "daily.json", &pool_json("daily", &[("B", 2)]));
    let source = DirectorySource::new(root.path());

    let forward = Registry::new();
    engine(&["core", "expansion"])
        .resolve(&rewards(), &source, &forward, None)
        .unwrap();
    let backward = Registry::new();
    engine(&["expansion", "core"])
        .resolve(&rewards(), &source, &backward, None)
        .unwrap();

    assert_eq!(entry_ids(&forward.snapshot()[0]), vec!["A", "B"]);
    assert_eq!(entry_ids(&backward.snapshot()[0]), vec!["B", "A"]);
}

#[test]
fn bad_file_does_not_affect_siblings() {
    let root = ContentRoot::new();
    root.pool("core", "daily.json", &pool_json("daily", &[("A", 1)]));
    root.pool("core", "weekly.json", "not json at all");
    root.pool("expansion", "weekly.json", &pool_json("weekly", &[("W", 5)]));
    root.pool("expansion", "monthly.json", &pool_json("monthly", &[("M", 5)]));

    let registry = Registry::new();
    let report = engine(&["core", "expansion"])
        .resolve(&rewards(), &DirectorySource::new(root.path()), &registry, None)
        .unwrap();

    assert_eq!(report.resolved, 3);
    assert_eq!(report.skipped_layers, 1);
    let ids: Vec<String> = registry.snapshot().iter().map(|v| v.id().to_string()).collect();
    assert_eq!(ids, vec!["daily", "monthly", "weekly"]);
}

#[test]
fn invalid_entries_are_dropped_individually() {
    let root = ContentRoot::new();
    root.pool(
        "core",
        "daily.json",
        &pool_json("daily", &[("A", 1), ("B", 0), ("C", 3)]),
    );
    root.pool("core", "empty.json", &pool_json("empty", &[("Z", 0)]));

    let registry = Registry::new();
    let sink = CollectingSink::new();
    let report = engine(&["core"])
        .resolve(&rewards(), &DirectorySource::new(root.path()), &registry, Some(&sink))
        .unwrap();

    assert_eq!(report.rejected_entries, 2);
    let snapshot = registry.snapshot();
    assert_eq!(entry_ids(&snapshot[0]), vec!["A", "C"]);
    assert_eq!(snapshot[1].id(), "empty");
    assert!(snapshot[1].as_pool().unwrap().is_empty());

    let rejected: Vec<_> = sink
        .diagnostics()
        .into_iter()
        .filter(|d| d.kind == DiagnosticKind::Validation)
        .collect();
    assert_eq!(rejected.len(), 2);
    assert_eq!(rejected[0].pool.as_deref(), Some("daily"));
    assert_eq!(rejected[0].rule_id.as_deref(), Some("entry-weight-positive"));
}
