//! E2E Scenario: layered decrees
//!
//! Decrees are flat records, so they skip entry validation and merge field by
//! field: later titles win, pool lists concatenate without duplicates.

use bountiful::config::ResolutionConfig;
use bountiful::core::ResourceCategory;
use bountiful::diagnostic::CollectingSink;
use bountiful::engine::MergeEngine;
use bountiful::registry::Registry;
use bountiful::source::DirectorySource;

use super::common::{ContentRoot, pool_json};

fn engine() -> MergeEngine {
    MergeEngine::new(ResolutionConfig {
        namespace_priority: vec!["core".to_string(), "expansion".to_string()],
        ..ResolutionConfig::default()
    })
}

#[test]
fn decree_fields_merge() {
    let root = ContentRoot::new();
    root.decree(
        "core",
        "hunter.json",
        r#"{"id": "hunter", "title": "Hunter", "objective_pools": ["mobs"], "reward_pools": ["coins"]}"#,
    );
    root.decree(
        "expansion",
        "hunter.json",
        r#"{"id": "hunter", "title": "Monster Hunter", "objective_pools": ["mobs", "bosses"]}"#,
    );

    let registry = Registry::new();
    engine()
        .resolve(&ResourceCategory::decrees(), &DirectorySource::new(root.path()), &registry, None)
        .unwrap();

    let snapshot = registry.snapshot();
    let decree = snapshot[0].as_decree().expect("decree value");
    assert_eq!(decree.title.as_deref(), Some("Monster Hunter"));
    assert_eq!(decree.objective_pools, vec!["mobs", "bosses"]);
    assert_eq!(decree.reward_pools, vec!["coins"]);
}

#[test]
fn decree_requiring_missing_namespace_does_not_merge() {
    let root = ContentRoot::new();
    root.decree("core", "hunter.json", r#"{"id": "hunter", "title": "Hunter"}"#);
    root.decree(
        "expansion",
        "hunter.json",
        r#"{"id": "hunter", "title": "Wizard Hunter", "requires": ["wizardry"]}"#,
    );

    let registry = Registry::new();
    let report = engine()
        .resolve(&ResourceCategory::decrees(), &DirectorySource::new(root.path()), &registry, None)
        .unwrap();

    assert_eq!(report.ineligible_layers, 1);
    let snapshot = registry.snapshot();
    assert_eq!(snapshot[0].as_decree().unwrap().title.as_deref(), Some("Hunter"));
}

#[test]
fn categories_do_not_see_each_other() {
    let root = ContentRoot::new();
    root.decree("core", "hunter.json", r#"{"id": "hunter"}"#);
    root.pool("core", "hunter.json", &pool_json("hunter", &[("A", 1)]));

    let source = DirectorySource::new(root.path());
    let pools = Registry::new();
    let decrees = Registry::new();
    let sink = CollectingSink::new();
    engine()
        .resolve(&ResourceCategory::pools(), &source, &pools, Some(&sink))
        .unwrap();
    engine()
        .resolve(&ResourceCategory::decrees(), &source, &decrees, Some(&sink))
        .unwrap();

    assert!(pools.snapshot()[0].as_pool().is_some());
    assert!(decrees.snapshot()[0].as_decree().is_some());
    assert!(sink.is_empty());
}
