//! Property tests for the resolution pass.

use bountiful::config::ResolutionConfig;
use bountiful::core::{Entry, Pool, ResolvedValue, ResourceCategory};
use bountiful::engine::{MergeEngine, ResolutionReport};
use bountiful::lint::{ValidationConfig, Validator};
use bountiful::registry::Registry;
use bountiful::source::MemorySource;
use proptest::prelude::*;

const NAMESPACES: [&str; 3] = ["core", "expansion", "local"];
const FILES: [&str; 3] = ["daily.json", "weekly.json", "monthly.json"];

/// One namespace's layer for one file.
#[derive(Debug, Clone)]
enum Layer {
    Absent,
    Malformed,
    Pool { eligible: bool, entries: Vec<(u8, u32)> },
}

fn layer() -> impl Strategy<Value = Layer> {
    prop_oneof![
        2 => Just(Layer::Absent),
        1 => Just(Layer::Malformed),
        5 => (any::<bool>(), prop::collection::vec((0u8..6, 0u32..4), 0..6))
            .prop_map(|(eligible, entries)| Layer::Pool { eligible, entries }),
    ]
}

/// `layers[ns][file]`
fn layout() -> impl Strategy<Value = Vec<Vec<Layer>>> {
    prop::collection::vec(prop::collection::vec(layer(), FILES.len()), NAMESPACES.len())
}

fn build_source(layers: &[Vec<Layer>]) -> MemorySource {
    let mut source = MemorySource::new(NAMESPACES);
    for (ns, files) in NAMESPACES.iter().zip(layers) {
        for (file, layer) in FILES.iter().zip(files) {
            let body = match layer {
                Layer::Absent => continue,
                Layer::Malformed => "{ \"id\": ".to_string(),
                Layer::Pool { eligible, entries } => {
                    let stem = file.trim_end_matches(".json");
                    let mut pool = Pool::new(stem).with_entries(
                        entries
                            .iter()
                            .map(|(id, weight)| Entry::item(format!("item:{id}")).with_weight(*weight)),
                    );
                    pool.load_eligible = *eligible;
                    serde_json::to_string(&pool).unwrap()
                }
            };
            source.insert("pools", *ns, *file, body);
        }
    }
    source
}

fn run(engine: &MergeEngine, source: &MemorySource) -> (Vec<ResolvedValue>, ResolutionReport) {
    let registry = Registry::new();
    let report = engine
        .resolve(&ResourceCategory::pools(), source, &registry, None)
        .unwrap();
    (registry.snapshot().to_vec(), report)
}

fn config(parallel: bool) -> ResolutionConfig {
    ResolutionConfig {
        parallel,
        ..ResolutionConfig::default()
    }
}

fn messages(report: &ResolutionReport) -> Vec<String> {
    report.diagnostics.iter().map(ToString::to_string).collect()
}

fn is_subsequence(needle: &[Entry], haystack: &[Entry]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

proptest! {
    #[test]
    fn resolving_twice_gives_the_same_result(layers in layout()) {
        let source = build_source(&layers);
        let engine = MergeEngine::new(config(true));

        let (first, first_report) = run(&engine, &source);
        let (second, second_report) = run(&engine, &source);

        prop_assert_eq!(first, second);
        prop_assert_eq!(messages(&first_report), messages(&second_report));
    }

    #[test]
    fn parallel_and_sequential_agree(layers in layout()) {
        let source = build_source(&layers);

        let (parallel, parallel_report) = run(&MergeEngine::new(config(true)), &source);
        let (sequential, sequential_report) = run(&MergeEngine::new(config(false)), &source);

        prop_assert_eq!(parallel, sequential);
        prop_assert_eq!(parallel_report.skipped_layers, sequential_report.skipped_layers);
        prop_assert_eq!(messages(&parallel_report), messages(&sequential_report));
    }

    #[test]
    fn validation_keeps_surviving_entries_in_order(layers in layout()) {
        let source = build_source(&layers);
        let unvalidated = MergeEngine::new(config(false))
            .with_validator(Validator::new(ValidationConfig::default()));

        let (raw, raw_report) = run(&unvalidated, &source);
        let (checked, report) = run(&MergeEngine::new(config(false)), &source);

        prop_assert_eq!(raw_report.rejected_entries, 0);
        prop_assert_eq!(raw.len(), checked.len());
        let mut dropped = 0;
        for (raw, checked) in raw.iter().zip(&checked) {
            let raw = raw.as_pool().unwrap();
            let checked = checked.as_pool().unwrap();
            prop_assert_eq!(&raw.id, &checked.id);
            prop_assert!(is_subsequence(&checked.content, &raw.content));
            prop_assert!(checked.content.iter().all(|e| e.weight > 0));
            dropped += raw.len() - checked.len();
        }
        prop_assert_eq!(dropped, report.rejected_entries);
    }

    #[test]
    fn every_file_with_a_decodable_layer_registers(layers in layout()) {
        let source = build_source(&layers);
        let (values, _) = run(&MergeEngine::new(config(true)), &source);

        let expected = FILES
            .iter()
            .enumerate()
            .filter(|(i, _)| layers.iter().any(|files| matches!(files[*i], Layer::Pool { .. })))
            .count();
        prop_assert_eq!(values.len(), expected);
    }
}
