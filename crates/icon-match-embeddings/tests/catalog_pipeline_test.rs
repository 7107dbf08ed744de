//! Full pipeline on files: word vectors + associations CSV -> catalog JSON ->
//! passage matching with arbitration.

use std::fs;
use std::path::Path;

use icon_match_core::config::RankingConfig;
use icon_match_core::{Embedder, PassageMatcher};
use icon_match_embeddings::{
    build_catalog, find_missing_icons, load_catalog, read_associations, read_icon_list,
    save_catalog, MeanPoolEmbedder, WordVectorTable,
};

const VECTORS: &str = "11 4
gear 1 0 0 0
machine 0.9 0.1 0 0
settings 0.8 0 0 0.2
idea 0 1 0 0
innovation 0.1 0.9 0 0
rocket 0 0 1 0
launch 0 0.1 0.9 0
space 0 0 1 0
money 0 0 0 1
budget 0 0 0.1 0.9
cost 0 0 0 1
";

const ASSOCIATIONS: &str = "gear,machine,settings
lightbulb,idea,innovation
rocket,launch,space
coins,money,budget,cost
";

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("vectors.vec"), VECTORS).unwrap();
    fs::write(dir.join("associations.csv"), ASSOCIATIONS).unwrap();
}

#[test]
fn test_build_save_load_and_match() {
    println!("\n=== catalog build -> save -> load -> match ===");
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let table = WordVectorTable::load(&dir.path().join("vectors.vec"), None).unwrap();
    let embedder = MeanPoolEmbedder::new(table);
    let records = read_associations(&dir.path().join("associations.csv")).unwrap();
    let built = build_catalog(&records, &embedder).unwrap();

    let catalog_path = dir.path().join("catalog.json");
    save_catalog(&built, Some(embedder.model_id()), &catalog_path).unwrap();
    let catalog = load_catalog(&catalog_path).unwrap();
    assert_eq!(catalog.len(), 4);
    println!("[VERIFIED] catalog of {} icons round-tripped", catalog.len());

    let matcher = PassageMatcher::new(&embedder, &catalog, RankingConfig::default()).unwrap();
    let report = matcher
        .match_passages(&[
            "The machine settings need attention.",
            "An innovation is born from an idea.",
            "Launch the probe into space!",
            "Budget and cost overview",
            "The and of",
        ])
        .unwrap();

    let assigned: Vec<Option<&str>> = report
        .passages
        .iter()
        .map(|p| p.assigned.as_ref().map(|c| c.label.as_str()))
        .collect();
    for passage in &report.passages {
        println!("  {} -> {:?}", passage.id, passage.assigned);
    }

    assert_eq!(
        assigned,
        vec![Some("gear"), Some("lightbulb"), Some("rocket"), Some("coins"), None]
    );
    assert!(report.passages[4].words.is_empty());
    assert!(report.passages[4].candidates.iter().all(|c| c.score == 0.0));
    println!("[VERIFIED] four passages matched to distinct icons, stop-word passage unassigned");
}

#[test]
fn test_competing_passages_get_distinct_icons() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let embedder = MeanPoolEmbedder::new(
        WordVectorTable::load(&dir.path().join("vectors.vec"), None).unwrap(),
    );
    let records = read_associations(&dir.path().join("associations.csv")).unwrap();
    let catalog = build_catalog(&records, &embedder).unwrap();

    let passages = ["machine", "gear machine", "machine settings"];

    let unique = PassageMatcher::new(&embedder, &catalog, RankingConfig::default())
        .unwrap()
        .match_passages(&passages)
        .unwrap();
    let mut labels: Vec<&str> = unique
        .passages
        .iter()
        .filter_map(|p| p.assigned.as_ref().map(|c| c.label.as_str()))
        .collect();
    assert_eq!(labels.len(), 3);
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 3, "arbitration must hand out distinct icons");

    let greedy = PassageMatcher::new(
        &embedder,
        &catalog,
        RankingConfig {
            top_n: 5,
            unique: false,
        },
    )
    .unwrap()
    .match_passages(&passages)
    .unwrap();
    assert!(greedy
        .passages
        .iter()
        .all(|p| p.assigned.as_ref().map(|c| c.label.as_str()) == Some("gear")));
}

#[test]
fn test_missing_icon_audit_against_fixture() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let records = read_associations(&dir.path().join("associations.csv")).unwrap();
    let icons = read_icon_list("gear\nanchor\nrocket\nbolt\n".as_bytes()).unwrap();

    assert_eq!(find_missing_icons(&icons, &records), vec!["anchor", "bolt"]);
}
