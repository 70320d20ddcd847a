//! Integration tests for the full loader -> indexer -> engine pipeline,
//! exercised against both the shipped content files and ad-hoc content
//! directories.

use org_search::config::{Config, ScoringConfig};
use org_search::content::loader::ContentLoader;
use org_search::models::Service;
use org_search::search::engine::{format_response, QueryEngine};
use org_search::state::AppState;

fn shipped_engine() -> QueryEngine {
    let content_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/content");
    let tree = ContentLoader::new(content_dir).load_all();
    QueryEngine::build(&tree, ScoringConfig::default())
}

#[test]
fn test_shipped_content_indexes_every_service() {
    let engine = shipped_engine();
    assert!(engine.chunk_count() > 15);

    let services = engine.available_services();
    for service in [
        Service::Medical,
        Service::It,
        Service::Education,
        Service::Sports,
        Service::Banquets,
        Service::Graveyard,
        Service::Organization,
    ] {
        assert!(services.contains(&service), "missing {service}");
    }
}

#[test]
fn test_badminton_rate_query_ranks_sports_first() {
    let engine = shipped_engine();
    let results = engine.query("badminton rate", None, 5, 0.5);
    assert!(!results.is_empty());
    assert_eq!(results[0].chunk.service, Service::Sports);
    assert_eq!(results[0].chunk.title, "Badminton Courts");
}

#[test]
fn test_wedding_query_detects_banquets_and_stays_there() {
    let engine = shipped_engine();
    // "wedding" is a banquet trigger; even though halls and weddings
    // are mentioned nowhere else, the filter must hold for every hit.
    let results = engine.query("wedding hall capacity", None, 10, 0.5);
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.chunk.service == Service::Banquets));
}

#[test]
fn test_pinned_service_excludes_cross_domain_keywords() {
    let engine = shipped_engine();
    let results = engine.query("hall booking", Some(Service::Medical), 5, 0.5);
    assert!(results.is_empty());
    assert!(!format_response(&results).found);
}

#[test]
fn test_unmatched_query_formats_as_not_found() {
    let engine = shipped_engine();
    let results = engine.query("xyzzyplonk", None, 5, 0.5);
    assert!(results.is_empty());

    let response = format_response(&results);
    assert!(!response.found);
    assert_eq!(
        response.message,
        "No relevant information found in the website content."
    );
}

#[test]
fn test_found_response_carries_sources() {
    let engine = shipped_engine();
    let results = engine.query("scholarship tutoring", None, 5, 0.5);
    assert!(!results.is_empty());

    let response = format_response(&results);
    assert!(response.found);
    assert!(response.sources.contains(&"services/education".to_string()));
    assert_eq!(response.results.len(), results.len());
}

#[test]
fn test_service_info_round_trip_on_shipped_content() {
    let engine = shipped_engine();
    let chunks = engine.get_service_info(Service::Graveyard);
    assert!(!chunks.is_empty());
    assert!(chunks.iter().all(|c| c.service == Service::Graveyard));
    assert!(chunks.iter().any(|c| c.category == "contact"));
}

#[test]
fn test_top_k_capped_on_shipped_content() {
    let engine = shipped_engine();
    for k in [0, 1, 3] {
        assert!(engine.query("community services", None, k, 0.0).len() <= k);
    }
}

#[test]
fn test_partial_content_directory_still_indexes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("services.json"),
        r#"{"sports": {"description": "Gym open daily.", "facilities": [{"title": "Gym", "description": "Weights, cardio and a trainer."}]}}"#,
    )
    .unwrap();
    // it-service.json and site-config.json are absent on purpose.

    let tree = ContentLoader::new(dir.path()).load_all();
    let engine = QueryEngine::build(&tree, ScoringConfig::default());
    assert_eq!(engine.chunk_count(), 2);
    assert_eq!(engine.available_services(), vec![Service::Sports]);

    let results = engine.query("gym trainer", None, 5, 0.5);
    assert!(!results.is_empty());
    assert_eq!(results[0].chunk.service, Service::Sports);
}

#[test]
fn test_state_reload_swaps_in_new_index() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        content_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let state = AppState::new(config);
    assert_eq!(state.with_engine(|e| e.chunk_count()), 0);
    assert!(state.with_engine(|e| e.query("burial", None, 5, 0.5).is_empty()));

    std::fs::write(
        dir.path().join("services.json"),
        r#"{"graveyard": {"description": "Burial services and plot records.", "contact": "Office near the main gate."}}"#,
    )
    .unwrap();

    let (total, services) = state.reload();
    assert_eq!(total, 2);
    assert_eq!(services, vec![Service::Graveyard]);

    let results = state.with_engine(|e| e.query("burial", None, 5, 0.5));
    assert!(!results.is_empty());
    assert_eq!(results[0].chunk.service, Service::Graveyard);
}
