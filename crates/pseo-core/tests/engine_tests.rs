use std::sync::Arc;

use pseo_core::metadata::PageMetadata;
use pseo_core::{CategoryType, Config, EngineError, PseoEngine, Taxonomy};

fn engine() -> PseoEngine {
    PseoEngine::builtin(Config::default()).unwrap()
}

#[test]
fn test_engine_over_custom_taxonomy() {
    let yaml = r#"
categories:
  - id: robotics
    name: Robotics
    type: technology
    description: Machines that sense and act
clusters:
  - id: robotics-core
    category_id: robotics
    name: Robotics Core
    intents:
      - { slug: what-is-robotics, intent: "What is robotics?", intent_type: concept }
      - { slug: robot-arm-kinematics, intent: "How do robot arms move?", intent_type: use-case }
"#;
    let taxonomy = Arc::new(Taxonomy::from_yaml_str(yaml).unwrap());
    let engine = PseoEngine::new(taxonomy, Config::default()).unwrap();

    assert_eq!(engine.page_count(), 2);
    assert_eq!(engine.all_pages().len(), 2);
    assert!(engine.page_by_slug("what-is-supervised-learning").is_none());

    let page = engine.page_by_slug("what-is-robotics").unwrap();
    assert_eq!(page.category.id, "robotics");
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = Config::default();
    config.links.max_total = 0;
    let err = PseoEngine::builtin(config).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = Arc::new(engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || engine.page_by_slug("neural-networks-explained"))
        })
        .collect();

    let pages: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(pages.iter().all(|p| p == &pages[0]));
    assert!(pages[0].is_some());
}

#[test]
fn test_metadata_for_served_page() {
    let engine = engine();
    let metadata = engine.metadata("what-is-supervised-learning");
    let page = engine.page_by_slug("what-is-supervised-learning").unwrap();

    assert_eq!(metadata.title, page.title);
    assert_eq!(
        metadata.canonical_url.as_deref(),
        Some("https://neuronai.com/ai/what-is-supervised-learning")
    );
    assert_eq!(metadata.keywords.as_deref(), Some("Machine Learning"));
    assert_eq!(metadata.robots.directive(), "index, follow");
    let date = page.last_modified.format("%Y-%m-%d").to_string();
    assert_eq!(metadata.modified_time.as_deref(), Some(date.as_str()));
}

#[test]
fn test_metadata_for_unknown_page() {
    let engine = engine();
    assert_eq!(engine.metadata("totally-unknown-topic"), PageMetadata::not_found());
}

#[test]
fn test_category_hub() {
    let engine = engine();
    let hub = engine.category_hub("machine-learning").unwrap();

    assert_eq!(hub.category.name, "Machine Learning");
    assert!(!hub.clusters.is_empty());
    assert!(hub.clusters.iter().all(|c| c.category_id == "machine-learning"));
    assert_eq!(
        hub.total_intents,
        hub.clusters.iter().map(|c| c.intents.len()).sum::<usize>()
    );

    assert!(engine.category_hub("no-such-category").is_none());
}

#[test]
fn test_hub_overview_groups_every_category() {
    let engine = engine();
    let overview = engine.hub_overview();

    assert_eq!(overview.total_pages, engine.page_count());
    let hubs: usize = overview.groups.iter().map(|g| g.hubs.len()).sum();
    assert_eq!(hubs, engine.taxonomy().categories().len());

    let types: Vec<CategoryType> = overview.groups.iter().map(|g| g.category_type).collect();
    assert_eq!(
        types,
        vec![
            CategoryType::Technology,
            CategoryType::Industry,
            CategoryType::Concept
        ]
    );
}

#[test]
fn test_category_metadata() {
    let engine = engine();
    let category = engine.taxonomy().category("nlp").unwrap();
    let metadata = PageMetadata::for_category(category, engine.config().sitemap.origin());

    assert_eq!(
        metadata.canonical_url.as_deref(),
        Some("https://neuronai.com/ai/category/nlp")
    );
    assert!(metadata.title.ends_with("Resources"));
}
