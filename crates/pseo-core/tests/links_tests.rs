use std::collections::HashSet;

use pseo_core::{Config, LinkType, PseoEngine};

fn engine() -> PseoEngine {
    PseoEngine::builtin(Config::default()).unwrap()
}

#[test]
fn test_links_are_bounded_and_start_with_hub() {
    let engine = engine();
    for slug in engine.taxonomy().all_slugs() {
        let links = engine.related_links(slug);
        assert!(links.len() <= 15, "{slug} has {} links", links.len());
        if let Some(first) = links.first() {
            assert_eq!(first.link_type, LinkType::ParentHub, "{slug}");
        }
    }
}

#[test]
fn test_parent_hub_points_at_category() {
    let engine = engine();
    let links = engine.related_links("what-is-supervised-learning");
    assert_eq!(links[0].slug, "category/machine-learning");
}

#[test]
fn test_links_never_point_at_self() {
    let engine = engine();
    for slug in engine.taxonomy().all_slugs() {
        assert!(engine.related_links(slug).iter().all(|l| l.slug != slug));
    }
}

#[test]
fn test_page_links_target_known_pages() {
    let engine = engine();
    let known: HashSet<&str> = engine.taxonomy().all_slugs().into_iter().collect();

    for slug in engine.taxonomy().all_slugs() {
        for link in engine.related_links(slug) {
            if link.link_type != LinkType::ParentHub {
                assert!(known.contains(link.slug.as_str()), "{slug} -> {}", link.slug);
            }
        }
    }
}

#[test]
fn test_siblings_share_cluster() {
    let engine = engine();
    let taxonomy = engine.taxonomy();
    let slug = "what-is-supervised-learning";
    let cluster = taxonomy.cluster_for_slug(slug).unwrap();

    let siblings: Vec<_> = engine
        .related_links(slug)
        .into_iter()
        .filter(|l| l.link_type == LinkType::Sibling)
        .collect();
    assert!(!siblings.is_empty());
    for link in siblings {
        assert!(cluster.intents.iter().any(|i| i.slug == link.slug));
    }
}

#[test]
fn test_tighter_limits_shrink_link_lists() {
    let mut config = Config::default();
    config.links.siblings = 1;
    config.links.cross_cluster = 0;
    config.links.depth = 0;
    let engine = PseoEngine::builtin(config).unwrap();

    for slug in engine.taxonomy().all_slugs() {
        assert!(engine.related_links(slug).len() <= 2);
    }
}

#[test]
fn test_validate_links_over_builtin_taxonomy() {
    let engine = engine();
    let report = engine.validate_links();

    let mut seen = HashSet::new();
    for [a, b] in &report.circular_chains {
        assert_ne!(a, b);
        let pair = if a < b { (a, b) } else { (b, a) };
        assert!(seen.insert(pair), "pair {a} <-> {b} reported twice");
    }
    for orphan in &report.orphaned {
        assert!(engine.taxonomy().intent_by_slug(orphan).is_some());
    }
}
