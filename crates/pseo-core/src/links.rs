//! Internal link selection.
//!
//! Every page links out in four phases, in priority order: its category hub,
//! siblings from the same cluster, one intent from each related category, and
//! "deeper" intents from the same category. All choices are derived from slug
//! hashes so a page's links never change between requests.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::LinkLimits;
use crate::hash::string_hash;
use crate::page::{slug_to_title, LinkType, RelatedLink};
use crate::taxonomy::{IntentUnit, Taxonomy};

/// Link builder over a taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct LinkGraph<'a> {
    taxonomy: &'a Taxonomy,
    limits: &'a LinkLimits,
}

/// Health report for a set of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValidation {
    /// Slugs no other page in the set links to.
    pub orphaned: Vec<String>,
    /// Pairs of slugs that link to each other. Each pair appears once.
    pub circular_chains: Vec<[String; 2]>,
}

impl<'a> LinkGraph<'a> {
    pub fn new(taxonomy: &'a Taxonomy, limits: &'a LinkLimits) -> Self {
        Self { taxonomy, limits }
    }

    /// Related links for a slug, hub first. Unknown slugs have none.
    pub fn related_links(&self, slug: &str) -> Vec<RelatedLink> {
        let Some(intent) = self.taxonomy.intent_by_slug(slug) else {
            return Vec::new();
        };
        let Some(cluster) = self.taxonomy.cluster_for_slug(slug) else {
            return Vec::new();
        };
        let Some(category) = self.taxonomy.category(&cluster.category_id) else {
            return Vec::new();
        };

        let mut links = Vec::new();

        // 1. Parent hub
        if self.limits.parent_hub > 0 {
            links.push(RelatedLink {
                slug: format!("category/{}", category.id),
                title: category.name.clone(),
                link_type: LinkType::ParentHub,
            });
        }

        // 2. Siblings, shuffled by a pair hash so each page sees its own order
        let mut siblings: Vec<&IntentUnit> =
            cluster.intents.iter().filter(|i| i.slug != slug).collect();
        siblings.sort_by_cached_key(|sib| string_hash(&format!("{}{}", sib.slug, slug)));
        links.extend(
            siblings
                .into_iter()
                .take(self.limits.siblings)
                .map(|sib| link_to(sib, LinkType::Sibling)),
        );

        // 3. Cross-cluster, at most one per related category
        let seed = string_hash(slug) as usize;
        let cross = self
            .taxonomy
            .related_categories(&category.id)
            .iter()
            .filter_map(|related| {
                let first = self.taxonomy.clusters_by_category(related).next()?;
                first.intents.get(seed % first.intents.len().max(1))
            })
            .take(self.limits.cross_cluster)
            .map(|target| link_to(target, LinkType::CrossCluster));
        links.extend(cross);

        // 4. Depth
        links.extend(
            self.depth_candidates(intent, &category.id)
                .take(self.limits.depth)
                .map(|target| link_to(target, LinkType::Depth)),
        );

        links.truncate(self.limits.max_total);
        links
    }

    /// Intents in the category that share a word with `current` and have
    /// strictly more words, in taxonomy order.
    fn depth_candidates<'b>(
        &'b self,
        current: &'b IntentUnit,
        category_id: &'b str,
    ) -> impl Iterator<Item = &'b IntentUnit> + 'b {
        let current_words: HashSet<&str> = current.slug.split('-').collect();
        let current_len = current.slug.split('-').count();

        self.taxonomy
            .clusters_by_category(category_id)
            .flat_map(|cluster| cluster.intents.iter())
            .filter(move |candidate| {
                if candidate.slug == current.slug {
                    return false;
                }
                let words: Vec<&str> = candidate.slug.split('-').collect();
                let overlap = words.iter().filter(|w| current_words.contains(*w)).count();
                overlap >= 1 && words.len() > current_len
            })
    }

    /// Build the link graph restricted to `slugs` and report orphans and
    /// mutual links.
    pub fn validate(&self, slugs: &[&str]) -> LinkValidation {
        let members: HashSet<&str> = slugs.iter().copied().collect();

        let adjacency: Vec<(&str, Vec<String>)> = slugs
            .iter()
            .map(|&slug| {
                let targets = self
                    .related_links(slug)
                    .into_iter()
                    .map(|link| link.slug)
                    .filter(|target| members.contains(target.as_str()))
                    .collect();
                (slug, targets)
            })
            .collect();
        let lookup: HashMap<&str, &Vec<String>> =
            adjacency.iter().map(|(slug, out)| (*slug, out)).collect();

        let has_incoming: HashSet<&str> = adjacency
            .iter()
            .flat_map(|(_, out)| out.iter().map(String::as_str))
            .collect();
        let orphaned = slugs
            .iter()
            .filter(|slug| !has_incoming.contains(**slug))
            .map(|slug| slug.to_string())
            .collect();

        let mut circular_chains: Vec<[String; 2]> = Vec::new();
        for (slug, out) in &adjacency {
            for target in out.iter() {
                let links_back = lookup
                    .get(target.as_str())
                    .is_some_and(|back| back.iter().any(|s| s == slug));
                if !links_back {
                    continue;
                }
                let recorded = circular_chains
                    .iter()
                    .any(|pair| pair.iter().any(|s| s == slug) && pair.contains(target));
                if !recorded {
                    circular_chains.push([slug.to_string(), target.clone()]);
                }
            }
        }

        LinkValidation {
            orphaned,
            circular_chains,
        }
    }
}

fn link_to(intent: &IntentUnit, link_type: LinkType) -> RelatedLink {
    RelatedLink {
        slug: intent.slug.clone(),
        title: slug_to_title(&intent.slug),
        link_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
categories:
  - id: alpha
    name: Alpha
    type: technology
    description: First
    related: [beta, empty]
  - id: beta
    name: Beta
    type: technology
    description: Second
    related: [alpha]
  - id: empty
    name: Empty
    type: concept
    description: No clusters
clusters:
  - id: alpha-core
    category_id: alpha
    name: Alpha Core
    intents:
      - { slug: alpha-basics, intent: "What?", intent_type: concept }
      - { slug: alpha-tuning, intent: "How?", intent_type: use-case }
      - { slug: alpha-basics-deep-dive, intent: "Deeper?", intent_type: concept }
  - id: beta-core
    category_id: beta
    name: Beta Core
    intents:
      - { slug: beta-one, intent: "One?", intent_type: question }
      - { slug: beta-two, intent: "Two?", intent_type: question }
"#;

    fn taxonomy() -> Taxonomy {
        Taxonomy::from_yaml_str(YAML).unwrap()
    }

    #[test]
    fn test_phase_order() {
        let taxonomy = taxonomy();
        let limits = LinkLimits::default();
        let graph = LinkGraph::new(&taxonomy, &limits);

        let links = graph.related_links("alpha-basics");
        let kinds: Vec<LinkType> = links.iter().map(|l| l.link_type).collect();
        assert_eq!(
            kinds,
            [
                LinkType::ParentHub,
                LinkType::Sibling,
                LinkType::Sibling,
                LinkType::CrossCluster,
                LinkType::Depth,
            ]
        );
        assert_eq!(links[0].slug, "category/alpha");
        assert_eq!(links[0].title, "Alpha");
        assert_eq!(links[4].slug, "alpha-basics-deep-dive");
        assert_eq!(links[4].title, "Alpha Basics Deep Dive");
    }

    #[test]
    fn test_cross_cluster_pick_uses_slug_hash() {
        let taxonomy = taxonomy();
        let limits = LinkLimits::default();
        let graph = LinkGraph::new(&taxonomy, &limits);

        let links = graph.related_links("alpha-tuning");
        let cross: Vec<&RelatedLink> = links
            .iter()
            .filter(|l| l.link_type == LinkType::CrossCluster)
            .collect();
        assert_eq!(cross.len(), 1);
        let expected = ["beta-one", "beta-two"][string_hash("alpha-tuning") as usize % 2];
        assert_eq!(cross[0].slug, expected);
    }

    #[test]
    fn test_sibling_order_follows_pair_hash() {
        let taxonomy = taxonomy();
        let limits = LinkLimits::default();
        let graph = LinkGraph::new(&taxonomy, &limits);

        let siblings: Vec<String> = graph
            .related_links("alpha-tuning")
            .into_iter()
            .filter(|l| l.link_type == LinkType::Sibling)
            .map(|l| l.slug)
            .collect();

        let mut expected = vec!["alpha-basics", "alpha-basics-deep-dive"];
        expected.sort_by_key(|s| string_hash(&format!("{s}alpha-tuning")));
        assert_eq!(siblings, expected);
    }

    #[test]
    fn test_limits_are_respected() {
        let taxonomy = taxonomy();
        let limits = LinkLimits {
            siblings: 1,
            max_total: 2,
            ..LinkLimits::default()
        };
        let graph = LinkGraph::new(&taxonomy, &limits);

        let links = graph.related_links("alpha-basics");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].link_type, LinkType::ParentHub);
        assert_eq!(links[1].link_type, LinkType::Sibling);
    }

    #[test]
    fn test_unknown_slug_has_no_links() {
        let taxonomy = taxonomy();
        let limits = LinkLimits::default();
        let graph = LinkGraph::new(&taxonomy, &limits);
        assert!(graph.related_links("nope").is_empty());
    }

    #[test]
    fn test_validate_finds_mutual_links_once() {
        let taxonomy = taxonomy();
        let limits = LinkLimits::default();
        let graph = LinkGraph::new(&taxonomy, &limits);

        let report = graph.validate(&["beta-one", "beta-two"]);
        assert!(report.orphaned.is_empty());
        assert_eq!(report.circular_chains.len(), 1);
        assert_eq!(report.circular_chains[0], ["beta-one".to_string(), "beta-two".to_string()]);
    }

    #[test]
    fn test_validate_reports_orphans() {
        let taxonomy = taxonomy();
        let limits = LinkLimits {
            siblings: 0,
            depth: 0,
            ..LinkLimits::default()
        };
        let graph = LinkGraph::new(&taxonomy, &limits);

        let report = graph.validate(&["alpha-basics", "alpha-tuning"]);
        assert_eq!(report.orphaned, ["alpha-basics", "alpha-tuning"]);
        assert!(report.circular_chains.is_empty());
    }
}
