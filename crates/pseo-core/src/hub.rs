//! Category hub views over the taxonomy.

use serde::Serialize;

use crate::taxonomy::{Category, CategoryType, Taxonomy, TopicCluster};

/// Landing view for one category: its clusters and how many pages they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryHub<'a> {
    pub category: &'a Category,
    pub clusters: Vec<&'a TopicCluster>,
    pub total_intents: usize,
}

impl<'a> CategoryHub<'a> {
    /// Returns `None` for an unknown category id.
    pub fn build(taxonomy: &'a Taxonomy, category_id: &str) -> Option<Self> {
        let category = taxonomy.category(category_id)?;
        let clusters: Vec<&TopicCluster> = taxonomy.clusters_by_category(&category.id).collect();
        let total_intents = clusters.iter().map(|c| c.intents.len()).sum();
        Some(Self {
            category,
            clusters,
            total_intents,
        })
    }
}

/// Categories grouped by type, for the top-level landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubOverview<'a> {
    /// Non-empty groups in [`CategoryType::ALL`] order
    pub groups: Vec<HubGroup<'a>>,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubGroup<'a> {
    pub category_type: CategoryType,
    pub hubs: Vec<CategoryHub<'a>>,
}

impl<'a> HubOverview<'a> {
    pub fn build(taxonomy: &'a Taxonomy) -> Self {
        let groups = CategoryType::ALL
            .iter()
            .filter_map(|&category_type| {
                let hubs: Vec<CategoryHub> = taxonomy
                    .categories_by_type(category_type)
                    .into_iter()
                    .filter_map(|c| CategoryHub::build(taxonomy, &c.id))
                    .collect();
                (!hubs.is_empty()).then_some(HubGroup {
                    category_type,
                    hubs,
                })
            })
            .collect();

        Self {
            groups,
            total_pages: taxonomy.total_page_count(),
        }
    }
}
