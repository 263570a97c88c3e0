//! API response models for the page server.
//!
//! Owned DTOs so handlers can drop their borrow of the engine before the
//! response is serialized.

use serde::Serialize;

use pseo_core::hub::{CategoryHub, HubOverview};
use pseo_core::metadata::PageMetadata;
use pseo_core::{Category, CategoryType, IntentType, PseoPage, QualityCheckResult, TopicCluster};

// =============================================================================
// Pages
// =============================================================================

/// Response for `/api/pages/{slug}`.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub page: PseoPage,
    pub quality: QualityCheckResult,
    pub grade: char,
    pub metadata: PageMetadata,
}

// =============================================================================
// Hubs
// =============================================================================

/// Response for `/api/hubs`.
#[derive(Debug, Serialize)]
pub struct HubsResponse {
    pub total_pages: usize,
    pub groups: Vec<HubGroupResponse>,
}

#[derive(Debug, Serialize)]
pub struct HubGroupResponse {
    pub category_type: CategoryType,
    pub hubs: Vec<HubResponse>,
}

/// Response for `/api/hubs/{category}`.
#[derive(Debug, Serialize)]
pub struct HubResponse {
    pub category: Category,
    pub total_intents: usize,
    pub clusters: Vec<ClusterSummary>,
}

#[derive(Debug, Serialize)]
pub struct ClusterSummary {
    pub id: String,
    pub name: String,
    pub intents: Vec<IntentSummary>,
}

#[derive(Debug, Serialize)]
pub struct IntentSummary {
    pub slug: String,
    pub intent: String,
    pub intent_type: IntentType,
}

impl From<&TopicCluster> for ClusterSummary {
    fn from(cluster: &TopicCluster) -> Self {
        Self {
            id: cluster.id.clone(),
            name: cluster.name.clone(),
            intents: cluster
                .intents
                .iter()
                .map(|i| IntentSummary {
                    slug: i.slug.clone(),
                    intent: i.intent.clone(),
                    intent_type: i.intent_type,
                })
                .collect(),
        }
    }
}

impl From<&CategoryHub<'_>> for HubResponse {
    fn from(hub: &CategoryHub<'_>) -> Self {
        Self {
            category: hub.category.clone(),
            total_intents: hub.total_intents,
            clusters: hub.clusters.iter().map(|c| ClusterSummary::from(*c)).collect(),
        }
    }
}

impl From<&HubOverview<'_>> for HubsResponse {
    fn from(overview: &HubOverview<'_>) -> Self {
        Self {
            total_pages: overview.total_pages,
            groups: overview
                .groups
                .iter()
                .map(|g| HubGroupResponse {
                    category_type: g.category_type,
                    hubs: g.hubs.iter().map(HubResponse::from).collect(),
                })
                .collect(),
        }
    }
}
