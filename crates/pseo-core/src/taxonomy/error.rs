//! Taxonomy construction errors.

use thiserror::Error;

/// Errors raised while building a [`Taxonomy`](super::Taxonomy).
///
/// All of these are invariant violations in static data and surface once,
/// when the taxonomy is constructed.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// The taxonomy document could not be parsed.
    #[error("Failed to parse taxonomy data: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two categories share an id.
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// Two clusters share an id.
    #[error("Duplicate cluster id: {0}")]
    DuplicateCluster(String),

    /// Two intents share a slug, anywhere in the taxonomy.
    #[error("Duplicate slug '{slug}' in cluster {cluster_id}")]
    DuplicateSlug { slug: String, cluster_id: String },

    /// A cluster points at a category that does not exist.
    #[error("Cluster {cluster_id} references unknown category {category_id}")]
    UnknownClusterCategory {
        cluster_id: String,
        category_id: String,
    },

    /// A category's related list names a category that does not exist.
    #[error("Category {category_id} references unknown category {related_id}")]
    UnknownRelatedCategory {
        category_id: String,
        related_id: String,
    },

    /// A category's parent does not exist.
    #[error("Category {category_id} has unknown parent {parent_id}")]
    UnknownParentCategory {
        category_id: String,
        parent_id: String,
    },

    /// The relation map is keyed by a category that does not exist.
    #[error("Relations listed for unknown category {0}")]
    UnknownRelationSource(String),

    /// A slug is not lowercase words joined by hyphens.
    #[error("Slug is not URL-safe: '{0}'")]
    InvalidSlug(String),
}
