//! Static taxonomy of categories, topic clusters and intent units.
//!
//! The taxonomy is read-only data built once at process start. It is the
//! source of every slug the engine can serve, and every other component
//! looks things up here rather than holding its own copy.
//!
//! The built-in data lives in `taxonomy.yaml` and is embedded at compile
//! time. Construction validates the data's invariants (unique ids and slugs,
//! resolvable foreign keys) so lookups never have to re-check them.

mod error;

pub use error::TaxonomyError;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

const BUILTIN_TAXONOMY: &str = include_str!("taxonomy.yaml");

// =============================================================================
// Types
// =============================================================================

/// Kind of a top-level category. Drives template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryType {
    Technology,
    Industry,
    Concept,
    UseCase,
    Comparison,
}

impl CategoryType {
    /// All category types, in display order.
    pub const ALL: [CategoryType; 5] = [
        CategoryType::Technology,
        CategoryType::Industry,
        CategoryType::Concept,
        CategoryType::UseCase,
        CategoryType::Comparison,
    ];

    /// Wire name, as used in data files and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Technology => "technology",
            CategoryType::Industry => "industry",
            CategoryType::Concept => "concept",
            CategoryType::UseCase => "use-case",
            CategoryType::Comparison => "comparison",
        }
    }
}

/// Kind of search intent an intent unit answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntentType {
    Question,
    Concept,
    UseCase,
    Comparison,
    Evaluation,
}

impl IntentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentType::Question => "question",
            IntentType::Concept => "concept",
            IntentType::UseCase => "use-case",
            IntentType::Comparison => "comparison",
            IntentType::Evaluation => "evaluation",
        }
    }
}

/// A top-level taxonomy node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// A named group of intents under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCluster {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub intents: Vec<IntentUnit>,
}

/// One search intent, served as exactly one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentUnit {
    /// Globally unique, URL-safe page identifier.
    pub slug: String,
    /// The question or statement the page answers.
    pub intent: String,
    pub intent_type: IntentType,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Category record as it appears in the data file.
#[derive(Debug, Deserialize)]
struct CategoryRecord {
    #[serde(flatten)]
    category: Category,
    #[serde(default)]
    related: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TaxonomyDocument {
    categories: Vec<CategoryRecord>,
    clusters: Vec<TopicCluster>,
}

// =============================================================================
// Taxonomy
// =============================================================================

/// Validated, immutable taxonomy with indexed lookups.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
    clusters: Vec<TopicCluster>,
    relations: HashMap<String, Vec<String>>,
    /// slug -> (cluster index, intent index)
    slug_index: HashMap<String, (usize, usize)>,
}

impl Taxonomy {
    /// Build the taxonomy shipped with the crate.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::from_yaml_str(BUILTIN_TAXONOMY)
    }

    /// Parse and validate a taxonomy document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TaxonomyError> {
        let doc: TaxonomyDocument = serde_yaml::from_str(yaml)?;

        let mut categories = Vec::with_capacity(doc.categories.len());
        let mut relations = HashMap::new();
        for record in doc.categories {
            relations.insert(record.category.id.clone(), record.related);
            categories.push(record.category);
        }

        Self::new(categories, doc.clusters, relations)
    }

    /// Build a taxonomy from parts, checking every invariant.
    pub fn new(
        categories: Vec<Category>,
        clusters: Vec<TopicCluster>,
        relations: HashMap<String, Vec<String>>,
    ) -> Result<Self, TaxonomyError> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(TaxonomyError::DuplicateCategory(category.id.clone()));
            }
        }

        for category in &categories {
            if let Some(parent) = &category.parent_id {
                if !category_ids.contains(parent.as_str()) {
                    return Err(TaxonomyError::UnknownParentCategory {
                        category_id: category.id.clone(),
                        parent_id: parent.clone(),
                    });
                }
            }
        }

        for (category_id, related) in &relations {
            if !category_ids.contains(category_id.as_str()) {
                return Err(TaxonomyError::UnknownRelationSource(category_id.clone()));
            }
            if let Some(missing) = related.iter().find(|r| !category_ids.contains(r.as_str())) {
                return Err(TaxonomyError::UnknownRelatedCategory {
                    category_id: category_id.clone(),
                    related_id: missing.clone(),
                });
            }
        }

        let mut cluster_ids = HashSet::new();
        let mut slug_index = HashMap::new();
        for (ci, cluster) in clusters.iter().enumerate() {
            if !cluster_ids.insert(cluster.id.as_str()) {
                return Err(TaxonomyError::DuplicateCluster(cluster.id.clone()));
            }
            if !category_ids.contains(cluster.category_id.as_str()) {
                return Err(TaxonomyError::UnknownClusterCategory {
                    cluster_id: cluster.id.clone(),
                    category_id: cluster.category_id.clone(),
                });
            }
            for (ii, intent) in cluster.intents.iter().enumerate() {
                if !is_url_safe_slug(&intent.slug) {
                    return Err(TaxonomyError::InvalidSlug(intent.slug.clone()));
                }
                if slug_index.insert(intent.slug.clone(), (ci, ii)).is_some() {
                    return Err(TaxonomyError::DuplicateSlug {
                        slug: intent.slug.clone(),
                        cluster_id: cluster.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            categories,
            clusters,
            relations,
            slug_index,
        })
    }

    /// All categories, in definition order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All topic clusters, in definition order.
    pub fn clusters(&self) -> &[TopicCluster] {
        &self.clusters
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn categories_by_type(&self, category_type: CategoryType) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.category_type == category_type)
            .collect()
    }

    pub fn clusters_by_category<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a TopicCluster> + 'a {
        self.clusters
            .iter()
            .filter(move |c| c.category_id == category_id)
    }

    pub fn intent_by_slug(&self, slug: &str) -> Option<&IntentUnit> {
        self.slug_index
            .get(slug)
            .map(|&(ci, ii)| &self.clusters[ci].intents[ii])
    }

    pub fn cluster_for_slug(&self, slug: &str) -> Option<&TopicCluster> {
        self.slug_index.get(slug).map(|&(ci, _)| &self.clusters[ci])
    }

    /// Curated related categories, in priority order. Not symmetric.
    pub fn related_categories(&self, category_id: &str) -> &[String] {
        self.relations
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every slug, in taxonomy order (cluster order, then intent order).
    pub fn all_slugs(&self) -> Vec<&str> {
        self.clusters
            .iter()
            .flat_map(|c| c.intents.iter().map(|i| i.slug.as_str()))
            .collect()
    }

    pub fn total_page_count(&self) -> usize {
        self.clusters.iter().map(|c| c.intents.len()).sum()
    }
}

/// Lowercase ASCII words joined by single hyphens.
fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
