use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::content::Synthesizer;
use crate::hub::{CategoryHub, HubOverview};
use crate::links::{LinkGraph, LinkValidation};
use crate::metadata::PageMetadata;
use crate::page::{PseoPage, RelatedLink};
use crate::quality::{self, QualityCheckResult};
use crate::sitemap::{self, SitemapChunk, SitemapEntry};
use crate::taxonomy::{Taxonomy, TaxonomyError};
use crate::templates::TemplateRegistry;

/// Entry point to the page pipeline.
///
/// Holds the immutable taxonomy, the template registry, and the configuration.
/// Every operation is a pure read, so one engine can be shared across threads
/// behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct PseoEngine {
    taxonomy: Arc<Taxonomy>,
    templates: TemplateRegistry,
    config: Config,
}

impl PseoEngine {
    /// Creates an engine over the given taxonomy.
    pub fn new(taxonomy: Arc<Taxonomy>, config: Config) -> Result<Self, EngineError> {
        config.validate()?;

        let templates = TemplateRegistry::builtin();
        for gap in templates.coverage_gaps() {
            warn!(
                category_type = gap.category_type.as_str(),
                section = gap.section.id(),
                "required section has no prose generator; pages will omit it"
            );
        }

        info!(
            categories = taxonomy.categories().len(),
            clusters = taxonomy.clusters().len(),
            pages = taxonomy.total_page_count(),
            "pseo engine ready"
        );

        Ok(Self {
            taxonomy,
            templates,
            config,
        })
    }

    /// Creates an engine over the bundled taxonomy.
    pub fn builtin(config: Config) -> Result<Self, EngineError> {
        Self::new(Arc::new(Taxonomy::builtin()?), config)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn link_graph(&self) -> LinkGraph<'_> {
        LinkGraph::new(&self.taxonomy, &self.config.links)
    }

    fn synthesizer(&self) -> Synthesizer<'_> {
        Synthesizer::new(
            &self.taxonomy,
            &self.templates,
            self.link_graph(),
            &self.config.quality,
        )
    }

    // =========================================================================
    // Pages
    // =========================================================================

    /// Generates the page for a slug, or `None` for an unknown slug.
    pub fn page_by_slug(&self, slug: &str) -> Option<PseoPage> {
        self.synthesizer().generate(slug)
    }

    /// Every page, in taxonomy order.
    pub fn all_pages(&self) -> Vec<PseoPage> {
        let synthesizer = self.synthesizer();
        self.taxonomy
            .all_slugs()
            .into_iter()
            .filter_map(|slug| synthesizer.generate(slug))
            .collect()
    }

    /// Pages that belong in the sitemap, in taxonomy order.
    pub fn qualified_pages(&self) -> Vec<PseoPage> {
        self.all_pages()
            .into_iter()
            .filter(|page| !page.exclude_from_sitemap)
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.taxonomy.total_page_count()
    }

    pub fn related_links(&self, slug: &str) -> Vec<RelatedLink> {
        self.link_graph().related_links(slug)
    }

    /// Checks the link graph over every page.
    pub fn validate_links(&self) -> LinkValidation {
        self.link_graph().validate(&self.taxonomy.all_slugs())
    }

    // =========================================================================
    // Quality
    // =========================================================================

    pub fn check_quality(&self, page: &PseoPage) -> QualityCheckResult {
        quality::check_page_quality(page, &self.config.quality)
    }

    pub fn should_exclude_from_sitemap(&self, page: &PseoPage) -> bool {
        quality::should_exclude_from_sitemap(page, &self.config.quality)
    }

    pub fn should_return_404(&self, page: Option<&PseoPage>) -> bool {
        quality::should_return_404(page, &self.config.quality)
    }

    /// Metadata for a slug; not-found metadata when the page would 404.
    pub fn metadata(&self, slug: &str) -> PageMetadata {
        match self.page_by_slug(slug) {
            Some(page) if !self.should_return_404(Some(&page)) => {
                PageMetadata::for_page(&page, self.config.sitemap.origin())
            }
            _ => PageMetadata::not_found(),
        }
    }

    // =========================================================================
    // Sitemaps
    // =========================================================================

    /// Number of programmatic chunks listed in the sitemap index.
    pub fn chunk_count(&self) -> usize {
        sitemap::chunk_count(self.page_count(), self.config.sitemap.chunk_size)
    }

    /// One programmatic chunk, or `None` past the last qualified page.
    pub fn sitemap_chunk(&self, id: usize) -> Option<SitemapChunk> {
        sitemap::chunk_pages(&self.qualified_pages(), id, &self.config.sitemap)
    }

    pub fn static_sitemap_entries(&self, now: DateTime<Utc>) -> Vec<SitemapEntry> {
        sitemap::static_entries(&self.taxonomy, self.config.sitemap.origin(), now)
    }

    pub fn sitemap_index_xml(&self, now: DateTime<Utc>) -> String {
        sitemap::render_index(self.chunk_count(), self.config.sitemap.origin(), now)
    }

    pub fn static_sitemap_xml(&self, now: DateTime<Utc>) -> String {
        sitemap::render_urlset(&self.static_sitemap_entries(now))
    }

    // =========================================================================
    // Hubs
    // =========================================================================

    pub fn category_hub(&self, category_id: &str) -> Option<CategoryHub<'_>> {
        CategoryHub::build(&self.taxonomy, category_id)
    }

    pub fn hub_overview(&self) -> HubOverview<'_> {
        HubOverview::build(&self.taxonomy)
    }
}

/// Errors that can occur while building an engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_shareable() {
        assert_send_sync::<PseoEngine>();
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = Config::default();
        config.sitemap.chunk_size = 0;
        assert!(matches!(
            PseoEngine::builtin(config),
            Err(EngineError::Config(ConfigError::Invalid(_)))
        ));
    }
}
