//! Deterministic page synthesis.
//!
//! A page is a pure function of its slug and the static taxonomy. Titles and
//! descriptions are picked from fixed phrasings with a generator seeded from
//! the slug hash (reseeded per call, never advanced across calls), body
//! sections come from the static prose blocks in [`prose`], and the finished
//! page is scored by the quality gate before it is returned.

pub mod prose;

use chrono::{Days, NaiveDate};
use tracing::{debug, trace};

use crate::hash::{string_hash, SeededRandom};
use crate::links::LinkGraph;
use crate::page::{slug_to_title, PageSection, PseoPage};
use crate::quality::{check_page_quality, QualityRules};
use crate::taxonomy::{Category, IntentType, Taxonomy};
use crate::templates::{CategoryTemplate, TemplateRegistry};

use prose::ProseContext;

/// Builds pages from slugs.
pub struct Synthesizer<'a> {
    taxonomy: &'a Taxonomy,
    templates: &'a TemplateRegistry,
    links: LinkGraph<'a>,
    rules: &'a QualityRules,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        taxonomy: &'a Taxonomy,
        templates: &'a TemplateRegistry,
        links: LinkGraph<'a>,
        rules: &'a QualityRules,
    ) -> Self {
        Self {
            taxonomy,
            templates,
            links,
            rules,
        }
    }

    /// Generate the page for a slug.
    ///
    /// Returns `None` when the slug, its cluster, or its category cannot be
    /// resolved. The returned page already carries its quality score and
    /// sitemap flag.
    pub fn generate(&self, slug: &str) -> Option<PseoPage> {
        let Some(intent) = self.taxonomy.intent_by_slug(slug) else {
            debug!(slug, "unknown slug");
            return None;
        };
        let cluster = self.taxonomy.cluster_for_slug(slug)?;
        let category = self.taxonomy.category(&cluster.category_id)?;

        let template = self.templates.template_for(category.category_type);
        let sections = generate_sections(slug, &intent.intent, category, template);
        let related_links = self.links.related_links(slug);

        let mut page = PseoPage {
            slug: slug.to_string(),
            title: generate_title(slug, intent.intent_type),
            description: generate_description(slug, &intent.intent, intent.intent_type),
            category: category.clone(),
            intent_type: intent.intent_type,
            sections,
            related_links,
            last_modified: last_modified(slug),
            quality_score: 0,
            exclude_from_sitemap: false,
            graduation_candidate: false,
        };

        let quality = check_page_quality(&page, self.rules);
        page.quality_score = quality.score;
        page.exclude_from_sitemap = !quality.passed;

        debug!(
            slug,
            sections = page.sections.len(),
            links = page.related_links.len(),
            score = page.quality_score,
            "generated page"
        );

        Some(page)
    }
}

// =============================================================================
// Title & Description
// =============================================================================

/// Pick a title phrasing for the slug.
pub fn generate_title(slug: &str, intent_type: IntentType) -> String {
    let topic = slug_to_title(slug);

    let options: Vec<String> = match intent_type {
        IntentType::Concept => vec![
            format!("{topic}: Complete Guide"),
            format!("Understanding {topic}"),
            format!("{topic} Explained"),
        ],
        IntentType::Comparison => vec![
            format!("{topic}: A Detailed Analysis"),
            format!("{topic}: Which Is Better?"),
            format!("Comparing {topic}"),
        ],
        IntentType::UseCase => vec![
            format!("{topic}: Practical Implementation"),
            format!("How to Implement {topic}"),
            format!("{topic} in Practice"),
        ],
        IntentType::Evaluation => vec![
            format!("{topic}: Performance Analysis"),
            format!("Evaluating {topic}"),
            format!("{topic}: Benchmarks & Results"),
        ],
        IntentType::Question => vec![topic.clone(), format!("Answering: {topic}")],
    };

    pick(slug, options).unwrap_or(topic)
}

/// Pick a meta description phrasing for the slug.
pub fn generate_description(slug: &str, intent: &str, intent_type: IntentType) -> String {
    let topic = slug_to_title(slug).to_lowercase();

    let options: Vec<String> = match intent_type {
        IntentType::Concept => vec![
            format!("Learn about {topic} with our comprehensive guide. Understand the fundamentals, key concepts, and practical applications."),
            format!("Discover everything you need to know about {topic}. From basic principles to advanced techniques."),
            format!("A complete explanation of {topic} for developers and business leaders. Clear, actionable insights."),
        ],
        IntentType::Comparison => vec![
            format!("Compare {topic} with our detailed analysis. Make informed decisions with clear criteria and recommendations."),
            format!("An in-depth comparison of {topic}. See performance benchmarks, use cases, and our verdict."),
        ],
        IntentType::UseCase => vec![
            format!("Step-by-step guide to {topic}. Learn implementation strategies, best practices, and expected outcomes."),
            format!("Practical guide for {topic}. Real examples, code patterns, and deployment tips."),
        ],
        IntentType::Evaluation => vec![format!(
            "Detailed evaluation of {topic}. Performance metrics, benchmarks, and expert analysis."
        )],
        IntentType::Question => vec![format!(
            "{intent} Get a clear, comprehensive answer with examples and practical guidance."
        )],
    };

    pick(slug, options).unwrap_or(topic)
}

/// Choose one option with a generator freshly seeded from the slug.
fn pick(slug: &str, mut options: Vec<String>) -> Option<String> {
    let index = SeededRandom::from_str_seed(slug).pick_index(options.len())?;
    Some(options.swap_remove(index))
}

// =============================================================================
// Sections
// =============================================================================

/// Render every template section that has a prose generator, in order.
///
/// Sections without a generator are skipped, so a page may carry fewer
/// sections than its template lists.
pub fn generate_sections(
    slug: &str,
    intent: &str,
    category: &Category,
    template: &CategoryTemplate,
) -> Vec<PageSection> {
    let ctx = ProseContext {
        topic: slug_to_title(slug),
        category: category.name.clone(),
        intent: intent.to_string(),
    };

    template
        .section_ids()
        .filter_map(|kind| match prose::generator(kind) {
            Some(render) => Some(PageSection::new(kind.id(), kind.title(), render(&ctx))),
            None => {
                trace!(slug, section = kind.id(), "no prose generator, skipping section");
                None
            }
        })
        .collect()
}

/// Deterministic pseudo-recency: 2024-01-01 plus `hash(slug) % 365` days.
pub fn last_modified(slug: &str) -> NaiveDate {
    let offset = u64::from(string_hash(slug) % 365);
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|base| base.checked_add_days(Days::new(offset)))
        .unwrap_or(NaiveDate::MIN)
}
