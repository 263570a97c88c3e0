//! Category templates: ordered section schemas per category type.
//!
//! Section ids form a closed set ([`SectionKind`]), so a template can only
//! name sections the engine knows about. Whether a section actually yields
//! prose is decided by the content synthesizer; sections without a prose
//! generator are skipped at render time and reported by
//! [`TemplateRegistry::coverage_gaps`].

use serde::Serialize;

use crate::content::prose;
use crate::taxonomy::CategoryType;

// =============================================================================
// Section Kinds
// =============================================================================

/// Every section id a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    // Shared
    Introduction,
    KeyTakeaways,
    RelatedTopics,
    // Technology
    HowItWorks,
    Architecture,
    ImplementationSteps,
    Limitations,
    Alternatives,
    // Industry
    ProblemContext,
    AdoptionPatterns,
    CaseExamples,
    RoiSignals,
    GettingStarted,
    // Concept
    Definition,
    MentalModel,
    InPractice,
    Evolution,
    CommonMisconceptions,
    // Use case
    ProblemStatement,
    SolutionApproach,
    TechnicalRequirements,
    ImplementationNotes,
    Outcomes,
    // Comparison
    CriteriaOverview,
    DetailedComparison,
    WinnerByUseCase,
    DecisionFramework,
}

impl SectionKind {
    pub const ALL: [SectionKind; 27] = [
        SectionKind::Introduction,
        SectionKind::KeyTakeaways,
        SectionKind::RelatedTopics,
        SectionKind::HowItWorks,
        SectionKind::Architecture,
        SectionKind::ImplementationSteps,
        SectionKind::Limitations,
        SectionKind::Alternatives,
        SectionKind::ProblemContext,
        SectionKind::AdoptionPatterns,
        SectionKind::CaseExamples,
        SectionKind::RoiSignals,
        SectionKind::GettingStarted,
        SectionKind::Definition,
        SectionKind::MentalModel,
        SectionKind::InPractice,
        SectionKind::Evolution,
        SectionKind::CommonMisconceptions,
        SectionKind::ProblemStatement,
        SectionKind::SolutionApproach,
        SectionKind::TechnicalRequirements,
        SectionKind::ImplementationNotes,
        SectionKind::Outcomes,
        SectionKind::CriteriaOverview,
        SectionKind::DetailedComparison,
        SectionKind::WinnerByUseCase,
        SectionKind::DecisionFramework,
    ];

    /// Section id as it appears in page output.
    pub fn id(&self) -> &'static str {
        match self {
            SectionKind::Introduction => "introduction",
            SectionKind::KeyTakeaways => "key-takeaways",
            SectionKind::RelatedTopics => "related-topics",
            SectionKind::HowItWorks => "how-it-works",
            SectionKind::Architecture => "architecture",
            SectionKind::ImplementationSteps => "implementation-steps",
            SectionKind::Limitations => "limitations",
            SectionKind::Alternatives => "alternatives",
            SectionKind::ProblemContext => "problem-context",
            SectionKind::AdoptionPatterns => "adoption-patterns",
            SectionKind::CaseExamples => "case-examples",
            SectionKind::RoiSignals => "roi-signals",
            SectionKind::GettingStarted => "getting-started",
            SectionKind::Definition => "definition",
            SectionKind::MentalModel => "mental-model",
            SectionKind::InPractice => "in-practice",
            SectionKind::Evolution => "evolution",
            SectionKind::CommonMisconceptions => "common-misconceptions",
            SectionKind::ProblemStatement => "problem-statement",
            SectionKind::SolutionApproach => "solution-approach",
            SectionKind::TechnicalRequirements => "technical-requirements",
            SectionKind::ImplementationNotes => "implementation-notes",
            SectionKind::Outcomes => "outcomes",
            SectionKind::CriteriaOverview => "criteria-overview",
            SectionKind::DetailedComparison => "detailed-comparison",
            SectionKind::WinnerByUseCase => "winner-by-use-case",
            SectionKind::DecisionFramework => "decision-framework",
        }
    }

    /// Display title used for rendered sections.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Introduction => "Introduction",
            SectionKind::KeyTakeaways => "Key Takeaways",
            SectionKind::RelatedTopics => "Related Topics",
            SectionKind::HowItWorks => "How It Works",
            SectionKind::Architecture => "Architecture Overview",
            SectionKind::ImplementationSteps => "Implementation Steps",
            SectionKind::Limitations => "Limitations & Challenges",
            SectionKind::Alternatives => "Alternatives to Consider",
            SectionKind::ProblemContext => "The Problem",
            SectionKind::AdoptionPatterns => "Adoption Patterns",
            SectionKind::CaseExamples => "Real-World Examples",
            SectionKind::RoiSignals => "ROI & Business Impact",
            SectionKind::GettingStarted => "Getting Started",
            SectionKind::Definition => "What It Is",
            SectionKind::MentalModel => "How to Think About It",
            SectionKind::InPractice => "In Practice",
            SectionKind::Evolution => "Historical Context",
            SectionKind::CommonMisconceptions => "Common Misconceptions",
            SectionKind::ProblemStatement => "The Challenge",
            SectionKind::SolutionApproach => "Solution Approach",
            SectionKind::TechnicalRequirements => "Requirements",
            SectionKind::ImplementationNotes => "Implementation Considerations",
            SectionKind::Outcomes => "Expected Outcomes",
            SectionKind::CriteriaOverview => "Comparison Criteria",
            SectionKind::DetailedComparison => "Head-to-Head Comparison",
            SectionKind::WinnerByUseCase => "Best Choice By Scenario",
            SectionKind::DecisionFramework => "How to Decide",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionKind> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Whether the synthesizer can produce prose for this section.
    pub fn has_prose(&self) -> bool {
        prose::generator(*self).is_some()
    }
}

// =============================================================================
// Schemas
// =============================================================================

/// One template-suggested content block.
#[derive(Debug, Clone, Serialize)]
pub struct SectionSchema {
    pub id: SectionKind,
    pub title: &'static str,
    pub required: bool,
    pub min_length: usize,
    pub description: &'static str,
}

impl SectionSchema {
    fn new(
        id: SectionKind,
        required: bool,
        min_length: usize,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            title: id.title(),
            required,
            min_length,
            description,
        }
    }
}

/// Ordered section layout for one category type.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTemplate {
    pub category_type: CategoryType,
    pub sections: Vec<SectionSchema>,
    /// Editorial guidance only; not enforced.
    pub forbidden_patterns: Vec<&'static str>,
}

impl CategoryTemplate {
    pub fn required_sections(&self) -> impl Iterator<Item = &SectionSchema> {
        self.sections.iter().filter(|s| s.required)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.sections.iter().map(|s| s.id)
    }
}

fn introduction() -> SectionSchema {
    SectionSchema::new(
        SectionKind::Introduction,
        true,
        150,
        "Clear, concise introduction establishing the topic and reader value",
    )
}

fn key_takeaways() -> SectionSchema {
    SectionSchema::new(
        SectionKind::KeyTakeaways,
        true,
        100,
        "Bullet points summarizing the most important insights",
    )
}

fn related_topics() -> SectionSchema {
    SectionSchema::new(
        SectionKind::RelatedTopics,
        true,
        50,
        "Internal links to related content for further exploration",
    )
}

fn technology_template() -> CategoryTemplate {
    use SectionKind::*;
    CategoryTemplate {
        category_type: CategoryType::Technology,
        sections: vec![
            introduction(),
            SectionSchema::new(HowItWorks, true, 300, "Technical explanation of the underlying mechanism or architecture"),
            SectionSchema::new(Architecture, false, 200, "Visual or textual breakdown of system components"),
            SectionSchema::new(ImplementationSteps, false, 200, "Practical workflow for applying the technology"),
            SectionSchema::new(Limitations, true, 150, "Honest assessment of constraints and edge cases"),
            SectionSchema::new(Alternatives, false, 100, "Other technologies or approaches that may fit better"),
            key_takeaways(),
            related_topics(),
        ],
        forbidden_patterns: vec![
            "generic \"what is X\" intro without depth",
            "copied documentation without context",
            "placeholder code examples",
        ],
    }
}

fn industry_template() -> CategoryTemplate {
    use SectionKind::*;
    CategoryTemplate {
        category_type: CategoryType::Industry,
        sections: vec![
            introduction(),
            SectionSchema::new(ProblemContext, true, 200, "Industry-specific challenges this technology addresses"),
            SectionSchema::new(AdoptionPatterns, true, 200, "How organizations typically implement this solution"),
            SectionSchema::new(CaseExamples, true, 250, "Specific implementations or case studies with outcomes"),
            SectionSchema::new(RoiSignals, false, 150, "Measurable business value and success metrics"),
            SectionSchema::new(GettingStarted, false, 150, "First steps for organizations exploring this solution"),
            key_takeaways(),
            related_topics(),
        ],
        forbidden_patterns: vec![
            "vague industry buzzwords without substance",
            "\"contact us\" as primary content",
            "unsubstantiated claims without examples",
        ],
    }
}

fn concept_template() -> CategoryTemplate {
    use SectionKind::*;
    CategoryTemplate {
        category_type: CategoryType::Concept,
        sections: vec![
            introduction(),
            SectionSchema::new(Definition, true, 200, "Clear, accessible definition avoiding circular explanations"),
            SectionSchema::new(MentalModel, true, 200, "Analogies or frameworks that aid understanding"),
            SectionSchema::new(InPractice, false, 150, "How this concept manifests in real applications"),
            SectionSchema::new(Evolution, false, 150, "How this concept developed and where it's heading"),
            SectionSchema::new(CommonMisconceptions, false, 100, "Frequent misunderstandings to avoid"),
            key_takeaways(),
            related_topics(),
        ],
        forbidden_patterns: vec![
            "circular definitions",
            "dictionary-style entries without depth",
            "academic jargon without explanation",
        ],
    }
}

fn use_case_template() -> CategoryTemplate {
    use SectionKind::*;
    CategoryTemplate {
        category_type: CategoryType::UseCase,
        sections: vec![
            introduction(),
            SectionSchema::new(ProblemStatement, true, 200, "Specific problem this use case solves"),
            SectionSchema::new(SolutionApproach, true, 300, "How to implement the solution step by step"),
            SectionSchema::new(TechnicalRequirements, false, 150, "Technical prerequisites and dependencies"),
            SectionSchema::new(ImplementationNotes, true, 200, "Practical tips, gotchas, and best practices"),
            SectionSchema::new(Outcomes, true, 150, "Measurable results and success indicators"),
            key_takeaways(),
            related_topics(),
        ],
        forbidden_patterns: vec![
            "\"contact us\" as primary CTA",
            "vague \"we can help\" language",
            "lack of specific implementation details",
        ],
    }
}

fn comparison_template() -> CategoryTemplate {
    use SectionKind::*;
    CategoryTemplate {
        category_type: CategoryType::Comparison,
        sections: vec![
            introduction(),
            SectionSchema::new(CriteriaOverview, true, 150, "Dimensions along which we compare the options"),
            SectionSchema::new(DetailedComparison, true, 400, "Detailed analysis of each option across criteria"),
            SectionSchema::new(WinnerByUseCase, true, 200, "Clear recommendations based on specific needs"),
            SectionSchema::new(DecisionFramework, false, 150, "Framework for making the right choice"),
            key_takeaways(),
            related_topics(),
        ],
        forbidden_patterns: vec![
            "tie results with no guidance",
            "bias toward one option without justification",
            "superficial comparisons without depth",
        ],
    }
}

// =============================================================================
// Registry
// =============================================================================

/// A required section that the synthesizer cannot fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageGap {
    pub category_type: CategoryType,
    pub section: SectionKind,
}

/// One template per category type.
///
/// Dispatch is an exhaustive match, so a new [`CategoryType`] variant does
/// not compile until it has a template.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    technology: CategoryTemplate,
    industry: CategoryTemplate,
    concept: CategoryTemplate,
    use_case: CategoryTemplate,
    comparison: CategoryTemplate,
}

impl TemplateRegistry {
    /// Registry with the built-in templates for all five category types.
    pub fn builtin() -> Self {
        Self {
            technology: technology_template(),
            industry: industry_template(),
            concept: concept_template(),
            use_case: use_case_template(),
            comparison: comparison_template(),
        }
    }

    /// The template for a category type.
    pub fn template_for(&self, category_type: CategoryType) -> &CategoryTemplate {
        match category_type {
            CategoryType::Technology => &self.technology,
            CategoryType::Industry => &self.industry,
            CategoryType::Concept => &self.concept,
            CategoryType::UseCase => &self.use_case,
            CategoryType::Comparison => &self.comparison,
        }
    }

    pub fn required_sections(&self, category_type: CategoryType) -> Vec<&SectionSchema> {
        self.template_for(category_type).required_sections().collect()
    }

    /// All templates, in `CategoryType::ALL` order.
    pub fn all_templates(&self) -> Vec<&CategoryTemplate> {
        CategoryType::ALL
            .iter()
            .map(|t| self.template_for(*t))
            .collect()
    }

    /// Required sections with no prose generator.
    ///
    /// Pages for these category types render without the listed sections.
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        self.all_templates()
            .into_iter()
            .flat_map(|template| {
                template
                    .required_sections()
                    .filter(|s| !s.id.has_prose())
                    .map(move |s| CoverageGap {
                        category_type: template.category_type,
                        section: s.id,
                    })
            })
            .collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
