//! Structural quality gate.
//!
//! A page starts at 100 and loses points for each rule it breaks. The score
//! and the failures then drive three tiers of visibility: indexed, served but
//! left out of the sitemap, and treated as not found.

use serde::{Deserialize, Serialize};

pub use crate::config::QualityRules;
use crate::config::{
    DESCRIPTION_LENGTH_RANGE, NOT_FOUND_SCORE, PASSING_SCORE, TITLE_LENGTH_RANGE,
};
use crate::page::PseoPage;

/// Rule identifiers, serialized as `SCREAMING_SNAKE_CASE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityRule {
    MinSections,
    SectionLength,
    TotalLength,
    ForbiddenPhrases,
    EmptySections,
    TitleLength,
    DescriptionLength,
    NoInternalLinks,
}

impl QualityRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityRule::MinSections => "MIN_SECTIONS",
            QualityRule::SectionLength => "SECTION_LENGTH",
            QualityRule::TotalLength => "TOTAL_LENGTH",
            QualityRule::ForbiddenPhrases => "FORBIDDEN_PHRASES",
            QualityRule::EmptySections => "EMPTY_SECTIONS",
            QualityRule::TitleLength => "TITLE_LENGTH",
            QualityRule::DescriptionLength => "DESCRIPTION_LENGTH",
            QualityRule::NoInternalLinks => "NO_INTERNAL_LINKS",
        }
    }

    /// Points deducted when the rule fails.
    pub fn deduction(&self) -> u32 {
        match self {
            QualityRule::MinSections => 25,
            QualityRule::SectionLength => 20,
            QualityRule::TotalLength => 25,
            QualityRule::ForbiddenPhrases => 30,
            QualityRule::EmptySections => 25,
            QualityRule::TitleLength => 5,
            QualityRule::DescriptionLength => 5,
            QualityRule::NoInternalLinks => 10,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            QualityRule::TitleLength
            | QualityRule::DescriptionLength
            | QualityRule::NoInternalLinks => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether a failure of this rule hides the page entirely.
    fn is_severe(&self) -> bool {
        matches!(self, QualityRule::EmptySections | QualityRule::ForbiddenPhrases)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityFailure {
    pub rule: QualityRule,
    pub message: String,
    pub severity: Severity,
}

/// Outcome of scoring a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheckResult {
    /// No error-severity failure and a passing score.
    pub passed: bool,
    /// `0..=100`
    pub score: u32,
    pub failures: Vec<QualityFailure>,
}

impl QualityCheckResult {
    pub fn has_errors(&self) -> bool {
        self.failures.iter().any(|f| f.severity == Severity::Error)
    }
}

/// Score a page against the rules.
///
/// Deductions stack independently and the score is floored at zero.
pub fn check_page_quality(page: &PseoPage, rules: &QualityRules) -> QualityCheckResult {
    let mut failures = Vec::new();
    let mut fail = |rule: QualityRule, message: String| {
        failures.push(QualityFailure {
            rule,
            message,
            severity: rule.severity(),
        });
    };

    let section_count = page.sections.len();
    if section_count < rules.min_sections {
        fail(
            QualityRule::MinSections,
            format!(
                "Page has {section_count} sections, minimum is {}",
                rules.min_sections
            ),
        );
    }

    let short = page
        .sections
        .iter()
        .filter(|s| s.content.chars().count() < rules.min_section_length)
        .count();
    if short > 0 {
        fail(
            QualityRule::SectionLength,
            format!(
                "{short} sections below minimum length of {} chars",
                rules.min_section_length
            ),
        );
    }

    let total = page.content_length();
    if total < rules.min_total_length {
        fail(
            QualityRule::TotalLength,
            format!("Total content {total} chars, minimum is {}", rules.min_total_length),
        );
    }

    let found = forbidden_phrases_in(page, rules);
    if !found.is_empty() {
        fail(
            QualityRule::ForbiddenPhrases,
            format!("Found forbidden phrases: {}", found.join(", ")),
        );
    }

    let empty = page
        .sections
        .iter()
        .filter(|s| s.content.trim().is_empty())
        .count();
    if empty > 0 {
        fail(QualityRule::EmptySections, format!("{empty} sections are empty"));
    }

    let title_len = page.title.chars().count();
    if !within(title_len, TITLE_LENGTH_RANGE) {
        fail(
            QualityRule::TitleLength,
            format!(
                "Title length {title_len} not optimal ({}-{} chars)",
                TITLE_LENGTH_RANGE.0, TITLE_LENGTH_RANGE.1
            ),
        );
    }

    let description_len = page.description.chars().count();
    if !within(description_len, DESCRIPTION_LENGTH_RANGE) {
        fail(
            QualityRule::DescriptionLength,
            format!(
                "Description length {description_len} not optimal ({}-{} chars)",
                DESCRIPTION_LENGTH_RANGE.0, DESCRIPTION_LENGTH_RANGE.1
            ),
        );
    }

    if page.related_links.is_empty() {
        fail(
            QualityRule::NoInternalLinks,
            "Page has no internal links".to_string(),
        );
    }

    let deducted: u32 = failures.iter().map(|f| f.rule.deduction()).sum();
    let score = 100u32.saturating_sub(deducted);
    let has_errors = failures.iter().any(|f| f.severity == Severity::Error);

    QualityCheckResult {
        passed: !has_errors && score >= PASSING_SCORE,
        score,
        failures,
    }
}

/// Configured phrases present in the page body, in rule order.
fn forbidden_phrases_in<'r>(page: &PseoPage, rules: &'r QualityRules) -> Vec<&'r str> {
    let content = page
        .sections
        .iter()
        .map(|s| s.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    rules
        .forbidden_phrases
        .iter()
        .filter(|phrase| content.contains(&phrase.to_lowercase()))
        .map(String::as_str)
        .collect()
}

fn within(len: usize, (min, max): (usize, usize)) -> bool {
    (min..=max).contains(&len)
}

// =============================================================================
// Visibility decisions
// =============================================================================

/// Whether the page should be left out of sitemaps and marked `noindex`.
///
/// Recomputes quality from the page content instead of trusting
/// `page.quality_score`.
pub fn should_exclude_from_sitemap(page: &PseoPage, rules: &QualityRules) -> bool {
    let result = check_page_quality(page, rules);
    !result.passed || result.score < PASSING_SCORE
}

/// Whether the page must be served as not found.
///
/// True for a missing page, a score below 40, or a severe content defect
/// (an empty section or a forbidden phrase).
pub fn should_return_404(page: Option<&PseoPage>, rules: &QualityRules) -> bool {
    let Some(page) = page else {
        return true;
    };

    let result = check_page_quality(page, rules);
    result.score < NOT_FOUND_SCORE
        || result
            .failures
            .iter()
            .any(|f| f.severity == Severity::Error && f.rule.is_severe())
}

/// Letter grade for display.
pub fn quality_grade(score: u32) -> char {
    match score {
        90.. => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{LinkType, PageSection, RelatedLink};
    use crate::taxonomy::{Category, CategoryType, IntentType};
    use chrono::NaiveDate;

    fn section(id: &str, len: usize) -> PageSection {
        PageSection::new(id, id, "x".repeat(len))
    }

    fn good_page() -> PseoPage {
        PseoPage {
            slug: "good-page".to_string(),
            title: "A Perfectly Reasonable Title".to_string(),
            description: "d".repeat(120),
            category: Category {
                id: "machine-learning".to_string(),
                name: "Machine Learning".to_string(),
                category_type: CategoryType::Technology,
                description: String::new(),
                parent_id: None,
            },
            intent_type: IntentType::Concept,
            sections: (0..4).map(|i| section(&format!("s{i}"), 250)).collect(),
            related_links: vec![RelatedLink {
                slug: "category/machine-learning".to_string(),
                title: "Machine Learning".to_string(),
                link_type: LinkType::ParentHub,
            }],
            last_modified: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            quality_score: 100,
            exclude_from_sitemap: false,
            graduation_candidate: false,
        }
    }

    #[test]
    fn test_clean_page_scores_100() {
        let result = check_page_quality(&good_page(), &QualityRules::default());
        assert!(result.passed);
        assert_eq!(result.score, 100);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_warnings_alone_still_pass() {
        let mut page = good_page();
        page.title = "Short".to_string();
        page.related_links.clear();

        let result = check_page_quality(&page, &QualityRules::default());
        assert!(result.passed);
        assert_eq!(result.score, 85);
        assert!(!result.has_errors());
        assert_eq!(result.failures[0].message, "Title length 5 not optimal (20-70 chars)");
        assert_eq!(result.failures[1].rule, QualityRule::NoInternalLinks);
    }

    #[test]
    fn test_error_fails_even_with_high_score() {
        let mut page = good_page();
        page.sections[0].content = "x".repeat(50);

        let result = check_page_quality(&page, &QualityRules::default());
        assert_eq!(result.score, 80);
        assert!(!result.passed);
        assert_eq!(
            result.failures[0].message,
            "1 sections below minimum length of 100 chars"
        );
    }

    #[test]
    fn test_forbidden_phrases_case_insensitive() {
        let mut page = good_page();
        page.sections[1].content.push_str(" Lorem Ipsum dolor. todo: fix");

        let result = check_page_quality(&page, &QualityRules::default());
        let failure = result
            .failures
            .iter()
            .find(|f| f.rule == QualityRule::ForbiddenPhrases)
            .unwrap();
        assert_eq!(failure.message, "Found forbidden phrases: lorem ipsum, TODO");
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let mut page = good_page();
        page.title = String::new();
        page.description = String::new();
        page.related_links.clear();
        page.sections = vec![PageSection::new("a", "A", "   placeholder   ")];

        let result = check_page_quality(&page, &QualityRules::default());
        assert_eq!(result.score, 0);
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 7);
    }

    #[test]
    fn test_empty_section_is_404() {
        let mut page = good_page();
        page.sections.push(PageSection::new("blank", "Blank", "  \n "));

        let rules = QualityRules::default();
        assert!(should_return_404(Some(&page), &rules));
        assert!(should_exclude_from_sitemap(&page, &rules));
    }

    #[test]
    fn test_missing_page_is_404() {
        assert!(should_return_404(None, &QualityRules::default()));
    }

    #[test]
    fn test_soft_failure_is_served_but_excluded() {
        let mut page = good_page();
        page.sections.truncate(3);

        let rules = QualityRules::default();
        assert!(should_exclude_from_sitemap(&page, &rules));
        assert!(!should_return_404(Some(&page), &rules));
    }

    #[test]
    fn test_exclusion_ignores_stale_stored_score() {
        let mut page = good_page();
        page.quality_score = 0;
        assert!(!should_exclude_from_sitemap(&page, &QualityRules::default()));
    }

    #[test]
    fn test_grades() {
        assert_eq!(quality_grade(100), 'A');
        assert_eq!(quality_grade(90), 'A');
        assert_eq!(quality_grade(89), 'B');
        assert_eq!(quality_grade(70), 'C');
        assert_eq!(quality_grade(60), 'D');
        assert_eq!(quality_grade(59), 'F');
        assert_eq!(quality_grade(0), 'F');
    }

    #[test]
    fn test_rule_serialization() {
        let json = serde_json::to_string(&QualityRule::NoInternalLinks).unwrap();
        assert_eq!(json, "\"NO_INTERNAL_LINKS\"");
        assert_eq!(QualityRule::MinSections.as_str(), "MIN_SECTIONS");
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
    }
}
