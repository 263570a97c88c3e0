use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AnalyticsError, AnalyticsProvider, PagePerformance};
use crate::config::GraduationCriteria;

/// Editorial recommendation for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Meets every criterion
    Promote,
    /// Meets the impressions or CTR bar, not all criteria
    Monitor,
    /// Meets neither impressions nor CTR
    Maintain,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Promote => "promote",
            Recommendation::Monitor => "monitor",
            Recommendation::Maintain => "maintain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduationReport {
    pub slug: String,
    pub performance: PagePerformance,
    pub recommendation: Recommendation,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionKind {
    ExpandContent,
    AddVisuals,
    AddExamples,
    CreateSeries,
}

impl PromotionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionKind::ExpandContent => "expand_content",
            PromotionKind::AddVisuals => "add_visuals",
            PromotionKind::AddExamples => "add_examples",
            PromotionKind::CreateSeries => "create_series",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

impl ActionPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionPriority::High => "high",
            ActionPriority::Medium => "medium",
            ActionPriority::Low => "low",
        }
    }
}

/// A suggested editorial follow-up for a promoted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionAction {
    pub slug: String,
    pub action: PromotionKind,
    pub priority: ActionPriority,
    pub notes: String,
}

/// True when the page clears every threshold.
pub fn meets_graduation_criteria(performance: &PagePerformance, criteria: &GraduationCriteria) -> bool {
    performance.impressions >= criteria.min_impressions
        && performance.ctr >= criteria.min_ctr
        && performance.avg_session_duration >= criteria.min_session_duration
}

/// Tracked slugs that meet every criterion, most impressions first.
pub async fn identify_graduation_candidates<P>(
    provider: &P,
    criteria: &GraduationCriteria,
) -> Result<Vec<String>, AnalyticsError>
where
    P: AnalyticsProvider + ?Sized,
{
    let mut qualifying: Vec<PagePerformance> = provider
        .get_all_page_performance(criteria.period_days)
        .await?
        .into_iter()
        .filter(|p| meets_graduation_criteria(p, criteria))
        .collect();
    qualifying.sort_by(|a, b| b.impressions.cmp(&a.impressions));

    debug!(candidates = qualifying.len(), "identified graduation candidates");
    Ok(qualifying.into_iter().map(|p| p.slug).collect())
}

/// Classify one page. `None` when the provider has no data for it.
pub async fn generate_graduation_report<P>(
    provider: &P,
    slug: &str,
    criteria: &GraduationCriteria,
) -> Result<Option<GraduationReport>, AnalyticsError>
where
    P: AnalyticsProvider + ?Sized,
{
    let Some(performance) = provider
        .get_page_performance(slug, criteria.period_days)
        .await?
    else {
        return Ok(None);
    };

    let meets_impressions = performance.impressions >= criteria.min_impressions;
    let meets_ctr = performance.ctr >= criteria.min_ctr;
    let meets_duration = performance.avg_session_duration >= criteria.min_session_duration;

    let (recommendation, reason) = if meets_impressions && meets_ctr && meets_duration {
        (
            Recommendation::Promote,
            format!(
                "Page exceeds all criteria: {} impressions, {:.1}% CTR, {}s avg session",
                performance.impressions,
                performance.ctr * 100.0,
                performance.avg_session_duration
            ),
        )
    } else if meets_impressions || meets_ctr {
        let missing: Vec<&str> = [
            (!meets_impressions).then_some("impressions"),
            (!meets_ctr).then_some("CTR"),
            (!meets_duration).then_some("session duration"),
        ]
        .into_iter()
        .flatten()
        .collect();
        (
            Recommendation::Monitor,
            format!(
                "Shows promise but needs improvement in: {}",
                missing.join(", ")
            ),
        )
    } else {
        (
            Recommendation::Maintain,
            "Insufficient performance data for promotion consideration".to_string(),
        )
    };

    Ok(Some(GraduationReport {
        slug: slug.to_string(),
        performance,
        recommendation,
        reason,
    }))
}

/// Follow-up work for a promoted page. Empty for any other recommendation.
pub fn suggest_promotion_actions(report: &GraduationReport) -> Vec<PromotionAction> {
    if report.recommendation != Recommendation::Promote {
        return Vec::new();
    }

    let perf = &report.performance;
    let suggest = |action, priority, notes: &str| PromotionAction {
        slug: report.slug.clone(),
        action,
        priority,
        notes: notes.to_string(),
    };

    let mut actions = Vec::new();
    if perf.ctr >= 0.05 && perf.impressions >= 2000 {
        actions.push(suggest(
            PromotionKind::ExpandContent,
            ActionPriority::High,
            "High engagement indicates strong topic interest. Add detailed sections, examples, and expert insights.",
        ));
    }
    if perf.avg_session_duration >= 120 {
        actions.push(suggest(
            PromotionKind::AddVisuals,
            ActionPriority::Medium,
            "Long session times suggest deep engagement. Add diagrams, charts, or interactive elements.",
        ));
    }
    if perf.impressions >= 3000 {
        actions.push(suggest(
            PromotionKind::CreateSeries,
            ActionPriority::Medium,
            "Strong visibility makes this a good foundation for a content series.",
        ));
    }
    if actions.is_empty() {
        actions.push(suggest(
            PromotionKind::AddExamples,
            ActionPriority::Low,
            "Add real-world examples and case studies to increase value.",
        ));
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn perf(impressions: u64, ctr: f64, duration: u64) -> PagePerformance {
        PagePerformance {
            slug: "page".to_string(),
            impressions,
            clicks: (impressions as f64 * ctr) as u64,
            ctr,
            avg_session_duration: duration,
            last_updated: Utc::now(),
        }
    }

    fn report(performance: PagePerformance, recommendation: Recommendation) -> GraduationReport {
        GraduationReport {
            slug: "page".to_string(),
            performance,
            recommendation,
            reason: String::new(),
        }
    }

    #[test]
    fn test_criteria_require_all() {
        let criteria = GraduationCriteria::default();
        assert!(meets_graduation_criteria(&perf(1000, 0.03, 60), &criteria));
        assert!(!meets_graduation_criteria(&perf(999, 0.5, 600), &criteria));
        assert!(!meets_graduation_criteria(&perf(5000, 0.02, 600), &criteria));
        assert!(!meets_graduation_criteria(&perf(5000, 0.5, 59), &criteria));
    }

    #[test]
    fn test_non_promoted_get_no_actions() {
        let r = report(perf(5000, 0.1, 300), Recommendation::Monitor);
        assert!(suggest_promotion_actions(&r).is_empty());
    }

    #[test]
    fn test_strong_page_gets_every_action() {
        let r = report(perf(4000, 0.06, 150), Recommendation::Promote);
        let kinds: Vec<PromotionKind> = suggest_promotion_actions(&r).iter().map(|a| a.action).collect();
        assert_eq!(
            kinds,
            [PromotionKind::ExpandContent, PromotionKind::AddVisuals, PromotionKind::CreateSeries]
        );
    }

    #[test]
    fn test_default_action_is_examples() {
        let r = report(perf(1200, 0.04, 70), Recommendation::Promote);
        let actions = suggest_promotion_actions(&r);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action, PromotionKind::AddExamples);
        assert_eq!(actions[0].priority, ActionPriority::Low);
    }
}
