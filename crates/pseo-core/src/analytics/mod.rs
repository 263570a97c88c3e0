//! Page performance tracking.
//!
//! Graduation decisions only see pages through [`AnalyticsProvider`]. The
//! bundled [`MockAnalyticsProvider`] derives stable fake numbers from the
//! slug hash; a deployment plugs in a provider backed by its search console
//! or web analytics.

mod error;
mod graduation;

pub use error::AnalyticsError;
pub use graduation::{
    generate_graduation_report, identify_graduation_candidates, meets_graduation_criteria,
    suggest_promotion_actions, ActionPriority, GraduationReport, PromotionAction,
    PromotionKind, Recommendation,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::hash::string_hash;

/// Traffic numbers for one page over a lookback window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePerformance {
    pub slug: String,
    pub impressions: u64,
    pub clicks: u64,
    /// `clicks / impressions`
    pub ctr: f64,
    /// Seconds
    pub avg_session_duration: u64,
    pub last_updated: DateTime<Utc>,
}

/// Source of page performance data.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Performance for one page, or `None` if the page is not tracked.
    async fn get_page_performance(
        &self,
        slug: &str,
        period_days: u32,
    ) -> Result<Option<PagePerformance>, AnalyticsError>;

    /// Performance for every tracked page.
    async fn get_all_page_performance(
        &self,
        period_days: u32,
    ) -> Result<Vec<PagePerformance>, AnalyticsError>;
}

#[async_trait]
impl AnalyticsProvider for Box<dyn AnalyticsProvider> {
    async fn get_page_performance(
        &self,
        slug: &str,
        period_days: u32,
    ) -> Result<Option<PagePerformance>, AnalyticsError> {
        (**self).get_page_performance(slug, period_days).await
    }

    async fn get_all_page_performance(
        &self,
        period_days: u32,
    ) -> Result<Vec<PagePerformance>, AnalyticsError> {
        (**self).get_all_page_performance(period_days).await
    }
}

// =============================================================================
// Mock provider
// =============================================================================

/// Deterministic stand-in for a real analytics backend.
///
/// Every slug gets numbers derived from its hash. `get_all_page_performance`
/// only reports on the slugs the provider was told to track.
#[derive(Debug, Clone, Default)]
pub struct MockAnalyticsProvider {
    tracked: Vec<String>,
}

impl MockAnalyticsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track these slugs for bulk queries.
    pub fn with_tracked_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracked: slugs.into_iter().map(Into::into).collect(),
        }
    }

    /// The numbers this provider reports for `slug`.
    pub fn performance_for(slug: &str) -> PagePerformance {
        let hash = u64::from(string_hash(slug));
        let impressions = hash % 5000 + 100;
        let rate = 0.01 + (hash % 10) as f64 / 100.0;
        let clicks = (impressions as f64 * rate).floor() as u64;

        PagePerformance {
            slug: slug.to_string(),
            impressions,
            clicks,
            ctr: clicks as f64 / impressions as f64,
            avg_session_duration: 30 + hash % 120,
            last_updated: Utc::now(),
        }
    }
}

#[async_trait]
impl AnalyticsProvider for MockAnalyticsProvider {
    async fn get_page_performance(
        &self,
        slug: &str,
        _period_days: u32,
    ) -> Result<Option<PagePerformance>, AnalyticsError> {
        Ok(Some(Self::performance_for(slug)))
    }

    async fn get_all_page_performance(
        &self,
        period_days: u32,
    ) -> Result<Vec<PagePerformance>, AnalyticsError> {
        let lookups = self
            .tracked
            .iter()
            .map(|slug| self.get_page_performance(slug, period_days));

        let mut all = Vec::with_capacity(self.tracked.len());
        for result in join_all(lookups).await {
            if let Some(performance) = result? {
                all.push(performance);
            }
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_numbers_follow_hash() {
        let slug = "what-is-supervised-learning";
        let hash = u64::from(string_hash(slug));
        let perf = MockAnalyticsProvider::performance_for(slug);

        assert_eq!(perf.impressions, hash % 5000 + 100);
        assert_eq!(perf.avg_session_duration, 30 + hash % 120);
        assert!(perf.clicks <= perf.impressions);
        assert!((perf.ctr - perf.clicks as f64 / perf.impressions as f64).abs() < 1e-12);
    }

    #[test]
    fn test_mock_numbers_for_empty_slug() {
        let perf = MockAnalyticsProvider::performance_for("");
        assert_eq!(perf.impressions, 100);
        assert_eq!(perf.clicks, 1);
        assert_eq!(perf.avg_session_duration, 30);
    }

    #[tokio::test]
    async fn test_untracked_provider_reports_nothing() {
        let provider = MockAnalyticsProvider::new();
        let all = provider.get_all_page_performance(30).await.unwrap();
        assert!(all.is_empty());

        let one = provider.get_page_performance("anything", 30).await.unwrap();
        assert!(one.is_some());
    }

    #[tokio::test]
    async fn test_tracked_slugs_keep_order() {
        let provider = MockAnalyticsProvider::with_tracked_slugs(["b", "a", "c"]);
        let all = provider.get_all_page_performance(30).await.unwrap();
        let slugs: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a", "c"]);
    }
}
