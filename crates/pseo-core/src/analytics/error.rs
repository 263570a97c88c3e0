use thiserror::Error;

/// Errors that can occur while fetching page performance.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Analytics provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider returned malformed data for '{slug}': {message}")]
    InvalidData { slug: String, message: String },

    #[error("Rate limited. Try again later.")]
    RateLimited,
}
