//! Default values for pseo configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Quality Defaults
// ============================================================================

/// Minimum number of sections a page must carry.
pub const DEFAULT_MIN_SECTIONS: usize = 4;

/// Minimum length of each section, in characters.
pub const DEFAULT_MIN_SECTION_LENGTH: usize = 100;

/// Minimum combined length of all sections, in characters.
pub const DEFAULT_MIN_TOTAL_LENGTH: usize = 800;

/// Score at or above which a page passes the gate.
pub const PASSING_SCORE: u32 = 60;

/// Score below which a page is treated as nonexistent.
pub const NOT_FOUND_SCORE: u32 = 40;

/// Substrings that mark placeholder or boilerplate content.
/// Matched case-insensitively.
pub const DEFAULT_FORBIDDEN_PHRASES: &[&str] = &[
    "lorem ipsum",
    "coming soon",
    "to be determined",
    "placeholder",
    "insert text here",
    "example content",
    "TODO",
    "FIXME",
    "sample text",
    "click here to learn more",
    "contact us for more information",
];

/// Inclusive title length bounds, in characters.
pub const TITLE_LENGTH_RANGE: (usize, usize) = (20, 70);

/// Inclusive description length bounds, in characters.
pub const DESCRIPTION_LENGTH_RANGE: (usize, usize) = (100, 160);

// ============================================================================
// Link Defaults
// ============================================================================

pub const DEFAULT_PARENT_HUB_LINKS: usize = 1;
pub const DEFAULT_SIBLING_LINKS: usize = 5;
pub const DEFAULT_CROSS_CLUSTER_LINKS: usize = 3;
pub const DEFAULT_DEPTH_LINKS: usize = 2;
pub const DEFAULT_MAX_TOTAL_LINKS: usize = 15;

// ============================================================================
// Sitemap Defaults
// ============================================================================

/// Public origin used for canonical URLs and sitemap locations.
pub const DEFAULT_BASE_URL: &str = "https://neuronai.com";

/// Maximum URLs per programmatic sitemap chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 25_000;

/// `Cache-Control` value for sitemap responses.
pub const SITEMAP_CACHE_CONTROL: &str = "public, max-age=3600, s-maxage=86400";

// ============================================================================
// Graduation Defaults
// ============================================================================

pub const DEFAULT_MIN_IMPRESSIONS: u64 = 1000;

/// Minimum click-through rate, as a fraction (3%).
pub const DEFAULT_MIN_CTR: f64 = 0.03;

/// Minimum average session duration, in seconds.
pub const DEFAULT_MIN_SESSION_DURATION: u64 = 60;

/// Analytics lookback window, in days.
pub const DEFAULT_PERIOD_DAYS: u32 = 30;

// ============================================================================
// Server Defaults
// ============================================================================

/// Default port for `pseo serve`.
pub const DEFAULT_SERVER_PORT: u16 = 3333;
