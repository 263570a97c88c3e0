//! Configuration management for pseo.
//!
//! Configuration is loaded from the first source found:
//! 1. Project-local `pseo.toml` file
//! 2. User config `~/.config/pseo/config.toml`
//! 3. Built-in defaults
//!
//! The library never reads the environment; the `pseo` binary applies its
//! `PSEO_*` overrides on top of whatever was loaded here.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quality gate thresholds.
    pub quality: QualityRules,

    /// Per-kind internal link limits.
    pub links: LinkLimits,

    /// Sitemap and canonical URL settings.
    pub sitemap: SitemapConfig,

    /// Thresholds for promoting a page to editorial status.
    pub graduation: GraduationCriteria,

    /// HTTP server settings.
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./pseo.toml` (project local)
    /// 2. `~/.config/pseo/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("pseo.toml").exists() {
            return Self::from_file("pseo.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("pseo").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the pipeline degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sitemap.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "sitemap.chunk_size must be at least 1".to_string(),
            ));
        }
        if self.links.max_total == 0 {
            return Err(ConfigError::Invalid(
                "links.max_total must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.graduation.min_ctr) {
            return Err(ConfigError::Invalid(format!(
                "graduation.min_ctr must be a fraction between 0 and 1, got {}",
                self.graduation.min_ctr
            )));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Structural thresholds for the quality gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityRules {
    /// Minimum number of sections.
    pub min_sections: usize,

    /// Minimum characters per section.
    pub min_section_length: usize,

    /// Minimum characters across all sections.
    pub min_total_length: usize,

    /// Case-insensitive substrings that fail a page outright.
    pub forbidden_phrases: Vec<String>,
}

impl Default for QualityRules {
    fn default() -> Self {
        Self {
            min_sections: DEFAULT_MIN_SECTIONS,
            min_section_length: DEFAULT_MIN_SECTION_LENGTH,
            min_total_length: DEFAULT_MIN_TOTAL_LENGTH,
            forbidden_phrases: DEFAULT_FORBIDDEN_PHRASES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Upper bounds on each kind of related link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkLimits {
    pub parent_hub: usize,
    pub siblings: usize,
    pub cross_cluster: usize,
    pub depth: usize,
    /// Applied after all phases; earlier phases win.
    pub max_total: usize,
}

impl Default for LinkLimits {
    fn default() -> Self {
        Self {
            parent_hub: DEFAULT_PARENT_HUB_LINKS,
            siblings: DEFAULT_SIBLING_LINKS,
            cross_cluster: DEFAULT_CROSS_CLUSTER_LINKS,
            depth: DEFAULT_DEPTH_LINKS,
            max_total: DEFAULT_MAX_TOTAL_LINKS,
        }
    }
}

/// Sitemap configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Public origin, without a trailing slash.
    pub base_url: String,

    /// URLs per programmatic chunk.
    pub chunk_size: usize,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SitemapConfig {
    /// Base URL with any trailing slash removed.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Thresholds a page must meet to be considered for editorial promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraduationCriteria {
    pub min_impressions: u64,

    /// Click-through rate as a fraction.
    pub min_ctr: f64,

    /// Seconds.
    pub min_session_duration: u64,

    pub period_days: u32,
}

impl Default for GraduationCriteria {
    fn default() -> Self {
        Self {
            min_impressions: DEFAULT_MIN_IMPRESSIONS,
            min_ctr: DEFAULT_MIN_CTR,
            min_session_duration: DEFAULT_MIN_SESSION_DURATION,
            period_days: DEFAULT_PERIOD_DAYS,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    /// Open the site in a browser once the server is listening.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            open_browser: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.quality.min_sections, DEFAULT_MIN_SECTIONS);
        assert_eq!(config.quality.forbidden_phrases.len(), 11);
        assert_eq!(config.links.max_total, DEFAULT_MAX_TOTAL_LINKS);
        assert_eq!(config.sitemap.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[quality]"));
        assert!(toml_str.contains("[links]"));
        assert!(toml_str.contains("[sitemap]"));
        assert!(toml_str.contains("[graduation]"));
        assert!(toml_str.contains("[server]"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[quality]
min_sections = 6

[links]
siblings = 2

[sitemap]
base_url = "https://example.org/"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quality.min_sections, 6);
        assert_eq!(config.quality.min_total_length, DEFAULT_MIN_TOTAL_LENGTH);
        assert_eq!(config.links.siblings, 2);
        assert_eq!(config.links.depth, DEFAULT_DEPTH_LINKS);
        assert_eq!(config.sitemap.origin(), "https://example.org");
        assert_eq!(config.sitemap.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_validate_rejects_zero_chunk() {
        let mut config = Config::default();
        config.sitemap.chunk_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.links.max_total = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
