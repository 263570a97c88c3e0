use std::io::Write;

use pseo_core::config::{
    ConfigError, DEFAULT_BASE_URL, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_TOTAL_LINKS,
    DEFAULT_MIN_SECTIONS, DEFAULT_SERVER_PORT,
};
use pseo_core::Config;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.quality.min_sections, DEFAULT_MIN_SECTIONS);
    assert_eq!(config.links.max_total, DEFAULT_MAX_TOTAL_LINKS);
    assert_eq!(config.sitemap.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.sitemap.chunk_size, DEFAULT_CHUNK_SIZE);
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
fn test_from_file_partial_sections() {
    let file = write_config(
        r#"
[sitemap]
base_url = "https://example.org/"
chunk_size = 10

[links]
siblings = 2
"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.sitemap.chunk_size, 10);
    assert_eq!(config.sitemap.origin(), "https://example.org");
    assert_eq!(config.links.siblings, 2);
    assert_eq!(config.links.max_total, DEFAULT_MAX_TOTAL_LINKS);
    assert_eq!(config.quality.min_sections, DEFAULT_MIN_SECTIONS);
}

#[test]
fn test_from_file_rejects_zero_chunk_size() {
    let file = write_config("[sitemap]\nchunk_size = 0\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_from_file_rejects_bad_toml() {
    let file = write_config("[sitemap\nchunk_size = ");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError(_)));
}

#[test]
fn test_default_config_string_roundtrips() {
    let file = write_config(&Config::default_config_string());
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.sitemap.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        config.quality.forbidden_phrases,
        Config::default().quality.forbidden_phrases
    );
}
