//! Sitemap chunking and XML rendering.
//!
//! Programmatic pages are split into fixed-size chunks addressed by a 1-based
//! id. Only pages that pass the quality gate are listed. The sitemap index
//! enumerates chunks from the total taxonomy size, so it can reference a
//! trailing chunk that turns out to be empty once low-quality pages are
//! filtered out; requesting that chunk yields `None`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SitemapConfig;
use crate::page::PseoPage;
use crate::taxonomy::Taxonomy;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SitemapError {
    #[error("Invalid sitemap ID: {0}")]
    InvalidChunkId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFrequency,
    pub priority: f32,
}

impl SitemapEntry {
    /// Entry for a generated page.
    pub fn for_page(page: &PseoPage, origin: &str) -> Self {
        Self {
            loc: format!("{origin}/ai/{}", page.slug),
            lastmod: page.last_modified.format("%Y-%m-%d").to_string(),
            changefreq: ChangeFrequency::Monthly,
            priority: 0.6,
        }
    }
}

/// A page of the programmatic sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapChunk {
    /// 1-based
    pub id: usize,
    pub entries: Vec<SitemapEntry>,
    /// Qualified pages across all chunks
    pub total_pages: usize,
}

impl SitemapChunk {
    pub fn to_xml(&self) -> String {
        render_urlset(&self.entries)
    }
}

/// Parse a chunk id from a path segment such as `3` or `3.xml`.
pub fn parse_chunk_id(raw: &str) -> Result<usize, SitemapError> {
    let clean = raw.strip_suffix(".xml").unwrap_or(raw);
    match clean.parse::<usize>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(SitemapError::InvalidChunkId(raw.to_string())),
    }
}

/// Number of chunks needed for `total_pages`.
pub fn chunk_count(total_pages: usize, chunk_size: usize) -> usize {
    if chunk_size == 0 {
        return 0;
    }
    total_pages.div_ceil(chunk_size)
}

/// Slice chunk `id` out of the qualified pages.
///
/// Returns `None` when the chunk starts past the last page.
pub fn chunk_pages(pages: &[PseoPage], id: usize, config: &SitemapConfig) -> Option<SitemapChunk> {
    if id == 0 || config.chunk_size == 0 {
        return None;
    }
    let start = (id - 1).checked_mul(config.chunk_size)?;
    if start >= pages.len() {
        return None;
    }
    let end = start.saturating_add(config.chunk_size).min(pages.len());

    let origin = config.origin();
    Some(SitemapChunk {
        id,
        entries: pages[start..end]
            .iter()
            .map(|page| SitemapEntry::for_page(page, origin))
            .collect(),
        total_pages: pages.len(),
    })
}

/// Home page, the AI landing page, and one entry per category hub.
pub fn static_entries(taxonomy: &Taxonomy, origin: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let lastmod = iso_timestamp(now);
    let entry = |path: String, changefreq, priority| SitemapEntry {
        loc: format!("{origin}{path}"),
        lastmod: lastmod.clone(),
        changefreq,
        priority,
    };

    let mut entries = vec![
        entry("/".to_string(), ChangeFrequency::Daily, 1.0),
        entry("/ai".to_string(), ChangeFrequency::Daily, 0.9),
    ];
    entries.extend(taxonomy.categories().iter().map(|category| {
        entry(
            format!("/ai/category/{}", category.id),
            ChangeFrequency::Weekly,
            0.8,
        )
    }));
    entries
}

/// Render a `<urlset>` document.
pub fn render_urlset(entries: &[SitemapEntry]) -> String {
    let urls = entries
        .iter()
        .map(|e| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
                xml_escape(&e.loc),
                xml_escape(&e.lastmod),
                e.changefreq.as_str(),
                e.priority
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{SITEMAP_NS}\">\n{urls}\n</urlset>"
    )
}

/// Render the `<sitemapindex>` referencing the static sitemap and every
/// programmatic chunk.
pub fn render_index(chunks: usize, origin: &str, now: DateTime<Utc>) -> String {
    let lastmod = iso_timestamp(now);
    let locations = std::iter::once(format!("{origin}/sitemaps/static.xml"))
        .chain((1..=chunks).map(|i| format!("{origin}/sitemaps/programmatic/{i}.xml")));

    let sitemaps = locations
        .map(|loc| {
            format!(
                "  <sitemap>\n    <loc>{}</loc>\n    <lastmod>{lastmod}</lastmod>\n  </sitemap>",
                xml_escape(&loc)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sitemapindex xmlns=\"{SITEMAP_NS}\">\n{sitemaps}\n</sitemapindex>"
    )
}

fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Escape text for XML element content.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_chunk_id() {
        assert_eq!(parse_chunk_id("1"), Ok(1));
        assert_eq!(parse_chunk_id("3.xml"), Ok(3));
        assert_eq!(
            parse_chunk_id("0"),
            Err(SitemapError::InvalidChunkId("0".to_string()))
        );
        assert!(parse_chunk_id("-2").is_err());
        assert!(parse_chunk_id("abc.xml").is_err());
        assert!(parse_chunk_id("").is_err());
    }

    #[test]
    fn test_chunk_count() {
        assert_eq!(chunk_count(0, 25_000), 0);
        assert_eq!(chunk_count(71, 25_000), 1);
        assert_eq!(chunk_count(50_000, 25_000), 2);
        assert_eq!(chunk_count(50_001, 25_000), 3);
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a&b<c>"), "a&amp;b&lt;c&gt;");
        assert_eq!(xml_escape("\"'"), "&quot;&apos;");
    }

    #[test]
    fn test_render_urlset() {
        let entries = vec![SitemapEntry {
            loc: "https://example.org/ai/x".to_string(),
            lastmod: "2024-03-01".to_string(),
            changefreq: ChangeFrequency::Monthly,
            priority: 0.6,
        }];
        let xml = render_urlset(&entries);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.org/ai/x</loc>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.6</priority>"));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_render_index() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let xml = render_index(2, "https://example.org", now);
        assert!(xml.contains("<loc>https://example.org/sitemaps/static.xml</loc>"));
        assert!(xml.contains("<loc>https://example.org/sitemaps/programmatic/1.xml</loc>"));
        assert!(xml.contains("<loc>https://example.org/sitemaps/programmatic/2.xml</loc>"));
        assert!(!xml.contains("programmatic/3.xml"));
        assert!(xml.contains("<lastmod>2025-06-01T12:00:00.000Z</lastmod>"));
        assert_eq!(xml.matches("<sitemap>").count(), 3);
    }

    #[test]
    fn test_priority_formatting() {
        assert_eq!(format!("{}", 1.0f32), "1");
        assert_eq!(format!("{}", 0.8f32), "0.8");
    }
}
