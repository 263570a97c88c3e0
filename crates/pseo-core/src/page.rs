use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::taxonomy::{Category, IntentType};

/// A synthesized page.
///
/// Built fresh on every request from the slug and the static taxonomy;
/// never cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PseoPage {
    /// Slug the page was generated for
    pub slug: String,
    pub title: String,
    /// Meta description
    pub description: String,
    /// Owning category
    pub category: Category,
    pub intent_type: IntentType,
    /// Body sections, in template order
    pub sections: Vec<PageSection>,
    /// Internal links, in priority order
    pub related_links: Vec<RelatedLink>,
    /// Deterministic pseudo-recency date
    pub last_modified: NaiveDate,
    /// Quality score in `0..=100`, computed at generation time
    pub quality_score: u32,
    pub exclude_from_sitemap: bool,
    /// Set by editorial tooling; generation always leaves it false
    pub graduation_candidate: bool,
}

impl PseoPage {
    /// Total characters of section content.
    pub fn content_length(&self) -> usize {
        self.sections.iter().map(|s| s.content.chars().count()).sum()
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&PageSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Converts the page to markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", self.title));
        md.push_str(&format!("> {}\n\n", self.description));
        md.push_str(&format!(
            "_{} · updated {}_\n\n",
            self.category.name,
            self.last_modified.format("%Y-%m-%d")
        ));

        for section in &self.sections {
            md.push_str(&format!("## {}\n\n", section.title));
            md.push_str(&section.content);
            md.push_str("\n\n");
        }

        if !self.related_links.is_empty() {
            md.push_str("## Further Reading\n\n");
            for link in &self.related_links {
                md.push_str(&format!(
                    "- [{}](/ai/{}) ({})\n",
                    link.title,
                    link.slug,
                    link.link_type.as_str()
                ));
            }
        }

        md
    }
}

/// One body section of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSection {
    pub id: String,
    pub title: String,
    /// Plain formatted text (paragraphs, simple lists and tables)
    pub content: String,
}

impl PageSection {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// An internal link to another page or hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    /// Target slug; hubs use `category/{id}`
    pub slug: String,
    pub title: String,
    pub link_type: LinkType,
}

/// Relation between a page and a linked page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    /// The owning category's hub
    ParentHub,
    /// Another intent in the same cluster
    Sibling,
    /// An intent in a related category
    CrossCluster,
    /// A more specific intent in the same category
    Depth,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::ParentHub => "parent-hub",
            LinkType::Sibling => "sibling",
            LinkType::CrossCluster => "cross-cluster",
            LinkType::Depth => "depth",
        }
    }
}

/// Renders a slug as a title: hyphens become spaces, each word capitalized.
///
/// `what-is-supervised-learning` becomes `What Is Supervised Learning`.
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_to_title() {
        assert_eq!(slug_to_title("what-is-supervised-learning"), "What Is Supervised Learning");
        assert_eq!(slug_to_title("gpt-vs-claude-vs-gemini"), "Gpt Vs Claude Vs Gemini");
        assert_eq!(slug_to_title("single"), "Single");
        assert_eq!(slug_to_title(""), "");
    }

    #[test]
    fn test_link_type_serializes_kebab_case() {
        let json = serde_json::to_string(&LinkType::CrossCluster).unwrap();
        assert_eq!(json, "\"cross-cluster\"");
        assert_eq!(LinkType::ParentHub.as_str(), "parent-hub");
    }
}
