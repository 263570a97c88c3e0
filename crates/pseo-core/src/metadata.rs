//! Search-engine metadata for pages and category hubs.

use serde::{Deserialize, Serialize};

use crate::page::PseoPage;
use crate::taxonomy::Category;

/// Robots directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    /// Value for a `<meta name="robots">` tag.
    pub fn directive(&self) -> &'static str {
        match (self.index, self.follow) {
            (true, true) => "index, follow",
            (true, false) => "index, nofollow",
            (false, true) => "noindex, follow",
            (false, false) => "noindex, nofollow",
        }
    }
}

/// Head metadata for a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    pub robots: Robots,
    /// ISO date, same as the modified time for generated pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
}

impl PageMetadata {
    /// Metadata for a generated page. Pages left out of the sitemap are
    /// marked `noindex` but still followed.
    pub fn for_page(page: &PseoPage, origin: &str) -> Self {
        let date = page.last_modified.format("%Y-%m-%d").to_string();
        Self {
            title: page.title.clone(),
            description: page.description.clone(),
            keywords: Some(page.category.name.clone()),
            canonical_url: Some(format!("{origin}/ai/{}", page.slug)),
            robots: Robots {
                index: !page.exclude_from_sitemap,
                follow: true,
            },
            published_time: Some(date.clone()),
            modified_time: Some(date),
        }
    }

    /// Metadata for a category landing page.
    pub fn for_category(category: &Category, origin: &str) -> Self {
        Self {
            title: format!("{} Resources", category.name),
            description: category.description.clone(),
            keywords: Some(category.name.clone()),
            canonical_url: Some(format!("{origin}/ai/category/{}", category.id)),
            robots: Robots {
                index: true,
                follow: true,
            },
            published_time: None,
            modified_time: None,
        }
    }

    /// Metadata served alongside a 404.
    pub fn not_found() -> Self {
        Self {
            title: "Not Found".to_string(),
            description: "The requested page could not be found.".to_string(),
            keywords: None,
            canonical_url: None,
            robots: Robots {
                index: false,
                follow: true,
            },
            published_time: None,
            modified_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_directive() {
        let indexed = Robots { index: true, follow: true };
        let hidden = Robots { index: false, follow: true };
        assert_eq!(indexed.directive(), "index, follow");
        assert_eq!(hidden.directive(), "noindex, follow");
    }

    #[test]
    fn test_not_found() {
        let meta = PageMetadata::not_found();
        assert_eq!(meta.title, "Not Found");
        assert_eq!(meta.description, "The requested page could not be found.");
        assert!(meta.canonical_url.is_none());
        assert!(!meta.robots.index);
    }
}
