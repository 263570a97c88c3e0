//! HTML template rendering for served pages.
//!
//! Templates are stored as separate files for maintainability:
//! - `templates/page.html` - document shell
//! - `templates/styles.css` - CSS styles
//!
//! Files are embedded at compile time using `include_str!`.

use pseo_core::hub::{CategoryHub, HubOverview};
use pseo_core::metadata::{PageMetadata, Robots};
use pseo_core::PseoPage;

// Embed template files at compile time
const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
const STYLES: &str = include_str!("templates/styles.css");

/// Render a generated page.
pub fn render_page(page: &PseoPage, metadata: &PageMetadata) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "    <p class=\"breadcrumb\"><a href=\"/ai/category/{}\">{}</a></p>\n",
        html_escape(&page.category.id),
        html_escape(&page.category.name)
    ));
    body.push_str(&format!("    <h1>{}</h1>\n", html_escape(&page.title)));
    body.push_str(&format!(
        "    <p class=\"lede\">{}</p>\n",
        html_escape(&page.description)
    ));
    body.push_str(&format!(
        "    <p class=\"meta\">Updated <time datetime=\"{date}\">{date}</time></p>\n",
        date = page.last_modified.format("%Y-%m-%d")
    ));

    for section in &page.sections {
        body.push_str(&format!(
            "    <section id=\"{}\">\n      <h2>{}</h2>\n{}    </section>\n",
            html_escape(&section.id),
            html_escape(&section.title),
            render_content(&section.content)
        ));
    }

    if !page.related_links.is_empty() {
        body.push_str("    <aside class=\"related\">\n      <h2>Related</h2>\n      <ul>\n");
        for link in &page.related_links {
            body.push_str(&format!(
                "        <li><a href=\"/ai/{}\">{}</a><span class=\"tag\">{}</span></li>\n",
                html_escape(&link.slug),
                html_escape(&link.title),
                link.link_type.as_str()
            ));
        }
        body.push_str("      </ul>\n    </aside>\n");
    }

    render_document(metadata, &body)
}

/// Render the 404 page.
pub fn render_not_found(metadata: &PageMetadata) -> String {
    let body = format!(
        "    <h1>{}</h1>\n    <p>{}</p>\n    <p><a href=\"/\">Browse all topics</a></p>\n",
        html_escape(&metadata.title),
        html_escape(&metadata.description)
    );
    render_document(metadata, &body)
}

/// Render one category hub: its clusters and the pages in each.
pub fn render_category(hub: &CategoryHub<'_>, metadata: &PageMetadata) -> String {
    let mut body = format!(
        "    <p class=\"breadcrumb\"><a href=\"/ai\">AI Topics</a></p>\n    <h1>{}</h1>\n    <p class=\"lede\">{}</p>\n    <p class=\"meta\">{} guides</p>\n",
        html_escape(&hub.category.name),
        html_escape(&hub.category.description),
        hub.total_intents
    );

    for cluster in &hub.clusters {
        body.push_str(&format!(
            "    <section id=\"{}\">\n      <h2>{}</h2>\n      <ul class=\"hub-list\">\n",
            html_escape(&cluster.id),
            html_escape(&cluster.name)
        ));
        for intent in &cluster.intents {
            body.push_str(&format!(
                "        <li><a href=\"/ai/{}\">{}</a></li>\n",
                html_escape(&intent.slug),
                html_escape(&intent.intent)
            ));
        }
        body.push_str("      </ul>\n    </section>\n");
    }

    render_document(metadata, &body)
}

/// Render the topic overview, grouped by category type.
pub fn render_index(overview: &HubOverview<'_>) -> String {
    let mut body = format!(
        "    <h1>AI Topics</h1>\n    <p class=\"lede\">{} guides across {} categories.</p>\n",
        overview.total_pages,
        overview.groups.iter().map(|g| g.hubs.len()).sum::<usize>()
    );

    for group in &overview.groups {
        body.push_str(&format!(
            "    <section class=\"hub-group\">\n      <h2>{}</h2>\n",
            group.category_type.as_str().replace('-', " ")
        ));
        for hub in &group.hubs {
            body.push_str(&format!(
                "      <h3><a href=\"/ai/category/{}\">{}</a></h3>\n      <p>{}</p>\n      <ul class=\"hub-list\">\n",
                html_escape(&hub.category.id),
                html_escape(&hub.category.name),
                html_escape(&hub.category.description)
            ));
            for intent in hub.clusters.iter().flat_map(|c| c.intents.iter()) {
                body.push_str(&format!(
                    "        <li><a href=\"/ai/{}\">{}</a></li>\n",
                    html_escape(&intent.slug),
                    html_escape(&intent.intent)
                ));
            }
            body.push_str("      </ul>\n");
        }
        body.push_str("    </section>\n");
    }

    let metadata = PageMetadata {
        title: "AI Topics".to_string(),
        description: "Guides to AI technologies, industries and concepts.".to_string(),
        keywords: None,
        canonical_url: None,
        robots: Robots {
            index: true,
            follow: true,
        },
        published_time: None,
        modified_time: None,
    };
    render_document(&metadata, &body)
}

/// Fill the document shell.
///
/// Placeholders:
/// - `{{TITLE}}`, `{{DESCRIPTION}}`, `{{ROBOTS}}` - head metadata
/// - `{{HEAD_EXTRA}}` - canonical link, if any
/// - `{{STYLES}}` - CSS styles
/// - `{{BODY}}` - main content
fn render_document(metadata: &PageMetadata, body: &str) -> String {
    let head_extra = metadata
        .canonical_url
        .as_deref()
        .map(|url| format!("<link rel=\"canonical\" href=\"{}\">", html_escape(url)))
        .unwrap_or_default();

    PAGE_TEMPLATE
        .replace("{{TITLE}}", &html_escape(&metadata.title))
        .replace("{{DESCRIPTION}}", &html_escape(&metadata.description))
        .replace("{{ROBOTS}}", metadata.robots.directive())
        .replace("{{HEAD_EXTRA}}", &head_extra)
        .replace("{{STYLES}}", STYLES)
        .replace("{{BODY}}", body)
}

/// Render section text: blank-line separated blocks, `- ` bullet lists,
/// `|` tables as preformatted text, and `**bold**` spans.
fn render_content(content: &str) -> String {
    let mut html = String::new();

    for block in content.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        let lines: Vec<&str> = block.lines().map(str::trim).collect();

        if lines.iter().all(|l| l.starts_with("- ")) {
            html.push_str("      <ul>\n");
            for line in &lines {
                html.push_str(&format!("        <li>{}</li>\n", render_inline(&line[2..])));
            }
            html.push_str("      </ul>\n");
        } else if lines.iter().all(|l| l.starts_with('|')) {
            html.push_str(&format!("      <pre>{}</pre>\n", html_escape(block)));
        } else {
            let text = lines
                .iter()
                .map(|l| render_inline(l))
                .collect::<Vec<_>>()
                .join("<br>\n");
            html.push_str(&format!("      <p>{text}</p>\n"));
        }
    }

    html
}

/// Escape a line and turn balanced `**` pairs into `<strong>`.
fn render_inline(line: &str) -> String {
    let escaped = html_escape(line);
    let parts: Vec<&str> = escaped.split("**").collect();
    if parts.len() % 2 == 0 {
        return escaped;
    }

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i % 2 == 1 {
                format!("<strong>{part}</strong>")
            } else {
                part.to_string()
            }
        })
        .collect()
}

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_render_inline_bold() {
        assert_eq!(render_inline("**Key**: value"), "<strong>Key</strong>: value");
        assert_eq!(render_inline("unbalanced ** marker"), "unbalanced ** marker");
    }

    #[test]
    fn test_render_content_blocks() {
        let html = render_content("Intro line.\n\n- **One**: first\n- Two\n\n| a | b |\n|---|---|");
        assert!(html.contains("<p>Intro line.</p>"));
        assert!(html.contains("<li><strong>One</strong>: first</li>"));
        assert!(html.contains("<li>Two</li>"));
        assert!(html.contains("<pre>| a | b |\n|---|---|</pre>"));
    }

    #[test]
    fn test_category_links_back_to_overview() {
        let taxonomy = pseo_core::Taxonomy::builtin().unwrap();
        let hub = CategoryHub::build(&taxonomy, "nlp").unwrap();
        let metadata = PageMetadata::for_category(hub.category, "https://neuronai.com");

        let html = render_category(&hub, &metadata);
        assert!(html.contains("<a href=\"/ai\">AI Topics</a>"));
        assert!(html.contains("rel=\"canonical\" href=\"https://neuronai.com/ai/category/nlp\""));
        for intent in hub.clusters.iter().flat_map(|c| c.intents.iter()) {
            assert!(html.contains(&format!("href=\"/ai/{}\"", intent.slug)));
        }
    }

    #[test]
    fn test_not_found_is_noindex() {
        let html = render_not_found(&PageMetadata::not_found());
        assert!(html.contains("<title>Not Found</title>"));
        assert!(html.contains("content=\"noindex, follow\""));
        assert!(!html.contains("rel=\"canonical\""));
    }
}
