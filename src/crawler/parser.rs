//! HTML parser for extracting links and metadata
//!
//! This module turns a fetched page body into:
//! - The set of absolute HTTP(S) links from `<a href>` elements
//! - The page title, for the crawl report
//!
//! Parsing is delegated to `scraper` (html5ever), which recovers from any
//! markup the way a browser would, so extraction never fails: broken HTML
//! yields whatever links could be recovered, possibly none.

use crate::url::resolve_href;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Distinct absolute links found on the page, in lexicographic order
    pub links: BTreeSet<Url>,
}

/// Parses HTML content and extracts links and metadata
///
/// # Link Extraction Rules
///
/// - Only the `href` of `<a>` elements is considered; `<link>`, `<script>`,
///   `<img>` and script-embedded URLs are ignored
/// - Each href is resolved against `base_url`
/// - Only `http` and `https` results are kept
/// - Duplicates collapse to a single entry
///
/// # Example
///
/// ```
/// use ripple_crawl::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &base_url);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.links.len(), 1);
/// ```
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        links: collect_anchor_links(&document, base_url),
    }
}

/// Extracts the set of crawlable links from an HTML document
///
/// This is the pure `html + base URL -> set of URL` function the crawl
/// loop depends on.
pub fn extract_links(html: &str, base_url: &Url) -> BTreeSet<Url> {
    collect_anchor_links(&Html::parse_document(html), base_url)
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn collect_anchor_links(document: &Html, base_url: &Url) -> BTreeSet<Url> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return BTreeSet::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(href, base_url))
        .collect()
}
