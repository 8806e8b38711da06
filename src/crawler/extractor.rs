//! Page content extraction
//!
//! This module turns fetched page content into the two things the engine
//! needs: the plain text for indexing and the raw hyperlink targets in
//! document order. Extraction never fails: non-HTML content degrades to a
//! raw text passthrough with no links, because an html5ever parse of plain
//! text lands the content in the synthesized body as text nodes.

use scraper::{Html, Selector};

/// Extracted information from a fetched page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Plain text content, whitespace-normalized
    pub text: String,

    /// Raw href values of `<a>` tags, in document order, unresolved
    pub links: Vec<String>,
}

/// Extracts plain text and raw link targets from page content.
///
/// Text nodes are joined with single spaces so words separated only by tag
/// boundaries do not run together. Hrefs are returned exactly as written in
/// the document; resolution against a base URL is the resolver's job.
///
/// # Example
///
/// ```
/// use sitegrep::crawler::extract_page;
///
/// let page = extract_page(r#"<html><body><p>hello</p><a href="/about">About</a></body></html>"#);
/// assert!(page.text.contains("hello"));
/// assert_eq!(page.links, vec!["/about"]);
/// ```
pub fn extract_page(content: &str) -> ExtractedPage {
    let document = Html::parse_document(content);

    ExtractedPage {
        text: extract_text(&document),
        links: extract_links(&document),
    }
}

/// Collects all text nodes in the document into one whitespace-normalized
/// string
fn extract_text(document: &Html) -> String {
    let mut words: Vec<&str> = Vec::new();
    for text in document.root_element().text() {
        words.extend(text.split_whitespace());
    }
    words.join(" ")
}

/// Collects raw href attribute values of `<a>` tags in document order
fn extract_links(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
