//! Text index module for sitegrep
//!
//! The index maps each visited URL to the plain text extracted from that
//! page. It is append-only during a crawl, preserves insertion order so that
//! iteration and search results are deterministic, and lives only for the
//! duration of one process.

mod search;

pub use search::search;

use std::collections::HashMap;

/// Mapping from absolute URL to extracted page text.
///
/// Keys are unique; inserting an existing URL again is a no-op, which keeps
/// the first crawl of a page authoritative. Insertion order is preserved for
/// deterministic iteration.
#[derive(Debug, Default)]
pub struct TextIndex {
    entries: HashMap<String, String>,
    order: Vec<String>,
}

impl TextIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a page's text under its URL.
    ///
    /// Returns true if the entry was inserted, false if the URL was already
    /// indexed (the existing text is kept).
    pub fn insert(&mut self, url: &str, text: String) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), text);
        self.order.push(url.to_string());
        true
    }

    /// Returns the indexed text for a URL, if present
    pub fn get(&self, url: &str) -> Option<&str> {
        self.entries.get(url).map(String::as_str)
    }

    /// Returns true if the URL has an index entry
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Number of indexed pages
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no pages have been indexed
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over (url, text) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(move |url| {
            let text = self
                .entries
                .get(url)
                .map(String::as_str)
                .unwrap_or_default();
            (url.as_str(), text)
        })
    }
}
