//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with uniform error collapsing
//! - Plain-text and link extraction from page content
//! - The work-list traversal engine with visited-set dedup and scope
//!   filtering

mod engine;
mod extractor;
mod fetcher;

pub use engine::{CrawlOutcome, Crawler};
pub use extractor::{extract_page, ExtractedPage};
pub use fetcher::{build_http_client, fetch_page};

use crate::config::Config;
use crate::Result;

/// Runs a complete crawl from the configured start URL.
///
/// This is the main entry point for library callers. It builds the HTTP
/// client, walks the site, and returns the populated index together with the
/// visited set and per-URL failure reports.
pub async fn crawl(config: &Config) -> Result<CrawlOutcome> {
    let crawler = Crawler::new(config)?;
    let start = config.start_url()?;
    let scope = config.scope_base()?;
    Ok(crawler.crawl(start, scope).await)
}
