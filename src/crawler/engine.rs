//! Crawl engine - traversal orchestration
//!
//! The engine walks the link graph from a start URL with an explicit
//! work-list instead of recursion, so call depth never bounds the crawl and
//! the frontier could later be handed to worker tasks. Links are pushed onto
//! the stack in reverse so pop order follows document order, which keeps
//! visitation sequences deterministic for a given site.
//!
//! Dedup discipline: a URL is checked against and inserted into the visited
//! set in a single `insert` call at the moment it is dequeued, so every URL
//! is fetched at most once per crawl regardless of how many inbound links
//! reference it. Cycles terminate for the same reason.

use crate::config::Config;
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::index::TextIndex;
use crate::url::{in_scope, resolve, ScopePolicy};
use crate::{FetchError, Result};
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// The result of one crawl invocation
#[derive(Debug)]
pub struct CrawlOutcome {
    /// URL -> extracted text for every successfully fetched page
    pub index: TextIndex,

    /// Every URL that was dequeued for fetching, successful or not
    pub visited: HashSet<String>,

    /// Per-URL fetch failures; a failure never aborts the rest of the crawl
    pub failures: Vec<FetchError>,
}

/// Crawl engine carrying the HTTP client and traversal limits
pub struct Crawler {
    client: Client,
    policy: ScopePolicy,
    max_pages: usize,
}

impl Crawler {
    /// Creates a crawler from the configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = build_http_client(&config.http)?;
        Ok(Self {
            client,
            policy: config.crawler.scope_policy,
            max_pages: config.crawler.max_pages,
        })
    }

    /// Creates a crawler around an existing HTTP client
    pub fn with_client(client: Client, policy: ScopePolicy, max_pages: usize) -> Self {
        Self {
            client,
            policy,
            max_pages,
        }
    }

    /// Crawls the site reachable from `start`, restricted to `scope_base`
    /// (or the start URL when no explicit base is given).
    ///
    /// Populates and returns the text index alongside the visited set and
    /// the failure report. Fetch and link errors are local to their node:
    /// a dead link is recorded and its siblings are still attempted.
    pub async fn crawl(&self, start: Url, scope_base: Option<Url>) -> CrawlOutcome {
        let scope = scope_base.unwrap_or_else(|| start.clone());
        tracing::info!(start = %start, scope = %scope, policy = ?self.policy, "starting crawl");

        let mut index = TextIndex::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut failures: Vec<FetchError> = Vec::new();
        let mut frontier: Vec<Url> = vec![start];

        while let Some(url) = frontier.pop() {
            // Page ceiling: stop discovering once the fetch budget is spent
            if index.len() + failures.len() >= self.max_pages {
                tracing::info!(
                    max_pages = self.max_pages,
                    remaining = frontier.len(),
                    "page ceiling reached, halting discovery"
                );
                break;
            }

            // Check-and-mark in one call; a repeat dequeue is a no-op
            if !visited.insert(url.to_string()) {
                continue;
            }

            match fetch_page(&self.client, url.as_str()).await {
                Ok(body) => {
                    let page = extract_page(&body);
                    tracing::debug!(url = %url, links = page.links.len(), "indexed page");

                    // Indexed even when the text is empty or the content was
                    // not HTML; every successful fetch gets an entry.
                    index.insert(url.as_str(), page.text);

                    // Reverse push so the first link in the document is the
                    // next URL dequeued.
                    for href in page.links.iter().rev() {
                        let Some(resolved) = resolve(href, &scope) else {
                            tracing::trace!(href = %href, "skipping unresolvable link");
                            continue;
                        };
                        if !in_scope(&resolved, &scope, self.policy) {
                            tracing::trace!(url = %resolved, "out of scope");
                            continue;
                        }
                        if !visited.contains(resolved.as_str()) {
                            frontier.push(resolved);
                        }
                    }
                }
                Err(error) => {
                    tracing::warn!(url = %error.url, kind = %error.kind, "{}", error.message);
                    failures.push(error);
                }
            }
        }

        tracing::info!(
            pages = index.len(),
            failures = failures.len(),
            "crawl complete"
        );

        CrawlOutcome {
            index,
            visited,
            failures,
        }
    }
}

// Traversal behavior (cycles, scope enforcement, failure isolation,
// duplicate-link collapse) is exercised end-to-end against mock servers in
// tests/crawl_tests.rs.
