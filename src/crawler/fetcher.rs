//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with a user agent and timeouts
//! - GET requests to fetch page content
//! - Collapsing every transport failure into one [`FetchError`]

use crate::config::HttpConfig;
use crate::{FetchError, FetchErrorKind};
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for all page fetches.
///
/// # Example
///
/// ```no_run
/// use sitegrep::config::HttpConfig;
/// use sitegrep::crawler::build_http_client;
///
/// let config = HttpConfig {
///     user_agent: "sitegrep/0.1".to_string(),
///     request_timeout: 30,
///     connect_timeout: 10,
/// };
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text.
///
/// Any failure mode (DNS, connection refused, timeout, TLS, non-2xx status,
/// unreadable body) collapses into a [`FetchError`] carrying the URL, a
/// broad kind, and a message. Callers never branch on the kind; it exists
/// for the failure report.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_request_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError {
            url: url.to_string(),
            kind: FetchErrorKind::Status,
            message: format!("HTTP {}", status.as_u16()),
        });
    }

    response.text().await.map_err(|e| FetchError {
        url: url.to_string(),
        kind: FetchErrorKind::Body,
        message: e.to_string(),
    })
}

/// Maps a reqwest send error to a classified fetch error
fn classify_request_error(url: &str, error: reqwest::Error) -> FetchError {
    let kind = if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_builder() {
        FetchErrorKind::InvalidUrl
    } else {
        FetchErrorKind::Other
    };

    FetchError {
        url: url.to_string(),
        kind,
        message: error.to_string(),
    }
}
