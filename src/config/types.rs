use crate::url::ScopePolicy;
use crate::{SitegrepError, UrlError};
use serde::Deserialize;
use url::Url;

/// Main configuration structure for sitegrep
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL the crawl starts from
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// Explicit scope anchor; defaults to the start URL when absent
    #[serde(rename = "scope-base")]
    pub scope_base: Option<String>,

    /// How scope membership is decided for discovered links
    #[serde(rename = "scope-policy", default)]
    pub scope_policy: ScopePolicy,

    /// Ceiling on the number of pages fetched in one crawl
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connection timeout in seconds
    #[serde(rename = "connect-timeout", default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

fn default_max_pages() -> usize {
    500
}

fn default_user_agent() -> String {
    format!("sitegrep/{}", env!("CARGO_PKG_VERSION"))
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Config {
    /// Parses the configured start URL
    pub fn start_url(&self) -> Result<Url, SitegrepError> {
        parse_http_url(&self.crawler.start_url).map_err(Into::into)
    }

    /// Parses the configured scope base, if one was given
    pub fn scope_base(&self) -> Result<Option<Url>, SitegrepError> {
        self.crawler
            .scope_base
            .as_deref()
            .map(|raw| parse_http_url(raw).map_err(Into::into))
            .transpose()
    }
}

/// Parses a URL and requires an http(s) scheme and a host
pub(crate) fn parse_http_url(raw: &str) -> Result<Url, UrlError> {
    let url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }
    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }
    Ok(url)
}
