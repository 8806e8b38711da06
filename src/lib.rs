//! Sitegrep: a same-origin web crawler with full-text keyword search
//!
//! This crate crawls a site starting from a seed URL, builds an in-memory
//! index of the plain text of every visited page, and answers whole-word,
//! case-insensitive keyword queries against that index.

pub mod config;
pub mod crawler;
pub mod index;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for sitegrep operations
#[derive(Debug, Error)]
pub enum SitegrepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failed page fetch.
///
/// All transport-level failures (DNS, connection refused, timeout,
/// non-success status, malformed URL) collapse into this one type; the kind
/// is carried for the failure report, not for control flow.
#[derive(Debug, Clone, Error)]
#[error("Fetch failed for {url}: {kind}: {message}")]
pub struct FetchError {
    /// The URL that failed to fetch
    pub url: String,

    /// Broad classification of the failure
    pub kind: FetchErrorKind,

    /// Human-readable detail
    pub message: String,
}

/// Classification of fetch failures, used in failure reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchErrorKind {
    #[error("connection failed")]
    Connect,

    #[error("request timeout")]
    Timeout,

    #[error("HTTP error status")]
    Status,

    #[error("failed to read body")]
    Body,

    #[error("invalid URL")]
    InvalidUrl,

    #[error("request failed")]
    Other,
}

/// Search query errors
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Search keyword is empty")]
    EmptyKeyword,

    #[error("Failed to compile keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for sitegrep operations
pub type Result<T> = std::result::Result<T, SitegrepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlOutcome, Crawler};
pub use index::{search, TextIndex};
pub use url::{in_scope, resolve, ScopePolicy};
