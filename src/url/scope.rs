use serde::Deserialize;
use url::Url;

/// Policy deciding whether a resolved URL belongs to the crawl target.
///
/// `SameOrigin` is the default and the recommended policy: it compares
/// scheme + host + port, so `https://example.com.evil.com` is out of scope
/// for a base of `https://example.com` while `https://example.com/other`
/// stays in scope. `Prefix` is the legacy string-prefix check, kept as a
/// configurable alternative for callers that want to restrict the crawl to
/// a path subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopePolicy {
    /// Scheme, host, and port must all match the scope base
    #[default]
    SameOrigin,

    /// The URL string must start with the scope base string
    Prefix,
}

/// Returns true if `url` is part of the crawl target anchored at `scope`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitegrep::url::{in_scope, ScopePolicy};
///
/// let scope = Url::parse("https://example.com/").unwrap();
/// let inside = Url::parse("https://example.com/about").unwrap();
/// let outside = Url::parse("https://example.com.evil.com/").unwrap();
///
/// assert!(in_scope(&inside, &scope, ScopePolicy::SameOrigin));
/// assert!(!in_scope(&outside, &scope, ScopePolicy::SameOrigin));
/// ```
pub fn in_scope(url: &Url, scope: &Url, policy: ScopePolicy) -> bool {
    match policy {
        ScopePolicy::SameOrigin => url.origin() == scope.origin(),
        ScopePolicy::Prefix => url.as_str().starts_with(scope.as_str()),
    }
}
