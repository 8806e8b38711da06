use url::Url;

/// Resolves a raw href to an absolute URL against a base URL.
///
/// Handles absolute hrefs, scheme-relative hrefs (`//host/path`),
/// path-relative hrefs, and parent traversal per standard URL-resolution
/// rules via [`Url::join`]. The fragment of the resolved URL is stripped so
/// that `page` and `page#section` dedup to the same visit.
///
/// Returns `None` if the href should not be followed:
/// - empty or fragment-only hrefs (same-page anchors)
/// - `javascript:`, `mailto:`, `tel:` schemes and `data:` URIs
/// - hrefs that fail to parse relative to the base
/// - non-HTTP(S) URLs after resolution
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitegrep::url::resolve;
///
/// let base = Url::parse("https://example.com/docs/intro").unwrap();
/// let resolved = resolve("../about", &base).unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/about");
/// ```
pub fn resolve(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    // Same-page anchors resolve to the page itself; nothing new to visit.
    if href.starts_with('#') {
        return None;
    }

    // Skip non-navigational schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base.join(href) {
        Ok(mut absolute) => {
            if absolute.scheme() != "http" && absolute.scheme() != "https" {
                return None;
            }
            absolute.set_fragment(None);
            Some(absolute)
        }
        Err(_) => None,
    }
}
