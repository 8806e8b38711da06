//! Reporting surface for sitegrep
//!
//! The core exposes structured failure events and a formatting hook for
//! search results; actually printing them is the CLI's job.

use crate::FetchError;

/// Renders search results as a labeled list, or a "no results" line when
/// the result set is empty.
///
/// # Example
///
/// ```
/// use sitegrep::output::format_search_results;
///
/// let rendered = format_search_results(&["https://example.com/a".to_string()]);
/// assert_eq!(rendered, "Search results:\n- https://example.com/a");
/// assert_eq!(format_search_results(&[]), "No results found.");
/// ```
pub fn format_search_results(results: &[String]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    let mut out = String::from("Search results:");
    for url in results {
        out.push_str("\n- ");
        out.push_str(url);
    }
    out
}

/// Renders one fetch failure as a single report line
pub fn format_failure(failure: &FetchError) -> String {
    format!("{} [{}]: {}", failure.url, failure.kind, failure.message)
}

/// Renders the full failure report, one line per failed URL
pub fn format_failures(failures: &[FetchError]) -> String {
    failures
        .iter()
        .map(format_failure)
        .collect::<Vec<_>>()
        .join("\n")
}
