use crate::index::TextIndex;
use crate::QueryError;
use regex::RegexBuilder;

/// Searches the index for pages whose text contains `keyword` as a whole
/// word, case-insensitively.
///
/// The keyword is escaped before being compiled, so regex metacharacters are
/// matched literally. Whole-word means the occurrence is not adjacent to
/// another word character on either side: searching `"cat"` does not match
/// the text `"category"`.
///
/// An empty (or all-whitespace) keyword is rejected with
/// [`QueryError::EmptyKeyword`] rather than silently matching everything.
///
/// Results are URLs in index insertion order, which makes the output
/// deterministic for a given index state. No ranking is applied.
///
/// # Examples
///
/// ```
/// use sitegrep::index::{search, TextIndex};
///
/// let mut index = TextIndex::new();
/// index.insert("https://example.com/", "category theory".to_string());
///
/// assert!(search(&index, "cat").unwrap().is_empty());
/// assert_eq!(search(&index, "category").unwrap().len(), 1);
/// ```
pub fn search(index: &TextIndex, keyword: &str) -> Result<Vec<String>, QueryError> {
    if keyword.trim().is_empty() {
        return Err(QueryError::EmptyKeyword);
    }

    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    let matcher = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()?;

    Ok(index
        .iter()
        .filter(|(_, text)| matcher.is_match(text))
        .map(|(url, _)| url.to_string())
        .collect())
}
