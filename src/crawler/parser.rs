//! Internal link counting
//!
//! An anchor counts as internal when its href is root-relative (`/...`) or
//! mentions the domain anywhere, case-insensitively. The substring rule also
//! matches unrelated hosts that happen to contain the domain (for example
//! `notexample.com` for `example.com`); that looseness is intentional.

use scraper::{Html, Selector};

/// Counts the internal links of a parsed homepage
///
/// Returns 0 when no document is available.
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use traffic_gauge::crawler::count_internal_links;
///
/// let html = Html::parse_document(r#"<a href="/about">About</a><a href="https://other.org/">x</a>"#);
/// assert_eq!(count_internal_links(Some(&html), "example.com"), 1);
/// assert_eq!(count_internal_links(None, "example.com"), 0);
/// ```
pub fn count_internal_links(document: Option<&Html>, domain: &str) -> usize {
    let Some(document) = document else {
        return 0;
    };

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return 0;
    };

    let domain = domain.to_lowercase();

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_lowercase)
        .filter(|href| href.starts_with('/') || href.contains(&domain))
        .count()
}
