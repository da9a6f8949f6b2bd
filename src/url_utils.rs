//! URL Utility Functions
//!
//! Records keep the raw `href` found in the document. Feed writers need
//! absolute links, so this module resolves an href against the page URL.

use url::Url;

/// Resolve `href` against the page URL `base`.
///
/// # Returns
/// * The absolute URL string, or `None` when `base` is not a valid absolute
///   URL, `href` is empty or only a fragment, or the join fails
#[must_use]
pub fn resolve_link(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let base = Url::parse(base.trim()).ok()?;
    base.join(href).ok().map(String::from)
}

/// Whether `href` is already an absolute http(s) URL.
#[must_use]
pub fn is_absolute_http(href: &str) -> bool {
    Url::parse(href.trim())
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}
