//! # rs-feedrules
//!
//! Finds the repeating "article" block of a listing page (a blog index, a
//! news front page) and turns it into a reusable extraction rule, without
//! any site-specific configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_feedrules::{article_rules, apply_rule};
//!
//! let html = r#"<ul>
//!   <li><a href="/p/1">Article 1 headline text here</a><p>Shared footer text</p></li>
//!   <li><a href="/p/2">Article 2 headline text here</a><p>Shared footer text</p></li>
//!   <li><a href="/p/3">Article 3 headline text here</a><p>Shared footer text</p></li>
//!   <li><a href="/p/4">Article 4 headline text here</a><p>Shared footer text</p></li>
//! </ul>"#;
//!
//! let rules = article_rules(html);
//! let articles = apply_rule(html, &rules[0]);
//! assert_eq!(articles[0].title, "Article 1 headline text here");
//! assert_eq!(articles[0].link, "/p/1");
//! ```
//!
//! ## How it works
//!
//! - **Link clustering**: anchors with more than three words are grouped by
//!   their structural address (`DIV>UL>LI>A`)
//! - **Container resolution**: each cluster is climbed in lock step to the
//!   element wrapping one article
//! - **Structure matching**: text addresses present in every article are common
//! - **Title/description scoring**: the common address whose words vary most
//!   between articles is the title; the rest is the description
//! - **Ranking**: rules are ordered by title and description word statistics
//!
//! Inference and application are pure functions of an immutable document.
//! A page without a repeating pattern yields no rules, never an error.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query` node handles.
pub mod dom;

/// Structural addresses: computation, parsing and resolution.
pub mod path;

/// Rule inference stages (link clustering through ranking).
pub mod inference;

/// Word variance statistics for title and description scoring.
pub mod scoring;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL resolution for extracted links.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::extract_with_rule;
pub use inference::infer_rules;
pub use options::Options;
pub use path::{Address, Signature};
pub use result::{
    find_rule, ArticleRecord, ArticleRule, Extraction, RuleStats, SkipReason, SkippedItem,
};
pub use scoring::FieldStats;

use dom_query::Document;

/// Infers extraction rules from an HTML document, best first.
///
/// Returns an empty list when the page has no repeating article pattern.
#[must_use]
pub fn article_rules(html: &str) -> Vec<ArticleRule> {
    article_rules_with_options(html, &Options::default())
}

/// Infers extraction rules with custom thresholds.
///
/// # Example
///
/// ```rust
/// use rs_feedrules::{article_rules_with_options, Options};
///
/// let options = Options {
///     with_class_names: true,
///     ..Options::default()
/// };
/// let rules = article_rules_with_options("<p>no listing here</p>", &options);
/// assert!(rules.is_empty());
/// ```
#[must_use]
pub fn article_rules_with_options(html: &str, options: &Options) -> Vec<ArticleRule> {
    infer_rules(&dom::parse(html), options)
}

/// Infers extraction rules from raw bytes, detecting the character encoding.
#[must_use]
pub fn article_rules_from_bytes(html: &[u8]) -> Vec<ArticleRule> {
    article_rules_from_bytes_with_options(html, &Options::default())
}

/// Infers extraction rules from raw bytes with custom thresholds.
#[must_use]
pub fn article_rules_from_bytes_with_options(html: &[u8], options: &Options) -> Vec<ArticleRule> {
    article_rules_with_options(&encoding::decode_html(html), options)
}

/// Extracts articles with the best inferred rule.
///
/// Returns an empty list when no rule is found.
#[must_use]
pub fn articles(html: &str) -> Vec<ArticleRecord> {
    articles_with_options(html, &Options::default())
}

/// Extracts articles with the best inferred rule and custom thresholds.
#[must_use]
pub fn articles_with_options(html: &str, options: &Options) -> Vec<ArticleRecord> {
    let document = dom::parse(html);
    best_rule_articles(&document, options)
}

/// Extracts articles from raw bytes, detecting the character encoding.
#[must_use]
pub fn articles_from_bytes(html: &[u8]) -> Vec<ArticleRecord> {
    articles_from_bytes_with_options(html, &Options::default())
}

/// Extracts articles from raw bytes with custom thresholds.
#[must_use]
pub fn articles_from_bytes_with_options(html: &[u8], options: &Options) -> Vec<ArticleRecord> {
    articles_with_options(&encoding::decode_html(html), options)
}

/// Applies a previously inferred (or edited) rule to an HTML document.
///
/// Articles whose title or link cannot be resolved are left out.
#[must_use]
pub fn apply_rule(html: &str, rule: &ArticleRule) -> Vec<ArticleRecord> {
    apply_rule_with_options(html, rule, &Options::default())
}

/// Applies a rule with custom thresholds.
#[must_use]
pub fn apply_rule_with_options(html: &str, rule: &ArticleRule, options: &Options) -> Vec<ArticleRecord> {
    extract_with_rule(&dom::parse(html), rule, options).records
}

/// Applies the persisted rule carrying `id`.
///
/// # Example
///
/// ```rust
/// use rs_feedrules::{articles_for_rule_id, Error};
///
/// let result = articles_for_rule_id("<p></p>", &[], "front-page");
/// assert_eq!(result, Err(Error::RuleNotFound("front-page".to_string())));
/// ```
pub fn articles_for_rule_id(html: &str, rules: &[ArticleRule], id: &str) -> Result<Vec<ArticleRecord>> {
    articles_for_rule_id_with_options(html, rules, id, &Options::default())
}

/// Applies the persisted rule carrying `id` with custom thresholds.
pub fn articles_for_rule_id_with_options(
    html: &str,
    rules: &[ArticleRule],
    id: &str,
    options: &Options,
) -> Result<Vec<ArticleRecord>> {
    let rule = find_rule(rules, id)?;
    Ok(apply_rule_with_options(html, rule, options))
}

fn best_rule_articles(document: &Document, options: &Options) -> Vec<ArticleRecord> {
    infer_rules(document, options)
        .first()
        .map(|rule| extract_with_rule(document, rule, options).records)
        .unwrap_or_default()
}
