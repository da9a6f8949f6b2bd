//! Result types for inference and extraction output.
//!
//! [`ArticleRule`] is the reusable product of inference: owned, free of any
//! borrow on the document, and serializable so a caller can persist it.
//! [`ArticleRecord`] is one extracted article.

use serde::{Deserialize, Serialize};

use crate::path::Address;
use crate::scoring::FieldStats;
use crate::url_utils;
use crate::{Error, Result};

/// Title and description statistics of a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleStats {
    pub title: FieldStats,
    pub description: FieldStats,
}

impl RuleStats {
    /// `title.variance × title.avg + description.variance × description.avg`.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.title.weight() + self.description.weight()
    }
}

/// Extraction rule inferred from one cluster of repeated article blocks.
///
/// Container addresses are relative to `<body>`; every other address is
/// relative to the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRule {
    /// Caller-assigned identifier; inference leaves it empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Address of each article container.
    pub path: Address,

    /// Address of the article link inside the container.
    pub link_path: Address,

    /// Address of the title text inside the container.
    pub title_path: Address,

    /// Text addresses present in every article, title excluded.
    ///
    /// These make up the description.
    pub common_text_paths: Vec<Address>,

    /// Text addresses missing from at least one article.
    pub not_common_text_paths: Vec<Address>,

    /// Share of the reference article's text leaves found in every article.
    pub structure_similarity: f64,

    /// Number of articles in the cluster the rule was inferred from.
    #[serde(default)]
    pub article_count: usize,

    pub stats: RuleStats,

    pub score: f64,
}

impl ArticleRule {
    /// Tag the rule with a stable identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Find the rule carrying `id`.
pub fn find_rule<'r>(rules: &'r [ArticleRule], id: &str) -> Result<&'r ArticleRule> {
    rules
        .iter()
        .find(|rule| rule.id.as_deref() == Some(id))
        .ok_or_else(|| Error::RuleNotFound(id.to_string()))
}

/// One extracted article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Trimmed title text.
    pub title: String,

    /// Raw `href` of the link element (empty when the attribute is missing).
    pub link: String,

    /// Trimmed description fragments in document order.
    pub description: Vec<String>,
}

impl ArticleRecord {
    /// The link resolved against the page URL it was extracted from.
    ///
    /// Links that are already absolute http(s) URLs come back as written.
    #[must_use]
    pub fn absolute_link(&self, base: &str) -> Option<String> {
        if url_utils::is_absolute_http(&self.link) {
            return Some(self.link.trim().to_string());
        }
        url_utils::resolve_link(base, &self.link)
    }
}

/// Why a container matched by a rule produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The title address did not resolve inside the container.
    MissingTitle,
    /// The link address did not resolve inside the container.
    MissingLink,
}

/// A container that was dropped during rule application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    /// Position of the container among all matches of the rule's path.
    pub index: usize,
    pub reason: SkipReason,
}

/// Outcome of applying a rule: extracted records and skipped containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub records: Vec<ArticleRecord>,
    pub skipped: Vec<SkippedItem>,
}
