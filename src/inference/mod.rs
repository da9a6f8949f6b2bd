//! Rule inference pipeline.
//!
//! Stages, each a pure transform of the previous stage's output:
//!
//! 1. [`links`]: candidate article links grouped by address
//! 2. [`context`]: per-article container elements
//! 3. [`structure`]: common and not-common text addresses
//! 4. [`title`]: title choice, description statistics, rule assembly
//! 5. [`rank`]: ordering by score
//!
//! Groups that fall out at any stage simply produce no rule.

pub mod context;
pub mod links;
pub mod rank;
pub mod structure;
pub mod title;

use tracing::debug;

use crate::dom::{self, Document};
use crate::result::ArticleRule;
use crate::Options;

/// Infer extraction rules for a parsed document, best first.
#[must_use]
pub fn infer_rules(document: &Document, options: &Options) -> Vec<ArticleRule> {
    let root = dom::body(document);

    let candidates = links::find_candidate_links(&root, options);
    let clusters = links::cluster_links(candidates, options);

    let rules: Vec<ArticleRule> = clusters
        .iter()
        .map(|cluster| context::resolve_containers(cluster, &root, options))
        .filter_map(|articles| structure::match_structure(articles, options))
        .filter_map(|group| title::find_title(group, options))
        .map(title::describe)
        .collect();

    debug!(clusters = clusters.len(), rules = rules.len(), "inferred article rules");
    rank::rank_rules(rules)
}
