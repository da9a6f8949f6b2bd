//! Rule Ranker

use tracing::debug;

use crate::result::ArticleRule;

/// Order rules by descending score; equal scores keep their input order.
#[must_use]
pub fn rank_rules(mut rules: Vec<ArticleRule>) -> Vec<ArticleRule> {
    rules.sort_by(|a, b| b.score.total_cmp(&a.score));
    for rule in &rules {
        debug!(path = %rule.path, title = %rule.title_path, score = rule.score, "ranked rule");
    }
    rules
}
