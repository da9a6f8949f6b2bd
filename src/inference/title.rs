//! Title and Description Scorer
//!
//! The title is the common address whose text differs most between
//! articles, among those averaging more than `min_title_words` words. The
//! remaining common addresses form the description, scored as one block.
//!
//! Empty addresses (text sitting directly in the container) never qualify:
//! they would re-read the whole container.

use tracing::trace;

use crate::dom;
use crate::inference::context::ArticleContext;
use crate::inference::structure::StructureGroup;
use crate::path::Address;
use crate::result::{ArticleRule, RuleStats};
use crate::scoring::{to_words, FieldStats};
use crate::Options;

/// A common address scored as a possible title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCandidate {
    pub path: Address,
    pub stats: FieldStats,
}

/// A structure group with its title chosen.
#[derive(Clone)]
pub struct TitledGroup<'a> {
    pub group: StructureGroup<'a>,
    pub title: TitleCandidate,
    /// Link address relative to the container.
    pub link_path: Address,
}

/// Title candidates, highest variance first (stable for equal variance).
#[must_use]
pub fn rank_title_candidates(group: &StructureGroup<'_>, options: &Options) -> Vec<TitleCandidate> {
    let mut candidates: Vec<TitleCandidate> = group
        .common
        .iter()
        .filter(|path| !path.is_empty())
        .map(|path| TitleCandidate {
            path: path.clone(),
            stats: FieldStats::from_samples(&first_match_words(path, &group.articles)),
        })
        .filter(|candidate| candidate.stats.avg_word_count > options.min_title_words)
        .collect();

    candidates.sort_by(|a, b| b.stats.variance.total_cmp(&a.stats.variance));
    candidates
}

/// Choose the title and take it out of the common addresses.
///
/// Returns `None` when no address qualifies; the group yields no rule.
#[must_use]
pub fn find_title<'a>(mut group: StructureGroup<'a>, options: &Options) -> Option<TitledGroup<'a>> {
    let Some(title) = rank_title_candidates(&group, options).into_iter().next() else {
        trace!(path = %group.articles[0].path, "no title candidate");
        return None;
    };

    let reference = &group.articles[0];
    let link_path = Address::relative(&reference.link, &reference.container, options.with_class_names)?;

    group.common.retain(|path| *path != title.path);

    Some(TitledGroup {
        group,
        title,
        link_path,
    })
}

/// Score the description block and assemble the rule.
#[must_use]
pub fn describe(titled: TitledGroup<'_>) -> ArticleRule {
    let TitledGroup {
        group,
        title,
        link_path,
    } = titled;

    let samples: Vec<Vec<String>> = group
        .articles
        .iter()
        .map(|article| {
            group
                .common
                .iter()
                .filter(|path| !path.is_empty())
                .flat_map(|path| path.resolve_all(&article.container))
                .flat_map(|node| to_words(&dom::text_content(&node)))
                .collect()
        })
        .collect();

    let stats = RuleStats {
        title: title.stats,
        description: FieldStats::from_samples(&samples),
    };

    ArticleRule {
        id: None,
        path: group.articles[0].path.clone(),
        link_path,
        title_path: title.path,
        common_text_paths: group.common,
        not_common_text_paths: group.not_common,
        structure_similarity: group.structure_similarity,
        article_count: group.articles.len(),
        score: stats.score(),
        stats,
    }
}

/// Words of the first match of `path` in each article (empty when missing).
fn first_match_words(path: &Address, articles: &[ArticleContext<'_>]) -> Vec<Vec<String>> {
    articles
        .iter()
        .map(|article| {
            path.resolve_first(&article.container)
                .map(|node| to_words(&dom::text_content(&node)))
                .unwrap_or_default()
        })
        .collect()
}
