//! Rule application: materialize article records from a document.
//!
//! A rule's container path is matched against the whole document body, not
//! only the articles it was inferred from, so a rule learned on one page
//! also extracts from the next page of the same listing.

use tracing::{debug, trace};

use crate::dom::{self, Document, NodeRef};
use crate::result::{ArticleRecord, ArticleRule, Extraction, SkipReason, SkippedItem};
use crate::Options;

/// Apply `rule` to every container matching its path.
///
/// Containers where the title or link address does not resolve are
/// recorded as skipped; the rest still extract.
#[must_use]
pub fn extract_with_rule(document: &Document, rule: &ArticleRule, options: &Options) -> Extraction {
    let root = dom::body(document);
    let containers = rule.path.resolve_all(&root);

    let mut extraction = Extraction::default();
    for (index, container) in containers.iter().enumerate() {
        match extract_record(container, rule, options) {
            Ok(record) => extraction.records.push(record),
            Err(reason) => {
                trace!(index, ?reason, "skipped article container");
                extraction.skipped.push(SkippedItem { index, reason });
            }
        }
    }

    debug!(
        path = %rule.path,
        containers = containers.len(),
        records = extraction.records.len(),
        skipped = extraction.skipped.len(),
        "applied article rule"
    );
    extraction
}

fn extract_record(
    container: &NodeRef,
    rule: &ArticleRule,
    options: &Options,
) -> Result<ArticleRecord, SkipReason> {
    let title = rule
        .title_path
        .resolve_first(container)
        .ok_or(SkipReason::MissingTitle)?;
    let link = rule
        .link_path
        .resolve_first(container)
        .ok_or(SkipReason::MissingLink)?;

    let description = rule
        .common_text_paths
        .iter()
        .filter(|path| !path.is_empty())
        .flat_map(|path| path.resolve_all(container))
        .map(|node| dom::text_content(&node).trim().to_string())
        .filter(|text| text.chars().count() > options.min_description_len)
        .collect();

    Ok(ArticleRecord {
        title: dom::text_content(&title).trim().to_string(),
        link: dom::get_attribute(&link, "href").unwrap_or_default(),
        description,
    })
}
