//! Structure Matcher
//!
//! Classifies the text addresses of the first article as common (found in
//! every article of the cluster) or not, and measures how much of the
//! first article's text is shared structure.

use tracing::trace;

use crate::dom;
use crate::inference::context::ArticleContext;
use crate::path::Address;
use crate::Options;

/// A cluster's articles with their text addresses classified.
#[derive(Clone)]
pub struct StructureGroup<'a> {
    pub articles: Vec<ArticleContext<'a>>,
    /// Deduplicated addresses that resolve in every article.
    pub common: Vec<Address>,
    /// Deduplicated addresses missing somewhere, minus those under a common prefix.
    pub not_common: Vec<Address>,
    /// Common text leaves / all text leaves of the reference article.
    pub structure_similarity: f64,
}

/// Raw classification, one entry per text leaf.
#[derive(Default)]
struct AddressPartition {
    common: Vec<Address>,
    not_common: Vec<Address>,
}

impl AddressPartition {
    fn classify(mut self, address: Address, articles: &[ArticleContext<'_>]) -> Self {
        let everywhere = articles
            .iter()
            .all(|article| address.resolve_first(&article.container).is_some());
        if everywhere {
            self.common.push(address);
        } else {
            self.not_common.push(address);
        }
        self
    }
}

/// Classify text addresses of the first article against all articles.
///
/// Returns `None` for an empty article list.
#[must_use]
pub fn match_structure<'a>(articles: Vec<ArticleContext<'a>>, options: &Options) -> Option<StructureGroup<'a>> {
    let reference = articles.first()?.container;
    let text_nodes = dom::text_nodes_under(&reference);

    let partition = text_nodes
        .iter()
        .filter_map(|node| Address::relative(node, &reference, options.with_class_names))
        .fold(AddressPartition::default(), |partition, address| {
            partition.classify(address, &articles)
        });

    let structure_similarity = if text_nodes.is_empty() {
        0.0
    } else {
        partition.common.len() as f64 / text_nodes.len() as f64
    };

    let common = uniq(&partition.common);
    let not_common = uniq(&partition.not_common)
        .into_iter()
        .filter(|address| {
            !common
                .iter()
                .filter(|prefix| !prefix.is_empty())
                .any(|prefix| prefix.is_prefix_of(address))
        })
        .collect();

    trace!(
        path = %articles[0].path,
        common = common.len(),
        structure_similarity,
        "matched article structure"
    );

    Some(StructureGroup {
        articles,
        common,
        not_common,
        structure_similarity,
    })
}

/// First occurrences in order.
fn uniq(addresses: &[Address]) -> Vec<Address> {
    let mut out: Vec<Address> = Vec::with_capacity(addresses.len());
    for address in addresses {
        if !out.contains(address) {
            out.push(address.clone());
        }
    }
    out
}
