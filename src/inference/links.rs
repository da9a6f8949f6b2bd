//! Link Clusterer
//!
//! Anchors with enough words are the raw signal of article repetition. They
//! are grouped by structural address; only large groups survive.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::dom::{self, NodeRef};
use crate::path::Address;
use crate::scoring::word_count;
use crate::Options;

/// An anchor whose text is long enough to be an article link.
#[derive(Clone)]
pub struct CandidateLink<'a> {
    pub element: NodeRef<'a>,
    /// Address relative to the document root.
    pub path: Address,
}

/// Candidate links sharing one address.
#[derive(Clone)]
pub struct LinkCluster<'a> {
    pub path: Address,
    pub links: Vec<NodeRef<'a>>,
}

impl LinkCluster<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Anchors under `root` with more than `min_link_words` words of text.
#[must_use]
pub fn find_candidate_links<'a>(root: &NodeRef<'a>, options: &Options) -> Vec<CandidateLink<'a>> {
    let links: Vec<CandidateLink<'a>> = dom::elements_by_tag(root, "a")
        .into_iter()
        .filter(|anchor| word_count(&dom::text_content(anchor)) > options.min_link_words)
        .filter_map(|element| {
            let path = Address::relative(&element, root, options.with_class_names)?;
            Some(CandidateLink { element, path })
        })
        .collect();

    debug!(candidates = links.len(), "collected candidate article links");
    links
}

/// Group links by address, keeping groups with more than `min_cluster_size` members.
///
/// Groups come out in order of their first member.
#[must_use]
pub fn cluster_links<'a>(links: Vec<CandidateLink<'a>>, options: &Options) -> Vec<LinkCluster<'a>> {
    let mut index: HashMap<Address, usize> = HashMap::new();
    let mut clusters: Vec<LinkCluster<'a>> = Vec::new();

    for link in links {
        if let Some(&i) = index.get(&link.path) {
            clusters[i].links.push(link.element);
        } else {
            index.insert(link.path.clone(), clusters.len());
            clusters.push(LinkCluster {
                path: link.path,
                links: vec![link.element],
            });
        }
    }

    let total = clusters.len();
    clusters.retain(|cluster| {
        let keep = cluster.len() > options.min_cluster_size;
        if !keep {
            trace!(path = %cluster.path, size = cluster.len(), "link group below repetition threshold");
        }
        keep
    });

    debug!(groups = total, clusters = clusters.len(), "clustered candidate links");
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{body, parse};

    const LISTING: &str = r#"
        <nav><a href="/">Home</a><a href="/about">About us</a></nav>
        <ul>
            <li><a href="/1">First story about the weather</a></li>
            <li><a href="/2">Second story about the markets</a></li>
            <li><a href="/3">Third story about the elections</a></li>
            <li><a href="/4">Fourth story about the harbour</a></li>
        </ul>
        <div><a href="/more">See all of our stories</a></div>
    "#;

    #[test]
    fn test_short_links_are_not_candidates() {
        let doc = parse(LISTING);
        let links = find_candidate_links(&body(&doc), &Options::default());

        assert_eq!(links.len(), 5);
        assert_eq!(links[0].path.to_string(), "UL>LI>A");
        assert_eq!(links[4].path.to_string(), "DIV>A");
    }

    #[test]
    fn test_exactly_four_words_is_enough() {
        let doc = parse(r#"<a href="/x">one two three four</a><a href="/y">one two three</a>"#);
        let links = find_candidate_links(&body(&doc), &Options::default());

        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_clusters_need_more_than_three_members() {
        let doc = parse(LISTING);
        let root = body(&doc);
        let options = Options::default();

        let clusters = cluster_links(find_candidate_links(&root, &options), &options);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].path.to_string(), "UL>LI>A");
        assert_eq!(clusters[0].len(), 4);
    }

    #[test]
    fn test_cluster_threshold_is_configurable() {
        let doc = parse(LISTING);
        let root = body(&doc);
        let options = Options {
            min_cluster_size: 4,
            ..Options::default()
        };

        let clusters = cluster_links(find_candidate_links(&root, &options), &options);
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_clusters_keep_first_seen_order() {
        let doc = parse(
            r#"
            <section><p><a href="/a1">alpha item number one here</a></p></section>
            <div><a href="/b1">beta item number one here</a></div>
            <section><p><a href="/a2">alpha item number two here</a></p></section>
            <div><a href="/b2">beta item number two here</a></div>
            "#,
        );
        let root = body(&doc);
        let options = Options {
            min_cluster_size: 1,
            ..Options::default()
        };

        let clusters = cluster_links(find_candidate_links(&root, &options), &options);
        let paths: Vec<String> = clusters.iter().map(|c| c.path.to_string()).collect();
        assert_eq!(paths, vec!["SECTION>P>A", "DIV>A"]);
    }
}
