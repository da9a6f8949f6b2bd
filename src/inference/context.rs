//! Container Resolver
//!
//! Climbs from the links of a cluster in lock step until the first two
//! climbers would meet in one shared ancestor. The level just below that
//! meeting point holds one container per article.
//!
//! The climb assumes every link sits at the same depth below its container.
//! Irregular nesting is not corrected.

use tracing::trace;

use crate::dom::{self, NodeRef};
use crate::inference::links::LinkCluster;
use crate::path::Address;
use crate::Options;

/// One article: its container element, its link and the container address.
#[derive(Clone)]
pub struct ArticleContext<'a> {
    pub link: NodeRef<'a>,
    pub container: NodeRef<'a>,
    /// Container address relative to the document root.
    pub path: Address,
}

/// Per-article containers for the links of `cluster`.
///
/// Returns an empty list for clusters with fewer than two links.
#[must_use]
pub fn resolve_containers<'a>(
    cluster: &LinkCluster<'a>,
    root: &NodeRef<'a>,
    options: &Options,
) -> Vec<ArticleContext<'a>> {
    if cluster.len() < 2 {
        return Vec::new();
    }

    let mut current: Vec<NodeRef<'a>> = cluster.links.clone();
    let mut depth = 0usize;
    loop {
        let Some(parents) = current.iter().map(NodeRef::parent).collect::<Option<Vec<_>>>() else {
            break;
        };
        if dom::is_same_node(&parents[0], &parents[1]) {
            break;
        }
        current = parents;
        depth += 1;
    }
    trace!(path = %cluster.path, depth, "resolved article containers");

    cluster
        .links
        .iter()
        .zip(current)
        .filter_map(|(link, container)| {
            let path = Address::relative(&container, root, options.with_class_names)?;
            Some(ArticleContext {
                link: *link,
                container,
                path,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{body, get_attribute, parse, tag_name};
    use crate::inference::links::{cluster_links, find_candidate_links};

    fn contexts_for<'a>(root: &NodeRef<'a>) -> Vec<ArticleContext<'a>> {
        let options = Options::default();
        let clusters = cluster_links(find_candidate_links(root, &options), &options);
        resolve_containers(&clusters[0], root, &options)
    }

    #[test]
    fn test_list_items_are_containers() {
        let doc = parse(
            r#"<ul>
                <li><h3><a href="/1">One long enough headline text</a></h3><p>a</p></li>
                <li><h3><a href="/2">Two long enough headline text</a></h3><p>b</p></li>
                <li><h3><a href="/3">Three long enough headline text</a></h3><p>c</p></li>
                <li><h3><a href="/4">Four long enough headline text</a></h3><p>d</p></li>
            </ul>"#,
        );
        let root = body(&doc);
        let contexts = contexts_for(&root);

        assert_eq!(contexts.len(), 4);
        for context in &contexts {
            assert_eq!(tag_name(&context.container), Some("li".to_string()));
            assert_eq!(context.path.to_string(), "UL>LI");
        }
        assert_eq!(get_attribute(&contexts[2].link, "href"), Some("/3".to_string()));
    }

    #[test]
    fn test_sibling_links_are_their_own_containers() {
        let doc = parse(
            r#"<p>
                <a href="/1">First link with many words</a>
                <a href="/2">Second link with many words</a>
                <a href="/3">Third link with many words</a>
                <a href="/4">Fourth link with many words</a>
            </p>"#,
        );
        let root = body(&doc);
        let contexts = contexts_for(&root);

        assert_eq!(contexts.len(), 4);
        assert!(dom::is_same_node(&contexts[0].container, &contexts[0].link));
        assert_eq!(contexts[0].path.to_string(), "P>A");
    }

    #[test]
    fn test_climb_stops_at_first_two_links() {
        // The first two articles share a section, the rest live elsewhere:
        // only the first pair decides where the climb stops.
        let doc = parse(
            r#"<div>
                <section>
                    <article><a href="/1">A first article headline here</a></article>
                    <article><a href="/2">A second article headline here</a></article>
                </section>
                <section>
                    <article><a href="/3">A third article headline here</a></article>
                    <article><a href="/4">A fourth article headline here</a></article>
                </section>
            </div>"#,
        );
        let root = body(&doc);
        let contexts = contexts_for(&root);

        for context in &contexts {
            assert_eq!(tag_name(&context.container), Some("article".to_string()));
        }
    }
}
