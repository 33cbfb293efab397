//! Route tree flattening.
//!
//! Produces the ordered list of navigable pages from a route tree using a
//! depth-first pre-order walk. Child hrefs are resolved by concatenating
//! the parent's resolved href with the child's own segment.

use crate::route::{Page, RouteNode};

/// Flatten route trees into navigable pages.
///
/// Each top-level node contributes its pages in depth-first pre-order, and
/// the results are concatenated in the order the nodes are given. Nodes with
/// `no_link` set are skipped but their children are still visited.
#[must_use]
pub fn flatten(routes: &[RouteNode]) -> Vec<Page> {
    let mut pages = Vec::new();
    for node in routes {
        collect_pages(node, &node.href, &mut pages);
    }
    pages
}

/// Recursively collect pages for `node`, whose href resolves to `resolved_href`.
fn collect_pages(node: &RouteNode, resolved_href: &str, pages: &mut Vec<Page>) {
    if node.is_navigable() {
        pages.push(Page {
            title: node.title.clone(),
            href: resolved_href.to_owned(),
        });
    }

    for child in &node.items {
        let child_href = format!("{resolved_href}{}", child.href);
        collect_pages(child, &child_href, pages);
    }
}
