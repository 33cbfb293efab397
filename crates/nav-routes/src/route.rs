//! Route tree and flattened page types.

use serde::{Deserialize, Serialize};

/// Node in a hierarchical route definition.
///
/// `href` is a path segment relative to the parent node. It is expected to
/// carry its own leading slash (e.g. `/team`), since resolution is plain
/// string concatenation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Display title.
    pub title: String,
    /// Path segment relative to the parent node.
    pub href: String,
    /// Grouping label that is not itself a navigable page.
    #[serde(rename = "noLink", default, skip_serializing_if = "is_false")]
    pub no_link: bool,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RouteNode>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl RouteNode {
    /// Create a navigable node without children.
    #[must_use]
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            no_link: false,
            items: Vec::new(),
        }
    }

    /// Create a grouping node that is excluded from the page list.
    ///
    /// Its children are still visited, with hrefs resolved relative to it.
    #[must_use]
    pub fn group(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            no_link: true,
            ..Self::new(title, href)
        }
    }

    /// Replace the node's children.
    #[must_use]
    pub fn with_items(mut self, items: Vec<RouteNode>) -> Self {
        self.items = items;
        self
    }

    /// Whether this node produces a [`Page`] when flattened.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        !self.no_link
    }
}

/// Navigable page entry produced by flattening a route tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    /// Display title.
    pub title: String,
    /// Fully resolved path from the root (e.g. `/community/team`).
    pub href: String,
}

impl Page {
    /// URL path without leading slash (e.g. "community/team").
    #[must_use]
    pub fn path(&self) -> &str {
        self.href.strip_prefix('/').unwrap_or(&self.href)
    }
}

/// Neighbors of a page in the flattened sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrevNext {
    /// Page immediately before the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Page>,
    /// Page immediately after the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Page>,
}

impl PrevNext {
    /// True when neither neighbor exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}
