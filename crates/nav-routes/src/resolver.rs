//! Previous/next page resolution.
//!
//! [`RouteResolver`] owns an immutable route tree and answers neighbor
//! queries against its flattened page sequence. The tree is injected at
//! construction, so alternate trees can be used in place of the built-in
//! community routes.
//!
//! # Example
//!
//! ```
//! use nav_routes::RouteResolver;
//!
//! let resolver = RouteResolver::community();
//! let links = resolver.resolve_prev_next("/en/team");
//!
//! assert_eq!(links.prev.unwrap().href, "/community");
//! assert_eq!(links.next.unwrap().href, "/support");
//! ```

use std::sync::Arc;

use crate::community::community_routes;
use crate::flatten::flatten;
use crate::route::{Page, PrevNext, RouteNode};

/// Resolver over a fixed route tree.
///
/// Cloning is cheap: the tree is shared behind an `Arc`. The flattened page
/// list is recomputed on every call.
#[derive(Clone, Debug)]
pub struct RouteResolver {
    routes: Arc<[RouteNode]>,
}

impl RouteResolver {
    /// Create a resolver over the given top-level routes.
    #[must_use]
    pub fn new(routes: impl Into<Arc<[RouteNode]>>) -> Self {
        Self {
            routes: routes.into(),
        }
    }

    /// Create a resolver over the built-in community routes.
    #[must_use]
    pub fn community() -> Self {
        Self {
            routes: community_routes(),
        }
    }

    /// Top-level route nodes.
    #[must_use]
    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    /// Navigable pages in depth-first order.
    #[must_use]
    pub fn flatten(&self) -> Vec<Page> {
        flatten(&self.routes)
    }

    /// Find the pages before and after `path`.
    ///
    /// The first path segment (a locale or site section token) is discarded:
    /// `/en/team` and `en/team` both look up the page with href `/team`.
    /// Matching is exact and case-sensitive. When no page matches, both
    /// neighbors are `None`.
    #[must_use]
    pub fn resolve_prev_next(&self, path: &str) -> PrevNext {
        let key = lookup_key(path);
        let pages = self.flatten();

        let Some(index) = pages.iter().position(|page| page.href == key) else {
            tracing::debug!(path = %path, key = %key, "No page matches path");
            return PrevNext::default();
        };

        let prev = index.checked_sub(1).and_then(|i| pages.get(i)).cloned();
        let next = pages.get(index + 1).cloned();

        PrevNext { prev, next }
    }
}

impl Default for RouteResolver {
    fn default() -> Self {
        Self::community()
    }
}

/// Build the href to look up for a request path.
///
/// Drops the leading slash and the first segment, then re-prefixes the
/// remainder with `/`. A single-segment path yields `/`.
fn lookup_key(path: &str) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let rest = trimmed.split_once('/').map_or("", |(_, rest)| rest);
    format!("/{rest}")
}

/// Find neighbors of `path` within the built-in community routes.
#[must_use]
pub fn resolve_prev_next(path: &str) -> PrevNext {
    RouteResolver::community().resolve_prev_next(path)
}
