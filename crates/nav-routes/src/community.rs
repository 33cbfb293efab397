//! Built-in community section routes.

use std::sync::{Arc, LazyLock};

use crate::route::RouteNode;

static COMMUNITY_ROUTES: LazyLock<Arc<[RouteNode]>> = LazyLock::new(|| {
    Arc::from(vec![
        RouteNode::new("Community", "/community"),
        RouteNode::new("Team", "/team"),
        RouteNode::new("Support", "/support"),
    ])
});

/// Shared handle to the built-in community route tree.
pub(crate) fn community_routes() -> Arc<[RouteNode]> {
    Arc::clone(&COMMUNITY_ROUTES)
}

/// Top-level entries of the community section.
#[must_use]
pub fn get_routes() -> &'static [RouteNode] {
    &COMMUNITY_ROUTES
}
