//! Community section navigation for the docs site.
//!
//! This crate provides:
//! - [`RouteNode`]: hierarchical route definition
//! - [`flatten`]: ordered list of navigable [`Page`] entries
//! - [`RouteResolver`]: previous/next page lookup for a request path
//!
//! # Quick Start
//!
//! ```
//! use nav_routes::{RouteNode, RouteResolver};
//!
//! let resolver = RouteResolver::new(vec![
//!     RouteNode::new("Guide", "/guide").with_items(vec![RouteNode::new("Setup", "/setup")]),
//!     RouteNode::new("API", "/api"),
//! ]);
//!
//! let pages = resolver.flatten();
//! assert_eq!(pages[1].href, "/guide/setup");
//!
//! let links = resolver.resolve_prev_next("/en/guide/setup");
//! assert_eq!(links.prev.unwrap().title, "Guide");
//! assert_eq!(links.next.unwrap().title, "API");
//! ```

mod community;
mod flatten;
mod resolver;
mod route;

pub use community::get_routes;
pub use flatten::flatten;
pub use resolver::{RouteResolver, resolve_prev_next};
pub use route::{Page, PrevNext, RouteNode};
