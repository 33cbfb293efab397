//! Route configuration for community navigation.
//!
//! Parses `nav.toml` files with serde and provides auto-discovery of the
//! config file in parent directories. When no file is found, the built-in
//! community routes are used.
//!
//! ```toml
//! [[routes]]
//! title = "Community"
//! href = "/community"
//!
//! [[routes.items]]
//! title = "Guidelines"
//! href = "/guidelines"
//!
//! [[routes]]
//! title = "Events"
//! href = "/events"
//! noLink = true
//!
//! [[routes.items]]
//! title = "Meetups"
//! href = "/meetups"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! Route `title` and `href` values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nav_routes::{RouteNode, RouteResolver, flatten};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "nav.toml";

/// Navigation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Top-level routes as parsed from TOML. `None` selects the built-in
    /// community routes.
    routes: Option<Vec<RouteNode>>,

    /// Resolved routes shared by every resolver (set after loading).
    #[serde(skip)]
    routes_resolved: Option<Arc<[RouteNode]>>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`routes[0].href`").
        field: String,
        /// Error message (e.g., "${`DOCS_PREFIX`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `nav.toml` in current directory and parents.
    /// Without a config file the built-in community routes are used.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if parsing,
    /// expansion or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        Self::load_discovered(Self::discover_config().as_deref())
    }

    /// Load from a discovered config file, or fall back to defaults.
    fn load_discovered(discovered: Option<&Path>) -> Result<Self, ConfigError> {
        match discovered {
            Some(path) => Self::load_from_file(path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using community routes");
                Ok(Self::default())
            }
        }
    }

    /// Build a resolver over the loaded routes.
    ///
    /// Resolvers share the routes resolved at load time. Without configured
    /// routes the built-in community routes are used.
    #[must_use]
    pub fn resolver(&self) -> RouteResolver {
        match &self.routes_resolved {
            Some(routes) => RouteResolver::new(Arc::clone(routes)),
            None => RouteResolver::community(),
        }
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(routes) = &self.routes else {
            return Ok(());
        };

        if routes.is_empty() {
            return Err(ConfigError::Validation(
                "routes cannot be empty".to_owned(),
            ));
        }

        for (i, node) in routes.iter().enumerate() {
            validate_node(node, &format!("routes[{i}]"))?;
        }

        // Duplicate hrefs would make prev/next lookups ambiguous
        let mut seen = HashSet::new();
        for page in flatten(routes) {
            if !seen.insert(page.href.clone()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page href {} ({})",
                    page.href, page.title
                )));
            }
        }

        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_config_from(&cwd)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        config.resolve_routes();

        Ok(config)
    }

    /// Freeze validated routes for sharing across resolvers.
    fn resolve_routes(&mut self) {
        self.routes_resolved = self.routes.clone().map(Arc::from);
    }

    /// Expand environment variable references in route titles and hrefs.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(routes) = &mut self.routes {
            for (i, node) in routes.iter_mut().enumerate() {
                expand_node(node, &format!("routes[{i}]"))?;
            }
        }
        Ok(())
    }
}

/// Expand environment variables in a route node and its children.
fn expand_node(node: &mut RouteNode, field: &str) -> Result<(), ConfigError> {
    node.title = expand::expand_env(&node.title, &format!("{field}.title"))?;
    node.href = expand::expand_env(&node.href, &format!("{field}.href"))?;
    for (i, child) in node.items.iter_mut().enumerate() {
        expand_node(child, &format!("{field}.items[{i}]"))?;
    }
    Ok(())
}

/// Validate a route node and its children.
fn validate_node(node: &RouteNode, field: &str) -> Result<(), ConfigError> {
    require_non_empty(&node.title, &format!("{field}.title"))?;
    require_non_empty(&node.href, &format!("{field}.href"))?;

    if !node.href.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field}.href must start with /"
        )));
    }

    if node.no_link && node.items.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{field} has noLink set but no items"
        )));
    }

    for (i, child) in node.items.iter().enumerate() {
        validate_node(child, &format!("{field}.items[{i}]"))?;
    }

    Ok(())
}
