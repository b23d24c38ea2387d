//! Generator configuration.
//!
//! Options live in an optional `routegen.toml` at the project root and can
//! be overridden per-invocation by CLI flags. Every option has a default, so
//! a project with no config file and no flags still generates.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! exclude_folders = ["components"]  # Folder names skipped during discovery
//! routing_mode = "browser"          # "browser" or "hash" history
//! only_routes = false               # Skip the router shell, emit the table only
//! index_path = "/index"             # Catch-all redirect target
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Name of the config file looked up in the project root.
pub const CONFIG_FILENAME: &str = "routegen.toml";

/// History strategy used by the generated router shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// HTML5 history API (`BrowserRouter`).
    #[default]
    Browser,
    /// URL-fragment history (`HashRouter`).
    Hash,
}

impl RoutingMode {
    /// The react-router-dom router component the shell imports.
    pub fn router_import(self) -> &'static str {
        match self {
            RoutingMode::Browser => "BrowserRouter",
            RoutingMode::Hash => "HashRouter",
        }
    }
}

/// Generator options loaded from `routegen.toml`.
///
/// Config files are sparse — override just the values you want. Unknown
/// keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Folder names excluded from page discovery, matched as whole path
    /// segments anywhere under the pages root.
    pub exclude_folders: Vec<String>,
    /// History strategy for the generated router shell.
    pub routing_mode: RoutingMode,
    /// Generate only the route table, skipping the router shell.
    pub only_routes: bool,
    /// Redirect target of the catch-all wildcard route.
    pub index_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            exclude_folders: vec!["components".to_string()],
            routing_mode: RoutingMode::Browser,
            only_routes: false,
            index_path: "/index".to_string(),
        }
    }
}

/// Load config from `routegen.toml` in the project root, falling back to
/// defaults when the file doesn't exist.
pub fn load_config(project_root: &Path) -> Result<GeneratorConfig, ConfigError> {
    let path = project_root.join(CONFIG_FILENAME);
    if !path.exists() {
        return Ok(GeneratorConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}
