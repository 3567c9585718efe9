//! Project configuration.
//!
//! Handles loading and validating `docnav.toml`. The file is optional and
//! sparse: every key has a stock default, and a config file only needs the
//! values it wants to change.
//!
//! ## Config File Location
//!
//! Place `docnav.toml` in the project root, next to the `docs/` directory:
//!
//! ```text
//! site/
//! ├── docnav.toml            # Optional
//! ├── docs/                  # Content root
//! │   ├── intro.md
//! │   └── tutorial-basics/
//! │       ├── _category_.json
//! │       └── create-a-page.md
//! └── src/data/              # Generated JSON lands here
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! docs_dir = "docs"
//! data_dir = "src/data"
//! category_nav_file = "category-nav.json"
//! doc_titles_file = "doc-titles.json"
//! descriptor_file = "_category_.json"
//! reserved_dirs = ["img", "node_modules"]
//! extensions = ["md", "mdx"]
//!
//! [titles]
//! category_nav = ["title", "heading"]
//! doc_titles = ["title", "sidebar_label", "heading"]
//!
//! [render]
//! base_url = "/docs/"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::title::{TitleChain, TitleSource};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "docnav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Navigation generator configuration loaded from `docnav.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Content root, relative to the project root.
    pub docs_dir: PathBuf,
    /// Output directory for generated JSON, relative to the project root.
    pub data_dir: PathBuf,
    /// File name of the hierarchical navigation index.
    pub category_nav_file: String,
    /// File name of the flat document title map.
    pub doc_titles_file: String,
    /// Sidecar descriptor file name looked up in each category directory.
    pub descriptor_file: String,
    /// Directory names that are never scanned (asset folders, dependencies).
    pub reserved_dirs: Vec<String>,
    /// Markdown file extensions, without the leading dot.
    pub extensions: Vec<String>,
    /// Title fallback chains per output.
    pub titles: TitlesConfig,
    /// Category nav fragment rendering.
    pub render: RenderConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            data_dir: PathBuf::from("src/data"),
            category_nav_file: "category-nav.json".to_string(),
            doc_titles_file: "doc-titles.json".to_string(),
            descriptor_file: "_category_.json".to_string(),
            reserved_dirs: vec!["img".to_string(), "node_modules".to_string()],
            extensions: vec!["md".to_string(), "mdx".to_string()],
            titles: TitlesConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Title fallback chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitlesConfig {
    /// Sources for page titles in the navigation index.
    pub category_nav: TitleChain,
    /// Sources for the flat document title map.
    pub doc_titles: TitleChain,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            category_nav: TitleChain::category_nav(),
            doc_titles: TitleChain::doc_titles(),
        }
    }
}

/// Category nav fragment rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Prefix joined with each document id to form link targets.
    pub base_url: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_url: "/docs/".to_string(),
        }
    }
}

impl NavConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("category_nav_file", &self.category_nav_file),
            ("doc_titles_file", &self.doc_titles_file),
            ("descriptor_file", &self.descriptor_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "extensions must be given without a leading dot, got {ext:?}"
            )));
        }
        validate_chain("titles.category_nav", &self.titles.category_nav)?;
        validate_chain("titles.doc_titles", &self.titles.doc_titles)?;
        Ok(())
    }

    /// Content root resolved against the project root.
    pub fn docs_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.docs_dir)
    }

    /// Path of the hierarchical navigation index.
    pub fn category_nav_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.data_dir).join(&self.category_nav_file)
    }

    /// Path of the flat document title map.
    pub fn doc_titles_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.data_dir).join(&self.doc_titles_file)
    }
}

fn validate_chain(key: &str, chain: &TitleChain) -> Result<(), ConfigError> {
    let mut seen: HashSet<TitleSource> = HashSet::new();
    for source in chain.sources() {
        if !seen.insert(*source) {
            return Err(ConfigError::Validation(format!(
                "{key} lists {source} more than once"
            )));
        }
    }
    Ok(())
}

/// Load config from an explicit file path.
///
/// A missing file yields the stock defaults. Unknown keys and invalid values
/// are errors.
pub fn load_config_file(path: &Path) -> Result<NavConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(NavConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: NavConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load `docnav.toml` from the given project root.
pub fn load_config(project_root: &Path) -> Result<NavConfig, ConfigError> {
    load_config_file(&project_root.join(CONFIG_FILE))
}

/// Returns a fully-commented stock `docnav.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docnav Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Content root scanned for categories, relative to the project root.
docs_dir = "docs"

# Directory the generated JSON files are written to.
data_dir = "src/data"

# Hierarchical index: category -> { pages, subcategories }.
category_nav_file = "category-nav.json"

# Flat map: document id -> title.
doc_titles_file = "doc-titles.json"

# Sidecar file carrying { "label", "position" } for a category directory.
descriptor_file = "_category_.json"

# Directory names never treated as categories or scanned for documents.
reserved_dirs = ["img", "node_modules"]

# Markdown file extensions (no leading dot, matched case-insensitively).
extensions = ["md", "mdx"]

# ---------------------------------------------------------------------------
# Title resolution
# ---------------------------------------------------------------------------
# Sources tried in order: "title", "sidebar_label", "heading", "filename".
# The title-cased filename is always the final fallback.
[titles]
category_nav = ["title", "heading"]
doc_titles = ["title", "sidebar_label", "heading"]

# ---------------------------------------------------------------------------
# Category nav rendering (docnav render <category>)
# ---------------------------------------------------------------------------
[render]
# Prefix for document links.
base_url = "/docs/"
"##
}
