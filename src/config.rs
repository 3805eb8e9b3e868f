//! Seed configuration for asset registries.
//!
//! An [`AssetConfig`] lists, per area, the stylesheets, scripts, and inline
//! blocks every registry starts with. It is read once and can seed any number
//! of independent registries (one per request, for instance).
//!
//! # Format
//!
//! ```yaml
//! base_path: assets
//! areas:
//!   common:
//!     css: [css/site.css]
//!   default:
//!     js: [js/app.js]
//!     inline_js: ["window.ready = true;"]
//!   admin:
//!     css: [css/admin.css]
//!     inline_css: ["body { background: #eee; }"]
//! ```
//!
//! The `areas` table may also be spelled `aree`. Every list is optional.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::asset::AssetKind;
use crate::error::ConfigError;

/// Base directory used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "assets";

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

/// Assets declared for one area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConfig {
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub inline_css: Vec<String>,
    pub inline_js: Vec<String>,
}

/// Static registry configuration: base path and per-area assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory prefix, relative to the public root, for relative asset paths
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Areas in declaration order
    #[serde(default, alias = "aree")]
    pub areas: IndexMap<String, AreaConfig>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            areas: IndexMap::new(),
        }
    }
}

/// Where a seeded entry's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// A relative path or URL, resolved like `add_css`/`add_js`
    Path(String),
    /// A literal code block, stored like `add_inline_css`/`add_inline_js`
    Inline(String),
}

/// One entry applied to a registry at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub area: String,
    pub kind: AssetKind,
    pub source: SeedSource,
}

impl SeedEntry {
    /// Creates a path entry.
    pub fn path(area: impl Into<String>, kind: AssetKind, path: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            kind,
            source: SeedSource::Path(path.into()),
        }
    }

    /// Creates an inline code entry.
    pub fn inline(area: impl Into<String>, kind: AssetKind, code: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            kind,
            source: SeedSource::Inline(code.into()),
        }
    }
}

impl AssetConfig {
    /// Creates an empty configuration with the given base path.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            areas: IndexMap::new(),
        }
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a configuration file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for extensions other than
    /// `.yaml`, `.yml` and `.json`, and [`ConfigError::Io`] if the file cannot
    /// be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }

    /// Adds (or replaces) an area, returning the config for chaining.
    pub fn with_area(mut self, name: impl Into<String>, area: AreaConfig) -> Self {
        self.areas.insert(name.into(), area);
        self
    }

    /// Flattens the configuration into seed entries.
    ///
    /// Areas keep their declaration order; within an area the order is
    /// stylesheets, scripts, inline stylesheets, inline scripts.
    pub fn seed(&self) -> Vec<SeedEntry> {
        let mut entries = Vec::new();
        for (name, area) in &self.areas {
            for path in &area.css {
                entries.push(SeedEntry::path(name, AssetKind::Css, path));
            }
            for path in &area.js {
                entries.push(SeedEntry::path(name, AssetKind::Js, path));
            }
            for code in &area.inline_css {
                entries.push(SeedEntry::inline(name, AssetKind::Css, code));
            }
            for code in &area.inline_js {
                entries.push(SeedEntry::inline(name, AssetKind::Js, code));
            }
        }
        entries
    }
}
