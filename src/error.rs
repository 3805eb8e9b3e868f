//! Error types.
//!
//! Registry operations never fail: a relative path that cannot be found is
//! recorded in [`AssetErrors`] and left out of the served lists. The only
//! `Result`-returning surfaces are configuration loading ([`ConfigError`])
//! and kind parsing ([`ParseKindError`]).

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::asset::AssetKind;

/// A registered relative path that did not exist at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedAssetPath {
    /// Whether the path was registered as a stylesheet or a script
    pub kind: AssetKind,
    /// The original, trimmed path as passed to the registry
    pub path: String,
}

impl std::fmt::Display for UnresolvedAssetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} asset not found: {}", self.kind, self.path)
    }
}

impl std::error::Error for UnresolvedAssetPath {}

/// Paths that failed existence checks, per kind, in the order encountered.
///
/// Entries accumulate for the registry's lifetime and are never deduplicated:
/// registering the same missing path twice records it twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetErrors {
    pub css: Vec<String>,
    pub js: Vec<String>,
}

impl AssetErrors {
    /// Returns the unresolved paths for one kind.
    pub fn of(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Css => &self.css,
            AssetKind::Js => &self.js,
        }
    }

    pub(crate) fn record(&mut self, kind: AssetKind, path: String) {
        match kind {
            AssetKind::Css => self.css.push(path),
            AssetKind::Js => self.js.push(path),
        }
    }

    /// Total number of recorded failures across both kinds.
    pub fn len(&self) -> usize {
        self.css.len() + self.js.len()
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.js.is_empty()
    }

    /// Iterates over all failures as typed records, stylesheets first.
    pub fn iter(&self) -> impl Iterator<Item = UnresolvedAssetPath> + '_ {
        AssetKind::ALL.into_iter().flat_map(move |kind| {
            self.of(kind).iter().map(move |path| UnresolvedAssetPath {
                kind,
                path: path.clone(),
            })
        })
    }
}

/// Error returned when an asset kind name is not `css` or `js`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown asset kind '{value}' (expected 'css' or 'js')")]
pub struct ParseKindError {
    pub value: String,
}

/// Error returned when seed configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read asset config \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML document is malformed or has the wrong shape.
    #[error("invalid YAML asset config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document is malformed or has the wrong shape.
    #[error("invalid JSON asset config: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not map to a known format.
    #[error(
        "unsupported asset config format \"{}\" (expected .yaml, .yml or .json)",
        .path.display()
    )]
    UnsupportedFormat { path: PathBuf },
}
