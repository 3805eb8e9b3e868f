//! Asset kinds, area names, and URL classification.
//!
//! This module provides the small vocabulary shared by the rest of the crate:
//!
//! - [`AssetKind`]: stylesheet or script
//! - Area constants and [`normalize_area`]
//! - [`is_url`]: decides whether a path bypasses filesystem resolution

mod classify;

pub use classify::is_url;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;

/// Area used when a caller passes a blank area name.
pub const DEFAULT_AREA: &str = "default";

/// Site-wide area folded into [`MERGED_AREAS`] at query time.
pub const COMMON_AREA: &str = "common";

/// Area for administrative pages.
pub const ADMIN_AREA: &str = "admin";

/// Areas whose queries are prefixed with the [`COMMON_AREA`] collection.
///
/// This is a fixed two-value policy; custom areas never inherit from `common`.
pub const MERGED_AREAS: [&str; 2] = [DEFAULT_AREA, ADMIN_AREA];

/// The kind of an asset: stylesheet or script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Css,
    Js,
}

impl AssetKind {
    /// All kinds, in rendering order.
    pub const ALL: [AssetKind; 2] = [AssetKind::Css, AssetKind::Js];

    /// Returns the lowercase name (`"css"` or `"js"`).
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Css => "css",
            AssetKind::Js => "js",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(AssetKind::Css),
            "js" => Ok(AssetKind::Js),
            _ => Err(ParseKindError {
                value: s.to_string(),
            }),
        }
    }
}

/// Trims an area name, returning `None` when nothing is left.
///
/// Mutations fall back to [`DEFAULT_AREA`] on `None`; queries return an
/// empty collection.
///
/// # Example
///
/// ```rust
/// use flexasset::normalize_area;
///
/// assert_eq!(normalize_area("  admin "), Some("admin"));
/// assert_eq!(normalize_area("   "), None);
/// ```
pub fn normalize_area(area: &str) -> Option<&str> {
    let area = area.trim();
    if area.is_empty() {
        None
    } else {
        Some(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str_and_display() {
        assert_eq!(AssetKind::Css.as_str(), "css");
        assert_eq!(AssetKind::Js.to_string(), "js");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("css".parse::<AssetKind>().unwrap(), AssetKind::Css);
        assert_eq!(" JS ".parse::<AssetKind>().unwrap(), AssetKind::Js);

        let err = "html".parse::<AssetKind>().unwrap_err();
        assert_eq!(err.value, "html");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AssetKind::Css).unwrap(), "\"css\"");
    }

    #[test]
    fn test_normalize_area() {
        assert_eq!(normalize_area("widgets"), Some("widgets"));
        assert_eq!(normalize_area("\tadmin\n"), Some("admin"));
        assert_eq!(normalize_area(""), None);
        assert_eq!(normalize_area("  "), None);
    }

    #[test]
    fn test_merged_areas_policy() {
        assert!(MERGED_AREAS.contains(&"default"));
        assert!(MERGED_AREAS.contains(&"admin"));
        assert!(!MERGED_AREAS.contains(&"common"));
    }
}
