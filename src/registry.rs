//! Area-keyed asset registry.
//!
//! This module provides [`AssetRegistry`], which collects stylesheet and
//! script references and inline code blocks per area, and answers queries
//! for the lists a page should render.
//!
//! # Design
//!
//! The registry works in two phases that may interleave freely:
//!
//! 1. **Collection**: `add_*` calls (and construction from a seed) resolve and
//!    store entries. Resolution happens once, at insertion time.
//! 2. **Query**: `css`/`js`/`inline_*` read the stored entries, applying the
//!    common-area merge rule.
//!
//! # Resolution
//!
//! An external path is handled as follows:
//!
//! 1. Absolute URLs (see [`is_url`]) are stored as-is, with no existence check
//! 2. Other paths are joined to the base path and checked with the
//!    [`AssetResolver`]; existing files are stored as their public URL
//! 3. Missing files are recorded in [`AssetErrors`] and not stored
//!
//! Stored URLs are deduplicated per area by their resolved value, so two
//! relative paths that publish to the same URL collapse to one entry. Inline
//! blocks are never deduplicated.
//!
//! # Merge Rule
//!
//! | Query area | Result |
//! |------------|--------|
//! | `default`, `admin` | `common` entries, then the area's own |
//! | any other known area (including `common`) | the area's own entries |
//! | unknown or blank | empty |
//!
//! # Example
//!
//! ```rust
//! use flexasset::{AssetRegistry, MemoryResolver};
//!
//! let resolver = MemoryResolver::new()
//!     .with_file("assets/a.css")
//!     .with_file("assets/b.css")
//!     .with_file("assets/c.css");
//!
//! let mut registry = AssetRegistry::new(resolver);
//! registry.add_css("a.css", "common");
//! registry.add_css("b.css", "default");
//! registry.add_css("c.css", "widgets");
//!
//! assert_eq!(registry.css("default"), vec!["/assets/a.css", "/assets/b.css"]);
//! assert_eq!(registry.css("common"), vec!["/assets/a.css"]);
//! assert_eq!(registry.css("widgets"), vec!["/assets/c.css"]);
//! assert!(registry.css("nowhere").is_empty());
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::asset::{
    is_url, normalize_area, AssetKind, ADMIN_AREA, COMMON_AREA, DEFAULT_AREA, MERGED_AREAS,
};
use crate::config::{AssetConfig, SeedEntry, SeedSource, DEFAULT_BASE_PATH};
use crate::error::AssetErrors;
use crate::resolver::{AssetResolver, PublicDirResolver};

/// Entries of one kind, keyed by area.
#[derive(Debug, Clone, Default, Serialize)]
struct KindStore {
    external: IndexMap<String, IndexSet<String>>,
    inline: IndexMap<String, Vec<String>>,
}

impl KindStore {
    fn ensure_area(&mut self, area: &str) {
        if !self.external.contains_key(area) {
            self.external.insert(area.to_string(), IndexSet::new());
        }
        if !self.inline.contains_key(area) {
            self.inline.insert(area.to_string(), Vec::new());
        }
    }
}

/// Collects the entries for `area`, applying the common-area merge rule.
fn collect_area<'a, C>(map: &'a IndexMap<String, C>, area: &str) -> Vec<String>
where
    &'a C: IntoIterator<Item = &'a String>,
{
    let Some(area) = normalize_area(area) else {
        return Vec::new();
    };

    let own = map.get(area).into_iter().flatten();
    if MERGED_AREAS.contains(&area) {
        map.get(COMMON_AREA)
            .into_iter()
            .flatten()
            .chain(own)
            .cloned()
            .collect()
    } else {
        own.cloned().collect()
    }
}

/// Registry of stylesheets and scripts grouped by area.
///
/// The registry owns no external resources. Construct one per application or
/// per request and pass it explicitly to whatever renders the page; to share
/// defaults across requests, seed each instance from the same
/// [`AssetConfig`] rather than sharing a mutable instance.
///
/// # Thread Safety
///
/// The registry is a plain value with `&mut self` mutation. Concurrent
/// mutation of one instance requires external synchronization.
#[derive(Debug, Clone)]
pub struct AssetRegistry<R = PublicDirResolver> {
    base_path: String,
    css: KindStore,
    js: KindStore,
    errors: AssetErrors,
    resolver: R,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    base_path: &'a str,
    css: &'a KindStore,
    js: &'a KindStore,
    errors: &'a AssetErrors,
}

impl<R: AssetResolver> AssetRegistry<R> {
    /// Creates an empty registry using the default base path (`"assets"`).
    pub fn new(resolver: R) -> Self {
        Self::with_base_path(DEFAULT_BASE_PATH, resolver)
    }

    /// Creates an empty registry resolving relative paths under `base_path`.
    ///
    /// A trailing `/` on the base path is ignored. The `common`, `default`
    /// and `admin` areas exist from the start.
    pub fn with_base_path(base_path: impl Into<String>, resolver: R) -> Self {
        let base_path = base_path.into();
        let mut registry = Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            css: KindStore::default(),
            js: KindStore::default(),
            errors: AssetErrors::default(),
            resolver,
        };

        for area in [COMMON_AREA, DEFAULT_AREA, ADMIN_AREA] {
            registry.css.ensure_area(area);
            registry.js.ensure_area(area);
        }

        registry
    }

    /// Creates a registry and applies `seed` in order.
    ///
    /// Each entry behaves exactly like the matching `add_*` call; failures
    /// are recorded in [`errors`](Self::errors), never returned.
    pub fn from_seed(
        base_path: impl Into<String>,
        seed: impl IntoIterator<Item = SeedEntry>,
        resolver: R,
    ) -> Self {
        let mut registry = Self::with_base_path(base_path, resolver);
        for entry in seed {
            registry.apply(entry);
        }
        registry
    }

    /// Creates a registry seeded from a configuration.
    pub fn from_config(config: &AssetConfig, resolver: R) -> Self {
        Self::from_seed(config.base_path.clone(), config.seed(), resolver)
    }

    /// Applies one seed entry.
    pub fn apply(&mut self, entry: SeedEntry) {
        match entry.source {
            SeedSource::Path(path) => self.add(entry.kind, &path, &entry.area),
            SeedSource::Inline(code) => self.add_inline(entry.kind, &code, &entry.area),
        }
    }

    /// Returns the base path relative paths are resolved under.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    fn store(&self, kind: AssetKind) -> &KindStore {
        match kind {
            AssetKind::Css => &self.css,
            AssetKind::Js => &self.js,
        }
    }

    fn store_mut(&mut self, kind: AssetKind) -> &mut KindStore {
        match kind {
            AssetKind::Css => &mut self.css,
            AssetKind::Js => &mut self.js,
        }
    }

    fn locate(&self, path: &str) -> String {
        if self.base_path.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.base_path, path)
        }
    }

    fn file_exists(&self, location: &str) -> bool {
        match self.resolver.exists(location) {
            Ok(exists) => exists,
            Err(err) => {
                tracing::debug!(location, error = %err, "existence check failed");
                false
            }
        }
    }

    /// Registers an external asset of the given kind.
    ///
    /// `path` and `area` are trimmed; a blank area means `"default"` and a
    /// blank path is ignored. URLs are stored as given. Relative paths are
    /// stored as their public URL if the file exists, and recorded as
    /// errors otherwise. Adding a value already present in the area has no
    /// effect.
    pub fn add(&mut self, kind: AssetKind, path: &str, area: &str) {
        let path = path.trim();
        let area = normalize_area(area).unwrap_or(DEFAULT_AREA);
        self.store_mut(kind).ensure_area(area);

        if path.is_empty() {
            return;
        }

        let resolved = if is_url(path) {
            path.to_string()
        } else {
            let location = self.locate(path);
            if !self.file_exists(&location) {
                tracing::warn!(%kind, area, path, "asset not found under base path");
                self.errors.record(kind, path.to_string());
                return;
            }
            self.resolver.public_url(&location)
        };

        let entries = self
            .store_mut(kind)
            .external
            .entry(area.to_string())
            .or_default();
        if entries.insert(resolved) {
            tracing::debug!(%kind, area, path, "asset registered");
        } else {
            tracing::debug!(%kind, area, path, "asset already registered");
        }
    }

    /// Registers an inline code block of the given kind.
    ///
    /// The trimmed code is appended to the area's blocks; blank code is
    /// ignored. Duplicates are kept.
    pub fn add_inline(&mut self, kind: AssetKind, code: &str, area: &str) {
        let code = code.trim();
        let area = normalize_area(area).unwrap_or(DEFAULT_AREA);
        let store = self.store_mut(kind);
        store.ensure_area(area);

        if code.is_empty() {
            return;
        }

        store
            .inline
            .entry(area.to_string())
            .or_default()
            .push(code.to_string());
    }

    /// Registers a stylesheet. See [`add`](Self::add).
    pub fn add_css(&mut self, path: &str, area: &str) {
        self.add(AssetKind::Css, path, area);
    }

    /// Registers a script. See [`add`](Self::add).
    pub fn add_js(&mut self, path: &str, area: &str) {
        self.add(AssetKind::Js, path, area);
    }

    /// Registers an inline stylesheet. See [`add_inline`](Self::add_inline).
    pub fn add_inline_css(&mut self, code: &str, area: &str) {
        self.add_inline(AssetKind::Css, code, area);
    }

    /// Registers an inline script. See [`add_inline`](Self::add_inline).
    pub fn add_inline_js(&mut self, code: &str, area: &str) {
        self.add_inline(AssetKind::Js, code, area);
    }

    /// Returns the resolved URLs of one kind for `area`, merged with
    /// `common` for the `default` and `admin` areas.
    pub fn external(&self, kind: AssetKind, area: &str) -> Vec<String> {
        collect_area(&self.store(kind).external, area)
    }

    /// Returns the inline blocks of one kind for `area`, merged with
    /// `common` for the `default` and `admin` areas.
    pub fn inline(&self, kind: AssetKind, area: &str) -> Vec<String> {
        collect_area(&self.store(kind).inline, area)
    }

    pub fn css(&self, area: &str) -> Vec<String> {
        self.external(AssetKind::Css, area)
    }

    pub fn js(&self, area: &str) -> Vec<String> {
        self.external(AssetKind::Js, area)
    }

    pub fn inline_css(&self, area: &str) -> Vec<String> {
        self.inline(AssetKind::Css, area)
    }

    pub fn inline_js(&self, area: &str) -> Vec<String> {
        self.inline(AssetKind::Js, area)
    }

    /// Returns every path that failed resolution so far.
    pub fn errors(&self) -> &AssetErrors {
        &self.errors
    }

    /// Returns the paths of one kind that failed resolution so far.
    pub fn errors_of(&self, kind: AssetKind) -> &[String] {
        self.errors.of(kind)
    }

    /// Returns the names of the areas known for `kind`, in creation order.
    pub fn areas(&self, kind: AssetKind) -> Vec<&str> {
        let store = self.store(kind);
        let names: IndexSet<&str> = store
            .external
            .keys()
            .chain(store.inline.keys())
            .map(String::as_str)
            .collect();
        names.into_iter().collect()
    }

    /// Serializes the full registry state as pretty-printed JSON.
    pub fn debug_dump(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Snapshot {
            base_path: &self.base_path,
            css: &self.css,
            js: &self.js,
            errors: &self.errors,
        })
    }
}
