//! # Flexasset - area-based stylesheet and script registry
//!
//! `flexasset` collects references to stylesheets and scripts, groups them into
//! named *areas* of an application UI, resolves relative paths against a base
//! directory, and produces ordered, deduplicated lists ready to be rendered into
//! a page.
//!
//! ## Concepts
//!
//! - **Areas**: caller-defined names (`"common"`, `"default"`, `"admin"`, `"widgets"`, ...)
//!   created implicitly on first use.
//! - **External assets**: paths relative to the base directory, or absolute URLs.
//!   Relative paths are checked for existence through an [`AssetResolver`] and
//!   converted to public URLs; absolute URLs pass through untouched.
//! - **Inline assets**: literal CSS/JS blocks embedded directly into the page.
//! - **Common merge**: queries for `"default"` and `"admin"` return the `"common"`
//!   area's assets first, followed by the area's own.
//! - **Errors**: relative paths that do not exist are never served; they are
//!   recorded in [`AssetErrors`] for the page to report.
//!
//! ## Quick Start
//!
//! ```rust
//! use flexasset::{AssetRegistry, MemoryResolver};
//!
//! let resolver = MemoryResolver::new()
//!     .with_file("assets/css/site.css")
//!     .with_file("assets/css/admin.css");
//!
//! let mut registry = AssetRegistry::new(resolver);
//! registry.add_css("css/site.css", "common");
//! registry.add_css("css/admin.css", "admin");
//! registry.add_css("css/missing.css", "admin");
//! registry.add_js("https://cdn.example.com/app.js", "admin");
//!
//! assert_eq!(
//!     registry.css("admin"),
//!     vec!["/assets/css/site.css", "/assets/css/admin.css"]
//! );
//! assert_eq!(registry.js("admin"), vec!["https://cdn.example.com/app.js"]);
//! assert_eq!(registry.errors().css, vec!["css/missing.css"]);
//! ```
//!
//! ## Seeding from configuration
//!
//! Registries are usually seeded from a static [`AssetConfig`], loaded from YAML
//! or JSON, and then extended by individual call sites before rendering:
//!
//! ```rust
//! use flexasset::{AssetConfig, AssetRegistry, MemoryResolver};
//!
//! let config = AssetConfig::from_yaml_str(r#"
//! base_path: assets
//! areas:
//!   default:
//!     js: [js/app.js]
//!     inline_js: ["window.ready = true;"]
//! "#).unwrap();
//!
//! let resolver = MemoryResolver::new().with_file("assets/js/app.js");
//! let registry = AssetRegistry::from_config(&config, resolver);
//! assert_eq!(registry.js("default"), vec!["/assets/js/app.js"]);
//! assert_eq!(registry.inline_js("default"), vec!["window.ready = true;"]);
//! ```
//!
//! ## Rendering
//!
//! [`AssetRenderer`] turns an area's data into `<link>`/`<style>` and
//! `<script>` markup using MiniJinja templates, which can be overridden.
//!
//! ```rust
//! use flexasset::{render_styles, AssetRegistry, MemoryResolver};
//!
//! let mut registry = AssetRegistry::new(MemoryResolver::new());
//! registry.add_css("https://cdn.example.com/base.css", "default");
//! registry.add_inline_css("body { margin: 0; }", "default");
//!
//! let html = render_styles(&registry, "default").unwrap();
//! assert!(html.contains(r#"<link rel="stylesheet" href="https://cdn.example.com/base.css">"#));
//! assert!(html.contains("<style>\nbody { margin: 0; }\n</style>"));
//! ```
//!
//! Registries are plain owned values: construct one per application or per
//! request and pass it to the rendering layer explicitly.

pub mod asset;
pub mod config;
pub mod error;
pub mod registry;
pub mod render;
pub mod resolver;

pub use asset::{
    is_url, normalize_area, AssetKind, ADMIN_AREA, COMMON_AREA, DEFAULT_AREA, MERGED_AREAS,
};
pub use config::{AreaConfig, AssetConfig, SeedEntry, SeedSource, DEFAULT_BASE_PATH};
pub use error::{AssetErrors, ConfigError, ParseKindError, UnresolvedAssetPath};
pub use registry::AssetRegistry;
pub use render::{render_scripts, render_styles, AreaAssets, AssetRenderer};
pub use resolver::{AssetResolver, MemoryResolver, PublicDirResolver};
