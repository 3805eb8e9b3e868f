//! Page markup for registered assets.
//!
//! This module turns an area's registered assets into HTML fragments:
//!
//! - **Styles**: a `<link>` per stylesheet URL, a `<style>` block with the
//!   inline stylesheets, and an HTML comment listing stylesheets that could
//!   not be found
//! - **Scripts**: the same shape with `<script>` elements
//!
//! Markup comes from MiniJinja templates named `styles` and `scripts`. The
//! built-in versions are loaded on demand and can be replaced with
//! [`AssetRenderer::add_template`]. Templates receive an [`AreaAssets`] value.
//!
//! For one-off rendering with the built-in templates use [`render_styles`]
//! and [`render_scripts`], which share a lazily-built renderer.

mod filters;
mod renderer;
mod templates;

pub use renderer::{AreaAssets, AssetRenderer};

use minijinja::Error;
use once_cell::sync::Lazy;

use crate::registry::AssetRegistry;
use crate::resolver::AssetResolver;

static DEFAULT_RENDERER: Lazy<AssetRenderer> = Lazy::new(AssetRenderer::new);

/// Renders the stylesheet markup for `area` with the built-in template.
///
/// # Example
///
/// ```rust
/// use flexasset::{render_styles, AssetRegistry, MemoryResolver};
///
/// let mut registry = AssetRegistry::new(MemoryResolver::new());
/// registry.add_css("missing.css", "default");
///
/// let html = render_styles(&registry, "default").unwrap();
/// assert_eq!(html, "<!-- File not found: missing.css -->\n");
/// ```
pub fn render_styles<R: AssetResolver>(
    registry: &AssetRegistry<R>,
    area: &str,
) -> Result<String, Error> {
    DEFAULT_RENDERER.render_styles(registry, area)
}

/// Renders the script markup for `area` with the built-in template.
pub fn render_scripts<R: AssetResolver>(
    registry: &AssetRegistry<R>,
    area: &str,
) -> Result<String, Error> {
    DEFAULT_RENDERER.render_scripts(registry, area)
}
