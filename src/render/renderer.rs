//! Template-backed renderer for area markup.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::filters::register_filters;
use super::templates::builtin_loader;
use crate::asset::AssetKind;
use crate::registry::AssetRegistry;
use crate::resolver::AssetResolver;

/// Everything a template needs to render one kind of asset for one area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AreaAssets {
    /// `"css"` or `"js"`
    pub kind: &'static str,
    /// The area that was queried, as given
    pub area: String,
    /// Resolved URLs, common area first where the merge rule applies
    pub urls: Vec<String>,
    /// Inline blocks joined with newlines and trimmed (empty if none)
    pub inline: String,
    /// Paths of this kind that failed resolution, for the whole registry
    pub errors: Vec<String>,
}

impl AreaAssets {
    /// Collects one kind of asset for `area` from a registry.
    pub fn collect<R: AssetResolver>(
        registry: &AssetRegistry<R>,
        kind: AssetKind,
        area: &str,
    ) -> Self {
        Self {
            kind: kind.as_str(),
            area: area.to_string(),
            urls: registry.external(kind, area),
            inline: registry.inline(kind, area).join("\n").trim().to_string(),
            errors: registry.errors_of(kind).to_vec(),
        }
    }
}

/// Renders registry contents into page markup.
///
/// # Example
///
/// ```rust
/// use flexasset::{AssetRegistry, AssetRenderer, MemoryResolver};
///
/// let mut registry = AssetRegistry::new(MemoryResolver::new().with_file("assets/app.js"));
/// registry.add_js("app.js", "default");
/// registry.add_inline_js("start();", "default");
///
/// let renderer = AssetRenderer::new();
/// let html = renderer.render_scripts(&registry, "default").unwrap();
/// assert_eq!(
///     html,
///     "<script type=\"text/javascript\" src=\"/assets/app.js\"></script>\n\
///      \n<script type=\"text/javascript\">\nstart();\n</script>\n"
/// );
/// ```
#[derive(Debug)]
pub struct AssetRenderer {
    env: Environment<'static>,
}

impl AssetRenderer {
    /// Creates a renderer with the built-in `styles` and `scripts` templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_loader(builtin_loader);
        register_filters(&mut env);
        Self { env }
    }

    /// Registers or replaces a named template.
    ///
    /// Replacing `styles` or `scripts` changes the markup produced by
    /// [`render_styles`](Self::render_styles) and
    /// [`render_scripts`](Self::render_scripts). The template is compiled
    /// immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a named template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Renders the `styles` template for `area`.
    pub fn render_styles<R: AssetResolver>(
        &self,
        registry: &AssetRegistry<R>,
        area: &str,
    ) -> Result<String, Error> {
        self.render("styles", &AreaAssets::collect(registry, AssetKind::Css, area))
    }

    /// Renders the `scripts` template for `area`.
    pub fn render_scripts<R: AssetResolver>(
        &self,
        registry: &AssetRegistry<R>,
        area: &str,
    ) -> Result<String, Error> {
        self.render("scripts", &AreaAssets::collect(registry, AssetKind::Js, area))
    }
}

impl Default for AssetRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::MemoryResolver;

    fn registry() -> AssetRegistry<MemoryResolver> {
        let resolver = MemoryResolver::new()
            .with_file("assets/site.css")
            .with_file("assets/admin.css")
            .with_file("assets/app.js");
        AssetRegistry::new(resolver)
    }

    #[test]
    fn test_collect_area_assets() {
        let mut registry = registry();
        registry.add_css("site.css", "common");
        registry.add_css("admin.css", "admin");
        registry.add_inline_css("  a {}  ", "admin");
        registry.add_inline_css("b {}", "admin");
        registry.add_css("nope.css", "widgets");

        let assets = AreaAssets::collect(&registry, AssetKind::Css, "admin");
        assert_eq!(assets.kind, "css");
        assert_eq!(assets.urls, vec!["/assets/site.css", "/assets/admin.css"]);
        assert_eq!(assets.inline, "a {}\nb {}");
        assert_eq!(assets.errors, vec!["nope.css"]);
    }

    #[test]
    fn test_render_styles_full() {
        let mut registry = registry();
        registry.add_css("site.css", "common");
        registry.add_css("admin.css", "admin");
        registry.add_inline_css("nav { color: red; }", "admin");
        registry.add_css("missing.css", "admin");

        let html = AssetRenderer::new().render_styles(&registry, "admin").unwrap();
        assert_eq!(
            html,
            "<link rel=\"stylesheet\" href=\"/assets/site.css\">\n\
             <link rel=\"stylesheet\" href=\"/assets/admin.css\">\n\
             \n<style>\nnav { color: red; }\n</style>\n\
             <!-- File not found: missing.css -->\n"
        );
    }

    #[test]
    fn test_render_styles_empty_area() {
        let registry = registry();
        let html = AssetRenderer::new().render_styles(&registry, "nowhere").unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn test_render_scripts_errors_joined_by_newline() {
        let mut registry = registry();
        registry.add_js("a.js", "default");
        registry.add_js("b.js", "default");
        registry.add_css("c.css", "default");

        let html = AssetRenderer::new().render_scripts(&registry, "default").unwrap();
        assert_eq!(html, "<!-- File not found: a.js\nb.js -->\n");
    }

    #[test]
    fn test_render_escapes_attribute_quotes() {
        let mut registry = registry();
        registry.add_js("https://cdn.example.com/x.js?q=\"y\"", "widgets");

        let html = AssetRenderer::new().render_scripts(&registry, "widgets").unwrap();
        assert!(html.contains("src=\"https://cdn.example.com/x.js?q=&quot;y&quot;\""));
    }

    #[test]
    fn test_render_error_paths_cannot_close_comment() {
        let mut registry = registry();
        registry.add_css("x.css--><script>alert(1)</script>", "default");

        let html = AssetRenderer::new().render_styles(&registry, "default").unwrap();
        assert_eq!(
            html,
            "<!-- File not found: x.css- -><script>alert(1)</script> -->\n"
        );
        assert_eq!(html.matches("-->").count(), 1);
    }

    #[test]
    fn test_override_template() {
        let mut registry = registry();
        registry.add_css("site.css", "default");

        let mut renderer = AssetRenderer::new();
        renderer
            .add_template("styles", "{% for u in urls %}{{ u | nl }}{% endfor %}")
            .unwrap();

        let html = renderer.render_styles(&registry, "default").unwrap();
        assert_eq!(html, "/assets/site.css\n");
    }

    #[test]
    fn test_unknown_template_error() {
        let renderer = AssetRenderer::new();
        let result = renderer.render("nonexistent", &AreaAssets::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_template_rejected() {
        let mut renderer = AssetRenderer::new();
        assert!(renderer.add_template("styles", "{% for %}").is_err());
    }
}
