//! Built-in markup templates.
//!
//! Rendered with `trim_blocks`, so the newline after each block tag is
//! dropped and every emitted line ends with exactly one `\n`. Error paths
//! pass through the `comment` filter so they cannot close the comment.

use minijinja::Error;

pub(crate) const STYLES_TEMPLATE: &str = r#"{% for href in urls %}
<link rel="stylesheet" href="{{ href | attr }}">
{% endfor %}
{% if inline %}

<style>
{{ inline }}
</style>
{% endif %}
{% if errors %}
<!-- File not found: {{ errors | join("\n") | comment }} -->
{% endif %}
"#;

pub(crate) const SCRIPTS_TEMPLATE: &str = r#"{% for src in urls %}
<script type="text/javascript" src="{{ src | attr }}"></script>
{% endfor %}
{% if inline %}

<script type="text/javascript">
{{ inline }}
</script>
{% endif %}
{% if errors %}
<!-- File not found: {{ errors | join("\n") | comment }} -->
{% endif %}
"#;

/// Loader serving the built-in templates by name.
pub(crate) fn builtin_loader(name: &str) -> Result<Option<String>, Error> {
    Ok(match name {
        "styles" => Some(STYLES_TEMPLATE.to_string()),
        "scripts" => Some(SCRIPTS_TEMPLATE.to_string()),
        _ => None,
    })
}
