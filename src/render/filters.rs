//! MiniJinja filter registration.

use minijinja::{Environment, Value};

/// Escapes a value for use inside a double-quoted HTML attribute.
///
/// Only `&`, `<`, `>` and `"` are replaced, so URLs keep their slashes.
pub(crate) fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Makes a value safe inside an HTML comment.
///
/// Consecutive hyphens are separated by a space, so no `--` (and hence no
/// `-->`) survives.
pub(crate) fn escape_comment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    for c in text.chars() {
        if c == '-' && prev == Some('-') {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Registers the markup filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Usage: href="{{ url | attr }}"
    env.add_filter("attr", |value: Value| -> String {
        escape_attr(&value.to_string())
    });

    // Usage: <!-- {{ text | comment }} -->
    env.add_filter("comment", |value: Value| -> String {
        escape_comment(&value.to_string())
    });

    // Appends a newline, for custom templates that build lines explicitly.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr_keeps_url_characters() {
        assert_eq!(
            escape_attr("https://cdn.example.com/a.css?v=1#x"),
            "https://cdn.example.com/a.css?v=1#x"
        );
    }

    #[test]
    fn test_escape_attr_replaces_markup() {
        assert_eq!(
            escape_attr(r#"a.css"><script>&"#),
            "a.css&quot;&gt;&lt;script&gt;&amp;"
        );
    }

    #[test]
    fn test_escape_comment_breaks_hyphen_runs() {
        assert_eq!(escape_comment("css/a-b.css"), "css/a-b.css");
        assert_eq!(escape_comment("x.css--><script>"), "x.css- -><script>");
        assert_eq!(escape_comment("---"), "- - -");
    }

    #[test]
    fn test_filters_in_template() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let tmpl = env
            .template_from_str(r#"{{ url | attr }}|{{ "x" | nl }}"#)
            .unwrap();

        let output = tmpl
            .render(minijinja::context! { url => "/a.css?x=\"1\"" })
            .unwrap();
        assert_eq!(output, "/a.css?x=&quot;1&quot;|x\n");
    }
}
