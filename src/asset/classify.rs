//! Absolute URL detection.

use url::Url;

/// Returns true if `candidate` is an absolute URL with a host.
///
/// Protocol-relative references (`//cdn.example.com/app.js`) count as URLs.
/// The scheme must be followed by `//`: forms the URL parser would repair
/// (`https:/host`, `https:host`, backslashes) are treated as paths, as are
/// strings with a scheme but no host (`mailto:`, `C:\...`). Never touches
/// the network.
///
/// # Example
///
/// ```rust
/// use flexasset::is_url;
///
/// assert!(is_url("https://cdn.example.com/app.js"));
/// assert!(is_url("//cdn.example.com/app.js"));
/// assert!(!is_url("js/app.js"));
/// ```
pub fn is_url(candidate: &str) -> bool {
    let candidate = candidate.trim();
    if candidate.is_empty()
        || candidate.contains('\\')
        || candidate.chars().any(char::is_whitespace)
    {
        return false;
    }

    let parsed = match candidate.strip_prefix("//") {
        Some(rest) => Url::parse(&format!("http://{}", rest)),
        None => {
            let has_authority = candidate
                .split_once(':')
                .is_some_and(|(_, rest)| rest.starts_with("//"));
            if !has_authority {
                return false;
            }
            Url::parse(candidate)
        }
    };

    parsed
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_are_urls() {
        assert!(is_url("http://example.com/a.css"));
        assert!(is_url("https://cdn.example.com/x.js"));
        assert!(is_url("https://cdn.example.com:8443/lib/x.js?v=2#top"));
    }

    #[test]
    fn test_other_schemes_with_host_are_urls() {
        assert!(is_url("ftp://files.example.com/a.css"));
    }

    #[test]
    fn test_protocol_relative_is_url() {
        assert!(is_url("//cdn.example.com/x.js"));
        assert!(!is_url("//"));
    }

    #[test]
    fn test_relative_paths_are_not_urls() {
        assert!(!is_url("css/app.css"));
        assert!(!is_url("app.js"));
        assert!(!is_url("/assets/app.js"));
        assert!(!is_url("../vendor/app.js"));
    }

    #[test]
    fn test_scheme_without_host_is_not_url() {
        assert!(!is_url("mailto:someone@example.com"));
        assert!(!is_url("http://"));
    }

    #[test]
    fn test_scheme_without_authority_slashes_is_not_url() {
        assert!(!is_url("https:/cdn.example.com/x.js"));
        assert!(!is_url("https:cdn.example.com/x.js"));
        assert!(!is_url(r"http:\\cdn.example.com\x.js"));
        assert!(!is_url(r"//cdn.example.com\x.js"));
    }

    #[test]
    fn test_blank_and_whitespace() {
        assert!(!is_url(""));
        assert!(!is_url("   "));
        assert!(!is_url("https://example.com/my file.css"));
    }
}
