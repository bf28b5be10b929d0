//! URL construction for sitemap entries.
//!
//! Route paths come from the site generator rooted at `/`. The helpers here
//! turn them into absolute, encoded URLs:
//!
//! ```text
//! /docs/intro  --join_base_url("/proj/")-->   /proj/docs/intro
//!              --apply_trailing_slash(Add)--> /proj/docs/intro/
//!              --absolute_url(origin)-->      https://example.org/proj/docs/intro/
//! ```
//!
//! Existing escapes such as `%3F` or `%2F` are kept verbatim, so an escaped
//! reserved character never turns into a query, fragment or path separator.

use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

/// Trailing slash policy for generated URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// Always end page URLs with `/`.
    Add,
    /// Never end page URLs with `/`.
    Remove,
    /// Keep URLs exactly as the route lists them.
    #[default]
    Preserve,
}

impl TrailingSlash {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Preserve => "preserve",
        }
    }
}

/// Normalize a base path to the `/segment/` form.
///
/// `""` and `"/"` both become `/`.
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Prefix a route with the site base path.
///
/// Routes that already live under the base path are returned unchanged,
/// so generators that emit fully-qualified routes are handled too.
pub fn join_base_url(base_url: &str, route: &str) -> String {
    let base = normalize_base_url(base_url);
    if base == "/" {
        return if route.starts_with('/') {
            route.to_string()
        } else {
            format!("/{route}")
        };
    }

    let bare_base = base.trim_end_matches('/');
    if route == bare_base || route.starts_with(&base) {
        return route.to_string();
    }

    format!("{base}{}", route.trim_start_matches('/'))
}

/// Apply the trailing slash policy to the pathname part of `path`.
///
/// Query strings and fragments are kept as-is. The site root and the base
/// path itself are never changed.
pub fn apply_trailing_slash(path: &str, policy: TrailingSlash, base_url: &str) -> String {
    if policy == TrailingSlash::Preserve || path.starts_with('#') {
        return path.to_string();
    }

    let split = path.find(['?', '#']).unwrap_or(path.len());
    let (pathname, suffix) = path.split_at(split);

    if pathname == "/" || pathname.is_empty() || pathname == normalize_base_url(base_url) {
        return path.to_string();
    }

    let pathname = match policy {
        TrailingSlash::Add if pathname.ends_with('/') => pathname.to_string(),
        TrailingSlash::Add => format!("{pathname}/"),
        TrailingSlash::Remove => {
            let stripped = pathname.trim_end_matches('/');
            if stripped.is_empty() {
                "/".to_string()
            } else {
                stripped.to_string()
            }
        }
        TrailingSlash::Preserve => pathname.to_string(),
    };

    format!("{pathname}{suffix}")
}

/// Parse the site URL into the origin every entry is resolved against.
///
/// The host is IDNA-normalized (`例え.jp` -> `xn--...`).
pub fn parse_origin(hostname: &str) -> Result<Url, ParseError> {
    let url = Url::parse(hostname.trim())?;
    if url.cannot_be_a_base() {
        return Err(ParseError::RelativeUrlWithCannotBeABaseBase);
    }
    Ok(url)
}

/// Resolve an absolute path against `origin`.
///
/// Characters not allowed in a URL are percent-encoded; existing escapes are
/// left as they are. A leading `//` is collapsed so the path can never be
/// read as a network host.
pub fn absolute_url(origin: &Url, path: &str) -> Result<Url, ParseError> {
    let path = format!("/{}", path.trim_start_matches('/'));
    origin.join(&path)
}

/// Terminal segment of a route path, ignoring query and fragment.
///
/// `/docs/404.html` -> `404.html`, `/` -> `""`
pub fn last_segment(route: &str) -> &str {
    let pathname = route.split(['?', '#']).next().unwrap_or(route);
    pathname.rsplit('/').next().unwrap_or_default()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url("proj"), "/proj/");
        assert_eq!(normalize_base_url("/proj"), "/proj/");
        assert_eq!(normalize_base_url("/a/b/"), "/a/b/");
    }

    #[test]
    fn test_join_base_url_root() {
        assert_eq!(join_base_url("/", "/docs/intro"), "/docs/intro");
        assert_eq!(join_base_url("/", "docs"), "/docs");
        assert_eq!(join_base_url("", "/"), "/");
    }

    #[test]
    fn test_join_base_url_prefix() {
        assert_eq!(join_base_url("/proj/", "/docs/intro"), "/proj/docs/intro");
        assert_eq!(join_base_url("/proj/", "/"), "/proj/");
        assert_eq!(join_base_url("proj", "docs/"), "/proj/docs/");
    }

    #[test]
    fn test_join_base_url_already_prefixed() {
        assert_eq!(join_base_url("/proj/", "/proj/docs"), "/proj/docs");
        assert_eq!(join_base_url("/proj/", "/proj"), "/proj");
        // Only whole segments count as the base path
        assert_eq!(join_base_url("/proj/", "/project/x"), "/proj/project/x");
    }

    #[test]
    fn test_trailing_slash_add() {
        let add = TrailingSlash::Add;
        assert_eq!(apply_trailing_slash("/docs/intro", add, "/"), "/docs/intro/");
        assert_eq!(apply_trailing_slash("/docs/intro/", add, "/"), "/docs/intro/");
        assert_eq!(apply_trailing_slash("/", add, "/"), "/");
    }

    #[test]
    fn test_trailing_slash_remove() {
        let remove = TrailingSlash::Remove;
        assert_eq!(apply_trailing_slash("/docs/intro/", remove, "/"), "/docs/intro");
        assert_eq!(apply_trailing_slash("/docs/intro", remove, "/"), "/docs/intro");
        assert_eq!(apply_trailing_slash("/", remove, "/"), "/");
    }

    #[test]
    fn test_trailing_slash_preserve() {
        let keep = TrailingSlash::Preserve;
        assert_eq!(apply_trailing_slash("/a/", keep, "/"), "/a/");
        assert_eq!(apply_trailing_slash("/a", keep, "/"), "/a");
    }

    #[test]
    fn test_trailing_slash_skips_base_url() {
        assert_eq!(
            apply_trailing_slash("/proj/", TrailingSlash::Remove, "/proj/"),
            "/proj/"
        );
        assert_eq!(
            apply_trailing_slash("/proj/docs/", TrailingSlash::Remove, "/proj/"),
            "/proj/docs"
        );
    }

    #[test]
    fn test_trailing_slash_keeps_query_and_fragment() {
        assert_eq!(
            apply_trailing_slash("/search?q=a", TrailingSlash::Add, "/"),
            "/search/?q=a"
        );
        assert_eq!(
            apply_trailing_slash("/docs/#top", TrailingSlash::Remove, "/"),
            "/docs#top"
        );
        assert_eq!(apply_trailing_slash("#top", TrailingSlash::Add, "/"), "#top");
    }

    fn origin() -> Url {
        parse_origin("https://example.org").unwrap()
    }

    fn resolve(path: &str) -> String {
        absolute_url(&origin(), path).unwrap().to_string()
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(resolve("/a/"), "https://example.org/a/");
        assert_eq!(resolve("a"), "https://example.org/a");
        assert_eq!(resolve("/"), "https://example.org/");
        let slashed = parse_origin("https://example.org/").unwrap();
        assert_eq!(absolute_url(&slashed, "/a/").unwrap().as_str(), "https://example.org/a/");
    }

    #[test]
    fn test_absolute_url_encodes_path() {
        assert_eq!(resolve("/a b/"), "https://example.org/a%20b/");
        assert_eq!(resolve("/文档/"), "https://example.org/%E6%96%87%E6%A1%A3/");
        // Already encoded input is not double-encoded
        assert_eq!(resolve("/a%20b/"), "https://example.org/a%20b/");
        // Structural characters survive
        assert_eq!(resolve("/s?q=a&b=c#x"), "https://example.org/s?q=a&b=c#x");
    }

    #[test]
    fn test_absolute_url_keeps_reserved_escapes() {
        assert_eq!(resolve("/faq%3Fwhy/"), "https://example.org/faq%3Fwhy/");
        assert_eq!(resolve("/a%2Fb/"), "https://example.org/a%2Fb/");
        assert_eq!(resolve("/c%23d/"), "https://example.org/c%23d/");
    }

    #[test]
    fn test_absolute_url_double_slash_stays_on_origin() {
        assert_eq!(resolve("//evil.example/x"), "https://example.org/evil.example/x");
    }

    #[test]
    fn test_parse_origin_punycodes_host() {
        let origin = parse_origin("https://例え.jp").unwrap();
        let host = origin.host_str().unwrap();
        assert!(host.starts_with("xn--"), "{host}");
        assert!(host.is_ascii());
        assert_eq!(
            absolute_url(&origin, "/a").unwrap().as_str(),
            format!("https://{host}/a")
        );
    }

    #[test]
    fn test_parse_origin_rejects_invalid() {
        assert!(parse_origin("example.org").is_err());
        assert!(parse_origin("mailto:me@example.org").is_err());
        assert!(parse_origin("").is_err());
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/404.html"), "404.html");
        assert_eq!(last_segment("/docs/404.html"), "404.html");
        assert_eq!(last_segment("/docs/"), "");
        assert_eq!(last_segment("/"), "");
        assert_eq!(last_segment("/404.html?x=1"), "404.html");
    }

    #[test]
    fn test_last_segment_is_whole_segment() {
        // Only an exact terminal segment counts, not a suffix
        assert_eq!(last_segment("/foo404.html"), "foo404.html");
        assert_eq!(last_segment("/docs/my-404.html"), "my-404.html");
        assert_ne!(last_segment("/foo404.html"), "404.html");
    }

    #[test]
    fn test_trailing_slash_serde() {
        #[derive(Deserialize)]
        struct Wrap {
            policy: TrailingSlash,
        }
        let wrap: Wrap = toml::from_str("policy = \"add\"").unwrap();
        assert_eq!(wrap.policy, TrailingSlash::Add);
        assert!(toml::from_str::<Wrap>("policy = \"always\"").is_err());
        assert_eq!(TrailingSlash::default().as_str(), "preserve");
    }
}
