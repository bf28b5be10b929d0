//! Rendered `<head>` metadata per route.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Route path -> rendered head metadata.
pub type RouteMetadata = FxHashMap<String, RouteHead>;

/// A `<meta>` tag descriptor.
///
/// Only `name` and `content` are read; tags using `property` or
/// `http-equiv` deserialize with `name: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTag {
    pub name: Option<String>,
    pub content: Option<String>,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            content: Some(content.into()),
        }
    }

    /// `<meta name="robots" content="noindex">`, compared case-sensitively.
    pub fn is_noindex(&self) -> bool {
        self.name.as_deref() == Some("robots") && self.content.as_deref() == Some("noindex")
    }
}

/// Head metadata collected by the site generator's render pass.
///
/// Unknown keys (title, link, script, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteHead {
    /// Meta tags in document order.
    pub meta: Vec<MetaTag>,
}

impl RouteHead {
    pub fn new(meta: Vec<MetaTag>) -> Self {
        Self { meta }
    }

    /// Whether any meta tag asks search engines not to index the page.
    pub fn is_noindex(&self) -> bool {
        self.meta.iter().any(MetaTag::is_noindex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noindex_detected() {
        let head = RouteHead::new(vec![
            MetaTag::new("description", "Intro"),
            MetaTag::new("robots", "noindex"),
        ]);
        assert!(head.is_noindex());
    }

    #[test]
    fn test_index_not_noindex() {
        let head = RouteHead::new(vec![MetaTag::new("robots", "index")]);
        assert!(!head.is_noindex());
    }

    #[test]
    fn test_noindex_is_case_sensitive() {
        assert!(!MetaTag::new("Robots", "noindex").is_noindex());
        assert!(!MetaTag::new("robots", "NOINDEX").is_noindex());
        // Combined directives are not an exact match
        assert!(!MetaTag::new("robots", "noindex, nofollow").is_noindex());
    }

    #[test]
    fn test_empty_head() {
        assert!(!RouteHead::default().is_noindex());
    }

    #[test]
    fn test_deserialize_partial_tags() {
        let json = r#"{
            "title": "ignored",
            "meta": [
                {"property": "og:title", "content": "Hello"},
                {"name": "robots", "content": "noindex"}
            ]
        }"#;
        let head: RouteHead = serde_json::from_str(json).unwrap();
        assert_eq!(head.meta.len(), 2);
        assert_eq!(head.meta[0].name, None);
        assert!(head.is_noindex());
    }
}
