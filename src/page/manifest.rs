//! Route manifest emitted by the site generator.
//!
//! ```json
//! {
//!   "routes": ["/", "/docs/intro", "/404.html"],
//!   "head": {
//!     "/docs/intro": { "meta": [{ "name": "robots", "content": "noindex" }] }
//!   }
//! }
//! ```

use super::meta::RouteMetadata;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, io::Read, path::Path};

/// Routes plus head metadata for one site build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouteManifest {
    /// Every rendered route, in generator order.
    pub routes: Vec<String>,
    /// Head metadata keyed by route path. Routes may be absent.
    pub head: RouteMetadata,
}

impl RouteManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest = serde_json::from_str(content)?;
        Ok(manifest)
    }

    /// Load a manifest from `path`, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read route manifest from stdin")?;
            buf
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read route manifest {}", path.display()))?
        };

        Self::from_json(&content)
            .with_context(|| format!("Invalid route manifest {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "routes": ["/", "/docs/intro"],
            "head": {"/docs/intro": {"meta": [{"name": "robots", "content": "noindex"}]}}
        }"#;
        let manifest = RouteManifest::from_json(json).unwrap();
        assert_eq!(manifest.routes, vec!["/", "/docs/intro"]);
        assert!(manifest.head["/docs/intro"].is_noindex());
        assert!(!manifest.head.contains_key("/"));
    }

    #[test]
    fn test_from_json_without_head() {
        let manifest = RouteManifest::from_json(r#"{"routes": ["/a"]}"#).unwrap();
        assert_eq!(manifest.routes, vec!["/a"]);
        assert!(manifest.head.is_empty());
    }

    #[test]
    fn test_from_json_keeps_route_order() {
        let manifest = RouteManifest::from_json(r#"{"routes": ["/c", "/a", "/b", "/a"]}"#).unwrap();
        assert_eq!(manifest.routes, vec!["/c", "/a", "/b", "/a"]);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(RouteManifest::from_json("{\"routes\": 3}").is_err());
        assert!(RouteManifest::from_json("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("routes.json");
        fs::write(&path, r#"{"routes": ["/x"]}"#).unwrap();

        let manifest = RouteManifest::load(&path).unwrap();
        assert_eq!(manifest.routes, vec!["/x"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = RouteManifest::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read route manifest"));
    }
}
