//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! url = "https://example.org"
//! base_url = "/project/"
//! trailing_slash = "add"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::config::util::extract_url_path;
use crate::core::TrailingSlash;
use serde::{Deserialize, Serialize};

/// Site-wide URL settings shared by every generated link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Absolute site URL without path (e.g., "https://example.org").
    pub url: Option<String>,

    /// Path prefix the site is served under (e.g., "/project/").
    pub base_url: String,

    /// Whether page URLs end with `/`.
    pub trailing_slash: TrailingSlash,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: None,
            base_url: "/".into(),
            trailing_slash: TrailingSlash::default(),
        }
    }
}

pub struct SiteInfoFields {
    pub url: FieldPath,
    pub base_url: FieldPath,
    pub trailing_slash: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        url: FieldPath::new("site.url"),
        base_url: FieldPath::new("site.base_url"),
        trailing_slash: FieldPath::new("site.trailing_slash"),
    };

    /// Hostname for absolute URLs, `None` when unset or blank.
    pub fn hostname(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `sitemap_enabled`, `url` must be set
    /// - `url` must be http(s) with a host and no path
    /// - `base_url` must start and end with `/`
    pub fn validate(&self, sitemap_enabled: bool, diag: &mut ConfigDiagnostics) {
        match self.hostname() {
            None if sitemap_enabled => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("sitemap is enabled but {} is not configured", Self::FIELDS.url),
                    format!("set {}, e.g.: \"https://example.org\"", Self::FIELDS.url),
                );
            }
            None => {}
            Some(url_str) => self.validate_url(url_str, diag),
        }

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("'{}' must start and end with '/'", self.base_url),
                format!("use \"/{}/\"", self.base_url.trim_matches('/')),
            );
        }
    }

    fn validate_url(&self, url_str: &str, diag: &mut ConfigDiagnostics) {
        let parsed = match url::Url::parse(url_str) {
            Ok(parsed) => parsed,
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.org",
                );
                return;
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ),
                "use format like https://example.org",
            );
        }

        if parsed.host_str().is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "URL must have a valid host",
                "use format like https://example.org",
            );
        }

        if let Some(path) = extract_url_path(url_str)
            && !path.is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("URL must not contain a path, found '/{path}'"),
                format!("move the path into {}: \"/{path}/\"", Self::FIELDS.base_url),
            );
        }
    }
}
