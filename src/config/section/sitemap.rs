//! `[sitemap]` section configuration.
//!
//! ```toml
//! [sitemap]
//! enable = true
//! filename = "sitemap.xml"
//! changefreq = "weekly"
//! priority = 0.5
//! ignore_patterns = ["/tags/**", "/blog/page/*"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::IgnorePattern;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// `<changefreq>` values from the sitemap protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sitemap generation options. Every entry shares `changefreq` and `priority`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output file name, relative to the build output directory.
    pub filename: PathBuf,
    /// Change frequency hint for every URL.
    pub changefreq: ChangeFreq,
    /// Priority hint for every URL, within `[0.0, 1.0]`.
    pub priority: f64,
    /// Route patterns to leave out of the sitemap.
    pub ignore_patterns: Vec<String>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            filename: "sitemap.xml".into(),
            changefreq: ChangeFreq::default(),
            priority: 0.5,
            ignore_patterns: Vec::new(),
        }
    }
}

pub struct SitemapFields {
    pub enable: FieldPath,
    pub filename: FieldPath,
    pub changefreq: FieldPath,
    pub priority: FieldPath,
    pub ignore_patterns: FieldPath,
}

impl SitemapConfig {
    pub const FIELDS: SitemapFields = SitemapFields {
        enable: FieldPath::new("sitemap.enable"),
        filename: FieldPath::new("sitemap.filename"),
        changefreq: FieldPath::new("sitemap.changefreq"),
        priority: FieldPath::new("sitemap.priority"),
        ignore_patterns: FieldPath::new("sitemap.ignore_patterns"),
    };

    /// Compile `ignore_patterns`, preserving their order.
    pub fn compiled_patterns(&self) -> Vec<IgnorePattern> {
        self.ignore_patterns
            .iter()
            .map(|p| IgnorePattern::new(p))
            .collect()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(0.0..=1.0).contains(&self.priority) {
            diag.error_with_hint(
                Self::FIELDS.priority,
                format!("{} is outside the range 0.0 to 1.0", self.priority),
                "0.5 is the protocol default",
            );
        }

        if self.filename.as_os_str().is_empty() || self.filename.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.filename,
                format!("'{}' must be a relative file name", self.filename.display()),
                "e.g.: \"sitemap.xml\"",
            );
        }

        for pattern in &self.ignore_patterns {
            if !pattern.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.ignore_patterns,
                    format!("pattern '{pattern}' never matches: routes start with '/'"),
                    format!("use \"/{pattern}\""),
                );
            }
        }
    }
}
